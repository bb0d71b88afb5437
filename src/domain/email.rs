use serde::Deserialize;

/// One row of the input table. Extra CSV columns are ignored on read;
/// duplicate ids pass through unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailInput {
    pub id: String,
    pub subject: String,
    pub body: String,
}
