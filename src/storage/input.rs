use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::EmailInput;

/// Reads the input table. The header row must contain `id`, `subject`
/// and `body`; any other columns are ignored.
pub fn read_emails(path: &Path) -> Result<Vec<EmailInput>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open input CSV {}", path.display()))?;

    let mut emails = Vec::new();
    for (row, record) in reader.deserialize::<EmailInput>().enumerate() {
        let email = record.with_context(|| {
            format!("failed to parse row {} of {}", row + 2, path.display())
        })?;
        emails.push(email);
    }
    Ok(emails)
}
