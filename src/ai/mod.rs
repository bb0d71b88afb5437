mod client;
mod inference;
mod schema;

use thiserror::Error;

use crate::domain::Classification;

pub use client::OpenAiClient;
pub use inference::DEFAULT_API_URL;
pub use schema::parse_classification;

/// Failure taxonomy for one classification call. `Service` covers the
/// transport layer (connect, timeout, auth, rate limit, malformed HTTP
/// envelope); `Schema` covers a response that arrived but failed JSON
/// parsing or field-domain validation. `Schema` failures are not worth
/// retrying: the request decodes near-deterministically.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classification service call failed: {0}")]
    Service(String),
    #[error("response violated the classification schema: {0}")]
    Schema(String),
}

impl ClassifyError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Service(_) => "service",
            Self::Schema(_) => "schema",
        }
    }
}

impl From<reqwest::Error> for ClassifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Service(err.to_string())
    }
}

/// Classification seam. The batch runner only depends on this trait, so
/// it can be exercised against a fake service in tests.
pub trait EmailClassifier {
    fn classify(
        &self,
        subject: &str,
        body: &str,
    ) -> impl std::future::Future<Output = Result<Classification, ClassifyError>> + Send;
}
