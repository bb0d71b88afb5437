use reqwest::Client;

use crate::{config::OpenAiConfig, domain::Classification};

use super::{
    inference::{build_request, extract_content},
    schema::parse_classification,
    ClassifyError, EmailClassifier,
};

/// Chat-completions client for the classification service. Holds no
/// state beyond the shared HTTP client and its configuration; every
/// call is an independent request/response.
#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(http: Client, config: OpenAiConfig) -> Self {
        Self { http, config }
    }
}

impl EmailClassifier for OpenAiClient {
    async fn classify(&self, subject: &str, body: &str) -> Result<Classification, ClassifyError> {
        let request = build_request(&self.config, subject, body);
        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .timeout(self.config.request_timeout)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let content = extract_content(response).await?;
        parse_classification(&content)
    }
}
