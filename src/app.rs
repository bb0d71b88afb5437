use std::path::Path;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::{
    ai::OpenAiClient,
    batch::{self, BatchOutcome},
    config::AppConfig,
    domain::Category,
    infrastructure::directories::ResolvedPaths,
    storage,
};

pub struct TriageApp {
    client: OpenAiClient,
    paths: ResolvedPaths,
}

impl TriageApp {
    pub fn initialize(config: AppConfig, paths: ResolvedPaths) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(format!("admissions-triage/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        let client = OpenAiClient::new(http_client, config.openai);
        Ok(Self { client, paths })
    }

    /// One full triage pass: read the input table, classify every email
    /// sequentially, export the leads, and log the summary counters.
    pub async fn run(&self, input: &Path) -> Result<()> {
        let emails = storage::read_emails(input)?;
        tracing::info!(
            target: "app",
            input = %input.display(),
            total = emails.len(),
            "emails loaded"
        );

        let outcome = batch::run_batch(&self.client, &emails, |done, total| {
            tracing::info!(target: "batch", done, total, "progress");
        })
        .await;

        let exported = storage::write_leads(&self.paths.output_dir, &outcome.leads)?;
        tracing::info!(target: "app", file = %exported.display(), "leads exported");

        self.report_summary(&outcome);
        Ok(())
    }

    fn report_summary(&self, outcome: &BatchOutcome) {
        tracing::info!(
            target: "app",
            processed = outcome.total(),
            skipped = outcome.skipped.len(),
            high_priority = outcome.high_priority_count(),
            admissions = outcome.category_count(Category::Admissions),
            "batch complete"
        );

        for skipped in &outcome.skipped {
            tracing::warn!(
                target: "app",
                id = %skipped.id,
                subject = %skipped.subject,
                kind = skipped.error.kind(),
                reason = %skipped.error,
                "email was not classified"
            );
        }
    }
}
