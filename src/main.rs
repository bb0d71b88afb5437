mod ai;
mod app;
mod batch;
mod config;
mod domain;
mod infrastructure;
mod storage;

use std::path::PathBuf;

use anyhow::{bail, Result};
use infrastructure::{directories, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let input = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => bail!("usage: admissions-triage <emails.csv>"),
    };

    let app = app::TriageApp::initialize(config, paths)?;
    app.run(&input).await
}
