use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::domain::Lead;

/// Writes the lead table under `dir` as
/// `admissions_leads_<YYYYMMDD_HHMMSS>.csv` and returns the full path.
/// Columns follow the `Lead` field order; absent optional fields become
/// empty cells.
pub fn write_leads(dir: &Path, leads: &[Lead]) -> Result<PathBuf> {
    write_leads_at(dir, leads, Local::now())
}

fn write_leads_at(dir: &Path, leads: &[Lead], now: DateTime<Local>) -> Result<PathBuf> {
    let path = dir.join(export_filename(now));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create export file {}", path.display()))?;

    for lead in leads {
        writer
            .serialize(lead)
            .with_context(|| format!("failed to write lead {}", lead.id))?;
    }
    writer.flush().context("failed to flush export file")?;
    Ok(path)
}

fn export_filename(now: DateTime<Local>) -> String {
    format!("admissions_leads_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
