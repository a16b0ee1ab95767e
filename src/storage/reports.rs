//! Verification report storage

use anyhow::Result;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;
use crate::verifier::VerificationReport;

pub fn save_report(report: &VerificationReport) -> Result<()> {
    let filename = format!("output/reports/verification_{}.jsonl",
        Utc::now().format("%Y-%m-%d"));

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filename)?;

    writeln!(file, "{}", serde_json::to_string(report)?)?;

    info!(
        report_id = %report.id,
        pool = %report.pool,
        address = %report.predicted,
        "Saved verification report"
    );

    Ok(())
}
