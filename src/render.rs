use serde::Serialize;

use crate::{
    core::{Outcome, SohResult, StatusTier},
    prelude::*,
    quantity::{energy::KilowattHours, percentage::Percentage},
    tables::{build_result_table, build_status_table},
};

#[derive(Copy, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,

    /// Single-line JSON document.
    Json,
}

#[derive(Serialize)]
struct ResultReport {
    #[serde(rename = "current_capacity_kwh")]
    current_capacity: KilowattHours,

    #[serde(rename = "soh_percent")]
    soh: Percentage,

    status: StatusTier,
    label: &'static str,
}

impl From<&SohResult> for ResultReport {
    fn from(result: &SohResult) -> Self {
        Self {
            current_capacity: result.current_capacity,
            soh: result.soh,
            status: result.status,
            label: result.status.label(),
        }
    }
}

#[derive(Serialize)]
struct StatusReport {
    #[serde(rename = "soh_percent")]
    soh: Percentage,

    status: StatusTier,
    label: &'static str,
}

#[derive(Serialize)]
struct CancelledReport {
    cancelled: bool,
}

pub fn render_outcome(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    match (format, outcome) {
        (OutputFormat::Json, Outcome::Computed { result, .. }) => {
            Ok(serde_json::to_string(&ResultReport::from(result))?)
        }
        (OutputFormat::Json, Outcome::Cancelled) => {
            Ok(serde_json::to_string(&CancelledReport { cancelled: true })?)
        }
        (OutputFormat::Table, Outcome::Computed { input, result }) => {
            Ok(build_result_table(input, result).to_string())
        }
        (OutputFormat::Table, Outcome::Cancelled) => Ok("Cancelled.".to_owned()),
    }
}

pub fn render_status(soh: Percentage, status: StatusTier, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            Ok(serde_json::to_string(&StatusReport { soh, status, label: status.label() })?)
        }
        OutputFormat::Table => Ok(build_status_table(soh, status).to_string()),
    }
}
