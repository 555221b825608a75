//! JSON report of per-phase totals.

use std::path::Path;

use selene_lunar::{LunarPhase, PhaseTotals};
use serde::Serialize;
use tracing::info;

use crate::error::IoError;

/// Per-phase observation report for one taxon and year.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseReport {
    pub taxon_id: u64,
    pub taxon_name: String,
    pub year: i32,
    pub total_observations: u64,
    /// One row per phase, in canonical order.
    pub phases: Vec<PhaseRow>,
}

/// Totals for a single phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseRow {
    pub phase: LunarPhase,
    /// Observations on days in this phase.
    pub observations: u64,
    /// Calendar days of the year in this phase.
    pub days: u64,
    /// `observations / days`, or `None` when the phase has no days.
    pub per_day: Option<f64>,
}

impl PhaseReport {
    /// Builds a report from observation totals and the year's day counts
    /// per phase.
    pub fn new(
        taxon_id: u64,
        taxon_name: impl Into<String>,
        year: i32,
        observations: &PhaseTotals,
        days: &PhaseTotals,
    ) -> Self {
        let phases = LunarPhase::ALL
            .iter()
            .map(|&phase| {
                let (n_obs, n_days) = (observations[phase], days[phase]);
                PhaseRow {
                    phase,
                    observations: n_obs,
                    days: n_days,
                    per_day: (n_days > 0).then(|| n_obs as f64 / n_days as f64),
                }
            })
            .collect();
        Self {
            taxon_id,
            taxon_name: taxon_name.into(),
            year,
            total_observations: observations.total(),
            phases,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, IoError> {
        serde_json::to_string_pretty(self).map_err(|e| IoError::Serialization {
            reason: e.to_string(),
        })
    }
}

/// Writes `report` as JSON to `path`, replacing any existing file.
pub fn write_report(path: &Path, report: &PhaseReport) -> Result<(), IoError> {
    let json = report.to_json()?;
    std::fs::write(path, json).map_err(|e| IoError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), "phase report written");
    Ok(())
}
