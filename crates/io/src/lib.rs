//! # selene-io
//!
//! Bridges external observation data into selene's core types and writes
//! per-phase reports.
//!
//! ```text
//! export JSON ──ExportSource──▶ ObservationRecord ──tally_daily()──▶ Vec<DailyObservation>
//! PhaseTotals ──PhaseReport::new()──▶ write_report() ──▶ report JSON
//! ```
//!
//! [`ObservationSource`] is the seam for other transports.

mod error;
mod export;
mod output;
mod source;
mod tally;

pub use error::IoError;
pub use export::{ObservationPage, ObservationRecord, TaxonRecord};
pub use output::{PhaseReport, PhaseRow, write_report};
pub use source::{ExportSource, ObservationSource};
pub use tally::tally_daily;
