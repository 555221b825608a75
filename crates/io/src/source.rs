//! Observation sources.

use std::path::{Path, PathBuf};

use selene_lunar::DailyObservation;
use tracing::info;

use crate::error::IoError;
use crate::export::{ExportFile, ObservationPage, ObservationRecord};
use crate::tally::tally_daily;

/// Supplies daily observation counts for a taxon.
///
/// Implementations own whatever transport they need (a saved export, a
/// network client); retry and timeout policy belongs to them.
pub trait ObservationSource {
    /// Returns the scientific name of `taxon_id`.
    fn taxon_name(&self, taxon_id: u64) -> Result<String, IoError>;

    /// Returns one entry per day of `year` on which `taxon_id` (or a
    /// descendant) was observed, sorted by date.
    fn daily_observations(&self, taxon_id: u64, year: i32)
    -> Result<Vec<DailyObservation>, IoError>;
}

/// Observation source backed by a JSON export of iNaturalist response pages.
///
/// The export is either a single `/v1/observations` response object or an
/// array of them, as produced by paging through the API.
#[derive(Debug, Clone)]
pub struct ExportSource {
    path: Option<PathBuf>,
    pages: Vec<ObservationPage>,
}

impl ExportSource {
    /// Reads and parses the export at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`], [`IoError::Read`], or
    /// [`IoError::Parse`].
    pub fn open(path: &Path) -> Result<Self, IoError> {
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path).map_err(|e| IoError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut source = Self::from_json(&json)?;
        source.path = Some(path.to_path_buf());
        info!(
            path = %path.display(),
            n_pages = source.pages.len(),
            n_records = source.records().count(),
            "observation export loaded"
        );
        Ok(source)
    }

    /// Parses an export held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Parse`] if `json` is not an export.
    pub fn from_json(json: &str) -> Result<Self, IoError> {
        let file: ExportFile = serde_json::from_str(json)?;
        Ok(Self {
            path: None,
            pages: file.into_pages(),
        })
    }

    /// Returns the path the export was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the parsed response pages.
    pub fn pages(&self) -> &[ObservationPage] {
        &self.pages
    }

    /// Iterates over every observation record on every page.
    pub fn records(&self) -> impl Iterator<Item = &ObservationRecord> {
        self.pages.iter().flat_map(|page| page.results.iter())
    }
}

impl ObservationSource for ExportSource {
    /// Prefers a record identified exactly as `taxon_id`; falls back to the
    /// first descendant record.
    fn taxon_name(&self, taxon_id: u64) -> Result<String, IoError> {
        let taxa = || self.records().filter_map(|r| r.taxon.as_ref());
        taxa()
            .find(|t| t.id == taxon_id)
            .or_else(|| taxa().find(|t| t.ancestor_ids.contains(&taxon_id)))
            .map(|t| t.name.clone())
            .ok_or(IoError::TaxonNotFound { taxon_id })
    }

    #[tracing::instrument(skip(self))]
    fn daily_observations(
        &self,
        taxon_id: u64,
        year: i32,
    ) -> Result<Vec<DailyObservation>, IoError> {
        Ok(tally_daily(self.records(), taxon_id, year))
    }
}
