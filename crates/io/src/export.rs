//! Serde model of iNaturalist `/v1/observations` response pages.
//!
//! Only the fields selene needs are modelled; everything else in the API
//! response is ignored.

use serde::Deserialize;

/// One page of an observations search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObservationPage {
    /// Total number of results for the query across all pages.
    #[serde(default)]
    pub total_results: Option<u64>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
    /// Requested page size.
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Observations on this page.
    #[serde(default)]
    pub results: Vec<ObservationRecord>,
}

/// A single observation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObservationRecord {
    /// Observation date as `YYYY-MM-DD`, absent when the observer gave none.
    #[serde(default)]
    pub observed_on: Option<String>,
    /// Identified taxon, absent for unidentified observations.
    #[serde(default)]
    pub taxon: Option<TaxonRecord>,
}

/// Taxon attached to an observation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxonRecord {
    /// Numeric taxon id.
    pub id: u64,
    /// Scientific name.
    #[serde(default)]
    pub name: String,
    /// Ids of every ancestor taxon, root first.
    #[serde(default)]
    pub ancestor_ids: Vec<u64>,
}

impl ObservationRecord {
    /// Returns `true` if the observation is of `taxon_id` or one of its
    /// descendants.
    pub fn belongs_to(&self, taxon_id: u64) -> bool {
        self.taxon
            .as_ref()
            .is_some_and(|t| t.id == taxon_id || t.ancestor_ids.contains(&taxon_id))
    }
}

/// Accepted export layouts: one response page or an array of pages.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ExportFile {
    Pages(Vec<ObservationPage>),
    Page(ObservationPage),
}

impl ExportFile {
    pub(crate) fn into_pages(self) -> Vec<ObservationPage> {
        match self {
            ExportFile::Pages(pages) => pages,
            ExportFile::Page(page) => vec![page],
        }
    }
}
