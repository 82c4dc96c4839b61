//! State/territory and region facets
//!
//! Facet values are the distinct non-blank `state_or_territory` and
//! `region_note` cells of a snapshot. A [`FacetFilter`] narrows records to
//! one chosen value per column and combines with the free-text query.

use crate::app::models::ResponseTeamRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Exact-value filters on the state/territory and region columns
///
/// `None` means "all". Values are compared trimmed and case-insensitively
/// against the whole cell; only records matching every set facet pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetFilter {
    pub state: Option<String>,
    pub region: Option<String>,
}

impl FacetFilter {
    pub fn new(state: Option<&str>, region: Option<&str>) -> Self {
        Self {
            state: normalize(state),
            region: normalize(region),
        }
    }

    pub fn with_state(mut self, state: impl AsRef<str>) -> Self {
        self.state = normalize(Some(state.as_ref()));
        self
    }

    pub fn with_region(mut self, region: impl AsRef<str>) -> Self {
        self.region = normalize(Some(region.as_ref()));
        self
    }

    /// No facet is selected
    pub fn is_empty(&self) -> bool {
        self.state.is_none() && self.region.is_none()
    }

    /// Check a record against every selected facet
    pub fn matches(&self, record: &ResponseTeamRecord) -> bool {
        cell_equals(&record.state_or_territory, self.state.as_deref())
            && cell_equals(&record.region_note, self.region.as_deref())
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn cell_equals(cell: &str, selected: Option<&str>) -> bool {
    match selected {
        Some(selected) => cell.trim().to_lowercase() == selected.to_lowercase(),
        None => true,
    }
}

/// Records passing the facet filter, in input order
pub fn apply_facets<'a, I>(records: I, facets: &FacetFilter) -> Vec<&'a ResponseTeamRecord>
where
    I: IntoIterator<Item = &'a ResponseTeamRecord>,
{
    records
        .into_iter()
        .filter(|record| facets.matches(record))
        .collect()
}

/// Sorted, de-duplicated, non-blank `state_or_territory` values
pub fn unique_states<'a, I>(records: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a ResponseTeamRecord>,
{
    distinct(records.into_iter().map(|r| r.state_or_territory.as_str()))
}

/// Sorted, de-duplicated, non-blank `region_note` values
pub fn unique_regions<'a, I>(records: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a ResponseTeamRecord>,
{
    distinct(records.into_iter().map(|r| r.region_note.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values
        .filter(|v| !v.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
