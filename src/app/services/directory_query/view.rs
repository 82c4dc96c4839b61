//! Displayed directory view derived from a snapshot
//!
//! A view is recomputed from the immutable snapshot and the current query
//! and observer every time either changes; nothing here mutates records or
//! keeps state between queries.

use super::facets::FacetFilter;
use super::matcher::{filter, is_national};
use super::proximity::rank_if_applicable;
use crate::app::models::{ObserverLocation, ResponseTeamRecord};
use serde::Serialize;

/// How national teams are presented relative to local ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One list of every matching record
    #[default]
    Merged,
    /// Matching local records, plus every national record in its own section
    Sectioned,
}

/// Records to display for one query/observer combination
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryView<'a> {
    /// Normalized query the view was built for
    pub query: String,

    pub layout: Layout,

    /// State/region facets the view was built for
    pub facets: FacetFilter,

    /// Whether proximity ranking was applied
    pub ranked: bool,

    /// Main list; under [`Layout::Merged`] this holds every match
    pub local: Vec<&'a ResponseTeamRecord>,

    /// National section; always empty under [`Layout::Merged`]
    pub national: Vec<&'a ResponseTeamRecord>,
}

impl<'a> DirectoryView<'a> {
    /// Derive the view for a snapshot
    ///
    /// National records are shown regardless of the query under
    /// [`Layout::Sectioned`], in source order.
    pub fn build(
        records: &'a [ResponseTeamRecord],
        query: &str,
        observer: Option<&ObserverLocation>,
        layout: Layout,
    ) -> Self {
        Self::build_with_facets(records, query, &FacetFilter::default(), observer, layout)
    }

    /// Derive the view with state/region facets applied on top of the query
    ///
    /// Facets narrow the matching records the same way the query does, so
    /// under [`Layout::Sectioned`] the national section is left untouched.
    pub fn build_with_facets(
        records: &'a [ResponseTeamRecord],
        query: &str,
        facets: &FacetFilter,
        observer: Option<&ObserverLocation>,
        layout: Layout,
    ) -> Self {
        let ranked = observer.is_some_and(ObserverLocation::is_rankable);
        let matching = filter(records, query)
            .into_iter()
            .filter(|record| facets.matches(record));

        let (local, national) = match layout {
            Layout::Merged => (rank_if_applicable(matching, observer), Vec::new()),
            Layout::Sectioned => {
                let local = matching.into_iter().filter(|r| !is_national(r));
                let national = records.iter().filter(|r| is_national(r)).collect();
                (rank_if_applicable(local, observer), national)
            }
        };

        Self {
            query: query.trim().to_string(),
            layout,
            facets: facets.clone(),
            ranked,
            local,
            national,
        }
    }

    /// Total records shown across sections
    pub fn total(&self) -> usize {
        self.local.len() + self.national.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Names shown in display order, local section first
    pub fn names(&self) -> Vec<&'a str> {
        self.local
            .iter()
            .chain(self.national.iter())
            .map(|record| record.name.as_str())
            .collect()
    }
}
