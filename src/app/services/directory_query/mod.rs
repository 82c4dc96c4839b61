//! Search, partitioning and proximity ranking over a directory snapshot
//!
//! Every function here is pure: it reads a snapshot and returns borrowed
//! views into it. Presentation code composes these instead of keeping its
//! own filtered or sorted copies.
//!
//! - [`facets`] - State/territory and region facet values and filters
//! - [`matcher`] - Free-text containment and the national partition predicate
//! - [`proximity`] - Location-based stable ranking
//! - [`view`] - The displayed view for a query, observer and layout

pub mod facets;
pub mod matcher;
pub mod proximity;
pub mod view;

#[cfg(test)]
pub mod tests;

pub use facets::{FacetFilter, apply_facets, unique_regions, unique_states};
pub use matcher::{filter, haystack, is_national, matches, partition_national};
pub use proximity::{proximity_score, rank, rank_if_applicable};
pub use view::{DirectoryView, Layout};
