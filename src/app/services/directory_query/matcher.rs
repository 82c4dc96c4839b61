//! Free-text matching and national/local partitioning
//!
//! Matching is binary substring containment over a fixed haystack of
//! `name`, `state_or_territory` and `region_note`; there is no tokenizing or
//! relevance scoring.

use crate::app::models::ResponseTeamRecord;

/// Lower-cased search haystack for a record
pub fn haystack(record: &ResponseTeamRecord) -> String {
    format!(
        "{} {} {}",
        record.name, record.state_or_territory, record.region_note
    )
    .to_lowercase()
}

/// Check whether a record matches a free-text query
///
/// The query is trimmed and lower-cased. An empty query matches everything.
///
/// # Examples
/// ```
/// use rrt_directory::ResponseTeamRecord;
/// use rrt_directory::app::services::directory_query::matches;
///
/// let record = ResponseTeamRecord {
///     name: "Alpha Team".to_string(),
///     region_note: "Los Angeles".to_string(),
///     ..Default::default()
/// };
/// assert!(matches(&record, "ANGELES"));
/// assert!(matches(&record, ""));
/// assert!(!matches(&record, "denver"));
/// ```
pub fn matches(record: &ResponseTeamRecord, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || haystack(record).contains(&query)
}

/// Records matching a query, in input order
pub fn filter<'a, I>(records: I, query: &str) -> Vec<&'a ResponseTeamRecord>
where
    I: IntoIterator<Item = &'a ResponseTeamRecord>,
{
    records
        .into_iter()
        .filter(|record| matches(record, query))
        .collect()
}

/// Partition predicate: does this record list a nationwide team
pub fn is_national(record: &ResponseTeamRecord) -> bool {
    record.is_national()
}

/// Split records into `(local, national)`, each in input order
pub fn partition_national<'a, I>(
    records: I,
) -> (Vec<&'a ResponseTeamRecord>, Vec<&'a ResponseTeamRecord>)
where
    I: IntoIterator<Item = &'a ResponseTeamRecord>,
{
    records.into_iter().partition(|record| !is_national(record))
}
