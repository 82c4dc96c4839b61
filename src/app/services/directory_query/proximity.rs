//! Proximity ranking against an approximate observer location
//!
//! A record scores [`REGION_MATCH`] when its state or territory contains the
//! observer's region and [`CITY_MATCH`] when its region note contains the
//! observer's city. Records are ordered by descending score with a stable
//! sort, so equal scores keep their source order.

use crate::app::models::{ObserverLocation, ResponseTeamRecord};
use crate::constants::proximity_weights::{CITY_MATCH, REGION_MATCH};
use std::cmp::Reverse;
use tracing::debug;

/// Proximity score in `0..=3`
pub fn proximity_score(record: &ResponseTeamRecord, observer: &ObserverLocation) -> u8 {
    let mut score = 0;

    if record
        .state_or_territory
        .to_lowercase()
        .contains(&observer.region.to_lowercase())
    {
        score += REGION_MATCH;
    }

    if record
        .region_note
        .to_lowercase()
        .contains(&observer.city.to_lowercase())
    {
        score += CITY_MATCH;
    }

    score
}

/// Order records by descending proximity score, preserving ties
///
/// Does not check the observer's country; see [`rank_if_applicable`].
pub fn rank<'a, I>(records: I, observer: &ObserverLocation) -> Vec<&'a ResponseTeamRecord>
where
    I: IntoIterator<Item = &'a ResponseTeamRecord>,
{
    let mut scored: Vec<(u8, &ResponseTeamRecord)> = records
        .into_iter()
        .map(|record| (proximity_score(record, observer), record))
        .collect();

    // sort_by_key is stable
    scored.sort_by_key(|(score, _)| Reverse(*score));

    scored.into_iter().map(|(_, record)| record).collect()
}

/// Rank when the observer is known and in the ranking country, else keep order
pub fn rank_if_applicable<'a, I>(
    records: I,
    observer: Option<&ObserverLocation>,
) -> Vec<&'a ResponseTeamRecord>
where
    I: IntoIterator<Item = &'a ResponseTeamRecord>,
{
    match observer {
        Some(observer) if observer.is_rankable() => rank(records, observer),
        Some(observer) => {
            debug!(
                "Observer country '{}' is not ranked; keeping source order",
                observer.country_code
            );
            records.into_iter().collect()
        }
        None => records.into_iter().collect(),
    }
}
