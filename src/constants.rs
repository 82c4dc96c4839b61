//! Application constants for the RRT directory
//!
//! This module contains the CSV header labels, default locations and the
//! scoring weights used throughout the directory loader and query services.

// =============================================================================
// Directory Source Defaults
// =============================================================================

/// Default location of the published directory CSV
pub const DEFAULT_SOURCE: &str = "rrts.csv";

/// Default geolocation endpoint (IP-based, city precision)
pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co/json/";

/// Default timeout for each outbound request in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Upper bound accepted for the request timeout
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// User agent sent with directory and geolocation requests
pub const USER_AGENT: &str = concat!("rrt-directory/", env!("CARGO_PKG_VERSION"));

/// Schemes that route a source location through HTTP instead of the filesystem
pub const HTTP_SCHEMES: &[&str] = &["http://", "https://"];

// =============================================================================
// CSV Header Labels
// =============================================================================

/// Exact header labels recognized by the record builder
pub mod headers {
    pub const NAME: &str = "Name";
    pub const STATE_OR_TERRITORY: &str = "State/Terr./US";
    pub const REGION_NOTE: &str = "Region Note";
    pub const SERVICE_TYPE: &str = "Type";
    pub const WEB: &str = "Web";
    pub const PHONE: &str = "Phone";
    pub const EMAIL: &str = "Email";
    pub const SOCIAL: &str = "Social";
    pub const COMMENT: &str = "Comment";

    /// All recognized labels in canonical column order
    pub const ALL: &[&str] = &[
        NAME,
        STATE_OR_TERRITORY,
        REGION_NOTE,
        SERVICE_TYPE,
        WEB,
        PHONE,
        EMAIL,
        SOCIAL,
        COMMENT,
    ];
}

// =============================================================================
// Partitioning and Ranking
// =============================================================================

/// `State/Terr./US` value marking a nationwide team
pub const NATIONAL_LABEL: &str = "National";

/// Separator between entries of the `Type` column
pub const SERVICE_TYPE_SEPARATOR: char = ';';

/// Country code for which proximity ranking is applied
pub const RANKING_COUNTRY_CODE: &str = "US";

/// Proximity score weights
pub mod proximity_weights {
    /// Observer region found in the record's state or territory
    pub const REGION_MATCH: u8 = 1;

    /// Observer city found in the record's region note
    pub const CITY_MATCH: u8 = 2;

    /// Highest attainable score
    pub const MAX_SCORE: u8 = REGION_MATCH + CITY_MATCH;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_labels_are_unique() {
        let mut labels = headers::ALL.to_vec();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), headers::ALL.len());
    }

    #[test]
    fn test_city_match_outranks_region_match() {
        assert!(proximity_weights::CITY_MATCH > proximity_weights::REGION_MATCH);
        assert_eq!(proximity_weights::MAX_SCORE, 3);
    }
}
