//! Data models for the RRT directory
//!
//! This module contains the canonical team record produced by the loader, the
//! observer location used for proximity ranking, and the snapshot type handed
//! to consumers.

use crate::constants::{NATIONAL_LABEL, RANKING_COUNTRY_CODE, SERVICE_TYPE_SEPARATOR};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Immutable collection of records produced by one directory load
pub type Snapshot = Arc<[ResponseTeamRecord]>;

// =============================================================================
// Response Team Record
// =============================================================================

/// One rapid response team as listed in the directory CSV
///
/// Every field is a plain string; a column absent from the source yields an
/// empty string. `name` is a display key only and may repeat across records,
/// so consumers needing identity should key on `id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ResponseTeamRecord {
    /// Position of the record within its snapshot, unique per load
    pub id: usize,

    /// Display name of the team
    pub name: String,

    /// Jurisdiction label, `"National"` for nationwide teams
    pub state_or_territory: String,

    /// Sub-region hint such as a city or county
    pub region_note: String,

    /// Semicolon-delimited service categories
    pub service_type: String,

    /// Website URL, as published
    pub web: String,
    /// Contact phone number
    pub phone: String,
    /// Contact email address
    pub email: String,
    /// Social media handle or link
    pub social: String,

    /// Free-text description
    pub comment: String,
}

impl ResponseTeamRecord {
    /// Check whether every data field is empty after trimming
    ///
    /// The synthetic `id` is not data and is ignored here.
    pub fn is_blank(&self) -> bool {
        self.data_fields().iter().all(|field| field.trim().is_empty())
    }

    /// Check whether this team is listed as nationwide
    pub fn is_national(&self) -> bool {
        self.state_or_territory == NATIONAL_LABEL
    }

    /// Split the `Type` column into its individual service categories
    pub fn service_types(&self) -> Vec<&str> {
        self.service_type
            .split(SERVICE_TYPE_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Non-empty contact channels, labelled for display
    pub fn contact_channels(&self) -> Vec<(&'static str, &str)> {
        [
            ("web", self.web.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("social", self.social.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect()
    }

    fn data_fields(&self) -> [&str; 9] {
        [
            &self.name,
            &self.state_or_territory,
            &self.region_note,
            &self.service_type,
            &self.web,
            &self.phone,
            &self.email,
            &self.social,
            &self.comment,
        ]
    }
}

// =============================================================================
// Observer Location
// =============================================================================

/// Approximate location of the person browsing the directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ObserverLocation {
    /// ISO country code, e.g. `"US"`
    pub country_code: String,

    /// State or province name, e.g. `"California"`
    pub region: String,

    /// City name, e.g. `"Los Angeles"`
    pub city: String,
}

impl ObserverLocation {
    pub fn new(
        country_code: impl Into<String>,
        region: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            region: region.into(),
            city: city.into(),
        }
    }

    /// Only US observers get proximity ranking
    pub fn is_rankable(&self) -> bool {
        self.country_code == RANKING_COUNTRY_CODE
    }
}

impl fmt::Display for ObserverLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} ({})", self.city, self.region, self.country_code)
    }
}

/// Parses `COUNTRY,REGION,CITY`, e.g. `US,California,Los Angeles`
impl FromStr for ObserverLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.splitn(3, ',').map(str::trim).collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(Error::configuration(format!(
                "Location must be in format: COUNTRY,REGION,CITY (got '{}')",
                s
            )));
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}
