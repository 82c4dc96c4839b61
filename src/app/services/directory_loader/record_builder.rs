//! Header-driven record construction
//!
//! Maps tokenized rows onto [`ResponseTeamRecord`] fields by exact header
//! label. Unknown labels are ignored, missing cells default to empty strings,
//! and rows that end up entirely blank are dropped.

use super::stats::BuildStats;
use super::tokenizer::tokenize;
use crate::app::models::ResponseTeamRecord;
use crate::constants::headers;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Record field addressed by a recognized header label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    StateOrTerritory,
    RegionNote,
    ServiceType,
    Web,
    Phone,
    Email,
    Social,
    Comment,
}

impl Column {
    /// Resolve a header label (exact, case-sensitive match)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            headers::NAME => Some(Self::Name),
            headers::STATE_OR_TERRITORY => Some(Self::StateOrTerritory),
            headers::REGION_NOTE => Some(Self::RegionNote),
            headers::SERVICE_TYPE => Some(Self::ServiceType),
            headers::WEB => Some(Self::Web),
            headers::PHONE => Some(Self::Phone),
            headers::EMAIL => Some(Self::Email),
            headers::SOCIAL => Some(Self::Social),
            headers::COMMENT => Some(Self::Comment),
            _ => None,
        }
    }

    /// Header label for this column
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => headers::NAME,
            Self::StateOrTerritory => headers::STATE_OR_TERRITORY,
            Self::RegionNote => headers::REGION_NOTE,
            Self::ServiceType => headers::SERVICE_TYPE,
            Self::Web => headers::WEB,
            Self::Phone => headers::PHONE,
            Self::Email => headers::EMAIL,
            Self::Social => headers::SOCIAL,
            Self::Comment => headers::COMMENT,
        }
    }

    fn field_mut(self, record: &mut ResponseTeamRecord) -> &mut String {
        match self {
            Self::Name => &mut record.name,
            Self::StateOrTerritory => &mut record.state_or_territory,
            Self::RegionNote => &mut record.region_note,
            Self::ServiceType => &mut record.service_type,
            Self::Web => &mut record.web,
            Self::Phone => &mut record.phone,
            Self::Email => &mut record.email,
            Self::Social => &mut record.social,
            Self::Comment => &mut record.comment,
        }
    }
}

/// Builds records from data rows according to a header row
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    /// Recognized columns with their position in the header, in header order
    columns: Vec<(usize, Column)>,

    /// Header labels that matched no record field
    unrecognized: Vec<String>,
}

impl RecordBuilder {
    /// Create a builder for the given header row
    pub fn new(header: &[String]) -> Self {
        let mut columns = Vec::new();
        let mut unrecognized = Vec::new();

        for (index, label) in header.iter().enumerate() {
            match Column::from_label(label) {
                Some(column) => columns.push((index, column)),
                None => unrecognized.push(label.clone()),
            }
        }

        Self {
            columns,
            unrecognized,
        }
    }

    /// Header labels that matched no record field
    pub fn unrecognized_headers(&self) -> &[String] {
        &self.unrecognized
    }

    /// Known labels absent from the header; these fields are always empty
    pub fn missing_headers(&self) -> Vec<&'static str> {
        headers::ALL
            .iter()
            .copied()
            .filter(|label| !self.columns.iter().any(|(_, c)| c.label() == *label))
            .collect()
    }

    /// Build a record from one data row, or `None` if the row is blank
    ///
    /// Cells past the end of a short row read as empty. When a label occurs
    /// more than once in the header the last occurrence wins. The returned
    /// record carries `id` 0; [`RecordBuilder::build_all`] assigns real ids.
    pub fn build(&self, row: &[String]) -> Option<ResponseTeamRecord> {
        let mut record = ResponseTeamRecord::default();

        for &(index, column) in &self.columns {
            let value = row.get(index).map(|cell| cell.trim()).unwrap_or_default();
            *column.field_mut(&mut record) = value.to_string();
        }

        if record.is_blank() { None } else { Some(record) }
    }

    /// Build every data row, assigning sequential ids to retained records
    pub fn build_all(&self, rows: &[Vec<String>]) -> (Vec<ResponseTeamRecord>, BuildStats) {
        let mut stats = BuildStats::new();
        stats.unrecognized_headers = self.unrecognized.clone();
        stats.missing_headers = self
            .missing_headers()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut records: Vec<ResponseTeamRecord> = Vec::with_capacity(rows.len());
        let mut name_counts: HashMap<String, usize> = HashMap::new();

        for row in rows {
            stats.rows_seen += 1;

            let Some(mut record) = self.build(row) else {
                stats.blank_rows_dropped += 1;
                continue;
            };

            record.id = records.len();
            if !record.name.is_empty() {
                *name_counts.entry(record.name.clone()).or_default() += 1;
            }
            records.push(record);
        }

        stats.records_built = records.len();

        let mut duplicates: Vec<String> = name_counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name)
            .collect();
        duplicates.sort();
        stats.duplicate_names = duplicates;

        (records, stats)
    }
}

/// Tokenize CSV text and build records, treating the first row as header
///
/// Text with no non-empty lines yields no records and default statistics.
pub fn parse_records(text: &str) -> (Vec<ResponseTeamRecord>, BuildStats) {
    let rows = tokenize(text);
    let Some((header, data_rows)) = rows.split_first() else {
        debug!("Directory text contained no rows");
        return (Vec::new(), BuildStats::new());
    };

    let builder = RecordBuilder::new(header);
    if !builder.unrecognized_headers().is_empty() {
        debug!(
            "Ignoring unrecognized header labels: {:?}",
            builder.unrecognized_headers()
        );
    }

    let (records, stats) = builder.build_all(data_rows);

    for name in &stats.duplicate_names {
        warn!("Team name '{}' appears more than once in the directory", name);
    }
    debug!(
        "Built {} records from {} rows ({} blank rows dropped)",
        stats.records_built, stats.rows_seen, stats.blank_rows_dropped
    );

    (records, stats)
}
