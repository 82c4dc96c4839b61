//! Shared fixtures for directory query tests

use crate::app::models::ResponseTeamRecord;


/// Create a test record with the searchable fields set
pub fn create_test_record(
    id: usize,
    name: &str,
    state_or_territory: &str,
    region_note: &str,
) -> ResponseTeamRecord {
    ResponseTeamRecord {
        id,
        name: name.to_string(),
        state_or_territory: state_or_territory.to_string(),
        region_note: region_note.to_string(),
        service_type: "Legal;Medical".to_string(),
        comment: format!("{} comment", name),
        ..Default::default()
    }
}

/// A small mixed directory: three local teams and two national ones
pub fn create_test_directory() -> Vec<ResponseTeamRecord> {
    vec![
        create_test_record(0, "Harbor Relief", "California", "San Diego"),
        create_test_record(1, "First Response Network", "National", ""),
        create_test_record(2, "Hill Country RRT", "Texas", "Austin, Travis County"),
        create_test_record(3, "Angel City Aid", "California", "Los Angeles"),
        create_test_record(4, "Relief Corps", "National", ""),
    ]
}

pub fn names<'a>(records: &[&'a ResponseTeamRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
