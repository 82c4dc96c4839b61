//! Tests for CSV tokenizing

use super::super::tokenizer::{split_line, tokenize};
use super::row;

#[test]
fn test_plain_fields_round_trip() {
    let fields = ["Alpha Team", "California", "Los Angeles", "Legal", "555-0001"];
    let line = fields.join(",");

    assert_eq!(split_line(&line), row(&fields));
}

#[test]
fn test_fields_are_trimmed() {
    assert_eq!(
        split_line("  Alpha Team ,\tCalifornia,   "),
        row(&["Alpha Team", "California", ""])
    );
}

#[test]
fn test_doubled_quote_escaping() {
    assert_eq!(split_line(r#""a,""b""""#), row(&[r#"a,"b""#]));
}

#[test]
fn test_comma_inside_quotes_is_literal() {
    assert_eq!(
        split_line(r#"Bravo,"Austin, Travis County",Legal"#),
        row(&["Bravo", "Austin, Travis County", "Legal"])
    );
}

#[test]
fn test_trailing_comma_yields_empty_field() {
    assert_eq!(split_line("a,b,"), row(&["a", "b", ""]));
    assert_eq!(split_line(",,,"), row(&["", "", "", ""]));
}

#[test]
fn test_unbalanced_quote_runs_to_end_of_line() {
    // best-effort: never fails, the open quote swallows the remaining commas
    assert_eq!(split_line(r#"a,"b,c"#), row(&["a", "b,c"]));
}

#[test]
fn test_quote_in_middle_of_field_toggles_mode() {
    assert_eq!(split_line(r#"ab"c,d"e"#), row(&["abc,de"]));
}

#[test]
fn test_unicode_content_is_preserved() {
    assert_eq!(
        split_line("Équipe Sud,Puerto Rico,San Juan — Área Metro"),
        row(&["Équipe Sud", "Puerto Rico", "San Juan — Área Metro"])
    );
}

#[test]
fn test_tokenize_splits_lines_and_skips_blank_ones() {
    let text = "Name,Type\r\nAlpha,Legal\r\n\r\n   \nBravo,Medical\n";
    let rows = tokenize(text);

    assert_eq!(
        rows,
        vec![
            row(&["Name", "Type"]),
            row(&["Alpha", "Legal"]),
            row(&["Bravo", "Medical"]),
        ]
    );
}

#[test]
fn test_tokenize_empty_text() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("\n\r\n  \n").is_empty());
}

#[test]
fn test_quoted_newline_is_not_joined() {
    // multi-line quoted fields are a known limitation: each line stands alone
    let rows = tokenize("\"first\nsecond\"");
    assert_eq!(rows, vec![row(&["first"]), row(&["second"])]);
}
