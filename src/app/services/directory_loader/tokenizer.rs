//! Quote-aware CSV tokenizer
//!
//! Splits raw directory text into rows of trimmed fields. The scan is
//! best-effort: unbalanced quotes never fail, they simply run to the end of
//! the line. Quoted fields spanning multiple lines are not supported.

/// Split raw CSV text into rows of fields
///
/// Lines are split on `\n` (a trailing `\r` is removed by trimming), trimmed,
/// and dropped when empty. The first returned row is the header by
/// convention; the tokenizer itself does not interpret it.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(split_line)
        .collect()
}

/// Split a single CSV line into trimmed fields
///
/// A doubled quote inside a quoted section is a literal quote. A trailing
/// comma produces a trailing empty field.
pub fn split_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    values.push(current);

    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .collect()
}
