// Quote-aware splitting of the published spreadsheet text.

use crate::config::BoardError;

/// Splits a raw CSV blob into the header row and the data rows.
///
/// The first line is always the header. An input with fewer than two
/// lines carries no data and is rejected. Each line is tokenized
/// independently: quoted fields may not span lines.
pub fn split_rows(input: &str) -> Result<(Vec<String>, Vec<Vec<String>>), BoardError> {
    let lines: Vec<&str> = input.trim().split('\n').collect();
    if lines.len() < 2 {
        return Err(BoardError::MalformedInput);
    }
    let header = tokenize_line(lines[0]);
    let rows = lines[1..].iter().map(|l| tokenize_line(l)).collect();
    Ok((header, rows))
}

/// Tokenizes one CSV line into trimmed fields.
///
/// A double quote toggles in-quotes mode, so commas inside quotes are
/// literal. Two adjacent quotes are two toggles, not an escaped quote.
/// Quote characters are consumed, never emitted.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
