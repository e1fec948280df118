//! CSV document parsing
//!
//! The first line of a file is the header row; every later line becomes a
//! record keyed by the headers in header order. Fields are comma-separated
//! with standard double-quote handling: a quoted field may contain commas,
//! and `""` inside quotes is a literal quote.
//!
//! Row/header length mismatch policy: rows are zipped positionally with the
//! headers. Short rows are padded with empty strings, long rows are
//! truncated to the header count.

use serde_json::{Map, Value};

/// One parsed data row, keyed by header name in header order.
pub type CsvRecord = Map<String, Value>;

/// Parse a whole CSV document into header-keyed records.
///
/// Surrounding whitespace is trimmed and lines are split on line feeds
/// (a trailing carriage return per line is dropped). Empty content yields
/// an empty record list.
pub fn parse_document(content: &str) -> Vec<CsvRecord> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut lines = trimmed.split('\n').map(strip_carriage_return);
    let headers = match lines.next() {
        Some(header_line) => split_line(header_line),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            let fields = split_line(line);
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = fields.get(i).cloned().unwrap_or_default();
                    (header.clone(), Value::String(value))
                })
                .collect()
        })
        .collect()
}

/// Tokenize one CSV line into fields.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    // Escaped quote inside a quoted field
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                other => field.push(other),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                other => field.push(other),
            }
        }
    }
    fields.push(field);
    fields
}

fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
