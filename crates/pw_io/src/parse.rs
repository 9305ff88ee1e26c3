//! CSV-dialect parser.
//!
//! Grounded in `original_source/code/parser.cpp`'s char-by-char state
//! machine: a bare comma or newline outside quotes ends a field (newline
//! also ends a row); a `"` toggles quoting; a doubled `""` inside a quoted
//! field yields a literal `"`. Every other character, including `\r`, is
//! copied into the current field verbatim — callers on Windows-style input
//! get a trailing `\r` the same way the original's `ifstream` would.

use pw_core::problem::RawTable;

/// Parse a full file's contents into a raw table. Infallible: the original
/// parser that this is grounded on never rejected a byte sequence at this
/// stage, it only failed to open the file (handled by the caller via
/// [`crate::read_to_string`]).
pub fn parse_table(input: &str) -> RawTable {
    let mut rows = RawTable::new();
    let mut row: Vec<String> = Vec::new();
    let mut entry = String::new();
    let mut inside_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if !inside_quotes && (c == ',' || c == '\n') {
            row.push(std::mem::take(&mut entry));
            if c == '\n' {
                rows.push(std::mem::take(&mut row));
            }
        } else if c == '"' {
            if inside_quotes {
                if chars.peek() == Some(&'"') {
                    entry.push('"');
                    chars.next();
                } else {
                    inside_quotes = false;
                }
            } else {
                inside_quotes = true;
            }
        } else {
            entry.push(c);
        }
    }

    if !entry.is_empty() {
        row.push(entry);
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows
}
