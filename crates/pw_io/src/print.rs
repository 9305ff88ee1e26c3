//! CSV-dialect printer.
//!
//! Grounded in `original_source/code/prettyPrint.cpp`: a field is quoted
//! only when it contains a comma, one comma-separated value per row, rows
//! terminated with `\n`. The original never escapes a quote character
//! appearing inside a field it quotes, which breaks round-tripping through
//! [`crate::parse::parse_table`]; this printer also quotes on an embedded
//! `"` or `\n` and doubles embedded quotes, closing that gap.

use pw_core::problem::RawTable;

/// Render a raw table back into the file dialect [`crate::parse::parse_table`]
/// reads, quoting and escaping only where necessary.
pub fn print_table(table: &RawTable) -> String {
    let mut out = String::new();
    for row in table {
        for (i, field) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_field(&mut out, field);
        }
        out.push('\n');
    }
    out
}

fn write_field(out: &mut String, field: &str) {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        out.push('"');
        for ch in field.chars() {
            if ch == '"' {
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_table;

    #[test]
    fn plain_fields_are_unquoted() {
        let t: RawTable = vec![vec!["A".into(), "1".into(), "2".into()]];
        assert_eq!(print_table(&t), "A,1,2\n");
    }

    #[test]
    fn comma_triggers_quoting() {
        let t: RawTable = vec![vec!["A".into(), "1,2".into()]];
        assert_eq!(print_table(&t), "A,\"1,2\"\n");
    }

    #[test]
    fn embedded_quote_is_doubled() {
        let t: RawTable = vec![vec!["A".into(), "say \"hi\"".into()]];
        assert_eq!(print_table(&t), "A,\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn round_trips_through_parser() {
        let t: RawTable = vec![
            vec!["A".into(), "1,2".into(), "say \"hi\"".into()],
            vec!["B".into(), "plain".into()],
        ];
        let printed = print_table(&t);
        let parsed = parse_table(&printed);
        assert_eq!(parsed, t);
    }
}
