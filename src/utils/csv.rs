//! Delimited-text writer for the manual archive export
//!
//! RFC-4180 quoting: a field containing the delimiter, a double quote or a
//! line break is wrapped in double quotes with internal quotes doubled.

const DELIMITER: char = ',';

/// Quote a single field if it needs quoting.
pub fn escape_field(field: &str) -> String {
    if field.contains(DELIMITER) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render a header row plus data rows as CSV text with CRLF line endings.
pub fn write_csv(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(
        &header
            .iter()
            .map(|f| escape_field(f))
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push_str("\r\n");
    for row in rows {
        out.push_str(
            &row.iter()
                .map(|f| escape_field(f))
                .collect::<Vec<_>>()
                .join(","),
        );
        out.push_str("\r\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal RFC-4180 parser, only used to verify the writer round-trips.
    fn parse_csv(input: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if in_quotes {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(c);
                }
            } else {
                match c {
                    '"' => in_quotes = true,
                    ',' => row.push(std::mem::take(&mut field)),
                    '\r' => {}
                    '\n' => {
                        row.push(std::mem::take(&mut field));
                        rows.push(std::mem::take(&mut row));
                    }
                    _ => field.push(c),
                }
            }
        }
        if !field.is_empty() || !row.is_empty() {
            row.push(field);
            rows.push(row);
        }
        rows
    }

    #[test]
    fn test_plain_fields_unquoted() {
        assert_eq!(escape_field("Al-Baqarah"), "Al-Baqarah");
        assert_eq!(escape_field("42"), "42");
    }

    #[test]
    fn test_fields_with_specials_are_quoted() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("he said \"ok\""), "\"he said \"\"ok\"\"\"");
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn test_round_trip_with_commas_quotes_and_newlines() {
        let header = ["id", "catatan", "diuji_oleh"];
        let rows = vec![
            vec![
                "1".to_string(),
                "lancar, tapi perlu murajaah \"lagi\"".to_string(),
                "Ust. Ahmad".to_string(),
            ],
            vec![
                "2".to_string(),
                "baris 1\nbaris 2".to_string(),
                "Ustzh. Fatimah".to_string(),
            ],
        ];

        let csv = write_csv(&header, &rows);
        let parsed = parse_csv(&csv);

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], header.to_vec());
        assert_eq!(parsed[1], rows[0]);
        assert_eq!(parsed[2], rows[1]);
    }
}
