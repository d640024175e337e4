//! # Corpus Readers
//!
//! Raw-text record sources. Each record yields one text, in input order.
//!
//! * [`read_text_lines`] - one record per line.
//! * [`read_jsonl_records`] - one JSON object per line; the text is a named string field.

use std::io::BufRead;

use serde_json::Value;

use crate::errors::{WFResult, WordframeError};

/// The default JSON text field; the press-release body.
pub const DEFAULT_TEXT_FIELD: &str = "contents";

/// Read one record per line.
///
/// Empty lines are records too; they become empty documents.
pub fn read_text_lines<R: BufRead>(reader: R) -> impl Iterator<Item = WFResult<String>> {
    reader.lines().map(|line| line.map_err(WordframeError::from))
}

/// Read one JSON object per line, yielding the string `field` of each.
///
/// Blank lines are skipped.
///
/// ## Errors
/// * [`WordframeError::Parse`] for a line which is not valid JSON.
/// * [`WordframeError::MissingField`] when the field is absent or not a string.
pub fn read_jsonl_records<'a, R: BufRead + 'a>(
    reader: R,
    field: &'a str,
) -> impl Iterator<Item = WFResult<String>> + 'a {
    reader
        .lines()
        .enumerate()
        .filter(|(_, line)| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(move |(idx, line)| parse_jsonl_record(&line?, field, idx + 1))
}

fn parse_jsonl_record(
    line: &str,
    field: &str,
    line_no: usize,
) -> WFResult<String> {
    let value: Value = serde_json::from_str(line)
        .map_err(|e| WordframeError::Parse(format!("record {line_no}: {e}")))?;

    match value.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        _ => Err(WordframeError::MissingField {
            field: field.to_string(),
            line: line_no,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines() {
        let records: Vec<String> = read_text_lines("first\n\nthird\n".as_bytes())
            .collect::<WFResult<_>>()
            .unwrap();
        assert_eq!(records, vec!["first", "", "third"]);
    }

    #[test]
    fn test_jsonl_records() {
        let data = concat!(
            r#"{"id": "1", "title": "A", "contents": "Fraud charges filed."}"#,
            "\n",
            "\n",
            r#"{"id": "2", "contents": "Plea entered.", "date": "2016-01-04"}"#,
            "\n",
        );

        let records: Vec<String> = read_jsonl_records(data.as_bytes(), DEFAULT_TEXT_FIELD)
            .collect::<WFResult<_>>()
            .unwrap();
        assert_eq!(records, vec!["Fraud charges filed.", "Plea entered."]);

        let titles: Vec<WFResult<String>> = read_jsonl_records(data.as_bytes(), "title").collect();
        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0].as_ref().unwrap(), "A");
        assert!(matches!(
            &titles[1],
            Err(WordframeError::MissingField { line: 3, .. })
        ));
    }

    #[test]
    fn test_jsonl_errors() {
        let mut records = read_jsonl_records("{not json}\n{\"contents\": 7}\n".as_bytes(), "contents");

        assert!(matches!(records.next(), Some(Err(WordframeError::Parse(_)))));
        assert!(matches!(
            records.next(),
            Some(Err(WordframeError::MissingField { line: 2, .. }))
        ));
        assert!(records.next().is_none());
    }
}
