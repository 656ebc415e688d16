//! Line-oriented event records
//!
//! A record is either a bare event name (`session.idle`) or a JSON object with a
//! string `type` field, which is what the `logging` template prints.

use crate::filter::EventFilter;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// A selected input line and the event name it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub event: String,
    pub line: String,
    pub line_number: usize,
}

/// Extract the event name from one input line
///
/// Returns `None` for blank lines and for JSON lines without a string `type`.
pub fn event_name_of(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with('{') {
        return match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => value
                .get("type")
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(err) => {
                debug!(error = %err, "skipping malformed JSON record");
                None
            }
        };
    }

    Some(trimmed.to_string())
}

/// Read records and keep the ones selected by `filter`, in input order
///
/// Lines that are not valid UTF-8 are skipped like any other unusable record.
pub fn select_records<R: BufRead>(
    mut reader: R,
    filter: &EventFilter,
) -> io::Result<Vec<EventRecord>> {
    let mut selected = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => line,
            Err(err) => {
                debug!(line_number, error = %err, "skipping non UTF-8 record");
                continue;
            }
        };
        let line = line.trim_end_matches(['\n', '\r']).to_string();

        let Some(event) = event_name_of(&line) else {
            continue;
        };

        if filter.matches(&event) {
            selected.push(EventRecord {
                event,
                line,
                line_number,
            });
        }
    }

    Ok(selected)
}

pub fn select_records_from_file(
    path: impl AsRef<Path>,
    filter: &EventFilter,
) -> io::Result<Vec<EventRecord>> {
    let file = File::open(path)?;
    select_records(BufReader::new(file), filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_event_name_of_bare_and_json() {
        assert_eq!(event_name_of("  file.edited "), Some("file.edited".to_string()));
        assert_eq!(
            event_name_of(r#"{"plugin":"x","type":"session.idle"}"#),
            Some("session.idle".to_string())
        );
        assert_eq!(event_name_of(r#"{"type":3}"#), None);
        assert_eq!(event_name_of(r#"{"plugin":"x"}"#), None);
        assert_eq!(event_name_of("{not json"), None);
        assert_eq!(event_name_of("   "), None);
    }

    #[test]
    fn test_select_records_keeps_lines_and_numbers() {
        let input = "session.created\n\n{\"type\":\"file.edited\"}\ntool.execute.before\n";
        let filter = EventFilter::new(["file.*", "session.idle"]);
        let records = select_records(Cursor::new(input), &filter).unwrap();
        assert_eq!(
            records,
            vec![EventRecord {
                event: "file.edited".to_string(),
                line: "{\"type\":\"file.edited\"}".to_string(),
                line_number: 3,
            }]
        );
    }

    #[test]
    fn test_select_records_skips_invalid_utf8_lines() {
        let input: &[u8] = b"session.idle\n\xff\xfe\nfile.edited\r\n";
        let records = select_records(input, &EventFilter::all()).unwrap();
        let summary: Vec<_> = records
            .iter()
            .map(|r| (r.event.as_str(), r.line.as_str(), r.line_number))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("session.idle", "session.idle", 1),
                ("file.edited", "file.edited", 3)
            ]
        );
    }
}
