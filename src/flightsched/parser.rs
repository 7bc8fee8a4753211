//! Line classification for one text source.
//!
//! Each line lands in exactly one bucket:
//!
//! - blank: skipped, nothing recorded
//! - starts with `#` (after trimming): logged with reason `Comment`
//! - not exactly six comma separated fields: logged with `Invalid number of fields`
//! - six fields with violations: logged with the joined violation list
//! - otherwise: accepted as a [`FlightRecord`]
//!
//! The line counter advances for every line, whatever the bucket. Splitting is
//! a plain split on `,`; quoted fields with embedded commas are not supported.

use crate::model::{ErrorEntry, FlightRecord, Rejection, SourceFields};
use crate::validate::validate_record;

/// What one source produced.
#[derive(Debug, Default)]
pub struct SourceOutcome {
    pub records: Vec<FlightRecord>,
    pub errors: Vec<ErrorEntry>,
    /// Number to give the first line of the next source.
    pub next_line: usize,
}

/// Classifies a single line.
pub fn classify_line(raw: &str) -> Option<Result<FlightRecord, Rejection>> {
    let stripped = raw.trim();
    if stripped.is_empty() {
        return None;
    }
    if stripped.starts_with('#') {
        return Some(Err(Rejection::Comment));
    }

    let columns: Vec<&str> = raw.split(',').map(str::trim).collect();
    let Some(fields) = SourceFields::from_columns(&columns) else {
        return Some(Err(Rejection::FieldCount));
    };

    let violations = validate_record(&fields);
    if violations.is_empty() {
        Some(Ok(FlightRecord::from_fields(&fields)))
    } else {
        Some(Err(Rejection::Invalid(violations)))
    }
}

/// Parses `text`, numbering its first line `start_line`.
pub fn parse_source(text: &str, start_line: usize) -> SourceOutcome {
    let mut outcome = SourceOutcome {
        next_line: start_line,
        ..Default::default()
    };

    for raw in text.lines() {
        match classify_line(raw) {
            None => {}
            Some(Ok(record)) => outcome.records.push(record),
            Some(Err(reason)) => outcome
                .errors
                .push(ErrorEntry::new(outcome.next_line, raw, reason)),
        }
        outcome.next_line += 1;
    }

    outcome
}
