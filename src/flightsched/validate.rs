//! Record validation.
//!
//! A candidate record is checked against a fixed rule list. Every rule runs,
//! violations are reported in rule order, and the only dependency between
//! rules is that the chronology check needs both datetimes to have parsed.
//!
//! | # | Field                 | Rule                                   |
//! |---|-----------------------|----------------------------------------|
//! | 1 | `flight_id`           | `^[A-Za-z0-9]{2,8}$`                   |
//! | 2 | `origin`              | `^[A-Z]{3}$`                           |
//! | 3 | `destination`         | `^[A-Z]{3}$`                           |
//! | 4 | `departure_datetime`  | `YYYY-MM-DD HH:MM`, real calendar time |
//! | 5 | `arrival_datetime`    | same as 4                              |
//! | 6 | both datetimes        | arrival strictly after departure       |
//! | 7 | `price`               | real number, strictly positive         |

use crate::model::SourceFields;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

static FLIGHT_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{2,8}$").unwrap());
static AIRPORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());
// chrono alone would accept single-digit components
static DATETIME_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    FlightId,
    Origin,
    Destination,
    Departure,
    Arrival,
    ArrivalNotAfterDeparture,
    Price,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Violation::FlightId => "Invalid flight_id",
            Violation::Origin => "Invalid origin",
            Violation::Destination => "Invalid destination",
            Violation::Departure => "Invalid departure_datetime",
            Violation::Arrival => "Invalid arrival_datetime",
            Violation::ArrivalNotAfterDeparture => "Arrival not after departure",
            Violation::Price => "Invalid price",
        };
        f.write_str(text)
    }
}

/// Runs every rule and returns the violations in rule order. Empty means valid.
pub fn validate_record(fields: &SourceFields<'_>) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !FLIGHT_ID_RE.is_match(fields.flight_id) {
        violations.push(Violation::FlightId);
    }
    if !AIRPORT_RE.is_match(fields.origin) {
        violations.push(Violation::Origin);
    }
    if !AIRPORT_RE.is_match(fields.destination) {
        violations.push(Violation::Destination);
    }

    let departure = parse_datetime(fields.departure_datetime);
    if departure.is_none() {
        violations.push(Violation::Departure);
    }
    let arrival = parse_datetime(fields.arrival_datetime);
    if arrival.is_none() {
        violations.push(Violation::Arrival);
    }
    if let (Some(departure), Some(arrival)) = (departure, arrival) {
        if arrival <= departure {
            violations.push(Violation::ArrivalNotAfterDeparture);
        }
    }

    match parse_price(fields.price) {
        Some(price) if price > 0.0 => {}
        _ => violations.push(Violation::Price),
    }

    violations
}

/// Parses `YYYY-MM-DD HH:MM` with two-digit components and a real calendar date.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if !DATETIME_SHAPE_RE.is_match(s) {
        return None;
    }
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).ok()
}

/// Parses a price as a real number. Sign is not checked here.
pub fn parse_price(s: &str) -> Option<f64> {
    s.trim().parse().ok()
}
