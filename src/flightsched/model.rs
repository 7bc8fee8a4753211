use crate::validate::Violation;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One validated flight.
///
/// Every field keeps the text it was read with. Field order is alphabetical so
/// that serialized output has sorted keys without relying on a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub arrival_datetime: String,
    pub departure_datetime: String,
    pub destination: String,
    pub flight_id: String,
    pub origin: String,
    pub price: String,
}

impl FlightRecord {
    /// Builds a record from the six fields in source column order.
    pub fn from_fields(fields: &SourceFields<'_>) -> Self {
        Self {
            flight_id: fields.flight_id.to_string(),
            origin: fields.origin.to_string(),
            destination: fields.destination.to_string(),
            departure_datetime: fields.departure_datetime.to_string(),
            arrival_datetime: fields.arrival_datetime.to_string(),
            price: fields.price.to_string(),
        }
    }
}

/// The six trimmed columns of a candidate line, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFields<'a> {
    pub flight_id: &'a str,
    pub origin: &'a str,
    pub destination: &'a str,
    pub departure_datetime: &'a str,
    pub arrival_datetime: &'a str,
    pub price: &'a str,
}

impl<'a> SourceFields<'a> {
    /// Returns `None` unless exactly six columns are given.
    pub fn from_columns(columns: &[&'a str]) -> Option<Self> {
        match *columns {
            [flight_id, origin, destination, departure_datetime, arrival_datetime, price] => {
                Some(Self {
                    flight_id,
                    origin,
                    destination,
                    departure_datetime,
                    arrival_datetime,
                    price,
                })
            }
            _ => None,
        }
    }
}

/// Why a line ended up in the error log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Commented-out line, kept so the log mirrors the source.
    Comment,
    FieldCount,
    Invalid(Vec<Violation>),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Comment => write!(f, "Comment"),
            Rejection::FieldCount => write!(f, "Invalid number of fields"),
            Rejection::Invalid(violations) => {
                for (i, violation) in violations.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", violation)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub line: usize,
    pub raw: String,
    pub reason: Rejection,
}

impl ErrorEntry {
    pub fn new(line: usize, raw: impl Into<String>, reason: Rejection) -> Self {
        Self {
            line,
            raw: raw.into(),
            reason,
        }
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {} → {}", self.line, self.raw, self.reason)
    }
}

/// Upper bound for the `price` filter, as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceLimit {
    Number(serde_json::Number),
    Text(String),
}

impl PriceLimit {
    /// The limit as a real number, or `None` when the text does not parse.
    pub fn value(&self) -> Option<f64> {
        match self {
            PriceLimit::Number(n) => n.as_f64(),
            PriceLimit::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One filter key: `None` when absent, `Some(None)` when given as `null`.
pub type Filter<T> = Option<Option<T>>;

fn present<'de, D, T>(deserializer: D) -> std::result::Result<Filter<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A filter set. Absent keys impose no constraint; a `null` key matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Query {
    #[serde(default, deserialize_with = "present")]
    pub arrival_datetime: Filter<String>,
    #[serde(default, deserialize_with = "present")]
    pub departure_datetime: Filter<String>,
    #[serde(default, deserialize_with = "present")]
    pub destination: Filter<String>,
    #[serde(default, deserialize_with = "present")]
    pub flight_id: Filter<String>,
    #[serde(default, deserialize_with = "present")]
    pub origin: Filter<String>,
    #[serde(default, deserialize_with = "present")]
    pub price: Filter<PriceLimit>,
}

/// A query as read from a query file: the object itself, kept for echoing in
/// the response, and its typed filters.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub original: Map<String, Value>,
    pub filters: Query,
}

impl QueryRequest {
    pub fn from_object(original: Map<String, Value>) -> serde_json::Result<Self> {
        let filters = Query::deserialize(Value::Object(original.clone()))?;
        Ok(Self { original, filters })
    }
}

/// Shape of a query file: a single filter object or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QueryFile {
    Many(Vec<Map<String, Value>>),
    One(Map<String, Value>),
}

impl QueryFile {
    pub fn into_requests(self) -> serde_json::Result<Vec<QueryRequest>> {
        let objects = match self {
            QueryFile::Many(objects) => objects,
            QueryFile::One(object) => vec![object],
        };
        objects.into_iter().map(QueryRequest::from_object).collect()
    }
}

/// Matches for one query. `query` is the object from the query file, keys
/// sorted, unknown and `null` keys included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub matches: Vec<FlightRecord>,
    pub query: Map<String, Value>,
}
