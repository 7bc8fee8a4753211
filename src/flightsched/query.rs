//! Query matching.
//!
//! A [`Query`] is a set of optional filters that are AND-ed together:
//!
//! - `flight_id`, `origin`, `destination`: exact equality
//! - `price`: record price <= limit
//! - `departure_datetime`: record departure >= value
//! - `arrival_datetime`: record arrival <= value
//!
//! A key given as `null` matches nothing. Datetimes compare as strings. The
//! stored format is zero padded, so string order equals chronological order.

use crate::model::{Filter, FlightRecord, Query, QueryRequest, QueryResult};
use crate::validate::parse_price;

impl Query {
    /// True when every present filter holds. An empty query matches anything.
    pub fn matches(&self, record: &FlightRecord) -> bool {
        holds(&self.flight_id, |id| *id == record.flight_id)
            && holds(&self.origin, |origin| *origin == record.origin)
            && holds(&self.destination, |dest| *dest == record.destination)
            && holds(&self.price, |limit| {
                // unparsable limits match nothing
                match (limit.value(), parse_price(&record.price)) {
                    (Some(limit), Some(price)) => price <= limit,
                    _ => false,
                }
            })
            && holds(&self.departure_datetime, |earliest| {
                record.departure_datetime.as_str() >= earliest.as_str()
            })
            && holds(&self.arrival_datetime, |latest| {
                record.arrival_datetime.as_str() <= latest.as_str()
            })
    }
}

/// Absent filters hold, `null` filters never do.
fn holds<T>(filter: &Filter<T>, predicate: impl FnOnce(&T) -> bool) -> bool {
    match filter {
        None => true,
        Some(None) => false,
        Some(Some(value)) => predicate(value),
    }
}

/// Runs each query over `records`, keeping record order in every result.
pub fn evaluate(records: &[FlightRecord], requests: Vec<QueryRequest>) -> Vec<QueryResult> {
    requests
        .into_iter()
        .map(|request| {
            let matches = records
                .iter()
                .filter(|record| request.filters.matches(record))
                .cloned()
                .collect();
            QueryResult {
                matches,
                query: request.original,
            }
        })
        .collect()
}
