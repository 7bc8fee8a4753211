use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlightError, Result};
use crate::model::FlightRecord;
use crate::query::evaluate;
use crate::store::DataStore;
use std::path::Path;
use tracing::debug;

/// Runs the queries in `query_path` against `records` and writes the
/// response to `response_path`.
pub fn run<S: DataStore>(
    store: &mut S,
    records: &[FlightRecord],
    query_path: &Path,
    response_path: &Path,
) -> Result<CmdResult> {
    if records.is_empty() {
        return Err(FlightError::NoRecords);
    }

    let requests = store.load_queries(query_path)?;
    debug!(queries = requests.len(), records = records.len(), "evaluating queries");
    let results = evaluate(records, requests);

    store.save_response(response_path, &results)?;
    let mut result = CmdResult::default();
    result.written.push(store.locate(response_path));
    result.add_message(CmdMessage::success(format!(
        "Wrote response file: {}",
        store.locate(response_path).display()
    )));
    Ok(result.with_query_results(results))
}
