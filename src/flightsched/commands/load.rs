use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::path::Path;

/// Loads a previously written database as-is.
pub fn run<S: DataStore>(store: &S, db_path: &Path) -> Result<CmdResult> {
    let records = store.load_records(db_path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Loaded {} flight(s) from {}",
        records.len(),
        store.locate(db_path).display()
    )));
    Ok(result.with_records(records))
}
