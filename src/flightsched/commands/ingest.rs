use crate::batch::Batch;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlightError, Result};
use crate::store::DataStore;
use std::path::{Path, PathBuf};
use tracing::info;

/// Source files to parse. The single file, when given, goes first.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub file: Option<PathBuf>,
    pub dir: Option<PathBuf>,
    pub ext: String,
}

/// Parses every source into one batch, then writes the database and, if
/// anything was rejected or commented out, the error log.
///
/// Source paths resolve the same way artifact paths do, through the store.
pub fn run<S: DataStore>(
    store: &mut S,
    sources: &Sources,
    db_path: &Path,
    error_log: &Path,
) -> Result<CmdResult> {
    let file = sources.file.as_deref().map(|file| store.locate(file));
    let dir = sources.dir.as_deref().map(|dir| store.locate(dir));

    // fail before parsing anything
    if let Some(file) = &file {
        if !file.is_file() {
            return Err(FlightError::InputFileNotFound(file.clone()));
        }
    }
    if let Some(dir) = &dir {
        if !dir.is_dir() {
            return Err(FlightError::InputDirNotFound(dir.clone()));
        }
    }

    let mut batch = Batch::new();
    if let Some(file) = &file {
        batch.ingest_file(file)?;
    }
    if let Some(dir) = &dir {
        batch.ingest_dir(dir, &sources.ext)?;
    }
    let outcome = batch.finish();
    info!(
        sources = outcome.sources.len(),
        records = outcome.records.len(),
        errors = outcome.errors.len(),
        "batch complete"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Parsed {} source file(s): {} flight(s) accepted, {} line(s) logged",
        outcome.sources.len(),
        outcome.records.len(),
        outcome.errors.len()
    )));

    store.save_records(db_path, &outcome.records)?;
    result.written.push(store.locate(db_path));
    result.add_message(CmdMessage::info(format!(
        "Wrote database: {}",
        store.locate(db_path).display()
    )));

    if !outcome.errors.is_empty() {
        store.save_error_log(error_log, &outcome.errors)?;
        result.written.push(store.locate(error_log));
        result.add_message(CmdMessage::info(format!(
            "Wrote error log: {}",
            store.locate(error_log).display()
        )));
    }

    Ok(result
        .with_records(outcome.records)
        .with_errors(outcome.errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rejection;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use std::fs;

    const VALID_LINE: &str = "AB12,JFK,LAX,2025-12-01 09:00,2025-12-01 12:00,199.99";

    fn sources(file: Option<PathBuf>, dir: Option<PathBuf>) -> Sources {
        Sources {
            file,
            dir,
            ext: ".csv".into(),
        }
    }

    #[test]
    fn writes_database_and_error_log() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flights.csv");
        fs::write(&input, format!("#comment\n{}\n", VALID_LINE)).unwrap();

        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            &sources(Some(input), None),
            Path::new("db.json"),
            Path::new("errors.txt"),
        )
        .unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.errors[0].reason, Rejection::Comment);
        assert!(store.artifact(Path::new("db.json")).unwrap().contains("\"AB12\""));
        assert_eq!(
            store.artifact(Path::new("errors.txt")),
            Some("Line 1: #comment → Comment\n")
        );
    }

    #[test]
    fn clean_batch_skips_error_log() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.csv"), format!("{}\n\n", VALID_LINE)).unwrap();

        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            &sources(None, Some(dir.path().to_path_buf())),
            Path::new("db.json"),
            Path::new("errors.txt"),
        )
        .unwrap();

        assert!(result.errors.is_empty());
        assert_eq!(store.paths(), vec![Path::new("db.json")]);
        assert_eq!(result.written, vec![PathBuf::from("db.json")]);
    }

    #[test]
    fn missing_directory_fails_before_parsing_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flights.csv");
        fs::write(&input, VALID_LINE).unwrap();

        let mut store = InMemoryStore::new();
        let err = run(
            &mut store,
            &sources(Some(input), Some(dir.path().join("missing"))),
            Path::new("db.json"),
            Path::new("errors.txt"),
        )
        .unwrap_err();

        assert!(matches!(err, FlightError::InputDirNotFound(_)));
        assert!(store.paths().is_empty());
    }

    #[test]
    fn relative_sources_resolve_against_store_root() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("flights.csv"), format!("{}\n", VALID_LINE)).unwrap();
        fs::create_dir(root.path().join("more")).unwrap();
        fs::write(root.path().join("more").join("b.csv"), "# later\n").unwrap();

        let mut store = FileStore::new(root.path().to_path_buf());
        let result = run(
            &mut store,
            &sources(Some("flights.csv".into()), Some("more".into())),
            Path::new("db.json"),
            Path::new("errors.txt"),
        )
        .unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.errors[0].line, 2);
        assert!(root.path().join("db.json").is_file());
        assert!(root.path().join("errors.txt").is_file());
    }

    #[test]
    fn missing_relative_source_reports_resolved_path() {
        let root = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(root.path().to_path_buf());
        let err = run(
            &mut store,
            &sources(Some("absent.csv".into()), None),
            Path::new("db.json"),
            Path::new("errors.txt"),
        )
        .unwrap_err();

        match err {
            FlightError::InputFileNotFound(path) => {
                assert_eq!(path, root.path().join("absent.csv"))
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
