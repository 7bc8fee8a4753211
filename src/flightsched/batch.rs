//! Multi-source ingestion.
//!
//! A [`Batch`] feeds sources through the line parser one after another and
//! threads a single line counter through them, so error line numbers keep
//! increasing across source boundaries instead of restarting at 1.
//! Each file is read completely before the next one is opened.

use crate::error::{FlightError, Result};
use crate::model::{ErrorEntry, FlightRecord};
use crate::parser::parse_source;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Records and error entries of a whole batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<FlightRecord>,
    pub errors: Vec<ErrorEntry>,
    pub sources: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct Batch {
    next_line: usize,
    outcome: BatchOutcome,
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

impl Batch {
    pub fn new() -> Self {
        Self {
            next_line: 1,
            outcome: BatchOutcome::default(),
        }
    }

    /// Line number the next source will start at.
    pub fn next_line(&self) -> usize {
        self.next_line
    }

    pub fn ingest_text(&mut self, text: &str) {
        let source = parse_source(text, self.next_line);
        self.next_line = source.next_line;
        self.outcome.records.extend(source.records);
        self.outcome.errors.extend(source.errors);
    }

    pub fn ingest_file(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(FlightError::InputFileNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| FlightError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let first_line = self.next_line;
        let (records_before, errors_before) =
            (self.outcome.records.len(), self.outcome.errors.len());
        self.ingest_text(&text);
        debug!(
            source = %path.display(),
            first_line,
            records = self.outcome.records.len() - records_before,
            errors = self.outcome.errors.len() - errors_before,
            "parsed source"
        );

        self.outcome.sources.push(path.to_path_buf());
        Ok(())
    }

    /// Ingests every source file in `dir` with extension `ext`, in path order.
    pub fn ingest_dir(&mut self, dir: &Path, ext: &str) -> Result<usize> {
        let files = discover_sources(dir, ext)?;
        debug!(dir = %dir.display(), count = files.len(), "discovered sources");
        for file in &files {
            self.ingest_file(file)?;
        }
        Ok(files.len())
    }

    pub fn finish(self) -> BatchOutcome {
        self.outcome
    }
}

/// Lists the non-hidden regular files in `dir` ending in `ext`, sorted by path.
/// Subdirectories are not searched.
pub fn discover_sources(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(FlightError::InputDirNotFound(dir.to_path_buf()));
    }
    let read_err = |source: std::io::Error| FlightError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || !name.ends_with(ext) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}
