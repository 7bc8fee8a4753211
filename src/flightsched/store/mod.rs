//! # Storage Layer
//!
//! Every artifact the tool reads or writes goes through the [`DataStore`]
//! trait:
//!
//! - the database (JSON array of [`FlightRecord`]s)
//! - the error log (`Line <N>: <raw> → <reason>` per line)
//! - query files (one filter object or an array of them)
//! - response files (JSON array of `{matches, query}` pairs)
//!
//! Implementations only move text in and out of a location. Rendering and
//! parsing happen in the provided methods here, so every backend produces the
//! same bytes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: reads and writes files, paths relative to a root
//! - [`memory::InMemoryStore`]: keeps artifacts in a map, for tests
//!
//! ## Stable output
//!
//! JSON is rendered with two-space indentation and no trailing newline. Key
//! order comes from struct field order, which is alphabetical for every
//! serialized type, so loading a database and writing it back yields the same
//! bytes. Echoed query objects are JSON maps and serialize with sorted keys.

use crate::error::{FlightError, Result};
use crate::model::{ErrorEntry, FlightRecord, QueryFile, QueryRequest, QueryResult};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the whole artifact at `path`.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Replace the artifact at `path` with `contents`.
    fn write_text(&mut self, path: &Path, contents: &str) -> Result<()>;

    /// Where `path` actually lives, for user-facing messages.
    fn locate(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }

    fn save_records(&mut self, path: &Path, records: &[FlightRecord]) -> Result<()> {
        let contents = render_json(&records)?;
        self.write_text(path, &contents)
    }

    /// Load a database. Its records are trusted and not validated again.
    fn load_records(&self, path: &Path) -> Result<Vec<FlightRecord>> {
        let contents = self.read_text(path)?;
        parse_json(path, &contents)
    }

    fn save_error_log(&mut self, path: &Path, entries: &[ErrorEntry]) -> Result<()> {
        self.write_text(path, &render_error_log(entries))
    }

    /// Load a query file. A filter of the wrong type fails the whole file.
    fn load_queries(&self, path: &Path) -> Result<Vec<QueryRequest>> {
        let contents = self.read_text(path)?;
        let file: QueryFile = parse_json(path, &contents)?;
        file.into_requests()
            .map_err(|source| FlightError::MalformedJson {
                path: path.to_path_buf(),
                source,
            })
    }

    fn save_response(&mut self, path: &Path, results: &[QueryResult]) -> Result<()> {
        let contents = render_json(&results)?;
        self.write_text(path, &contents)
    }
}

/// Pretty JSON with two-space indentation.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(FlightError::Serialization)
}

pub fn render_error_log(entries: &[ErrorEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{}", entry);
    }
    out
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, contents: &str) -> Result<T> {
    serde_json::from_str(contents).map_err(|source| FlightError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}
