use super::DataStore;
use crate::error::{FlightError, Result};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    artifacts: HashMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artifact(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.artifacts.insert(path.into(), contents.into());
        self
    }

    pub fn artifact(&self, path: &Path) -> Option<&str> {
        self.artifacts.get(path).map(String::as_str)
    }

    pub fn paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.artifacts.keys().map(PathBuf::as_path).collect();
        paths.sort();
        paths
    }
}

impl DataStore for InMemoryStore {
    fn read_text(&self, path: &Path) -> Result<String> {
        self.artifacts
            .get(path)
            .cloned()
            .ok_or_else(|| FlightError::Read {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such artifact"),
            })
    }

    fn write_text(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.artifacts
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
