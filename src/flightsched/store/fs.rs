use super::DataStore;
use crate::error::{FlightError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store. Relative paths resolve against `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| FlightError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read_text(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        fs::read_to_string(&full).map_err(|source| FlightError::Read { path: full, source })
    }

    fn write_text(&mut self, path: &Path, contents: &str) -> Result<()> {
        let full = self.resolve(path);
        self.ensure_parent(&full)?;
        fs::write(&full, contents).map_err(|source| FlightError::Write {
            path: full.clone(),
            source,
        })?;
        debug!(path = %full.display(), bytes = contents.len(), "wrote artifact");
        Ok(())
    }

    fn locate(&self, path: &Path) -> PathBuf {
        self.resolve(path)
    }
}
