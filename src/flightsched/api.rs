//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for every
//! flightsched operation, whatever the UI.
//!
//! The facade:
//! - **Checks the invocation** before anything touches the filesystem
//! - **Resolves artifact paths** from [`FlightConfig`] (database, error log,
//!   timestamped response file)
//! - **Dispatches** to `commands/*.rs` and returns their `CmdResult`s
//!
//! It does no printing and never exits the process.
//!
//! `FlightApi<S: DataStore>` is generic over the storage backend:
//! `FlightApi<FileStore>` in production, `FlightApi<InMemoryStore>` in tests.

use crate::commands::{self, ingest::Sources, CmdMessage};
use crate::config::FlightConfig;
use crate::error::{FlightError, Result};
use crate::model::FlightRecord;
use crate::store::DataStore;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const RESPONSE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// What a single run should do.
#[derive(Debug, Clone, Default)]
pub struct RunPlan {
    pub input_file: Option<PathBuf>,
    pub input_dir: Option<PathBuf>,
    pub json_db: Option<PathBuf>,
    pub query_file: Option<PathBuf>,
}

impl RunPlan {
    fn parses_sources(&self) -> bool {
        self.input_file.is_some() || self.input_dir.is_some()
    }

    /// Rejects plans that cannot produce anything useful.
    pub fn check(&self) -> Result<()> {
        if self.query_file.is_some() && self.json_db.is_none() && !self.parses_sources() {
            return Err(FlightError::Invocation(
                "-q needs a database: load one with -j or parse sources with -i/-d".to_string(),
            ));
        }
        if self.json_db.is_none() && !self.parses_sources() {
            return Err(FlightError::Invocation(
                "nothing to do: give -i, -d or -j (see --help)".to_string(),
            ));
        }
        Ok(())
    }
}

pub struct FlightApi<S: DataStore> {
    store: S,
    config: FlightConfig,
}

impl<S: DataStore> FlightApi<S> {
    pub fn new(store: S, config: FlightConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses the given sources into the configured database and error log.
    pub fn ingest(
        &mut self,
        file: Option<PathBuf>,
        dir: Option<PathBuf>,
    ) -> Result<commands::CmdResult> {
        let sources = Sources {
            file,
            dir,
            ext: self.config.source_ext.clone(),
        };
        commands::ingest::run(
            &mut self.store,
            &sources,
            &self.config.db_file,
            &self.config.error_log,
        )
    }

    pub fn load_database(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, path)
    }

    pub fn run_queries(
        &mut self,
        records: &[FlightRecord],
        query_file: &Path,
        now: DateTime<Local>,
    ) -> Result<commands::CmdResult> {
        let response_path = self.response_path(now);
        commands::query::run(&mut self.store, records, query_file, &response_path)
    }

    /// `<prefix>_<YYYYMMDD_HHMM>.json`
    pub fn response_path(&self, now: DateTime<Local>) -> PathBuf {
        PathBuf::from(format!(
            "{}_{}.json",
            self.config.response_prefix,
            now.format(RESPONSE_TIMESTAMP_FORMAT)
        ))
    }

    /// Runs a whole plan: load or parse, then optionally query.
    ///
    /// A loaded database takes priority over sources; when both are given the
    /// sources are ignored.
    pub fn execute(&mut self, plan: RunPlan, now: DateTime<Local>) -> Result<commands::CmdResult> {
        plan.check()?;

        let mut result = if let Some(db) = &plan.json_db {
            let mut loaded = self.load_database(db)?;
            if plan.parses_sources() {
                warn!(db = %db.display(), "database given, sources ignored");
                loaded.add_message(CmdMessage::warning("Ignoring -i/-d because -j was given"));
            }
            loaded
        } else {
            self.ingest(plan.input_file.clone(), plan.input_dir.clone())?
        };

        if let Some(query_file) = &plan.query_file {
            let answered = self.run_queries(&result.records, query_file, now)?;
            result.merge(answered);
        }

        Ok(result)
    }
}
