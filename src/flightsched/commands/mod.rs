use crate::model::{ErrorEntry, FlightRecord, QueryResult};
use std::path::PathBuf;

pub mod ingest;
pub mod load;
pub mod query;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<FlightRecord>,
    pub errors: Vec<ErrorEntry>,
    pub query_results: Vec<QueryResult>,
    pub written: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<FlightRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_errors(mut self, errors: Vec<ErrorEntry>) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_query_results(mut self, results: Vec<QueryResult>) -> Self {
        self.query_results = results;
        self
    }

    /// Folds a later step into this result, keeping message order.
    pub fn merge(&mut self, other: CmdResult) {
        if !other.records.is_empty() {
            self.records = other.records;
        }
        self.errors.extend(other.errors);
        self.query_results.extend(other.query_results);
        self.written.extend(other.written);
        self.messages.extend(other.messages);
    }
}
