// Record sources
// Where the static record asset comes from and how it is parsed

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::{LoadError, LoadResult};
use crate::record::Record;

/// Asset path used when none is configured
pub const DEFAULT_DATA_PATH: &str = "data/voters.json";

/// A one-shot provider of the full record list.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn load(&self) -> LoadResult<Vec<Record>>;

    /// Human readable origin, used in log lines
    fn describe(&self) -> String;
}

/// Parse a JSON document whose root is an array of records.
///
/// Entries are not validated: anything that is not an object becomes a blank
/// record, and unknown keys are ignored.
pub fn parse_records(document: &str) -> LoadResult<Vec<Record>> {
    match serde_json::from_str::<Value>(document)? {
        Value::Array(entries) => Ok(entries.into_iter().map(Record::from).collect()),
        other => Err(LoadError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Load everything a source has, or nothing.
///
/// A failed load is logged and degrades to an empty record set; callers never
/// see the error.
pub async fn load_or_empty(source: &dyn RecordSource) -> Vec<Record> {
    match source.load().await {
        Ok(records) => {
            info!(source = %source.describe(), count = records.len(), "records loaded");
            records
        }
        Err(e) => {
            error!(source = %source.describe(), error = %e, "failed to load records");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// File Source
// =============================================================================

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for FileSource {
    async fn load(&self) -> LoadResult<Vec<Record>> {
        let document = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = document.len(), "read record asset");
        parse_records(&document)
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

// =============================================================================
// Static Source
// =============================================================================

/// An in-memory JSON document
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    document: String,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
        }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn load(&self) -> LoadResult<Vec<Record>> {
        parse_records(&self.document)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
