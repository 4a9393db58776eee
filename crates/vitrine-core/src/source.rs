//! Record source boundary
//!
//! The catalog is fetched exactly once, by an external loader, before any
//! state initializes. Parsing a particular wire format (the original data
//! lives in CSV) stays the loader's job; the core only sees raw records.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use vitrine_catalog::RawRecord;

/// Loader failures. Always fatal to initialization: the core never builds
/// state from partial or absent data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source could not be reached or read
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// The source was read but could not be decoded into records
    #[error("source malformed: {0}")]
    Malformed(String),
}

/// One-shot supplier of raw catalog records
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch every record from the source
    async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError>;
}

/// Records held in memory, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<RawRecord>,
}

impl InMemorySource {
    /// Source over the given records
    #[inline]
    #[must_use]
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Records read from a JSON file: an array of field-name to text maps.
///
/// Used by the demo binary as the stand-in external loader.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading from `path`
    #[inline]
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Unavailable(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| SourceError::Malformed(format!("{}: {e}", self.path.display())))
    }
}
