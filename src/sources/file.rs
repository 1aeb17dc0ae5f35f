//! Snapshot source backed by a local JSON dump of the history endpoint

use crate::{
    error::FetchError,
    source::{parse_snapshots, SnapshotSource},
    types::SnapshotRecord,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads the snapshot list from a file holding the endpoint's JSON array
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn fetch_snapshots(&self) -> Result<Vec<SnapshotRecord>, FetchError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        let records = parse_snapshots(&body, &self.path.display().to_string())?;

        tracing::debug!(
            count = records.len(),
            path = %self.path.display(),
            "Loaded snapshot history from file"
        );

        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
