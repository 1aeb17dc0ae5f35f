//! Source abstraction for fetching snapshot history

use crate::{error::FetchError, types::SnapshotRecord};
use async_trait::async_trait;

/// Trait for snapshot history sources
///
/// Implementations return the complete, parsed record list or an error;
/// never a partial list.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetches every stored snapshot, in whatever order the source keeps them
    async fn fetch_snapshots(&self) -> Result<Vec<SnapshotRecord>, FetchError>;

    /// Returns the name of this source
    fn source_name(&self) -> &'static str;
}

/// Parses a JSON array of snapshot records
pub(crate) fn parse_snapshots(body: &str, origin: &str) -> Result<Vec<SnapshotRecord>, FetchError> {
    serde_json::from_str(body).map_err(|e| {
        FetchError::InvalidResponse(format!(
            "Failed to parse snapshot list from {}: {}",
            origin, e
        ))
    })
}
