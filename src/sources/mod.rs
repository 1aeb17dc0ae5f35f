//! Snapshot source implementations

pub mod file;
pub mod http;

pub use file::FileSnapshotSource;
pub use http::HttpSnapshotSource;
