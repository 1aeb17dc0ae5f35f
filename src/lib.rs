//! # Price History Dashboard SDK
//!
//! Fetches an asset's stored snapshot history, reshapes it into a
//! time-ordered price series plus a summary of the latest snapshot, and
//! presents both as display text and a line chart.
//!
//! ## Usage
//!
//! ```no_run
//! use price_history_sdk::{
//!     BoardPresenter, Dashboard, DashboardConfig, DisplaySlot, HttpSnapshotSource,
//! };
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DashboardConfig::from_env();
//! let source = Arc::new(HttpSnapshotSource::new(&config.endpoint)?);
//! let presenter = BoardPresenter::new(&config.symbol, config.board());
//!
//! let mut dashboard = Dashboard::new(source, config.transformer(), presenter);
//! dashboard.run_once().await?;
//!
//! println!("{}", dashboard.presenter().board().text(DisplaySlot::CurrentPrice));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! SnapshotSource (HTTP endpoint or file dump)
//!     ↓  Vec<SnapshotRecord>
//! PriceSeriesTransformer (validate, stable sort, pick latest)
//!     ↓  PriceSeries
//! Presenter (display slots + chart widget)
//! ```
//!
//! ## Error Handling
//!
//! ```no_run
//! use price_history_sdk::{PriceSeriesTransformer, TransformError};
//!
//! match PriceSeriesTransformer::default().transform(&[]) {
//!     Ok(series) => println!("{} points", series.len()),
//!     Err(TransformError::EmptyInput) => println!("No history yet"),
//!     Err(TransformError::MalformedRecord { index, field, .. }) => {
//!         println!("Record {} is missing {}", index, field)
//!     }
//! }
//! ```

pub mod chart;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod presenter;
pub mod source;
pub mod sources;
pub mod transform;
pub mod types;

// Re-export commonly used types
pub use chart::{ChartRenderer, PngChartRenderer};
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use display::{ChartConfig, ChartData, DisplayBoard, DisplaySlot};
pub use error::{DashboardError, FetchError, FieldDefect, PresentError, TransformError};
pub use presenter::{BoardPresenter, Presenter};
pub use source::SnapshotSource;
pub use sources::{FileSnapshotSource, HttpSnapshotSource};
pub use transform::PriceSeriesTransformer;
pub use types::{CurrentSnapshot, PricePoint, PriceSeries, SnapshotRecord};
