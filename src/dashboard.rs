//! Fetch-transform-render driver
//!
//! Wires a [`SnapshotSource`], a [`PriceSeriesTransformer`] and a
//! [`Presenter`] together. All data flows as return values; nothing is kept
//! between passes except what the presenter shows.

use crate::{
    error::DashboardError,
    presenter::Presenter,
    source::SnapshotSource,
    transform::PriceSeriesTransformer,
    types::PriceSeries,
};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::{interval, MissedTickBehavior};

/// Shortest period accepted by `run_periodic`
const MIN_REFRESH_PERIOD: Duration = Duration::from_millis(1);

/// Price history dashboard
///
/// # Example
/// ```no_run
/// use price_history_sdk::{BoardPresenter, Dashboard, HttpSnapshotSource, PriceSeriesTransformer};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let source = Arc::new(HttpSnapshotSource::new("http://localhost:5000/fetch-data")?);
/// let mut dashboard = Dashboard::new(source, PriceSeriesTransformer::default(), BoardPresenter::default());
/// let series = dashboard.run_once().await?;
/// println!("{} points, latest {:.2}", series.len(), series.latest().price);
/// # Ok(())
/// # }
/// ```
pub struct Dashboard<P: Presenter> {
    source: Arc<dyn SnapshotSource>,
    transformer: PriceSeriesTransformer,
    presenter: P,
}

impl<P: Presenter> Dashboard<P> {
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        transformer: PriceSeriesTransformer,
        presenter: P,
    ) -> Self {
        Self {
            source,
            transformer,
            presenter,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn source_name(&self) -> &'static str {
        self.source.source_name()
    }

    /// Runs one fetch-transform-render pass
    ///
    /// On any error the presenter is not called, so it keeps showing its
    /// previous state.
    pub async fn run_once(&mut self) -> Result<PriceSeries, DashboardError> {
        let start = Instant::now();

        let records = self.source.fetch_snapshots().await?;
        let series = self.transformer.transform(&records)?;
        self.presenter.present(&series)?;

        tracing::info!(
            points = series.len(),
            source = self.source.source_name(),
            presenter = self.presenter.presenter_name(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Rendered price history"
        );

        Ok(series)
    }

    /// Runs passes every `period` until `on_pass` breaks
    ///
    /// Periods shorter than one millisecond (including zero) are raised to
    /// one millisecond.
    ///
    /// Passes run one after another in the calling task, so at most one is
    /// in flight and a slow pass delays the next tick instead of overlapping
    /// it. Failed passes are logged and leave the presenter untouched.
    pub async fn run_periodic<F>(&mut self, period: Duration, mut on_pass: F)
    where
        F: FnMut(&P, Result<&PriceSeries, &DashboardError>) -> ControlFlow<()>,
    {
        let period = period.max(MIN_REFRESH_PERIOD);
        tracing::info!(
            refresh_interval_ms = period.as_millis() as u64,
            source = self.source.source_name(),
            "Starting price history refresh loop"
        );

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let outcome = self.run_once().await;
            if let Err(e) = &outcome {
                tracing::warn!(error = %e, "Price history pass failed");
            }

            if on_pass(&self.presenter, outcome.as_ref()).is_break() {
                break;
            }
        }
    }
}
