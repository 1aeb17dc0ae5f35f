//! Presenter abstraction: turns a validated price series into display text
//! and a chart

use crate::{
    chart::ChartRenderer,
    constants::DEFAULT_SYMBOL,
    display::{format_headline, snapshot_texts, ChartConfig, ChartData, DisplayBoard, DisplaySlot},
    error::PresentError,
    types::PriceSeries,
};

/// Trait for presenters
///
/// A presenter owns all formatting. It only ever sees series that passed
/// validation, and a failed `present` must leave the previous output intact.
pub trait Presenter: Send {
    /// Renders `series`, replacing whatever was shown before
    fn present(&mut self, series: &PriceSeries) -> Result<(), PresentError>;

    /// Returns the name of this presenter
    fn presenter_name(&self) -> &'static str;
}

/// Presenter writing the summary into a [`DisplayBoard`] and the series
/// into an optional chart widget
pub struct BoardPresenter {
    symbol: String,
    board: DisplayBoard,
    chart_config: ChartConfig,
    chart: Option<Box<dyn ChartRenderer>>,
    last_chart: Option<ChartData>,
}

impl Default for BoardPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL, DisplayBoard::default())
    }
}

impl BoardPresenter {
    pub fn new(symbol: impl Into<String>, board: DisplayBoard) -> Self {
        Self {
            symbol: symbol.into(),
            board,
            chart_config: ChartConfig::default(),
            chart: None,
            last_chart: None,
        }
    }

    /// Attaches a chart widget
    pub fn with_chart(mut self, chart: Box<dyn ChartRenderer>) -> Self {
        self.chart = Some(chart);
        self
    }

    pub fn with_chart_config(mut self, config: ChartConfig) -> Self {
        self.chart_config = config;
        self
    }

    pub fn board(&self) -> &DisplayBoard {
        &self.board
    }

    /// Chart data of the last successful render
    pub fn last_chart(&self) -> Option<&ChartData> {
        self.last_chart.as_ref()
    }
}

impl Presenter for BoardPresenter {
    fn present(&mut self, series: &PriceSeries) -> Result<(), PresentError> {
        let headline = format_headline(&self.symbol, series.latest().price);
        let texts = snapshot_texts(series.current());
        let chart_data = ChartData::from_series(series);

        if let Some(chart) = self.chart.as_mut() {
            chart.render(&chart_data, &self.chart_config)?;
        }

        self.board.set_text(DisplaySlot::CurrentPrice, headline);
        for (slot, text) in texts {
            self.board.set_text(slot, text);
        }
        self.last_chart = Some(chart_data);

        tracing::debug!(points = series.len(), "Presented price series");
        Ok(())
    }

    fn presenter_name(&self) -> &'static str {
        "board"
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Presenter recording every series it receives
    #[derive(Clone, Default)]
    pub struct RecordingPresenter {
        presented: Arc<Mutex<Vec<PriceSeries>>>,
    }

    impl RecordingPresenter {
        pub fn presented(&self) -> Vec<PriceSeries> {
            self.presented.lock().unwrap().clone()
        }
    }

    impl Presenter for RecordingPresenter {
        fn present(&mut self, series: &PriceSeries) -> Result<(), PresentError> {
            self.presented.lock().unwrap().push(series.clone());
            Ok(())
        }

        fn presenter_name(&self) -> &'static str {
            "recording"
        }
    }

    /// Chart widget that always fails
    pub struct BrokenChart;

    impl ChartRenderer for BrokenChart {
        fn render(&mut self, _: &ChartData, _: &ChartConfig) -> Result<(), PresentError> {
            Err(PresentError::chart("backend unavailable"))
        }
    }
}
