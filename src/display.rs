//! Display slots and chart data built from a price series

use crate::{
    constants::{
        CHART_LABEL_FORMAT, CHART_LINE_RGB, CHART_LINE_WIDTH, CHART_SERIES_LABEL,
        DEFAULT_PLACEHOLDER, NO_MAX_SUPPLY_TEXT,
    },
    types::{CurrentSnapshot, PriceSeries},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Named text slot of the summary panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySlot {
    CurrentPrice,
    MarketCap,
    Volume,
    CirculatingSupply,
    MaxSupply,
    PercentChange24h,
}

impl DisplaySlot {
    /// Human readable caption
    pub fn caption(&self) -> &'static str {
        match self {
            DisplaySlot::CurrentPrice => "Current price",
            DisplaySlot::MarketCap => "Market cap",
            DisplaySlot::Volume => "Volume (24h)",
            DisplaySlot::CirculatingSupply => "Circulating supply",
            DisplaySlot::MaxSupply => "Max supply",
            DisplaySlot::PercentChange24h => "Change (24h %)",
        }
    }

    /// All slots in panel order
    pub fn all() -> &'static [DisplaySlot] {
        &[
            DisplaySlot::CurrentPrice,
            DisplaySlot::MarketCap,
            DisplaySlot::Volume,
            DisplaySlot::CirculatingSupply,
            DisplaySlot::MaxSupply,
            DisplaySlot::PercentChange24h,
        ]
    }
}

/// Text content of the six display slots
///
/// Every slot starts at the placeholder. Writes replace the previous text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBoard {
    placeholder: String,
    slots: BTreeMap<DisplaySlot, String>,
}

impl Default for DisplayBoard {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl DisplayBoard {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            slots: BTreeMap::new(),
        }
    }

    /// Replaces the text of `slot`
    pub fn set_text(&mut self, slot: DisplaySlot, text: impl Into<String>) {
        self.slots.insert(slot, text.into());
    }

    /// Current text of `slot`, or the placeholder if never set
    pub fn text(&self, slot: DisplaySlot) -> &str {
        self.slots
            .get(&slot)
            .map(String::as_str)
            .unwrap_or(&self.placeholder)
    }

    /// True until the first successful render
    pub fn is_pristine(&self) -> bool {
        self.slots.is_empty()
    }

    /// Puts every slot back to the placeholder
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// Renders the board as `caption: text` lines
    pub fn to_lines(&self) -> Vec<String> {
        DisplaySlot::all()
            .iter()
            .map(|slot| format!("{:<20} {}", format!("{}:", slot.caption()), self.text(*slot)))
            .collect()
    }
}

/// Headline price line, e.g. `BTC 67345`
///
/// The price is truncated toward zero.
pub fn format_headline(symbol: &str, price: f64) -> String {
    format!("{} {}", symbol, price.trunc() as i64)
}

/// Slot texts for a snapshot, values shown verbatim
pub fn snapshot_texts(current: &CurrentSnapshot) -> [(DisplaySlot, String); 5] {
    [
        (DisplaySlot::MarketCap, current.market_cap.to_string()),
        (DisplaySlot::Volume, current.volume_24h.to_string()),
        (
            DisplaySlot::CirculatingSupply,
            current.circulating_supply.to_string(),
        ),
        (
            DisplaySlot::MaxSupply,
            current
                .max_supply
                .map(|m| m.to_string())
                .unwrap_or_else(|| NO_MAX_SUPPLY_TEXT.to_string()),
        ),
        (
            DisplaySlot::PercentChange24h,
            current.percent_change_24h.to_string(),
        ),
    ]
}

/// Line chart configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartConfig {
    /// Label of the single series
    pub series_label: String,
    /// Force the y-axis to start at zero
    pub begin_at_zero: bool,
    pub line_rgb: (u8, u8, u8),
    pub line_width: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            series_label: CHART_SERIES_LABEL.to_string(),
            begin_at_zero: true,
            line_rgb: CHART_LINE_RGB,
            line_width: CHART_LINE_WIDTH,
        }
    }
}

/// Labels and values handed to a chart widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    /// Builds chart data from a series, labels formatted as UTC date-times
    pub fn from_series(series: &PriceSeries) -> Self {
        let (labels, values) = series
            .points()
            .iter()
            .map(|p| (p.timestamp.format(CHART_LABEL_FORMAT).to_string(), p.price))
            .unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{fixtures::record, PriceSeriesTransformer};

    #[test]
    fn test_headline_truncates() {
        assert_eq!(format_headline("BTC", 67345.99), "BTC 67345");
        assert_eq!(format_headline("BTC", -0.5), "BTC 0");
        assert_eq!(format_headline("ETH", -12.7), "ETH -12");
    }

    #[test]
    fn test_board_starts_at_placeholder_and_replaces_text() {
        let mut board = DisplayBoard::new("...");
        assert!(board.is_pristine());
        assert_eq!(board.text(DisplaySlot::Volume), "...");

        board.set_text(DisplaySlot::Volume, "1");
        board.set_text(DisplaySlot::Volume, "2");
        assert_eq!(board.text(DisplaySlot::Volume), "2");

        board.reset();
        assert_eq!(board.text(DisplaySlot::Volume), "...");
    }

    #[test]
    fn test_snapshot_texts_are_verbatim() {
        let series = PriceSeriesTransformer::default()
            .transform(&[record(300, 30.5)])
            .unwrap();
        let texts = snapshot_texts(series.current());

        assert_eq!(texts[0], (DisplaySlot::MarketCap, "30500".to_string()));
        assert_eq!(texts[3], (DisplaySlot::MaxSupply, "21000000".to_string()));
        assert_eq!(texts[4], (DisplaySlot::PercentChange24h, "-3.05".to_string()));
    }

    #[test]
    fn test_absent_max_supply_text() {
        let mut r = record(1, 1.0);
        r.data.as_mut().unwrap().get_mut("1").unwrap().as_mut().unwrap().max_supply = None;
        let series = PriceSeriesTransformer::default().transform(&[r]).unwrap();

        let texts = snapshot_texts(series.current());
        assert_eq!(texts[3].1, NO_MAX_SUPPLY_TEXT);
    }

    #[test]
    fn test_chart_data_from_series() {
        let series = PriceSeriesTransformer::default()
            .transform(&[record(86_400, 2.0), record(0, 1.0)])
            .unwrap();
        let chart = ChartData::from_series(&series);

        assert_eq!(chart.values, vec![1.0, 2.0]);
        assert_eq!(
            chart.labels,
            vec!["1970-01-01 00:00:00", "1970-01-02 00:00:00"]
        );
    }

    #[test]
    fn test_default_chart_config() {
        let config = ChartConfig::default();
        assert_eq!(config.series_label, "Price ($USD)");
        assert!(config.begin_at_zero);
    }
}
