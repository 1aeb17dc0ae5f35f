//! Constants for the price history dashboard
//!
//! Compile-time defaults for every setting. `DashboardConfig::from_env`
//! and the CLI override them at runtime.

/// Endpoint serving the stored snapshot history as a JSON array
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/fetch-data";

/// HTTP request timeout when fetching snapshots (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent for HTTP requests
pub const USER_AGENT: &str = "price-history-sdk/0.1.0";

/// Key of the asset entry under `data` (CoinMarketCap id, 1 = Bitcoin)
pub const DEFAULT_ASSET_ID: &str = "1";

/// Ticker shown in the headline price line
pub const DEFAULT_SYMBOL: &str = "BTC";

/// Key of the quote entry under `quote`
pub const DEFAULT_CURRENCY: &str = "USD";

/// Text shown in a display slot before any successful render
pub const DEFAULT_PLACEHOLDER: &str = "--";

/// Text shown for the max supply of assets without a supply cap
pub const NO_MAX_SUPPLY_TEXT: &str = "N/A";

/// Format of the chart's x-axis labels
pub const CHART_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Label of the single chart series
pub const CHART_SERIES_LABEL: &str = "Price ($USD)";

/// Default chart image size in pixels
pub const DEFAULT_CHART_WIDTH: u32 = 1024;
pub const DEFAULT_CHART_HEIGHT: u32 = 576;

/// Line color of the chart series (#007bff)
pub const CHART_LINE_RGB: (u8, u8, u8) = (0x00, 0x7b, 0xff);

/// Stroke width of the chart series
pub const CHART_LINE_WIDTH: u32 = 4;

/// Environment variables read by `DashboardConfig::from_env`
pub const ENV_ENDPOINT: &str = "PRICE_DASHBOARD_ENDPOINT";
pub const ENV_ASSET_ID: &str = "PRICE_DASHBOARD_ASSET_ID";
pub const ENV_SYMBOL: &str = "PRICE_DASHBOARD_SYMBOL";
pub const ENV_CURRENCY: &str = "PRICE_DASHBOARD_CURRENCY";
pub const ENV_PLACEHOLDER: &str = "PRICE_DASHBOARD_PLACEHOLDER";
