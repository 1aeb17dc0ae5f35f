//! Runtime configuration
//!
//! Starts from the compile-time defaults in `constants` and overlays
//! environment variables. The CLI applies its own flags on top.

use crate::{
    constants::{
        DEFAULT_ASSET_ID, DEFAULT_CURRENCY, DEFAULT_ENDPOINT, DEFAULT_PLACEHOLDER, DEFAULT_SYMBOL,
        ENV_ASSET_ID, ENV_CURRENCY, ENV_ENDPOINT, ENV_PLACEHOLDER, ENV_SYMBOL,
    },
    display::DisplayBoard,
    transform::PriceSeriesTransformer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// History endpoint URL
    pub endpoint: String,
    /// Key of the asset under each snapshot's `data`
    pub asset_id: String,
    /// Ticker used in the headline
    pub symbol: String,
    /// Quote currency key
    pub currency: String,
    /// Slot text before the first successful render
    pub placeholder: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            asset_id: DEFAULT_ASSET_ID.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Defaults overlaid with `PRICE_DASHBOARD_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`; empty values are ignored
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let fields: [(&str, &mut String); 5] = [
            (ENV_ENDPOINT, &mut config.endpoint),
            (ENV_ASSET_ID, &mut config.asset_id),
            (ENV_SYMBOL, &mut config.symbol),
            (ENV_CURRENCY, &mut config.currency),
            (ENV_PLACEHOLDER, &mut config.placeholder),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *field = value;
            }
        }
        config
    }

    pub fn transformer(&self) -> PriceSeriesTransformer {
        PriceSeriesTransformer::new(&self.asset_id, &self.currency)
    }

    pub fn board(&self) -> DisplayBoard {
        DisplayBoard::new(&self.placeholder)
    }
}
