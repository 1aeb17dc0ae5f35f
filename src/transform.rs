//! Reshapes raw snapshot records into a chartable price series
//!
//! The transformer is pure: it validates every record up front, sorts by
//! timestamp and derives both the series and the current snapshot from the
//! same sorted sequence, so the chart and the summary can never disagree.

use crate::{
    constants::{DEFAULT_ASSET_ID, DEFAULT_CURRENCY},
    error::{FieldDefect, TransformError},
    types::{CurrentSnapshot, Numeric, PricePoint, PriceSeries, Quote, SnapshotRecord},
};
use chrono::{DateTime, Utc};

/// A record after field validation, before ordering
#[derive(Debug, Clone, Copy)]
struct ValidatedRecord {
    timestamp: DateTime<Utc>,
    price: f64,
    market_cap: f64,
    volume_24h: f64,
    circulating_supply: f64,
    max_supply: Option<f64>,
    percent_change_24h: f64,
}

/// Turns snapshot records into a [`PriceSeries`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSeriesTransformer {
    asset_id: String,
    currency: String,
}

impl Default for PriceSeriesTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_ID, DEFAULT_CURRENCY)
    }
}

impl PriceSeriesTransformer {
    /// Creates a transformer reading `data.<asset_id>.quote.<currency>`
    pub fn new(asset_id: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            currency: currency.into(),
        }
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Builds the price series and current snapshot
    ///
    /// # Errors
    /// * `EmptyInput` if `records` is empty
    /// * `MalformedRecord` for the first record (in input order) missing a
    ///   required field; no partial series is returned
    pub fn transform(&self, records: &[SnapshotRecord]) -> Result<PriceSeries, TransformError> {
        if records.is_empty() {
            return Err(TransformError::EmptyInput);
        }

        let mut validated = records
            .iter()
            .enumerate()
            .map(|(index, record)| self.validate(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        // sort_by_key is stable: equal timestamps keep their input order
        validated.sort_by_key(|r| r.timestamp);

        let points = validated
            .iter()
            .map(|r| PricePoint {
                timestamp: r.timestamp,
                price: r.price,
            })
            .collect::<Vec<_>>();

        let last = validated[validated.len() - 1];
        let current = CurrentSnapshot {
            timestamp: last.timestamp,
            market_cap: last.market_cap,
            volume_24h: last.volume_24h,
            circulating_supply: last.circulating_supply,
            max_supply: last.max_supply,
            percent_change_24h: last.percent_change_24h,
        };

        tracing::debug!(
            count = points.len(),
            latest = %current.timestamp,
            "Transformed snapshot records into price series"
        );

        Ok(PriceSeries::new(points, current))
    }

    fn validate(
        &self,
        index: usize,
        record: &SnapshotRecord,
    ) -> Result<ValidatedRecord, TransformError> {
        let secs = record
            .timestamp
            .as_ref()
            .ok_or(FieldDefect::Missing)
            .and_then(Numeric::as_epoch_secs)
            .map_err(|defect| TransformError::malformed(index, None, "timestamp", defect))?;
        let timestamp = DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| {
            TransformError::malformed(index, Some(secs), "timestamp", FieldDefect::OutOfRange)
        })?;

        let fail = |field: String, defect: FieldDefect| {
            TransformError::malformed(index, Some(secs), field, defect)
        };

        let entry_path = format!("data.{}", self.asset_id);
        let entry = record
            .data
            .as_ref()
            .and_then(|data| data.get(&self.asset_id))
            .and_then(Option::as_ref)
            .ok_or_else(|| fail(entry_path.clone(), FieldDefect::Missing))?;

        let quote_path = format!("{}.quote.{}", entry_path, self.currency);
        let quote: &Quote = entry
            .quote
            .as_ref()
            .and_then(|quotes| quotes.get(&self.currency))
            .and_then(Option::as_ref)
            .ok_or_else(|| fail(quote_path.clone(), FieldDefect::Missing))?;

        let required = |value: &Option<Numeric>, path: String| -> Result<f64, TransformError> {
            match value {
                Some(n) => n.as_f64().map_err(|defect| fail(path, defect)),
                None => Err(fail(path, FieldDefect::Missing)),
            }
        };

        let price = required(&quote.price, format!("{}.price", quote_path))?;
        let market_cap = required(&quote.market_cap, format!("{}.market_cap", quote_path))?;
        let volume_24h = required(&quote.volume_24h, format!("{}.volume_24h", quote_path))?;
        let percent_change_24h = required(
            &quote.percent_change_24h,
            format!("{}.percent_change_24h", quote_path),
        )?;
        let circulating_supply = required(
            &entry.circulating_supply,
            format!("{}.circulating_supply", entry_path),
        )?;
        let max_supply = entry
            .max_supply
            .as_ref()
            .map(|n| {
                n.as_f64()
                    .map_err(|defect| fail(format!("{}.max_supply", entry_path), defect))
            })
            .transpose()?;

        Ok(ValidatedRecord {
            timestamp,
            price,
            market_cap,
            volume_24h,
            circulating_supply,
            max_supply,
            percent_change_24h,
        })
    }
}
