//! Types for the price history dashboard

use crate::error::FieldDefect;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A numeric leaf of a snapshot record
///
/// The history endpoint serialises stored decimals either as JSON numbers
/// or as numeric strings, so both are accepted here and validated later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Numeric {
    /// Reads the value as a finite float
    pub fn as_f64(&self) -> Result<f64, FieldDefect> {
        match self {
            Numeric::Number(n) if n.is_finite() => Ok(*n),
            Numeric::Number(n) => Err(FieldDefect::NotNumeric(n.to_string())),
            Numeric::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(n),
                _ => Err(FieldDefect::NotNumeric(s.clone())),
            },
            Numeric::Other(v) => Err(FieldDefect::NotNumeric(v.to_string())),
        }
    }

    /// Reads the value as whole seconds since the Unix epoch
    ///
    /// Fractional seconds are truncated.
    pub fn as_epoch_secs(&self) -> Result<i64, FieldDefect> {
        if let Numeric::Text(s) = self {
            if let Ok(secs) = s.trim().parse::<i64>() {
                return Ok(secs);
            }
        }

        let secs = self.as_f64()?.trunc();
        if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
            return Err(FieldDefect::OutOfRange);
        }
        Ok(secs as i64)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

/// Market data for one currency under an asset entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: Option<Numeric>,
    pub market_cap: Option<Numeric>,
    pub volume_24h: Option<Numeric>,
    pub percent_change_24h: Option<Numeric>,
}

/// One asset's entry under a snapshot's `data` map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub circulating_supply: Option<Numeric>,
    /// Absent or null for assets without a supply cap
    pub max_supply: Option<Numeric>,
    /// Entries may be null; read as missing for that record only
    pub quote: Option<HashMap<String, Option<Quote>>>,
}

/// One fetched observation of an asset's price and market metrics
///
/// Fields are kept optional so that a record missing data can be reported
/// by name during transformation instead of failing the whole parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Seconds since epoch, as a number or numeric string
    pub timestamp: Option<Numeric>,
    /// Entries may be null; read as missing for that record only
    pub data: Option<HashMap<String, Option<AssetEntry>>>,
}

/// A (instant, price) pair used for charting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Market metrics of the most recent snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentSnapshot {
    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub circulating_supply: f64,
    /// None for assets without a supply cap
    pub max_supply: Option<f64>,
    /// May be negative
    pub percent_change_24h: f64,
}

/// Time-ordered price series plus the summary of its latest snapshot
///
/// Only built by the transformer, which guarantees `points` is non-empty,
/// sorted ascending and that `current` comes from its last element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
    current: CurrentSnapshot,
}

impl PriceSeries {
    pub(crate) fn new(points: Vec<PricePoint>, current: CurrentSnapshot) -> Self {
        debug_assert!(!points.is_empty());
        Self { points, current }
    }

    /// Points sorted ascending by timestamp
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Summary of the chronologically latest snapshot
    pub fn current(&self) -> &CurrentSnapshot {
        &self.current
    }

    /// The chronologically latest point
    pub fn latest(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
