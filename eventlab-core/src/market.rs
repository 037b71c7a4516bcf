//! Market-data events — bars and ticks, and the capability they share.
//!
//! Both kinds carry an open [`Metrics`] map that feed-processing stages use to attach
//! indicators (moving averages, ATR, ...). This crate never reads or writes it.

use crate::error::ValidationError;
use crate::header::{EventHandler, EventHeader};
use crate::policy::ValidationPolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Auxiliary named values attached to a data event. Keys are unique, order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics(HashMap<String, f64>);

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<HashMap<String, f64>> for Metrics {
    fn from(map: HashMap<String, f64>) -> Self {
        Self(map)
    }
}

/// A market-data event: something with a single representative price.
pub trait DataEventHandler: EventHandler {
    /// The kind-specific representative price.
    fn latest_price(&self) -> f64;

    fn metrics(&self) -> &Metrics;

    fn metrics_mut(&mut self) -> &mut Metrics;
}

/// OHLCV bar for one sampling interval of one instrument.
///
/// `adj_close` travels with the bar for corporate-action handling downstream;
/// `latest_price` uses the raw `close`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub header: EventHeader,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: f64,
    pub volume: i64,
    #[serde(default)]
    pub metrics: Metrics,
}

impl EventHandler for Bar {
    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EventHeader {
        &mut self.header
    }
}

impl DataEventHandler for Bar {
    fn latest_price(&self) -> f64 {
        self.close
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn metrics_mut(&mut self) -> &mut Metrics {
        &mut self.metrics
    }
}

/// Bid/ask quote snapshot.
///
/// Bid and ask are private so every change passes through the quote check,
/// deserialization included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TickRecord")]
pub struct Tick {
    header: EventHeader,
    bid: f64,
    ask: f64,
    pub metrics: Metrics,
    policy: ValidationPolicy,
}

#[derive(Deserialize)]
struct TickRecord {
    header: EventHeader,
    bid: f64,
    ask: f64,
    #[serde(default)]
    metrics: Metrics,
    #[serde(default)]
    policy: ValidationPolicy,
}

impl TryFrom<TickRecord> for Tick {
    type Error = ValidationError;

    fn try_from(record: TickRecord) -> Result<Self, Self::Error> {
        let mut tick = Self::with_policy(record.header, record.bid, record.ask, record.policy)?;
        tick.metrics = record.metrics;
        Ok(tick)
    }
}

impl Tick {
    /// Build a tick under the strict policy (bid must not exceed ask).
    pub fn new(header: EventHeader, bid: f64, ask: f64) -> Result<Self, ValidationError> {
        Self::with_policy(header, bid, ask, ValidationPolicy::default())
    }

    pub fn with_policy(
        header: EventHeader,
        bid: f64,
        ask: f64,
        policy: ValidationPolicy,
    ) -> Result<Self, ValidationError> {
        policy.check_quote(header.symbol(), bid, ask)?;
        Ok(Self { header, bid, ask, metrics: Metrics::default(), policy })
    }

    pub fn bid(&self) -> f64 {
        self.bid
    }

    pub fn ask(&self) -> f64 {
        self.ask
    }

    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    /// Replace both sides at once; on error the tick is unchanged.
    pub fn set_quote(&mut self, bid: f64, ask: f64) -> Result<(), ValidationError> {
        self.policy.check_quote(self.header.symbol(), bid, ask)?;
        self.bid = bid;
        self.ask = ask;
        Ok(())
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Re-run the quote check under the tick's own policy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.policy.check_quote(self.header.symbol(), self.bid, self.ask)
    }
}

impl EventHandler for Tick {
    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EventHeader {
        &mut self.header
    }
}

impl DataEventHandler for Tick {
    fn latest_price(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn metrics_mut(&mut self) -> &mut Metrics {
        &mut self.metrics
    }
}

/// Either kind of market data, for feeds that mix bars and ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarketEvent {
    Bar(Bar),
    Tick(Tick),
}

impl MarketEvent {
    fn inner(&self) -> &dyn DataEventHandler {
        match self {
            Self::Bar(bar) => bar,
            Self::Tick(tick) => tick,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn DataEventHandler {
        match self {
            Self::Bar(bar) => bar,
            Self::Tick(tick) => tick,
        }
    }
}

impl EventHandler for MarketEvent {
    fn header(&self) -> &EventHeader {
        self.inner().header()
    }

    fn header_mut(&mut self) -> &mut EventHeader {
        self.inner_mut().header_mut()
    }
}

impl DataEventHandler for MarketEvent {
    fn latest_price(&self) -> f64 {
        self.inner().latest_price()
    }

    fn metrics(&self) -> &Metrics {
        self.inner().metrics()
    }

    fn metrics_mut(&mut self) -> &mut Metrics {
        self.inner_mut().metrics_mut()
    }
}

impl From<Bar> for MarketEvent {
    fn from(bar: Bar) -> Self {
        Self::Bar(bar)
    }
}

impl From<Tick> for MarketEvent {
    fn from(tick: Tick) -> Self {
        Self::Tick(tick)
    }
}
