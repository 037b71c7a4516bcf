//! Shared identity of every event: when it happened and which instrument it concerns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp and symbol carried by every event variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventHeader {
    timestamp: DateTime<Utc>,
    symbol: String,
}

impl EventHeader {
    pub fn new(timestamp: DateTime<Utc>, symbol: impl Into<String>) -> Self {
        Self { timestamp, symbol: symbol.into() }
    }
}

/// Minimal capability needed for chronological ordering and symbol routing.
///
/// The setters exist so the producing stage can finish an event before publishing it.
/// Nothing here stops a consumer from calling them afterwards; that rule belongs to
/// the pipeline holding the event.
pub trait EventHandler {
    fn header(&self) -> &EventHeader;

    fn header_mut(&mut self) -> &mut EventHeader;

    fn time(&self) -> DateTime<Utc> {
        self.header().timestamp
    }

    fn set_time(&mut self, timestamp: DateTime<Utc>) {
        self.header_mut().timestamp = timestamp;
    }

    fn symbol(&self) -> &str {
        &self.header().symbol
    }

    fn set_symbol(&mut self, symbol: &str) {
        self.header_mut().symbol = symbol.to_owned();
    }
}

impl EventHandler for EventHeader {
    fn header(&self) -> &EventHeader {
        self
    }

    fn header_mut(&mut self) -> &mut EventHeader {
        self
    }
}
