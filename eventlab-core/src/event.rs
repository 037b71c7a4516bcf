//! `Event` — one type for every message in the pipeline.
//!
//! A scheduler holds `Vec<Event>` (or a heap of them) and orders/routes through
//! [`EventHandler`] alone; stages that care about a kind match on it.

use crate::fill::Fill;
use crate::header::{EventHandler, EventHeader};
use crate::market::{Bar, DataEventHandler, MarketEvent, Tick};
use crate::order::Order;
use crate::signal::Signal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Bar,
    Tick,
    Signal,
    Order,
    Fill,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bar => "bar",
            Self::Tick => "tick",
            Self::Signal => "signal",
            Self::Order => "order",
            Self::Fill => "fill",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Bar(Bar),
    Tick(Tick),
    Signal(Signal),
    Order(Order),
    Fill(Fill),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Bar(_) => EventKind::Bar,
            Self::Tick(_) => EventKind::Tick,
            Self::Signal(_) => EventKind::Signal,
            Self::Order(_) => EventKind::Order,
            Self::Fill(_) => EventKind::Fill,
        }
    }

    /// The market-data view, if this is a bar or a tick.
    pub fn as_data(&self) -> Option<&dyn DataEventHandler> {
        match self {
            Self::Bar(bar) => Some(bar),
            Self::Tick(tick) => Some(tick),
            _ => None,
        }
    }

    pub fn as_data_mut(&mut self) -> Option<&mut dyn DataEventHandler> {
        match self {
            Self::Bar(bar) => Some(bar),
            Self::Tick(tick) => Some(tick),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn EventHandler {
        match self {
            Self::Bar(e) => e,
            Self::Tick(e) => e,
            Self::Signal(e) => e,
            Self::Order(e) => e,
            Self::Fill(e) => e,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn EventHandler {
        match self {
            Self::Bar(e) => e,
            Self::Tick(e) => e,
            Self::Signal(e) => e,
            Self::Order(e) => e,
            Self::Fill(e) => e,
        }
    }
}

impl EventHandler for Event {
    fn header(&self) -> &EventHeader {
        self.inner().header()
    }

    fn header_mut(&mut self) -> &mut EventHeader {
        self.inner_mut().header_mut()
    }
}

impl From<MarketEvent> for Event {
    fn from(event: MarketEvent) -> Self {
        match event {
            MarketEvent::Bar(bar) => Self::Bar(bar),
            MarketEvent::Tick(tick) => Self::Tick(tick),
        }
    }
}

impl From<Bar> for Event {
    fn from(bar: Bar) -> Self {
        Self::Bar(bar)
    }
}

impl From<Tick> for Event {
    fn from(tick: Tick) -> Self {
        Self::Tick(tick)
    }
}

impl From<Signal> for Event {
    fn from(signal: Signal) -> Self {
        Self::Signal(signal)
    }
}

impl From<Order> for Event {
    fn from(order: Order) -> Self {
        Self::Order(order)
    }
}

impl From<Fill> for Event {
    fn from(fill: Fill) -> Self {
        Self::Fill(fill)
    }
}
