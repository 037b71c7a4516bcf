//! Signal — a strategy's directional decision, with no size and no price.
//!
//! Sizing is left to the risk stage, which turns a signal into an [`Order`](crate::order::Order).

use crate::direction::{Directioner, SignalDirection};
use crate::header::{EventHandler, EventHeader};
use serde::{Deserialize, Serialize};

/// Capability of a decision event.
pub trait SignalEvent: EventHandler + Directioner<Direction = SignalDirection> {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    header: EventHeader,
    direction: SignalDirection,
}

impl Signal {
    pub fn new(header: EventHeader, direction: SignalDirection) -> Self {
        Self { header, direction }
    }
}

impl EventHandler for Signal {
    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EventHeader {
        &mut self.header
    }
}

impl Directioner for Signal {
    type Direction = SignalDirection;

    fn direction(&self) -> SignalDirection {
        self.direction
    }

    fn set_direction(&mut self, direction: SignalDirection) {
        self.direction = direction;
    }
}

impl SignalEvent for Signal {}
