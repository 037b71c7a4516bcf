//! Order — a sized, directional execution instruction.

use crate::direction::{Directioner, OrderDirection, Quantifier};
use crate::error::ValidationError;
use crate::header::{EventHandler, EventHeader};
use crate::policy::ValidationPolicy;
use crate::signal::Signal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the execution stage should price the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
    Limit,
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "market" => Ok(Self::Market),
            "limit" => Ok(Self::Limit),
            _ => {
                tracing::debug!(value = s, "rejected unknown order type");
                Err(ValidationError::UnknownOrderType(s.to_owned()))
            }
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => f.write_str("market"),
            Self::Limit => f.write_str("limit"),
        }
    }
}

/// Capability of an execution request.
pub trait OrderEvent: EventHandler + Directioner<Direction = OrderDirection> + Quantifier {}

/// An execution instruction.
///
/// `limit` is only meaningful for `OrderType::Limit`. The pair is not cross-checked:
/// a market order may carry a non-zero limit and the execution stage ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    header: EventHeader,
    direction: OrderDirection,
    qty: i64,
    pub order_type: OrderType,
    pub limit: f64,
    policy: ValidationPolicy,
}

#[derive(Deserialize)]
struct OrderRecord {
    header: EventHeader,
    direction: OrderDirection,
    qty: i64,
    order_type: OrderType,
    limit: f64,
    #[serde(default)]
    policy: ValidationPolicy,
}

impl TryFrom<OrderRecord> for Order {
    type Error = ValidationError;

    fn try_from(r: OrderRecord) -> Result<Self, Self::Error> {
        Self::with_policy(r.header, r.direction, r.qty, r.order_type, r.limit, r.policy)
    }
}

impl Order {
    /// Market order under the strict policy.
    pub fn market(
        header: EventHeader,
        direction: OrderDirection,
        qty: i64,
    ) -> Result<Self, ValidationError> {
        Self::new(header, direction, qty, OrderType::Market, 0.0)
    }

    /// Limit order under the strict policy.
    pub fn limit(
        header: EventHeader,
        direction: OrderDirection,
        qty: i64,
        limit: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(header, direction, qty, OrderType::Limit, limit)
    }

    pub fn new(
        header: EventHeader,
        direction: OrderDirection,
        qty: i64,
        order_type: OrderType,
        limit: f64,
    ) -> Result<Self, ValidationError> {
        Self::with_policy(header, direction, qty, order_type, limit, ValidationPolicy::default())
    }

    pub fn with_policy(
        header: EventHeader,
        direction: OrderDirection,
        qty: i64,
        order_type: OrderType,
        limit: f64,
        policy: ValidationPolicy,
    ) -> Result<Self, ValidationError> {
        let qty = policy.check_qty(header.symbol(), qty)?;
        Ok(Self { header, direction, qty, order_type, limit, policy })
    }

    /// Size a signal: same time and symbol, direction converted to the order vocabulary.
    pub fn from_signal(
        signal: &Signal,
        qty: i64,
        order_type: OrderType,
        limit: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(signal.header().clone(), signal.direction().into(), qty, order_type, limit)
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Re-run the quantity check under the order's own policy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.policy.check_qty(self.header.symbol(), self.qty).map(|_| ())
    }
}

impl EventHandler for Order {
    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EventHeader {
        &mut self.header
    }
}

impl Directioner for Order {
    type Direction = OrderDirection;

    fn direction(&self) -> OrderDirection {
        self.direction
    }

    fn set_direction(&mut self, direction: OrderDirection) {
        self.direction = direction;
    }
}

impl Quantifier for Order {
    fn qty(&self) -> i64 {
        self.qty
    }

    fn set_qty(&mut self, qty: i64) -> Result<(), ValidationError> {
        self.qty = self.policy.check_qty(self.header.symbol(), qty)?;
        Ok(())
    }
}

impl OrderEvent for Order {}
