//! Fill — the record of a completed trade and its transaction costs.
//!
//! Value accounting:
//! - `value = qty * price`, direction-independent.
//! - `net_value = value + cost` when bought (cost adds to the outlay),
//!   `value - cost` when sold (cost reduces the proceeds).
//!
//! `FillDirection` is closed, so there is no fallback branch: a direction string
//! other than `BOT`/`SLD` is rejected when parsed and never reaches `net_value`.

use crate::direction::{Directioner, FillDirection, Quantifier};
use crate::error::ValidationError;
use crate::header::{EventHandler, EventHeader};
use crate::order::Order;
use crate::policy::{check_finite, ValidationPolicy};
use serde::{Deserialize, Serialize};

/// Capability of an execution result.
pub trait FillEvent: EventHandler + Directioner<Direction = FillDirection> + Quantifier {
    fn price(&self) -> f64;

    fn commission(&self) -> f64;

    fn exchange_fee(&self) -> f64;

    /// Total transaction cost used by `net_value`.
    fn cost(&self) -> f64;

    fn value(&self) -> f64 {
        self.qty() as f64 * self.price()
    }

    fn net_value(&self) -> f64 {
        self.value() + self.direction().sign() * self.cost()
    }
}

/// A completed trade.
///
/// `cost` is expected to already include commission and exchange fee, but it is
/// set independently; [`Fill::with_aggregated_cost`] derives it from the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FillRecord")]
pub struct Fill {
    header: EventHeader,
    pub exchange: String,
    direction: FillDirection,
    qty: i64,
    price: f64,
    commission: f64,
    exchange_fee: f64,
    cost: f64,
    policy: ValidationPolicy,
}

#[derive(Deserialize)]
struct FillRecord {
    header: EventHeader,
    exchange: String,
    direction: FillDirection,
    qty: i64,
    price: f64,
    #[serde(default)]
    commission: f64,
    #[serde(default)]
    exchange_fee: f64,
    #[serde(default)]
    cost: f64,
    #[serde(default)]
    policy: ValidationPolicy,
}

impl TryFrom<FillRecord> for Fill {
    type Error = ValidationError;

    fn try_from(r: FillRecord) -> Result<Self, Self::Error> {
        Self::with_policy(r.header, r.exchange, r.direction, r.qty, r.price, r.policy)?
            .with_commission(r.commission)?
            .with_exchange_fee(r.exchange_fee)?
            .with_cost(r.cost)
    }
}

impl Fill {
    /// Cost-free fill under the strict policy.
    pub fn new(
        header: EventHeader,
        exchange: impl Into<String>,
        direction: FillDirection,
        qty: i64,
        price: f64,
    ) -> Result<Self, ValidationError> {
        Self::with_policy(header, exchange, direction, qty, price, ValidationPolicy::default())
    }

    pub fn with_policy(
        header: EventHeader,
        exchange: impl Into<String>,
        direction: FillDirection,
        qty: i64,
        price: f64,
        policy: ValidationPolicy,
    ) -> Result<Self, ValidationError> {
        let qty = policy.check_qty(header.symbol(), qty)?;
        let price = check_finite(header.symbol(), "price", price)?;
        Ok(Self {
            header,
            exchange: exchange.into(),
            direction,
            qty,
            price,
            commission: 0.0,
            exchange_fee: 0.0,
            cost: 0.0,
            policy,
        })
    }

    /// Execute an order in full at `price`: same time, symbol and size,
    /// direction converted to the fill vocabulary. Costs start at zero and the
    /// order's validation policy carries over.
    pub fn from_order(
        order: &Order,
        exchange: impl Into<String>,
        price: f64,
    ) -> Result<Self, ValidationError> {
        Self::with_policy(
            order.header().clone(),
            exchange,
            order.direction().into(),
            order.qty(),
            price,
            order.policy(),
        )
    }

    pub fn with_commission(mut self, commission: f64) -> Result<Self, ValidationError> {
        self.commission = check_finite(self.header.symbol(), "commission", commission)?;
        Ok(self)
    }

    pub fn with_exchange_fee(mut self, exchange_fee: f64) -> Result<Self, ValidationError> {
        self.exchange_fee = check_finite(self.header.symbol(), "exchange_fee", exchange_fee)?;
        Ok(self)
    }

    pub fn with_cost(mut self, cost: f64) -> Result<Self, ValidationError> {
        self.cost = check_finite(self.header.symbol(), "cost", cost)?;
        Ok(self)
    }

    /// Set `cost` to `commission + exchange_fee`.
    pub fn with_aggregated_cost(self) -> Result<Self, ValidationError> {
        let cost = self.commission + self.exchange_fee;
        self.with_cost(cost)
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Re-run the quantity and money checks under the fill's own policy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let symbol = self.header.symbol();
        self.policy.check_qty(symbol, self.qty)?;
        check_finite(symbol, "price", self.price)?;
        check_finite(symbol, "commission", self.commission)?;
        check_finite(symbol, "exchange_fee", self.exchange_fee)?;
        check_finite(symbol, "cost", self.cost)?;
        Ok(())
    }
}

impl EventHandler for Fill {
    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EventHeader {
        &mut self.header
    }
}

impl Directioner for Fill {
    type Direction = FillDirection;

    fn direction(&self) -> FillDirection {
        self.direction
    }

    fn set_direction(&mut self, direction: FillDirection) {
        self.direction = direction;
    }
}

impl Quantifier for Fill {
    fn qty(&self) -> i64 {
        self.qty
    }

    fn set_qty(&mut self, qty: i64) -> Result<(), ValidationError> {
        self.qty = self.policy.check_qty(self.header.symbol(), qty)?;
        Ok(())
    }
}

impl FillEvent for Fill {
    fn price(&self) -> f64 {
        self.price
    }

    fn commission(&self) -> f64 {
        self.commission
    }

    fn exchange_fee(&self) -> f64 {
        self.exchange_fee
    }

    fn cost(&self) -> f64 {
        self.cost
    }
}
