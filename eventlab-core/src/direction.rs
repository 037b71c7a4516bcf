//! Per-stage direction vocabularies and the capabilities built on them.
//!
//! Each pipeline stage speaks its own vocabulary:
//! - strategy → `SignalDirection` (`long` / `short`)
//! - risk/sizing → `OrderDirection` (`buy` / `sell`)
//! - execution → `FillDirection` (`BOT` / `SLD`)
//!
//! Conversions between stages are explicit `From` impls. The legacy strings are
//! accepted through `FromStr` and produced by `Display`; anything else is a
//! `ValidationError::UnknownDirection`.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Directional intent of a trading decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    Long,
    Short,
}

/// Side of an execution instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Buy,
    Sell,
}

/// Side of a completed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillDirection {
    #[serde(rename = "BOT")]
    Bought,
    #[serde(rename = "SLD")]
    Sold,
}

impl SignalDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }
}

impl OrderDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl FillDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bought => "BOT",
            Self::Sold => "SLD",
        }
    }

    /// +1 for bought, -1 for sold.
    pub fn sign(self) -> f64 {
        match self {
            Self::Bought => 1.0,
            Self::Sold => -1.0,
        }
    }
}

fn unknown(kind: &'static str, value: &str) -> ValidationError {
    tracing::debug!(kind, value, "rejected unknown direction");
    ValidationError::UnknownDirection { kind, value: value.to_owned() }
}

impl FromStr for SignalDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            _ => Err(unknown("signal", s)),
        }
    }
}

impl FromStr for OrderDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(unknown("order", s)),
        }
    }
}

impl FromStr for FillDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BOT" => Ok(Self::Bought),
            "SLD" => Ok(Self::Sold),
            _ => Err(unknown("fill", s)),
        }
    }
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FillDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy → sizing boundary: going long means buying.
impl From<SignalDirection> for OrderDirection {
    fn from(direction: SignalDirection) -> Self {
        match direction {
            SignalDirection::Long => Self::Buy,
            SignalDirection::Short => Self::Sell,
        }
    }
}

/// Sizing → execution boundary.
impl From<OrderDirection> for FillDirection {
    fn from(direction: OrderDirection) -> Self {
        match direction {
            OrderDirection::Buy => Self::Bought,
            OrderDirection::Sell => Self::Sold,
        }
    }
}

/// Events that carry a direction in their stage's vocabulary.
pub trait Directioner {
    type Direction: Copy;

    fn direction(&self) -> Self::Direction;

    fn set_direction(&mut self, direction: Self::Direction);
}

/// Events that carry an integer size.
pub trait Quantifier {
    fn qty(&self) -> i64;

    /// Fails with `NegativeQuantity` unless the event's policy allows signed sizes.
    fn set_qty(&mut self, qty: i64) -> Result<(), ValidationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legacy_vocabularies() {
        assert_eq!("long".parse::<SignalDirection>().unwrap(), SignalDirection::Long);
        assert_eq!("SHORT".parse::<SignalDirection>().unwrap(), SignalDirection::Short);
        assert_eq!("buy".parse::<OrderDirection>().unwrap(), OrderDirection::Buy);
        assert_eq!(" Sell ".parse::<OrderDirection>().unwrap(), OrderDirection::Sell);
        assert_eq!("BOT".parse::<FillDirection>().unwrap(), FillDirection::Bought);
        assert_eq!("sld".parse::<FillDirection>().unwrap(), FillDirection::Sold);
    }

    #[test]
    fn vocabularies_do_not_cross() {
        assert!("buy".parse::<SignalDirection>().is_err());
        assert!("long".parse::<OrderDirection>().is_err());
        assert!("sell".parse::<FillDirection>().is_err());
    }

    #[test]
    fn unknown_fill_direction_rejected() {
        let err = "unknown".parse::<FillDirection>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownDirection { kind: "fill", value: "unknown".into() }
        );
    }

    #[test]
    fn display_matches_parse() {
        for d in [FillDirection::Bought, FillDirection::Sold] {
            assert_eq!(d.to_string().parse::<FillDirection>().unwrap(), d);
        }
        for d in [OrderDirection::Buy, OrderDirection::Sell] {
            assert_eq!(d.to_string().parse::<OrderDirection>().unwrap(), d);
        }
        for d in [SignalDirection::Long, SignalDirection::Short] {
            assert_eq!(d.to_string().parse::<SignalDirection>().unwrap(), d);
        }
    }

    #[test]
    fn stage_conversions() {
        assert_eq!(OrderDirection::from(SignalDirection::Long), OrderDirection::Buy);
        assert_eq!(OrderDirection::from(SignalDirection::Short), OrderDirection::Sell);
        assert_eq!(FillDirection::from(OrderDirection::Buy), FillDirection::Bought);
        assert_eq!(FillDirection::from(OrderDirection::Sell), FillDirection::Sold);
    }

    #[test]
    fn serializes_with_legacy_tags() {
        assert_eq!(serde_json::to_string(&FillDirection::Bought).unwrap(), "\"BOT\"");
        assert_eq!(serde_json::to_string(&OrderDirection::Sell).unwrap(), "\"sell\"");
        let d: SignalDirection = serde_json::from_str("\"short\"").unwrap();
        assert_eq!(d, SignalDirection::Short);
    }
}
