//! Error types for event construction and policy loading.

use thiserror::Error;

/// Rejection raised by a constructor, setter or parse of an event field.
///
/// Always local: the producing stage decides whether to retry with corrected inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unknown {kind} direction: {value:?}")]
    UnknownDirection { kind: &'static str, value: String },

    #[error("unknown order type: {0:?}")]
    UnknownOrderType(String),

    #[error("quantity must not be negative (got {0})")]
    NegativeQuantity(i64),

    #[error("crossed quote: bid {bid} above ask {ask}")]
    CrossedQuote { bid: f64, ask: f64 },

    #[error("{field} must be finite (got {value})")]
    NonFinitePrice { field: &'static str, value: f64 },
}

/// Failure to load a [`ValidationPolicy`](crate::policy::ValidationPolicy).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse policy TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize policy TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}
