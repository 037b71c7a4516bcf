//! Validation policy — which borderline inputs event constructors accept.
//!
//! Stored as a small TOML document. Missing keys fall back to the strict default.

use crate::error::{ConfigError, ValidationError};
use serde::{Deserialize, Serialize};

/// Knobs for the two checks that are policy decisions rather than hard rules.
///
/// Unknown direction strings and non-finite prices are always rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Accept signed quantities on orders and fills.
    pub allow_negative_quantity: bool,
    /// Accept ticks whose bid is above the ask.
    pub allow_crossed_quotes: bool,
}

impl ValidationPolicy {
    /// Strict policy: reject negative quantities and crossed quotes.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Accept everything the legacy string-typed events accepted.
    pub fn permissive() -> Self {
        Self { allow_negative_quantity: true, allow_crossed_quotes: true }
    }

    /// Parse a policy from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the policy as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub(crate) fn check_qty(&self, symbol: &str, qty: i64) -> Result<i64, ValidationError> {
        if qty < 0 && !self.allow_negative_quantity {
            tracing::debug!(symbol, qty, "rejected negative quantity");
            return Err(ValidationError::NegativeQuantity(qty));
        }
        Ok(qty)
    }

    pub(crate) fn check_quote(&self, symbol: &str, bid: f64, ask: f64) -> Result<(), ValidationError> {
        check_finite(symbol, "bid", bid)?;
        check_finite(symbol, "ask", ask)?;
        if bid > ask && !self.allow_crossed_quotes {
            tracing::debug!(symbol, bid, ask, "rejected crossed quote");
            return Err(ValidationError::CrossedQuote { bid, ask });
        }
        Ok(())
    }
}

pub(crate) fn check_finite(
    symbol: &str,
    field: &'static str,
    value: f64,
) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        tracing::debug!(symbol, field, value, "rejected non-finite value");
        return Err(ValidationError::NonFinitePrice { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy, ValidationPolicy::strict());
        assert!(policy.check_qty("SPY", -1).is_err());
        assert!(policy.check_quote("SPY", 100.5, 100.0).is_err());
    }

    #[test]
    fn permissive_accepts_legacy_inputs() {
        let policy = ValidationPolicy::permissive();
        assert_eq!(policy.check_qty("SPY", -5).unwrap(), -5);
        assert!(policy.check_quote("SPY", 100.5, 100.0).is_ok());
    }

    #[test]
    fn non_finite_quote_rejected_under_any_policy() {
        let policy = ValidationPolicy::permissive();
        let err = policy.check_quote("SPY", f64::NAN, 100.0).unwrap_err();
        assert!(matches!(err, ValidationError::NonFinitePrice { field: "bid", .. }));
        let err = policy.check_quote("SPY", 100.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, ValidationError::NonFinitePrice { field: "ask", .. }));
    }

    #[test]
    fn rejection_log_names_the_symbol() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl Write for Capture {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let policy = ValidationPolicy::strict();
            assert!(policy.check_qty("NVDA", -7).is_err());
            assert!(policy.check_quote("AMD", 10.5, 10.0).is_err());
        });

        let out = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("rejected negative quantity"));
        assert!(out.contains("NVDA"));
        assert!(out.contains("rejected crossed quote"));
        assert!(out.contains("AMD"));
    }

    #[test]
    fn parses_partial_toml() {
        let policy = ValidationPolicy::from_toml("allow_crossed_quotes = true\n").unwrap();
        assert!(policy.allow_crossed_quotes);
        assert!(!policy.allow_negative_quantity);
    }

    #[test]
    fn empty_toml_is_strict() {
        assert_eq!(ValidationPolicy::from_toml("").unwrap(), ValidationPolicy::strict());
    }

    #[test]
    fn toml_roundtrip() {
        let policy = ValidationPolicy::permissive();
        let text = policy.to_toml().unwrap();
        assert_eq!(ValidationPolicy::from_toml(&text).unwrap(), policy);
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = ValidationPolicy::from_toml("allow_crossed_quotes = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
