use serde::{Deserialize, Serialize};

use crate::{Symbol, UtcDateTime, ValidationError};

/// Point-in-time price snapshot for one symbol.
///
/// `percent_change` is signed: negative for a decline from the previous
/// close, positive for a gain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub current_price: f64,
    pub previous_close: f64,
    pub percent_change: f64,
    pub as_of: UtcDateTime,
}

impl Quote {
    pub fn new(
        symbol: Symbol,
        current_price: f64,
        previous_close: f64,
        percent_change: f64,
        as_of: UtcDateTime,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("current_price", current_price)?;
        validate_non_negative("previous_close", previous_close)?;
        validate_finite("percent_change", percent_change)?;

        Ok(Self {
            symbol,
            current_price,
            previous_close,
            percent_change,
            as_of,
        })
    }

    /// Magnitude of the move, the quantity scans rank by.
    pub fn abs_percent_change(&self) -> f64 {
        self.percent_change.abs()
    }
}

/// The stock that moved the most in a scan.
///
/// `percent_change` holds the absolute magnitude of the move; the sign is
/// deliberately dropped because the report ranks movers by distance from
/// the previous close in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMover {
    pub symbol: Symbol,
    pub percent_change: f64,
    pub current_price: f64,
    pub previous_close: f64,
}

impl TopMover {
    pub fn from_quote(quote: &Quote) -> Self {
        Self {
            symbol: quote.symbol.clone(),
            percent_change: quote.abs_percent_change(),
            current_price: quote.current_price,
            previous_close: quote.previous_close,
        }
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(raw: &str) -> Symbol {
        Symbol::parse(raw).expect("test symbol is valid")
    }

    fn fixed_ts() -> UtcDateTime {
        UtcDateTime::parse("2024-01-02T21:00:00Z").expect("timestamp")
    }

    #[test]
    fn accepts_negative_percent_change() {
        let quote = Quote::new(symbol("AMZN"), 208.74, 240.5, -13.2, fixed_ts())
            .expect("declines are valid quotes");
        assert_eq!(quote.abs_percent_change(), 13.2);
    }

    #[test]
    fn rejects_negative_price() {
        let err = Quote::new(symbol("AAPL"), -1.0, 190.0, 0.5, fixed_ts()).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NegativeValue {
                field: "current_price"
            }
        ));
    }

    #[test]
    fn rejects_non_finite_percent_change() {
        let err =
            Quote::new(symbol("AAPL"), 190.0, 190.0, f64::NAN, fixed_ts()).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NonFiniteValue {
                field: "percent_change"
            }
        ));
    }

    #[test]
    fn top_mover_drops_the_sign() {
        let quote = Quote::new(symbol("AMZN"), 208.74, 240.5, -13.2, fixed_ts()).expect("quote");
        let mover = TopMover::from_quote(&quote);

        assert_eq!(mover.symbol.as_str(), "AMZN");
        assert_eq!(mover.percent_change, 13.2);
        assert_eq!(mover.current_price, 208.74);
        assert_eq!(mover.previous_close, 240.5);
    }
}
