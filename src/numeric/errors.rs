// ============================================================================
// Money Errors
// Error kinds for construction, arithmetic, rounding and locale parsing
// ============================================================================

use thiserror::Error;

/// Errors that can occur while building, combining or rendering money values.
///
/// Every failure is local to the call that raised it; nothing is retried
/// internally and no partially built value escapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Input is not a well-formed decimal numeral
    #[error("invalid amount: {0:?} is not a decimal numeral")]
    InvalidAmount(String),

    /// Currency is not a three-letter code
    #[error("invalid currency: {0:?} is not a three-letter ISO-4217 code")]
    InvalidCurrency(String),

    /// Binary operation on values with different currency or scale
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Allocation ratios are empty or not strictly positive
    #[error("invalid ratios: {0}")]
    InvalidRatios(String),

    /// Strict parse failure or a result that is not `[sign]digits[.digits]`
    #[error("malformed number: could not parse {0:?}")]
    MalformedNumber(String),

    /// Rounding mode tag outside the supported set
    #[error("unsupported rounding mode: {0:?}")]
    UnsupportedRoundingMode(String),

    /// Trace annotation is not a mapping
    #[error("invalid metadata: expected a mapping, got {0}")]
    InvalidMetadata(String),

    /// Country code could not be resolved to a currency
    #[error("unknown country: unable to resolve a currency for {0:?}")]
    UnknownCountry(String),

    /// Locale tag is empty or contains characters outside a BCP-47 tag
    #[error("invalid locale: {0:?}")]
    InvalidLocale(String),

    /// Value cannot be represented in the requested target type
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Canonical serialization failed
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::InvalidCurrency("US".to_string()).to_string(),
            "invalid currency: \"US\" is not a three-letter ISO-4217 code"
        );
        assert_eq!(
            MoneyError::CurrencyMismatch {
                left: "USD/2".to_string(),
                right: "EUR/2".to_string(),
            }
            .to_string(),
            "currency mismatch: USD/2 vs EUR/2"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            MoneyError::MalformedNumber("x".to_string()),
            MoneyError::MalformedNumber("x".to_string())
        );
        assert_ne!(
            MoneyError::InvalidAmount("x".to_string()),
            MoneyError::MalformedNumber("x".to_string())
        );
    }
}
