// ============================================================================
// Currency Module
// ISO-4217 code validation and minor-unit classification
// ============================================================================

mod country;

pub use country::StaticCurrencyResolver;

use crate::numeric::{MoneyError, MoneyResult};

/// Currencies without a minor unit
const ZERO_DECIMAL: [&str; 15] = [
    "BIF", "CLP", "DJF", "GNF", "JPY", "KMF", "KRW", "PYG", "RWF", "UGX", "VND", "VUV", "XAF",
    "XOF", "XPF",
];

/// Currencies with three minor-unit digits
const THREE_DECIMAL: [&str; 7] = ["BHD", "IQD", "JOD", "KWD", "LYD", "OMR", "TND"];

/// Number of minor-unit digits for a currency.
///
/// 0 for zero-decimal currencies, 3 for three-decimal currencies, 2
/// otherwise. Lookup is case-insensitive.
pub fn minor_unit_digits(currency: &str) -> u32 {
    let code = currency.to_ascii_uppercase();
    if ZERO_DECIMAL.contains(&code.as_str()) {
        0
    } else if THREE_DECIMAL.contains(&code.as_str()) {
        3
    } else {
        2
    }
}

/// Upper-case and validate a currency code.
///
/// # Errors
/// Returns `InvalidCurrency` unless the input is exactly three ASCII letters.
pub fn normalize_currency_code(currency: &str) -> MoneyResult<String> {
    let code = currency.trim().to_ascii_uppercase();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(code)
    } else {
        Err(MoneyError::InvalidCurrency(currency.to_string()))
    }
}
