// ============================================================================
// Money Kit Library
// Exact fixed-point money with locale-aware formatting and parsing
// ============================================================================

//! # Money Kit
//!
//! Exact, auditable money arithmetic for billing, ledgers and pricing.
//!
//! ## Features
//!
//! - **Fixed-point amounts** held as arbitrary-precision integer minor units
//! - **Five rounding disciplines** (`halfExpand`, `halfEven`, `ceil`, `floor`, `trunc`)
//! - **Remainder-exact allocation** across integer ratios
//! - **Locale formatting and parsing** that round-trip, including Indian
//!   grouping and non-Latin digits
//! - **Append-only provenance trace** with byte-stable canonical JSON
//!
//! ## Example
//!
//! ```rust
//! use money_kit::prelude::*;
//! use serde_json::json;
//!
//! let subtotal = Money::parse("$1,234.50", "USD", "en-US").unwrap();
//! let tax = subtotal
//!     .multiply_with("0.0825", None, RoundingMode::HalfEven)
//!     .unwrap();
//! let total = subtotal.add(&tax).unwrap();
//! assert_eq!(total.format(None), "$1,336.35");
//!
//! // Split three ways without losing a cent
//! let shares = total.allocate(&[1, 1, 1]).unwrap();
//! assert_eq!(shares[0].to_decimal_string(), "445.45");
//! assert_eq!(shares[2].to_decimal_string(), "445.45");
//!
//! // Annotate and serialize deterministically
//! let audited = total.with_trace(&json!({"invoice": "INV-7"})).unwrap();
//! let canonical = audited.to_canonical_string().unwrap();
//! assert!(canonical.starts_with(r#"{"amount":"1336.35","currency":"USD""#));
//! ```

pub mod config;
pub mod currency;
pub mod interfaces;
pub mod locale;
pub mod money;
pub mod numeric;

pub use config::MoneyConfig;
pub use money::Money;
pub use numeric::{MoneyError, MoneyResult, RoundingMode};

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::MoneyConfig;
    pub use crate::currency::{minor_unit_digits, StaticCurrencyResolver};
    pub use crate::interfaces::{CurrencyResolver, LocaleSource};
    pub use crate::locale::CldrLocaleSource;
    pub use crate::money::{CanonicalMoney, Money, Trace, TraceStep};
    pub use crate::numeric::{MoneyError, MoneyResult, RoundingMode};
}
