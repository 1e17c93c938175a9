// ============================================================================
// Numeric Module
// Exact decimal arithmetic and rounding for money calculations
// ============================================================================
//
// This module provides:
// - ExactDecimal: arbitrary-precision decimal (big-integer coefficient)
// - to_minor_units: numeral × 10^scale, rounded to an integer
// - RoundingMode / round_to_integer: the five rounding disciplines
// - MoneyError: error kinds shared by the whole crate
//
// Design principles:
// - No floating-point operations
// - All fallible operations return Result (no panics)
// - Precision is only ever discarded by an explicit rounding step

mod decimal;
mod errors;
mod rounding;

pub use decimal::{to_minor_units, ExactDecimal};
pub use errors::{MoneyError, MoneyResult};
pub use rounding::{round_to_integer, RoundingMode};
