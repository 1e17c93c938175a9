// ============================================================================
// Rounding Engine
// Collapses an exact scaled decimal to an integer under one of five modes
// ============================================================================

use super::decimal::{pow10, ExactDecimal};
use super::errors::MoneyError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Rounding discipline applied when a value must be re-quantized.
///
/// The tags (`halfExpand`, `halfEven`, `ceil`, `floor`, `trunc`) match the
/// ICU / ECMA-402 rounding mode names and appear verbatim in trace records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundingMode {
    /// Round half away from zero
    #[default]
    HalfExpand,
    /// Round half to the nearest even integer (banker's rounding)
    HalfEven,
    /// Round toward positive infinity
    Ceil,
    /// Round toward negative infinity
    Floor,
    /// Round toward zero
    Trunc,
}

impl RoundingMode {
    /// All supported modes, in declaration order.
    pub const ALL: [RoundingMode; 5] = [
        RoundingMode::HalfExpand,
        RoundingMode::HalfEven,
        RoundingMode::Ceil,
        RoundingMode::Floor,
        RoundingMode::Trunc,
    ];

    /// The tag used in traces and configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundingMode::HalfExpand => "halfExpand",
            RoundingMode::HalfEven => "halfEven",
            RoundingMode::Ceil => "ceil",
            RoundingMode::Floor => "floor",
            RoundingMode::Trunc => "trunc",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = MoneyError;

    /// Parse one of the five tags. Any other tag (including a differently
    /// cased one) is `UnsupportedRoundingMode`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoundingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| MoneyError::UnsupportedRoundingMode(s.to_string()))
    }
}

/// Round an exact decimal to an integer.
///
/// `ceil` and `floor` are directional (toward +inf / -inf), independent of
/// the sign of the value. Exact halves are detected by comparing twice the
/// discarded remainder against the divisor, so no precision is ever lost.
pub fn round_to_integer(value: &ExactDecimal, mode: RoundingMode) -> BigInt {
    let divisor = pow10(value.exponent());
    let (quotient, remainder) = value.coefficient().div_rem(&divisor);

    if remainder.is_zero() {
        return quotient;
    }

    // Direction away from zero for the discarded part
    let away = if remainder.is_negative() {
        BigInt::from(-1)
    } else {
        BigInt::from(1)
    };

    match mode {
        RoundingMode::Trunc => quotient,
        RoundingMode::Floor => {
            if remainder.is_negative() {
                quotient - 1u32
            } else {
                quotient
            }
        }
        RoundingMode::Ceil => {
            if remainder.is_positive() {
                quotient + 1u32
            } else {
                quotient
            }
        }
        RoundingMode::HalfExpand | RoundingMode::HalfEven => {
            let twice = remainder.abs() * 2u32;
            match twice.cmp(&divisor) {
                Ordering::Less => quotient,
                Ordering::Greater => quotient + away,
                Ordering::Equal => {
                    if mode == RoundingMode::HalfExpand || quotient.is_odd() {
                        quotient + away
                    } else {
                        quotient
                    }
                }
            }
        }
    }
}
