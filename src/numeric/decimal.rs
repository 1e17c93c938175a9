// ============================================================================
// Exact Decimal
// Arbitrary-precision decimal numerals scaled into integer minor units
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::rounding::{round_to_integer, RoundingMode};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::fmt;
use std::str::FromStr;

/// Compute 10^n as a big integer
pub(crate) fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// Exact decimal number: `coefficient × 10^-exponent`.
///
/// Unlike the fixed-width decimals used elsewhere in the ecosystem, the
/// coefficient is unbounded, so parsing and multiplication never lose
/// digits. Rounding happens only when the value is collapsed to an integer.
///
/// # Example
/// ```
/// use money_kit::numeric::ExactDecimal;
///
/// let price: ExactDecimal = "0.10".parse().unwrap();
/// let qty: ExactDecimal = "3".parse().unwrap();
/// assert_eq!(price.multiply(&qty).to_string(), "0.30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactDecimal {
    coefficient: BigInt,
    exponent: u32,
}

impl ExactDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a coefficient and a count of fractional digits.
    pub fn new(coefficient: BigInt, exponent: u32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Create from an integer minor-unit amount at the given scale.
    pub fn from_minor(minor: &BigInt, scale: u32) -> Self {
        Self::new(minor.clone(), scale)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unscaled digits, with sign.
    #[inline]
    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    /// Number of fractional digits carried by the coefficient.
    #[inline]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact product. The result carries the sum of both exponents.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::new(
            &self.coefficient * &rhs.coefficient,
            self.exponent + rhs.exponent,
        )
    }

    /// Multiply by 10^places without touching the digits where possible.
    pub fn shift_left(&self, places: u32) -> Self {
        if self.exponent >= places {
            Self::new(self.coefficient.clone(), self.exponent - places)
        } else {
            Self::new(
                &self.coefficient * pow10(places - self.exponent),
                0,
            )
        }
    }

    /// Collapse to an integer under the given rounding mode.
    pub fn round(&self, mode: RoundingMode) -> BigInt {
        round_to_integer(self, mode)
    }
}

// ============================================================================
// Minor Units
// ============================================================================

/// Convert a decimal numeral into integer minor units.
///
/// Computes `numeral × 10^scale` exactly and rounds the result with `mode`.
///
/// # Errors
/// Returns `InvalidAmount` if `numeral` is not a decimal numeral.
///
/// # Example
/// ```
/// use money_kit::numeric::{to_minor_units, RoundingMode};
/// use num_bigint::BigInt;
///
/// let cents = to_minor_units("1.005", 2, RoundingMode::HalfEven).unwrap();
/// assert_eq!(cents, BigInt::from(100));
/// ```
pub fn to_minor_units(numeral: &str, scale: u32, mode: RoundingMode) -> MoneyResult<BigInt> {
    let value: ExactDecimal = numeral.parse()?;
    Ok(value.shift_left(scale).round(mode))
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for ExactDecimal {
    type Err = MoneyError;

    /// Parse an ASCII decimal numeral.
    ///
    /// Accepts an optional leading sign, integer digits and an optional
    /// single `.` followed by fractional digits. Either side of the point may
    /// be empty (`"5."`, `".5"`) but not both. Surrounding whitespace is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoneyError::InvalidAmount(s.to_string());

        let body = s.trim();
        let (negative, body) = match body.as_bytes().first() {
            Some(b'-') => (true, &body[1..]),
            Some(b'+') => (false, &body[1..]),
            _ => (false, body),
        };

        let (int_digits, frac_digits) = match body.split_once('.') {
            Some((int_digits, frac_digits)) => (int_digits, frac_digits),
            None => (body, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_digits) || !all_digits(frac_digits) {
            return Err(invalid());
        }
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(invalid());
        }

        let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
        digits.push_str(int_digits);
        digits.push_str(frac_digits);

        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let exponent = u32::try_from(frac_digits.len()).map_err(|_| invalid())?;
        let coefficient = if negative { -magnitude } else { magnitude };

        Ok(Self::new(coefficient, exponent))
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for ExactDecimal {
    /// Plain numeral with exactly `exponent` fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient.abs().to_string();
        let sign = if self.coefficient.is_negative() { "-" } else { "" };
        let exponent = self.exponent as usize;

        if exponent == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        let padded = format!("{:0>width$}", digits, width = exponent + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - exponent);
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for ExactDecimal {
    fn from(d: rust_decimal::Decimal) -> Self {
        Self::new(BigInt::from(d.mantissa()), d.scale())
    }
}
