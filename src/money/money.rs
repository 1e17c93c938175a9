// ============================================================================
// Money Value Type
// Immutable fixed-point amount with currency, scale and provenance trace
// ============================================================================

use super::canonical::CanonicalMoney;
use super::trace::{Trace, TraceStep};
use crate::config::MoneyConfig;
use crate::interfaces::LocaleSource;
use crate::locale::{format_minor, parse_localized, CldrLocaleSource, DEFAULT_LOCALE};
use crate::numeric::{to_minor_units, ExactDecimal, MoneyError, MoneyResult, RoundingMode};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use rust_decimal::Decimal;
use std::fmt;
use std::hash::{Hash, Hasher};

const OP_FROM_MAJOR: &str = "fromMajorUnits";
const OP_FROM_MINOR: &str = "fromMinorUnits";
const OP_PARSE: &str = "parse";
const OP_ADD: &str = "add";
const OP_SUBTRACT: &str = "subtract";
const OP_MULTIPLY: &str = "multiply";
const OP_ALLOCATE: &str = "allocate";

/// An exact amount of money.
///
/// The amount is held as an integer count of minor units (`minor`) at a
/// fixed `scale`, so `1025` at scale 2 is `10.25`. Values are immutable:
/// every operation returns a new `Money` whose trace is the receiver's
/// trace plus one step.
///
/// Equality and hashing consider currency, scale and minor units only; the
/// locale hint and the trace are ignored.
///
/// # Example
/// ```
/// use money_kit::Money;
///
/// let price = Money::from_major("0.10", "USD").unwrap();
/// let total = price.multiply("3").unwrap();
/// assert_eq!(total.to_decimal_string(), "0.30");
/// assert_eq!(total.format(None), "$0.30");
/// ```
#[derive(Debug, Clone)]
pub struct Money {
    minor: BigInt,
    currency: String,
    scale: u32,
    locale: Option<String>,
    trace: Trace,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a major-unit decimal numeral with the currency's default
    /// scale and halfExpand rounding.
    ///
    /// `amount` may be anything that displays as a decimal numeral, such as
    /// `&str`, an integer or a `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// `InvalidCurrency` for a malformed code, `InvalidAmount` if `amount`
    /// is not a decimal numeral.
    pub fn from_major(amount: impl fmt::Display, currency: &str) -> MoneyResult<Self> {
        Self::from_major_with(amount, &MoneyConfig::new(currency))
    }

    /// Create from a major-unit decimal numeral using `config` for scale,
    /// rounding and locale hint.
    pub fn from_major_with(amount: impl fmt::Display, config: &MoneyConfig) -> MoneyResult<Self> {
        config.validate()?;
        let currency = config.currency_code()?;
        let scale = config.effective_scale();
        let amount = amount.to_string();

        let minor = to_minor_units(&amount, scale, config.rounding_mode)?;
        let step = TraceStep::op(OP_FROM_MAJOR)
            .with("amount", amount)
            .with("roundingMode", config.rounding_mode.as_str());

        Ok(Self {
            minor,
            currency,
            scale,
            locale: config.locale.clone(),
            trace: Trace::start(step),
        })
    }

    /// Create from an integer count of minor units with the currency's
    /// default scale. No rounding takes place.
    pub fn from_minor(minor: impl Into<BigInt>, currency: &str) -> MoneyResult<Self> {
        Self::from_minor_with(minor, &MoneyConfig::new(currency))
    }

    /// Create from an integer count of minor units using `config`.
    pub fn from_minor_with(minor: impl Into<BigInt>, config: &MoneyConfig) -> MoneyResult<Self> {
        config.validate()?;
        let minor = minor.into();
        let step = TraceStep::op(OP_FROM_MINOR).with("amount", minor.to_string());

        Ok(Self {
            currency: config.currency_code()?,
            scale: config.effective_scale(),
            locale: config.locale.clone(),
            trace: Trace::start(step),
            minor,
        })
    }

    /// Parse locale-formatted text in tolerant mode.
    ///
    /// # Example
    /// ```
    /// use money_kit::Money;
    ///
    /// let amount = Money::parse("1.234,50 €", "EUR", "de-DE").unwrap();
    /// assert_eq!(amount.minor().to_string(), "123450");
    /// ```
    pub fn parse(text: &str, currency: &str, locale: &str) -> MoneyResult<Self> {
        Self::parse_with(text, &MoneyConfig::new(currency).with_locale(locale))
    }

    /// Parse text using `config` for locale, strictness, scale and rounding.
    ///
    /// The result carries a `fromMajorUnits` step followed by a `parse`
    /// step, and the parse locale as its locale hint.
    ///
    /// # Errors
    /// `MalformedNumber` if the text cannot be reduced to a numeral, plus
    /// the errors of [`Money::from_major_with`].
    pub fn parse_with(text: &str, config: &MoneyConfig) -> MoneyResult<Self> {
        config.validate()?;
        let locale = config.parse_locale();
        let numeral = parse_localized(text, locale, config.strict_parse, config.locale_source.as_ref())?;
        let parsed = Self::from_major_with(&numeral, config)?;

        let step = TraceStep::op(OP_PARSE)
            .with("input", text)
            .with("strict", config.strict_parse.to_string());

        Ok(Self {
            locale: Some(locale.to_string()),
            trace: parsed.trace.push(step),
            ..parsed
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Amount in minor units.
    #[inline]
    pub fn minor(&self) -> &BigInt {
        &self.minor
    }

    #[inline]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Display locale hint, if any.
    #[inline]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    #[inline]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn is_zero(&self) -> bool {
        self.minor.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.minor.is_negative()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact sum.
    ///
    /// # Errors
    /// `CurrencyMismatch` if currency or scale differ.
    pub fn add(&self, other: &Money) -> MoneyResult<Money> {
        self.ensure_compatible(other, OP_ADD)?;
        let step = TraceStep::op(OP_ADD).with("rhsMinor", other.minor.to_string());
        Ok(self.derive(&self.minor + &other.minor, self.scale, step))
    }

    /// Exact difference.
    ///
    /// # Errors
    /// `CurrencyMismatch` if currency or scale differ.
    pub fn subtract(&self, other: &Money) -> MoneyResult<Money> {
        self.ensure_compatible(other, OP_SUBTRACT)?;
        let step = TraceStep::op(OP_SUBTRACT).with("rhsMinor", other.minor.to_string());
        Ok(self.derive(&self.minor - &other.minor, self.scale, step))
    }

    /// Multiply by a decimal factor at the current scale with halfExpand.
    pub fn multiply(&self, factor: impl fmt::Display) -> MoneyResult<Money> {
        self.multiply_with(factor, None, RoundingMode::HalfExpand)
    }

    /// Multiply by a decimal factor and re-quantize at `scale` (default: the
    /// current scale) using `mode`.
    ///
    /// The product is computed exactly; rounding happens once, at the end.
    ///
    /// # Errors
    /// `InvalidAmount` if `factor` is not a decimal numeral.
    pub fn multiply_with(
        &self,
        factor: impl fmt::Display,
        scale: Option<u32>,
        mode: RoundingMode,
    ) -> MoneyResult<Money> {
        let factor = factor.to_string();
        let multiplier: ExactDecimal = factor.parse()?;
        let scale = scale.unwrap_or(self.scale);

        let minor = ExactDecimal::from_minor(&self.minor, self.scale)
            .multiply(&multiplier)
            .shift_left(scale)
            .round(mode);

        let step = TraceStep::op(OP_MULTIPLY)
            .with("factor", factor)
            .with("roundingMode", mode.as_str());
        Ok(self.derive(minor, scale, step))
    }

    /// Split into shares proportional to `ratios`.
    ///
    /// Shares are truncated quotients; the leftover units are then handed
    /// out one at a time in ratio order, so the shares always sum to the
    /// original amount. Negative amounts split symmetrically:
    /// `allocate(-m) == -allocate(m)`.
    ///
    /// # Errors
    /// `InvalidRatios` if `ratios` is empty or any ratio is not positive.
    ///
    /// # Example
    /// ```
    /// use money_kit::Money;
    ///
    /// let shares = Money::from_minor(1000, "USD").unwrap().allocate(&[1, 1, 1]).unwrap();
    /// let minors: Vec<String> = shares.iter().map(|s| s.minor().to_string()).collect();
    /// assert_eq!(minors, ["334", "333", "333"]);
    /// ```
    pub fn allocate(&self, ratios: &[i64]) -> MoneyResult<Vec<Money>> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidRatios("ratios must not be empty".to_string()));
        }
        if let Some(bad) = ratios.iter().find(|ratio| **ratio <= 0) {
            return Err(MoneyError::InvalidRatios(format!(
                "every ratio must be positive, got {}",
                bad
            )));
        }

        let weights: Vec<BigInt> = ratios.iter().map(|ratio| BigInt::from(*ratio)).collect();
        let total: BigInt = weights.iter().sum();
        if !total.is_positive() {
            return Err(MoneyError::InvalidRatios("ratio sum must be positive".to_string()));
        }

        let mut shares: Vec<BigInt> = weights
            .iter()
            .map(|weight| &self.minor * weight / &total)
            .collect();
        let allocated: BigInt = shares.iter().sum();
        let mut remainder = &self.minor - allocated;

        if !remainder.is_zero() {
            tracing::trace!(
                minor = %self.minor,
                remainder = %remainder,
                shares = shares.len(),
                "Distributing allocation remainder"
            );
        }

        let step_unit = if remainder.is_negative() {
            BigInt::from(-1)
        } else {
            BigInt::from(1)
        };
        let mut index = 0;
        while !remainder.is_zero() {
            shares[index] += &step_unit;
            remainder -= &step_unit;
            index = (index + 1) % shares.len();
        }

        let ratio_labels: Vec<String> = ratios.iter().map(|ratio| ratio.to_string()).collect();
        Ok(shares
            .into_iter()
            .enumerate()
            .map(|(index, minor)| {
                let step = TraceStep::op(OP_ALLOCATE)
                    .with("ratios", ratio_labels.clone())
                    .with("shareIndex", index.to_string());
                self.derive(minor, self.scale, step)
            })
            .collect())
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Plain signed numeral with exactly `scale` fractional digits.
    pub fn to_decimal_string(&self) -> String {
        ExactDecimal::from_minor(&self.minor, self.scale).to_string()
    }

    /// Format with the embedded CLDR data.
    ///
    /// Uses `locale`, else the value's locale hint, else en-US.
    pub fn format(&self, locale: Option<&str>) -> String {
        self.format_with(locale, &CldrLocaleSource)
    }

    /// Format using a caller-supplied locale source.
    pub fn format_with(&self, locale: Option<&str>, source: &dyn LocaleSource) -> String {
        let locale = locale
            .or(self.locale.as_deref())
            .unwrap_or(DEFAULT_LOCALE);
        format_minor(&self.minor, &self.currency, self.scale, locale, source)
    }

    /// Structural snapshot for deterministic serialization.
    pub fn to_canonical(&self) -> CanonicalMoney {
        CanonicalMoney {
            amount: self.to_decimal_string(),
            currency: self.currency.clone(),
            minor: self.minor.to_string(),
            scale: self.scale,
            trace: self.trace.clone(),
        }
    }

    /// Canonical JSON: sorted keys, stringified leaves, `scale` as a number.
    pub fn to_canonical_string(&self) -> MoneyResult<String> {
        self.to_canonical().to_json()
    }

    /// Convert to a `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// `OutOfRange` if the amount does not fit in 96 bits or the scale
    /// exceeds 28.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        let out_of_range = || MoneyError::OutOfRange(format!("{} {}", self.to_decimal_string(), self.currency));
        let mantissa = i128::try_from(&self.minor).map_err(|_| out_of_range())?;
        Decimal::try_from_i128_with_scale(mantissa, self.scale).map_err(|_| out_of_range())
    }

    // ========================================================================
    // Trace Annotation
    // ========================================================================

    /// Append caller metadata to the trace.
    ///
    /// # Errors
    /// `InvalidMetadata` unless `metadata` is a JSON object.
    ///
    /// # Example
    /// ```
    /// use money_kit::Money;
    /// use serde_json::json;
    ///
    /// let tagged = Money::from_minor(500, "EUR")
    ///     .unwrap()
    ///     .with_trace(&json!({"invoice": "INV-7"}))
    ///     .unwrap();
    /// assert_eq!(tagged.trace().len(), 2);
    /// ```
    pub fn with_trace(&self, metadata: &serde_json::Value) -> MoneyResult<Money> {
        let step = TraceStep::from_metadata(metadata)?;
        Ok(self.derive(self.minor.clone(), self.scale, step))
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn derive(&self, minor: BigInt, scale: u32, step: TraceStep) -> Money {
        Money {
            minor,
            currency: self.currency.clone(),
            scale,
            locale: self.locale.clone(),
            trace: self.trace.push(step),
        }
    }

    fn ensure_compatible(&self, other: &Money, op: &str) -> MoneyResult<()> {
        if self.currency == other.currency && self.scale == other.scale {
            return Ok(());
        }

        tracing::debug!(
            op,
            left = %self.currency,
            left_scale = self.scale,
            right = %other.currency,
            right_scale = other.scale,
            "Rejected incompatible operands"
        );
        Err(MoneyError::CurrencyMismatch {
            left: format!("{}/{}", self.currency, self.scale),
            right: format!("{}/{}", other.currency, other.scale),
        })
    }
}

// ============================================================================
// Equality
// ============================================================================

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.scale == other.scale && self.minor == other.minor
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.scale.hash(state);
        self.minor.hash(state);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_decimal_string(), self.currency)
    }
}
