// ============================================================================
// Locale Source Interface
// Contract for the platform capability that renders numbers into typed parts
// ============================================================================

use serde::{Deserialize, Serialize};

/// Kind of a rendered number fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    /// A run of integer digits between group separators
    Integer,
    /// Group (thousands) separator
    Group,
    /// Decimal separator
    Decimal,
    /// Fractional digits
    Fraction,
    /// Minus sign, possibly with bidi marks
    MinusSign,
    /// Plus sign
    PlusSign,
    /// Currency symbol or code
    Currency,
    /// Any other literal text (spaces, marks)
    Literal,
}

impl PartKind {
    /// Whether the fragment belongs to the numeral itself.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PartKind::Integer | PartKind::Group | PartKind::Decimal | PartKind::Fraction
        )
    }
}

/// One fragment of a formatted number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberPart {
    pub kind: PartKind,
    pub value: String,
}

impl NumberPart {
    pub fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// How a sample value should be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberStyle {
    /// Plain number
    Decimal {
        /// Insert group separators
        use_grouping: bool,
        /// Exact number of fractional digits
        fraction_digits: u32,
    },

    /// Currency amount with symbol and sign-specific pattern
    Currency {
        /// ISO-4217 code
        currency: String,
        /// Exact number of fractional digits
        fraction_digits: u32,
    },
}

/// Strategy interface for locale-sensitive number rendering.
///
/// Implementations play the role of a platform number formatter: given a
/// locale tag, a plain decimal numeral and a style, they return the rendered
/// fragments. The format and parse subsystems derive separators, digit
/// glyphs, grouping widths and currency affixes from these fragments, so a
/// single source keeps both directions consistent.
pub trait LocaleSource: Send + Sync {
    /// Render `numeral` (an ASCII decimal numeral) as typed fragments.
    ///
    /// # Arguments
    /// * `locale` - BCP-47 tag; unknown tags fall back to a default locale
    /// * `numeral` - ASCII decimal numeral, optionally signed
    /// * `style` - Plain or currency rendering
    fn format_to_parts(&self, locale: &str, numeral: &str, style: &NumberStyle)
        -> Vec<NumberPart>;

    /// Get the source name for logging
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_kinds() {
        assert!(PartKind::Integer.is_numeric());
        assert!(PartKind::Fraction.is_numeric());
        assert!(!PartKind::Currency.is_numeric());
        assert!(!PartKind::MinusSign.is_numeric());
    }
}
