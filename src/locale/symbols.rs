// ============================================================================
// Locale Symbols
// Separators, digit glyphs, grouping widths and currency affixes, derived by
// probing a LocaleSource with sentinel values
// ============================================================================

use crate::interfaces::{LocaleSource, NumberPart, NumberStyle, PartKind};

/// Sample used to discover group and decimal separators
const SEPARATOR_SAMPLE: &str = "12345.6";

/// Long enough to expose both primary and secondary group widths
const GROUPING_SAMPLE: &str = "1234567890123";

/// Currency sentinels; affixes are whatever surrounds the numeral
const POSITIVE_SENTINEL: &str = "1234567.89";
const NEGATIVE_SENTINEL: &str = "-1234567.89";

const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

// ============================================================================
// Grouping
// ============================================================================

/// Integer digit grouping: the rightmost group has `primary` digits, every
/// group to its left has `secondary` digits (the leftmost may be shorter).
///
/// `primary == 0` disables grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grouping {
    pub primary: usize,
    pub secondary: usize,
}

impl Grouping {
    /// No grouping at all
    pub const NONE: Self = Self {
        primary: 0,
        secondary: 0,
    };

    /// Western thousands grouping (1,234,567)
    pub const THOUSANDS: Self = Self {
        primary: 3,
        secondary: 3,
    };

    /// Indian lakh/crore grouping (12,34,567)
    pub const INDIAN: Self = Self {
        primary: 3,
        secondary: 2,
    };

    pub fn is_enabled(&self) -> bool {
        self.primary > 0
    }

    /// Width of every group left of the rightmost one.
    pub fn secondary_width(&self) -> usize {
        if self.secondary == 0 {
            self.primary
        } else {
            self.secondary
        }
    }

    /// Split a run of ASCII digits into groups, leftmost first.
    ///
    /// # Example
    /// ```
    /// use money_kit::locale::Grouping;
    ///
    /// assert_eq!(Grouping::INDIAN.split("1234567"), vec!["12", "34", "567"]);
    /// assert_eq!(Grouping::THOUSANDS.split("999"), vec!["999"]);
    /// ```
    pub fn split<'a>(&self, digits: &'a str) -> Vec<&'a str> {
        if !self.is_enabled() || digits.len() <= self.primary {
            return vec![digits];
        }

        let mut chunks = Vec::new();
        let mut end = digits.len();
        chunks.push(&digits[end - self.primary..end]);
        end -= self.primary;

        let width = self.secondary_width();
        while end > 0 {
            let start = end.saturating_sub(width);
            chunks.push(&digits[start..end]);
            end = start;
        }

        chunks.reverse();
        chunks
    }
}

// ============================================================================
// Locale Symbols
// ============================================================================

/// Number symbols for one locale, shared by formatting and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSymbols {
    pub group: String,
    pub decimal: String,
    /// Glyph for each ASCII digit, indexed by digit value
    pub digits: [char; 10],
    pub grouping: Grouping,
}

impl LocaleSymbols {
    /// Derive the symbols for `locale` from `source`.
    pub fn resolve(source: &dyn LocaleSource, locale: &str) -> Self {
        let sample = source.format_to_parts(
            locale,
            SEPARATOR_SAMPLE,
            &NumberStyle::Decimal {
                use_grouping: true,
                fraction_digits: 1,
            },
        );
        let group = first_of(&sample, PartKind::Group).unwrap_or(",").to_string();
        let decimal = first_of(&sample, PartKind::Decimal).unwrap_or(".").to_string();

        let mut digits = ASCII_DIGITS;
        for (value, glyph) in digits.iter_mut().enumerate() {
            let parts = source.format_to_parts(
                locale,
                &value.to_string(),
                &NumberStyle::Decimal {
                    use_grouping: false,
                    fraction_digits: 0,
                },
            );
            let mut chars = first_of(&parts, PartKind::Integer).unwrap_or("").chars();
            if let (Some(localized), None) = (chars.next(), chars.next()) {
                *glyph = localized;
            }
        }

        let grouping = infer_grouping(&source.format_to_parts(
            locale,
            GROUPING_SAMPLE,
            &NumberStyle::Decimal {
                use_grouping: true,
                fraction_digits: 0,
            },
        ));

        Self {
            group,
            decimal,
            digits,
            grouping,
        }
    }

    /// Replace ASCII digits with the locale's glyphs.
    pub fn localize_digits(&self, ascii: &str) -> String {
        ascii
            .chars()
            .map(|ch| {
                if ch.is_ascii_digit() {
                    self.digits[usize::from(ch as u8 - b'0')]
                } else {
                    ch
                }
            })
            .collect()
    }

    /// Replace locale digit glyphs with ASCII digits.
    pub fn delocalize_digits(&self, text: &str) -> String {
        text.chars()
            .map(|ch| match self.digits.iter().position(|glyph| *glyph == ch) {
                Some(value) => ASCII_DIGITS[value],
                None => ch,
            })
            .collect()
    }
}

fn first_of(parts: &[NumberPart], kind: PartKind) -> Option<&str> {
    parts
        .iter()
        .find(|part| part.kind == kind)
        .map(|part| part.value.as_str())
}

fn infer_grouping(parts: &[NumberPart]) -> Grouping {
    let segments: Vec<usize> = parts
        .iter()
        .filter(|part| part.kind == PartKind::Integer)
        .map(|part| part.value.chars().count())
        .collect();

    match segments.as_slice() {
        [.., secondary, primary] => Grouping {
            primary: *primary,
            secondary: *secondary,
        },
        _ => Grouping::NONE,
    }
}

// ============================================================================
// Currency Affixes
// ============================================================================

/// Text around the numeral in a currency rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Affix {
    pub prefix: String,
    pub suffix: String,
}

impl Affix {
    /// Split `parts` around the numeric fragments.
    pub fn from_parts(parts: &[NumberPart]) -> Self {
        let first = parts.iter().position(|part| part.kind.is_numeric());
        let last = parts.iter().rposition(|part| part.kind.is_numeric());

        let join = |slice: &[NumberPart]| -> String {
            slice.iter().map(|part| part.value.as_str()).collect()
        };
        match (first, last) {
            (Some(first), Some(last)) => Self {
                prefix: join(&parts[..first]),
                suffix: join(&parts[last + 1..]),
            },
            _ => Self {
                prefix: join(parts),
                suffix: String::new(),
            },
        }
    }

    pub fn wrap(&self, numeral: &str) -> String {
        format!("{}{}{}", self.prefix, numeral, self.suffix)
    }
}

/// Sign-specific currency affixes for one locale/currency/scale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrencyAffixes {
    pub positive: Affix,
    pub negative: Affix,
}

impl CurrencyAffixes {
    /// Derive affixes by currency-formatting the two sentinels.
    pub fn resolve(source: &dyn LocaleSource, locale: &str, currency: &str, scale: u32) -> Self {
        let style = NumberStyle::Currency {
            currency: currency.to_string(),
            fraction_digits: scale,
        };
        Self {
            positive: Affix::from_parts(&source.format_to_parts(locale, POSITIVE_SENTINEL, &style)),
            negative: Affix::from_parts(&source.format_to_parts(locale, NEGATIVE_SENTINEL, &style)),
        }
    }

    pub fn for_sign(&self, negative: bool) -> &Affix {
        if negative {
            &self.negative
        } else {
            &self.positive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::CldrLocaleSource;

    #[test]
    fn test_grouping_split() {
        assert_eq!(Grouping::THOUSANDS.split("1234567"), vec!["1", "234", "567"]);
        assert_eq!(Grouping::THOUSANDS.split("123456"), vec!["123", "456"]);
        assert_eq!(Grouping::INDIAN.split("123456789"), vec!["12", "34", "56", "789"]);
        assert_eq!(Grouping::INDIAN.split("1234"), vec!["1", "234"]);
        assert_eq!(Grouping::NONE.split("1234567"), vec!["1234567"]);
        assert_eq!(Grouping::THOUSANDS.split("0"), vec!["0"]);
    }

    #[test]
    fn test_resolve_en_us() {
        let symbols = LocaleSymbols::resolve(&CldrLocaleSource, "en-US");
        assert_eq!(symbols.group, ",");
        assert_eq!(symbols.decimal, ".");
        assert_eq!(symbols.digits, ASCII_DIGITS);
        assert_eq!(symbols.grouping, Grouping::THOUSANDS);
    }

    #[test]
    fn test_resolve_de_and_in() {
        let de = LocaleSymbols::resolve(&CldrLocaleSource, "de-DE");
        assert_eq!(de.group, ".");
        assert_eq!(de.decimal, ",");

        let en_in = LocaleSymbols::resolve(&CldrLocaleSource, "en-IN");
        assert_eq!(en_in.grouping, Grouping::INDIAN);
    }

    #[test]
    fn test_digit_glyphs() {
        let ar = LocaleSymbols::resolve(&CldrLocaleSource, "ar-EG");
        assert_eq!(ar.digits[0], '\u{0660}');
        assert_eq!(ar.digits[9], '\u{0669}');
        assert_eq!(ar.localize_digits("1,20"), "\u{0661},\u{0662}\u{0660}");
        assert_eq!(ar.delocalize_digits("\u{0661}\u{0665}x"), "15x");
    }

    #[test]
    fn test_affixes() {
        let en = CurrencyAffixes::resolve(&CldrLocaleSource, "en-US", "USD", 2);
        assert_eq!(en.positive, Affix { prefix: "$".into(), suffix: "".into() });
        assert_eq!(en.negative, Affix { prefix: "-$".into(), suffix: "".into() });

        let de = CurrencyAffixes::resolve(&CldrLocaleSource, "de-DE", "EUR", 2);
        assert_eq!(de.positive.prefix, "");
        assert_eq!(de.positive.suffix, "\u{a0}€");
        assert_eq!(de.negative.prefix, "-");
    }

    #[test]
    fn test_affix_without_numeral() {
        let parts = vec![NumberPart::new(PartKind::Literal, "n/a")];
        let affix = Affix::from_parts(&parts);
        assert_eq!(affix.prefix, "n/a");
        assert_eq!(affix.suffix, "");
    }
}
