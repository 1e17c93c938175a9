// ============================================================================
// Embedded CLDR Locale Source
// Minimal CLDR-derived number data for a fixed set of locales
// ============================================================================

use crate::interfaces::{LocaleSource, NumberPart, NumberStyle, PartKind};
use crate::locale::symbols::Grouping;
use crate::numeric::{ExactDecimal, RoundingMode};
use num_traits::Signed;

/// Locale used when a tag matches neither exactly nor by language
pub const DEFAULT_LOCALE: &str = "en-US";

const ARAB_DIGITS: [char; 10] = [
    '\u{0660}', '\u{0661}', '\u{0662}', '\u{0663}', '\u{0664}', '\u{0665}', '\u{0666}',
    '\u{0667}', '\u{0668}', '\u{0669}',
];

const BENG_DIGITS: [char; 10] = [
    '\u{09E6}', '\u{09E7}', '\u{09E8}', '\u{09E9}', '\u{09EA}', '\u{09EB}', '\u{09EC}',
    '\u{09ED}', '\u{09EE}', '\u{09EF}',
];

const DEVA_DIGITS: [char; 10] = [
    '\u{0966}', '\u{0967}', '\u{0968}', '\u{0969}', '\u{096A}', '\u{096B}', '\u{096C}',
    '\u{096D}', '\u{096E}', '\u{096F}',
];

/// Number data for one locale.
///
/// Currency patterns use `¤` for the symbol, `#` for the numeral and `-` for
/// the locale minus sign; every other character is literal.
struct LocaleData {
    tag: &'static str,
    group: &'static str,
    decimal: &'static str,
    minus: &'static str,
    grouping: Grouping,
    digits: Option<[char; 10]>,
    positive_pattern: &'static str,
    negative_pattern: &'static str,
    symbols: &'static [(&'static str, &'static str)],
}

static LOCALES: &[LocaleData] = &[
    LocaleData {
        tag: "en-US",
        group: ",",
        decimal: ".",
        minus: "-",
        grouping: Grouping::THOUSANDS,
        digits: None,
        positive_pattern: "¤#",
        negative_pattern: "-¤#",
        symbols: &[],
    },
    LocaleData {
        tag: "en-GB",
        group: ",",
        decimal: ".",
        minus: "-",
        grouping: Grouping::THOUSANDS,
        digits: None,
        positive_pattern: "¤#",
        negative_pattern: "-¤#",
        symbols: &[("USD", "US$")],
    },
    LocaleData {
        tag: "en-IN",
        group: ",",
        decimal: ".",
        minus: "-",
        grouping: Grouping::INDIAN,
        digits: None,
        positive_pattern: "¤#",
        negative_pattern: "-¤#",
        symbols: &[],
    },
    LocaleData {
        tag: "de-DE",
        group: ".",
        decimal: ",",
        minus: "-",
        grouping: Grouping::THOUSANDS,
        digits: None,
        positive_pattern: "#\u{a0}¤",
        negative_pattern: "-#\u{a0}¤",
        symbols: &[],
    },
    LocaleData {
        tag: "de-CH",
        group: "\u{2019}",
        decimal: ".",
        minus: "-",
        grouping: Grouping::THOUSANDS,
        digits: None,
        positive_pattern: "¤\u{a0}#",
        negative_pattern: "¤-#",
        symbols: &[],
    },
    LocaleData {
        tag: "fr-FR",
        group: "\u{202f}",
        decimal: ",",
        minus: "-",
        grouping: Grouping::THOUSANDS,
        digits: None,
        positive_pattern: "#\u{a0}¤",
        negative_pattern: "-#\u{a0}¤",
        symbols: &[("USD", "$US")],
    },
    LocaleData {
        tag: "sv-SE",
        group: "\u{a0}",
        decimal: ",",
        minus: "\u{2212}",
        grouping: Grouping::THOUSANDS,
        digits: None,
        positive_pattern: "#\u{a0}¤",
        negative_pattern: "-#\u{a0}¤",
        symbols: &[("USD", "US$")],
    },
    LocaleData {
        tag: "pt-BR",
        group: ".",
        decimal: ",",
        minus: "-",
        grouping: Grouping::THOUSANDS,
        digits: None,
        positive_pattern: "¤\u{a0}#",
        negative_pattern: "-¤\u{a0}#",
        symbols: &[("USD", "US$")],
    },
    LocaleData {
        tag: "ja-JP",
        group: ",",
        decimal: ".",
        minus: "-",
        grouping: Grouping::THOUSANDS,
        digits: None,
        positive_pattern: "¤#",
        negative_pattern: "-¤#",
        symbols: &[("JPY", "\u{ffe5}")],
    },
    LocaleData {
        tag: "zh-CN",
        group: ",",
        decimal: ".",
        minus: "-",
        grouping: Grouping::THOUSANDS,
        digits: None,
        positive_pattern: "¤#",
        negative_pattern: "-¤#",
        symbols: &[("CNY", "¥"), ("USD", "US$")],
    },
    LocaleData {
        tag: "ar-EG",
        group: "\u{066c}",
        decimal: "\u{066b}",
        minus: "\u{061c}-",
        grouping: Grouping::THOUSANDS,
        digits: Some(ARAB_DIGITS),
        positive_pattern: "\u{200f}#\u{a0}¤",
        negative_pattern: "\u{200f}-#\u{a0}¤",
        symbols: &[("USD", "US$")],
    },
    LocaleData {
        tag: "bn-BD",
        group: ",",
        decimal: ".",
        minus: "-",
        grouping: Grouping::INDIAN,
        digits: Some(BENG_DIGITS),
        positive_pattern: "#¤",
        negative_pattern: "-#¤",
        symbols: &[("USD", "US$")],
    },
    LocaleData {
        tag: "mr-IN",
        group: ",",
        decimal: ".",
        minus: "-",
        grouping: Grouping::INDIAN,
        digits: Some(DEVA_DIGITS),
        positive_pattern: "¤#",
        negative_pattern: "-¤#",
        symbols: &[],
    },
];

/// Symbols shared by every locale unless overridden
static GLOBAL_SYMBOLS: &[(&str, &str)] = &[
    ("BDT", "৳"),
    ("BRL", "R$"),
    ("CNY", "CN¥"),
    ("EGP", "ج.م.\u{200f}"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("SEK", "kr"),
    ("USD", "$"),
];

/// [`LocaleSource`] backed by an embedded CLDR-derived table.
///
/// Covers the locales listed by [`CldrLocaleSource::supported_locales`].
/// Other tags resolve by language (`de-AT` -> `de-DE`) and finally fall back
/// to `en-US`. Unknown currencies render as their ISO code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrLocaleSource;

impl CldrLocaleSource {
    /// Tags with dedicated data, in table order.
    pub fn supported_locales() -> impl Iterator<Item = &'static str> {
        LOCALES.iter().map(|data| data.tag)
    }

    fn lookup(locale: &str) -> &'static LocaleData {
        let wanted = locale.trim().replace('_', "-");

        if let Some(data) = LOCALES
            .iter()
            .find(|data| data.tag.eq_ignore_ascii_case(&wanted))
        {
            return data;
        }

        let language = wanted.split('-').next().unwrap_or_default();
        if let Some(data) = LOCALES.iter().find(|data| {
            data.tag
                .split('-')
                .next()
                .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
        }) {
            tracing::trace!(locale, resolved = data.tag, "Locale resolved by language");
            return data;
        }

        tracing::debug!(locale, fallback = DEFAULT_LOCALE, "Unknown locale, using fallback");
        &LOCALES[0]
    }

    fn symbol(data: &LocaleData, currency: &str) -> String {
        data.symbols
            .iter()
            .chain(GLOBAL_SYMBOLS.iter())
            .find(|(code, _)| code.eq_ignore_ascii_case(currency))
            .map(|(_, symbol)| (*symbol).to_string())
            .unwrap_or_else(|| currency.to_ascii_uppercase())
    }
}

impl LocaleSource for CldrLocaleSource {
    fn format_to_parts(
        &self,
        locale: &str,
        numeral: &str,
        style: &NumberStyle,
    ) -> Vec<NumberPart> {
        let data = Self::lookup(locale);

        let (fraction_digits, use_grouping) = match style {
            NumberStyle::Decimal {
                use_grouping,
                fraction_digits,
            } => (*fraction_digits, *use_grouping),
            NumberStyle::Currency {
                fraction_digits, ..
            } => (*fraction_digits, true),
        };

        let value: ExactDecimal = match numeral.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::debug!(numeral, "Not a decimal numeral, rendering verbatim");
                return vec![NumberPart::new(PartKind::Literal, numeral)];
            }
        };

        let scaled = value.shift_left(fraction_digits).round(RoundingMode::HalfExpand);
        let negative = scaled.is_negative();
        let numeric = numeric_parts(
            data,
            &scaled.abs().to_string(),
            fraction_digits as usize,
            use_grouping,
        );

        match style {
            NumberStyle::Decimal { .. } => {
                let mut parts = Vec::with_capacity(numeric.len() + 1);
                if negative {
                    parts.push(NumberPart::new(PartKind::MinusSign, data.minus));
                }
                parts.extend(numeric);
                parts
            }
            NumberStyle::Currency { currency, .. } => {
                let pattern = if negative {
                    data.negative_pattern
                } else {
                    data.positive_pattern
                };
                expand_pattern(pattern, data.minus, &Self::symbol(data, currency), numeric)
            }
        }
    }

    fn name(&self) -> &str {
        "cldr-embedded"
    }
}

/// Integer, group, decimal and fraction fragments for a non-negative
/// magnitude given as ASCII digits with `fraction_digits` implied decimals.
fn numeric_parts(
    data: &LocaleData,
    digits: &str,
    fraction_digits: usize,
    use_grouping: bool,
) -> Vec<NumberPart> {
    let padded = format!("{:0>width$}", digits, width = fraction_digits + 1);
    let (integer, fraction) = padded.split_at(padded.len() - fraction_digits);

    let grouping = if use_grouping {
        data.grouping
    } else {
        Grouping::NONE
    };

    let mut parts = Vec::new();
    for (index, chunk) in grouping.split(integer).into_iter().enumerate() {
        if index > 0 {
            parts.push(NumberPart::new(PartKind::Group, data.group));
        }
        parts.push(NumberPart::new(PartKind::Integer, localize(data, chunk)));
    }

    if fraction_digits > 0 {
        parts.push(NumberPart::new(PartKind::Decimal, data.decimal));
        parts.push(NumberPart::new(PartKind::Fraction, localize(data, fraction)));
    }

    parts
}

fn localize(data: &LocaleData, ascii: &str) -> String {
    match data.digits {
        None => ascii.to_string(),
        Some(glyphs) => ascii
            .bytes()
            .map(|b| glyphs[usize::from(b - b'0')])
            .collect(),
    }
}

fn expand_pattern(
    pattern: &str,
    minus: &str,
    symbol: &str,
    numeric: Vec<NumberPart>,
) -> Vec<NumberPart> {
    let mut parts = Vec::new();
    let mut numeric = Some(numeric);

    for ch in pattern.chars() {
        match ch {
            '¤' => parts.push(NumberPart::new(PartKind::Currency, symbol)),
            '-' => parts.push(NumberPart::new(PartKind::MinusSign, minus)),
            '#' => parts.extend(numeric.take().unwrap_or_default()),
            literal => match parts.last_mut() {
                Some(last) if last.kind == PartKind::Literal => last.value.push(literal),
                _ => parts.push(NumberPart::new(PartKind::Literal, literal.to_string())),
            },
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(locale: &str, numeral: &str, style: &NumberStyle) -> String {
        CldrLocaleSource
            .format_to_parts(locale, numeral, style)
            .iter()
            .map(|part| part.value.as_str())
            .collect()
    }

    fn currency(code: &str, fraction_digits: u32) -> NumberStyle {
        NumberStyle::Currency {
            currency: code.to_string(),
            fraction_digits,
        }
    }

    #[test]
    fn test_currency_rendering() {
        assert_eq!(render("en-US", "1234.5", &currency("USD", 2)), "$1,234.50");
        assert_eq!(render("en-US", "-1234.5", &currency("USD", 2)), "-$1,234.50");
        assert_eq!(render("en-IN", "1234567.89", &currency("INR", 2)), "₹12,34,567.89");
        assert_eq!(render("de-DE", "1234.5", &currency("EUR", 2)), "1.234,50\u{a0}€");
        assert_eq!(render("ja-JP", "1234.5", &currency("JPY", 0)), "\u{ffe5}1,235");
        assert_eq!(render("de-CH", "-1234.5", &currency("CHF", 2)), "CHF-1\u{2019}234.50");
    }

    #[test]
    fn test_decimal_rendering() {
        let plain = NumberStyle::Decimal {
            use_grouping: false,
            fraction_digits: 0,
        };
        assert_eq!(render("en-US", "1234567", &plain), "1234567");
        assert_eq!(render("ar-EG", "7", &plain), "\u{0667}");
        assert_eq!(render("sv-SE", "-5", &plain), "\u{2212}5");
    }

    #[test]
    fn test_part_kinds() {
        let parts = CldrLocaleSource.format_to_parts("en-US", "-1234.5", &currency("USD", 2));
        let kinds: Vec<PartKind> = parts.iter().map(|part| part.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PartKind::MinusSign,
                PartKind::Currency,
                PartKind::Integer,
                PartKind::Group,
                PartKind::Integer,
                PartKind::Decimal,
                PartKind::Fraction,
            ]
        );
    }

    #[test]
    fn test_locale_fallback() {
        assert_eq!(render("de-AT", "1234.5", &currency("EUR", 2)), "1.234,50\u{a0}€");
        assert_eq!(render("en_in", "123456", &currency("INR", 0)), "₹1,23,456");
        assert_eq!(render("xx-YY", "1234.5", &currency("USD", 2)), "$1,234.50");
    }

    #[test]
    fn test_unknown_currency_uses_code() {
        assert_eq!(render("en-US", "1", &currency("XTS", 2)), "XTS1.00");
    }

    #[test]
    fn test_supported_locales() {
        let tags: Vec<&str> = CldrLocaleSource::supported_locales().collect();
        assert_eq!(tags[0], DEFAULT_LOCALE);
        assert!(tags.contains(&"en-IN"));
        assert!(tags.contains(&"ar-EG"));
    }
}
