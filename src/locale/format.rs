// ============================================================================
// Locale Formatting
// Renders an integer minor-unit amount as a locale-correct currency string
// ============================================================================

use super::symbols::{CurrencyAffixes, LocaleSymbols};
use crate::interfaces::LocaleSource;
use num_bigint::BigInt;
use num_traits::Signed;

/// Format `minor` (at `scale`) as a currency string for `locale`.
///
/// The absolute value is rendered in ASCII, grouped according to the
/// inferred primary/secondary widths, joined with the locale separators,
/// transliterated to the locale digit glyphs and finally wrapped with the
/// prefix/suffix that the locale uses for the value's sign.
///
/// # Example
/// ```
/// use money_kit::locale::{format_minor, CldrLocaleSource};
/// use num_bigint::BigInt;
///
/// let text = format_minor(&BigInt::from(123456789), "INR", 2, "en-IN", &CldrLocaleSource);
/// assert_eq!(text, "₹12,34,567.89");
/// ```
pub fn format_minor(
    minor: &BigInt,
    currency: &str,
    scale: u32,
    locale: &str,
    source: &dyn LocaleSource,
) -> String {
    let symbols = LocaleSymbols::resolve(source, locale);
    let affixes = CurrencyAffixes::resolve(source, locale, currency, scale);

    let numeral = render_numeral(minor, scale, &symbols);
    affixes.for_sign(minor.is_negative()).wrap(&numeral)
}

/// Grouped, localized numeral for `|minor|` without sign or affixes.
pub fn render_numeral(minor: &BigInt, scale: u32, symbols: &LocaleSymbols) -> String {
    let scale = scale as usize;
    let digits = minor.abs().to_string();
    let padded = format!("{:0>width$}", digits, width = scale + 1);
    let (integer, fraction) = padded.split_at(padded.len() - scale);

    let grouped = symbols
        .grouping
        .split(integer)
        .into_iter()
        .map(|chunk| symbols.localize_digits(chunk))
        .collect::<Vec<_>>()
        .join(&symbols.group);

    if scale == 0 {
        grouped
    } else {
        format!(
            "{}{}{}",
            grouped,
            symbols.decimal,
            symbols.localize_digits(fraction)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::CldrLocaleSource;

    fn format(minor: i64, currency: &str, scale: u32, locale: &str) -> String {
        format_minor(&BigInt::from(minor), currency, scale, locale, &CldrLocaleSource)
    }

    #[test]
    fn test_en_us() {
        assert_eq!(format(123450, "USD", 2, "en-US"), "$1,234.50");
        assert_eq!(format(-123450, "USD", 2, "en-US"), "-$1,234.50");
        assert_eq!(format(5, "USD", 2, "en-US"), "$0.05");
        assert_eq!(format(0, "USD", 2, "en-US"), "$0.00");
    }

    #[test]
    fn test_grouping_variants() {
        assert_eq!(format(123456789, "INR", 2, "en-IN"), "₹12,34,567.89");
        assert_eq!(format(123450, "EUR", 2, "de-DE"), "1.234,50\u{a0}€");
        assert_eq!(format(-123450, "EUR", 2, "fr-FR"), "-1\u{202f}234,50\u{a0}€");
        assert_eq!(format(123450, "CHF", 2, "de-CH"), "CHF\u{a0}1\u{2019}234.50");
    }

    #[test]
    fn test_scales() {
        assert_eq!(format(1234, "JPY", 0, "ja-JP"), "\u{ffe5}1,234");
        assert_eq!(format(1234567, "KWD", 3, "en-US"), "KWD1,234.567");
    }

    #[test]
    fn test_localized_digits() {
        assert_eq!(
            format(123450, "EGP", 2, "ar-EG"),
            "\u{200f}\u{0661}\u{066c}\u{0662}\u{0663}\u{0664}\u{066b}\u{0665}\u{0660}\u{a0}ج.م.\u{200f}"
        );
        assert_eq!(
            format(-100, "BDT", 2, "bn-BD"),
            "-\u{09E7}.\u{09E6}\u{09E6}৳"
        );
    }

    #[test]
    fn test_sv_minus_sign() {
        assert_eq!(format(-123450, "SEK", 2, "sv-SE"), "\u{2212}1\u{a0}234,50\u{a0}kr");
    }

    #[test]
    fn test_very_large_values() {
        let minor: BigInt = "900719925474099301".parse().unwrap();
        assert_eq!(
            format_minor(&minor, "USD", 2, "en-US", &CldrLocaleSource),
            "$9,007,199,254,740,993.01"
        );
    }
}
