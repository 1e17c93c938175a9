// ============================================================================
// Locale Parsing
// Turns locale-formatted or loosely formatted text into a canonical numeral
// ============================================================================

use super::symbols::{Grouping, LocaleSymbols};
use crate::interfaces::LocaleSource;
use crate::numeric::{MoneyError, MoneyResult};

/// Parse `text` written for `locale` into a canonical decimal numeral
/// (`[-]digits[.digits]`).
///
/// Tolerant mode drops currency symbols, codes and spacing around the
/// numeral. Strict mode accepts a numeral that follows the locale's grouping
/// exactly, or failing that a canonical numeral, and nothing else.
///
/// # Errors
/// Returns `MalformedNumber` if the text is empty, fails strict validation,
/// or does not reduce to a decimal numeral.
///
/// # Example
/// ```
/// use money_kit::locale::{parse_localized, CldrLocaleSource};
///
/// let canonical = parse_localized("($1,234.50)", "en-US", false, &CldrLocaleSource).unwrap();
/// assert_eq!(canonical, "-1234.50");
///
/// let strict = parse_localized("12,34,567.89", "en-IN", true, &CldrLocaleSource).unwrap();
/// assert_eq!(strict, "1234567.89");
/// ```
pub fn parse_localized(
    text: &str,
    locale: &str,
    strict: bool,
    source: &dyn LocaleSource,
) -> MoneyResult<String> {
    let malformed = || {
        tracing::debug!(input = text, locale, strict, "Rejected money input");
        MoneyError::MalformedNumber(text.to_string())
    };

    let raw = text.trim();
    if raw.is_empty() {
        return Err(malformed());
    }

    let mut value = normalize(raw);

    let parenthesized = value.len() >= 2 && value.starts_with('(') && value.ends_with(')');
    if parenthesized {
        value = value[1..value.len() - 1].to_string();
    }

    let symbols = LocaleSymbols::resolve(source, locale);
    let group = normalize(&symbols.group);
    let decimal = normalize(&symbols.decimal);

    value = symbols.delocalize_digits(&value);

    if strict {
        if conforms_to_grouping(&value, &group, &decimal, symbols.grouping) {
            value = strip_separators(&value, &group, &decimal);
        } else if !is_canonical(&value) {
            return Err(malformed());
        }
    } else {
        let kept: String = trim_to_numeral(&value, &decimal)
            .chars()
            .filter(|ch| {
                ch.is_ascii_digit()
                    || matches!(ch, '+' | '-' | '.' | ',' | '\'')
                    || ch.is_whitespace()
                    || group.contains(*ch)
                    || decimal.contains(*ch)
            })
            .collect();
        value = strip_separators(&kept, &group, &decimal);
    }

    if parenthesized {
        let magnitude = value.strip_prefix(['+', '-']).unwrap_or(&value);
        value = format!("-{}", magnitude);
    }

    if let Some(rest) = value.strip_prefix('+') {
        value = rest.to_string();
    }

    if is_canonical(&value) {
        Ok(value)
    } else {
        Err(malformed())
    }
}

/// Fold the minus-sign and no-break-space variants onto their ASCII forms
fn normalize(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{2212}' => '-',
            '\u{a0}' => ' ',
            other => other,
        })
        .collect()
}

/// `[+-]?digits(.digits)?`
fn is_canonical(value: &str) -> bool {
    let body = value.strip_prefix(['+', '-']).unwrap_or(value);
    let (integer, fraction) = match body.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (body, None),
    };

    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    digits(integer) && fraction.is_none_or(digits)
}

/// Drop the text around the digits, keeping any sign it carries and a
/// decimal separator that touches the digits.
fn trim_to_numeral(value: &str, decimal: &str) -> String {
    let (first, last) = match (
        value.find(|ch: char| ch.is_ascii_digit()),
        value.rfind(|ch: char| ch.is_ascii_digit()),
    ) {
        (Some(first), Some(last)) => (first, last),
        _ => return String::new(),
    };
    let (head, rest) = value.split_at(first);
    let (digits, tail) = rest.split_at(last + 1 - first);
    let is_sign = |ch: &char| matches!(ch, '+' | '-');

    let mut out: String = head.chars().filter(is_sign).collect();
    if head.trim_end().ends_with(decimal) {
        out.push_str(decimal);
    }
    out.push_str(digits);
    if tail.trim_start().starts_with(decimal) {
        out.push_str(decimal);
    }
    out.extend(tail.chars().filter(is_sign));
    out
}

/// Remove whitespace, apostrophes and group separators, then map the decimal
/// separator to `.`.
fn strip_separators(value: &str, group: &str, decimal: &str) -> String {
    let mut out: String = value
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '\'')
        .collect();
    if !group.trim().is_empty() {
        out = out.replace(group, "");
    }
    out.replace(decimal, ".")
}

/// Strict structural check against the locale grouping rule.
fn conforms_to_grouping(value: &str, group: &str, decimal: &str, grouping: Grouping) -> bool {
    let body = value.strip_prefix(['+', '-']).unwrap_or(value);
    if body.contains(['+', '-']) {
        return false;
    }

    let mut sides = body.split(decimal);
    let integer = sides.next().unwrap_or_default();
    let fraction = sides.next();
    if sides.next().is_some() {
        return false;
    }

    if let Some(fraction) = fraction {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    if !grouping.is_enabled() || !integer.contains(group) {
        return all_digits(integer);
    }

    let groups: Vec<&str> = integer.split(group).collect();
    if !groups.iter().all(|part| all_digits(part)) {
        return false;
    }

    let secondary = grouping.secondary_width();
    let (leftmost, rest) = match groups.split_first() {
        Some(split) => split,
        None => return false,
    };
    let (rightmost, middle) = match rest.split_last() {
        Some(split) => split,
        None => return false,
    };

    (1..=secondary).contains(&leftmost.len())
        && middle.iter().all(|part| part.len() == secondary)
        && rightmost.len() == grouping.primary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::CldrLocaleSource;

    fn tolerant(text: &str, locale: &str) -> MoneyResult<String> {
        parse_localized(text, locale, false, &CldrLocaleSource)
    }

    fn strict(text: &str, locale: &str) -> MoneyResult<String> {
        parse_localized(text, locale, true, &CldrLocaleSource)
    }

    #[test]
    fn test_tolerant_symbols_and_codes() {
        assert_eq!(tolerant("$1,234.50", "en-US").unwrap(), "1234.50");
        assert_eq!(tolerant("USD 1,234.50", "en-US").unwrap(), "1234.50");
        assert_eq!(tolerant("1.234,50 €", "de-DE").unwrap(), "1234.50");
        assert_eq!(tolerant("1'234.50", "en-US").unwrap(), "1234.50");
        assert_eq!(tolerant("  -42  ", "en-US").unwrap(), "-42");
        assert_eq!(tolerant("+7", "en-US").unwrap(), "7");
    }

    #[test]
    fn test_tolerant_accounting_negative() {
        assert_eq!(tolerant("($1,234.50)", "en-US").unwrap(), "-1234.50");
        assert_eq!(tolerant("(-5)", "en-US").unwrap(), "-5");
        assert_eq!(tolerant("(+5)", "en-US").unwrap(), "-5");
    }

    #[test]
    fn test_minus_and_space_variants() {
        assert_eq!(tolerant("\u{2212}1\u{a0}234,50\u{a0}kr", "sv-SE").unwrap(), "-1234.50");
        assert_eq!(tolerant("-1\u{202f}234,50\u{a0}€", "fr-FR").unwrap(), "-1234.50");
    }

    #[test]
    fn test_localized_digits() {
        let text = "\u{200f}\u{061c}-\u{0661}\u{066c}\u{0662}\u{0663}\u{0664}\u{066b}\u{0665}\u{0660}\u{a0}ج.م.\u{200f}";
        assert_eq!(tolerant(text, "ar-EG").unwrap(), "-1234.50");
        assert_eq!(tolerant("\u{09E7}\u{09E8},\u{09E9}\u{09EA}\u{09EB}.\u{09E6}\u{09E6}৳", "bn-BD").unwrap(), "12345.00");
    }

    #[test]
    fn test_tolerant_rejects_garbage() {
        assert!(tolerant("", "en-US").is_err());
        assert!(tolerant("   ", "en-US").is_err());
        assert!(tolerant("abc", "en-US").is_err());
        assert!(tolerant("$", "en-US").is_err());
        assert!(tolerant("1.2.3", "en-US").is_err());
        assert!(tolerant("$.50", "en-US").is_err());
        assert_eq!(
            tolerant("--5", "en-US"),
            Err(MoneyError::MalformedNumber("--5".to_string()))
        );
    }

    #[test]
    fn test_tolerant_keeps_signs_and_separators_outside_digits() {
        for text in ["1,234.50-", "5.", "5 .", "1,234.50 +"] {
            assert_eq!(
                tolerant(text, "en-US"),
                Err(MoneyError::MalformedNumber(text.to_string())),
                "{text:?}"
            );
        }
        assert!(tolerant("5,", "de-DE").is_err());
        assert_eq!(tolerant("-$1,234.50", "en-US").unwrap(), "-1234.50");
    }

    #[test]
    fn test_tolerant_symbol_with_dots_before_digits() {
        assert_eq!(tolerant("ج.م.\u{200f}1,234.50", "en-US").unwrap(), "1234.50");
    }

    #[test]
    fn test_strict_accepts_canonical() {
        for locale in CldrLocaleSource::supported_locales() {
            assert_eq!(strict("1234567.89", locale).unwrap(), "1234567.89", "{locale}");
            assert_eq!(strict("-0.05", locale).unwrap(), "-0.05", "{locale}");
        }
    }

    #[test]
    fn test_strict_accepts_locale_grouping() {
        assert_eq!(strict("12,34,567.89", "en-IN").unwrap(), "1234567.89");
        assert_eq!(strict("1,234,567.89", "en-US").unwrap(), "1234567.89");
        assert_eq!(strict("-1.234.567,89", "de-DE").unwrap(), "-1234567.89");
        assert_eq!(strict("1\u{2019}234.50", "de-CH").unwrap(), "1234.50");
        assert_eq!(strict("1\u{a0}234,50", "sv-SE").unwrap(), "1234.50");
        assert_eq!(strict("(1,234.50)", "en-US").unwrap(), "-1234.50");
    }

    #[test]
    fn test_strict_grouping_wins_over_plain_numeral() {
        assert_eq!(strict("1.234", "de-DE").unwrap(), "1234");
        assert_eq!(strict("1.234.567", "de-DE").unwrap(), "1234567");
        assert_eq!(strict("1.234", "de-DE"), tolerant("1.234", "de-DE"));
        assert_eq!(strict("1234.56", "de-DE").unwrap(), "1234.56");
        assert_eq!(strict("0.05", "pt-BR").unwrap(), "0.05");
        assert_eq!(strict("1.234", "en-US").unwrap(), "1.234");
    }

    #[test]
    fn test_strict_rejections() {
        assert!(strict("$1,234.50", "en-US").is_err());
        assert!(strict("12,34.56", "en-US").is_err());
        assert!(strict("1,234,56", "en-US").is_err());
        assert!(strict("1234,567", "en-US").is_err());
        assert!(strict("1,234,567.89", "en-IN").is_err());
        assert!(strict("1-234", "en-US").is_err());
        assert!(strict("1,234.5.6", "en-US").is_err());
        assert!(strict("1,234.", "en-US").is_err());
        assert!(strict("1 234", "en-US").is_err());
        assert!(strict(",234", "en-US").is_err());
    }

    #[test]
    fn test_conforms_to_grouping() {
        let g = Grouping::THOUSANDS;
        assert!(conforms_to_grouping("1,234", ",", ".", g));
        assert!(conforms_to_grouping("123,456,789.01", ",", ".", g));
        assert!(!conforms_to_grouping("1234,567", ",", ".", g));
        assert!(!conforms_to_grouping("1,2345", ",", ".", g));
        assert!(!conforms_to_grouping("1,234.x", ",", ".", g));
        assert!(!conforms_to_grouping("1,234", ",", ".", Grouping::NONE));
    }
}
