// ============================================================================
// Locale Module
// Format and parse money amounts using rules derived from a LocaleSource
// ============================================================================
//
// Both directions query the same LocaleSource for separators, digit glyphs
// and grouping widths, so anything `format_minor` produces is accepted by
// `parse_localized` in tolerant mode for the same locale.

mod cldr;
mod format;
mod parse;
mod symbols;

pub use cldr::{CldrLocaleSource, DEFAULT_LOCALE};
pub use format::{format_minor, render_numeral};
pub use parse::parse_localized;
pub use symbols::{Affix, CurrencyAffixes, Grouping, LocaleSymbols};
