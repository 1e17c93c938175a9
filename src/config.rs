// ============================================================================
// Money Configuration
// Currency, scale, rounding and locale settings for constructing Money values
// ============================================================================

use crate::currency::{minor_unit_digits, normalize_currency_code};
use crate::interfaces::{CurrencyResolver, LocaleSource};
use crate::locale::{CldrLocaleSource, DEFAULT_LOCALE};
use crate::numeric::{MoneyError, MoneyResult, RoundingMode};
use std::fmt;
use std::sync::Arc;

/// Settings shared by the `Money` constructors.
#[derive(Clone)]
pub struct MoneyConfig {
    /// ISO-4217 currency code (any case; normalized on use)
    pub currency: String,

    /// Optional: explicit minor-unit digits
    /// None means the currency's ISO-4217 minor unit
    pub scale: Option<u32>,

    /// Rounding applied when a major-unit amount is quantized
    pub rounding_mode: RoundingMode,

    /// Optional: locale used for parsing and as the display hint
    /// None means en-US for parsing and no display hint
    pub locale: Option<String>,

    /// Validate grouping exactly instead of tolerating symbols and spacing
    pub strict_parse: bool,

    /// Source of separators, digits and currency affixes
    pub locale_source: Arc<dyn LocaleSource>,
}

impl MoneyConfig {
    /// Create a new configuration for `currency` with defaults
    pub fn new(currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
            scale: None,
            rounding_mode: RoundingMode::default(),
            locale: None,
            strict_parse: false,
            locale_source: Arc::new(CldrLocaleSource),
        }
    }

    /// Resolve the currency for a two-letter country code.
    ///
    /// # Errors
    /// Returns `UnknownCountry` if the resolver has no entry for `country`.
    pub fn for_country(country: &str, resolver: &dyn CurrencyResolver) -> MoneyResult<Self> {
        resolver
            .resolve(country)
            .map(|currency| Self::new(&currency))
            .ok_or_else(|| MoneyError::UnknownCountry(country.to_string()))
    }

    /// Builder method: Set minor-unit digits
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// Builder method: Set locale
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    /// Builder method: Enable or disable strict parsing
    pub fn with_strict_parse(mut self, strict: bool) -> Self {
        self.strict_parse = strict;
        self
    }

    /// Builder method: Replace the locale source
    pub fn with_locale_source(mut self, source: Arc<dyn LocaleSource>) -> Self {
        self.locale_source = source;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        normalize_currency_code(&self.currency)?;

        if let Some(locale) = &self.locale {
            let well_formed = !locale.is_empty()
                && locale
                    .split(['-', '_'])
                    .all(|subtag| !subtag.is_empty() && subtag.bytes().all(|b| b.is_ascii_alphanumeric()));
            if !well_formed {
                return Err(MoneyError::InvalidLocale(locale.clone()));
            }
        }

        Ok(())
    }

    /// Upper-cased, validated currency code
    pub fn currency_code(&self) -> MoneyResult<String> {
        normalize_currency_code(&self.currency)
    }

    /// Explicit scale, else the currency's minor-unit digits
    pub fn effective_scale(&self) -> u32 {
        self.scale
            .unwrap_or_else(|| minor_unit_digits(&self.currency))
    }

    /// Locale used when parsing text
    pub fn parse_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}

impl fmt::Debug for MoneyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoneyConfig")
            .field("currency", &self.currency)
            .field("scale", &self.scale)
            .field("rounding_mode", &self.rounding_mode)
            .field("locale", &self.locale)
            .field("strict_parse", &self.strict_parse)
            .field("locale_source", &self.locale_source.name())
            .finish()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MoneyConfig {
    /// Ledger configuration
    /// - Banker's rounding (halfEven) to avoid systematic drift
    pub fn ledger(currency: &str) -> Self {
        Self::new(currency).with_rounding_mode(RoundingMode::HalfEven)
    }

    /// Retail display configuration
    /// - halfExpand rounding
    /// - Display locale attached to every value
    pub fn retail(currency: &str, locale: &str) -> Self {
        Self::new(currency).with_locale(locale)
    }

    /// Form input configuration
    /// - Strict parsing against the locale's grouping
    pub fn strict_input(currency: &str, locale: &str) -> Self {
        Self::new(currency)
            .with_locale(locale)
            .with_strict_parse(true)
    }
}
