// ============================================================================
// Country Currency Table
// Static ISO-3166 -> ISO-4217 lookup with caller overrides
// ============================================================================

use crate::interfaces::CurrencyResolver;
use std::collections::HashMap;

/// Embedded country -> currency table
const COUNTRY_TO_CURRENCY: &[(&str, &str)] = &[
    ("AE", "AED"), ("AR", "ARS"), ("AT", "EUR"), ("AU", "AUD"), ("BD", "BDT"),
    ("BE", "EUR"), ("BH", "BHD"), ("BR", "BRL"), ("CA", "CAD"), ("CH", "CHF"),
    ("CL", "CLP"), ("CN", "CNY"), ("CO", "COP"), ("CZ", "CZK"), ("DE", "EUR"),
    ("DK", "DKK"), ("EG", "EGP"), ("ES", "EUR"), ("FI", "EUR"), ("FR", "EUR"),
    ("GB", "GBP"), ("GR", "EUR"), ("HK", "HKD"), ("HU", "HUF"), ("ID", "IDR"),
    ("IE", "EUR"), ("IL", "ILS"), ("IN", "INR"), ("IQ", "IQD"), ("IT", "EUR"),
    ("JO", "JOD"), ("JP", "JPY"), ("KE", "KES"), ("KR", "KRW"), ("KW", "KWD"),
    ("LI", "CHF"), ("LU", "EUR"), ("MX", "MXN"), ("MY", "MYR"), ("NG", "NGN"),
    ("NL", "EUR"), ("NO", "NOK"), ("NZ", "NZD"), ("OM", "OMR"), ("PH", "PHP"),
    ("PK", "PKR"), ("PL", "PLN"), ("PT", "EUR"), ("QA", "QAR"), ("RO", "RON"),
    ("SA", "SAR"), ("SE", "SEK"), ("SG", "SGD"), ("TH", "THB"), ("TN", "TND"),
    ("TR", "TRY"), ("TW", "TWD"), ("UA", "UAH"), ("US", "USD"), ("VN", "VND"),
    ("ZA", "ZAR"),
];

/// Table-backed [`CurrencyResolver`] with an override hook.
///
/// # Example
/// ```
/// use money_kit::currency::StaticCurrencyResolver;
/// use money_kit::interfaces::CurrencyResolver;
///
/// let resolver = StaticCurrencyResolver::new().with_override("XK", "EUR");
/// assert_eq!(resolver.resolve("in").as_deref(), Some("INR"));
/// assert_eq!(resolver.resolve("XK").as_deref(), Some("EUR"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCurrencyResolver {
    overrides: HashMap<String, String>,
}

impl StaticCurrencyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: map `country` to `currency`, shadowing the table
    pub fn with_override(mut self, country: &str, currency: &str) -> Self {
        self.overrides.insert(
            country.to_ascii_uppercase(),
            currency.to_ascii_uppercase(),
        );
        self
    }
}

impl CurrencyResolver for StaticCurrencyResolver {
    fn resolve(&self, country_code: &str) -> Option<String> {
        let code = country_code.trim().to_ascii_uppercase();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return None;
        }

        if let Some(currency) = self.overrides.get(&code) {
            return Some(currency.clone());
        }

        COUNTRY_TO_CURRENCY
            .binary_search_by(|(country, _)| (*country).cmp(code.as_str()))
            .ok()
            .map(|index| COUNTRY_TO_CURRENCY[index].1.to_string())
    }
}
