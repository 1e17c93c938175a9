// ============================================================================
// Currency Resolver Interface
// Maps ISO-3166 country codes to ISO-4217 currency codes
// ============================================================================

/// Lookup of the currency used by a country.
///
/// Implementations return `None` for codes they do not know or that are not
/// two ASCII letters.
pub trait CurrencyResolver: Send + Sync {
    /// Resolve a two-letter country code (case-insensitive).
    fn resolve(&self, country_code: &str) -> Option<String>;
}

impl<F> CurrencyResolver for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn resolve(&self, country_code: &str) -> Option<String> {
        self(country_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_resolver() {
        let resolver = |code: &str| (code == "XK").then(|| "EUR".to_string());
        assert_eq!(resolver.resolve("XK"), Some("EUR".to_string()));
        assert_eq!(resolver.resolve("US"), None);
    }
}
