// ============================================================================
// Interfaces Module
// Contracts for the collaborators the core consumes
// ============================================================================

mod currency_resolver;
mod locale_source;

pub use currency_resolver::CurrencyResolver;
pub use locale_source::{LocaleSource, NumberPart, NumberStyle, PartKind};
