// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `--features logging` to see locale fallback and parse rejections.

use money_kit::prelude::*;
use serde_json::json;

fn main() -> MoneyResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Money Kit Example ===\n");

    // Parse a price typed by a German customer
    let price = Money::parse("1.299,90 €", "EUR", "de-DE")?;
    println!("Parsed price:      {}", price);

    // Quantity and a ledger-style discount
    let quantity = price.multiply("3")?;
    let discount = quantity.multiply_with("0.15", None, RoundingMode::HalfEven)?;
    let total = quantity.subtract(&discount)?;

    println!("Line total:        {}", quantity.format(None));
    println!("Discount (15%):    {}", discount.format(None));
    println!("Total:             {}", total.format(None));

    // Same amount in other locales
    println!("\n=== Locale Rendering ===");
    for locale in ["en-US", "fr-FR", "de-CH", "ar-EG", "bn-BD"] {
        println!("  {:<6} {}", locale, total.format(Some(locale)));
    }

    // Split the bill three ways
    println!("\n=== Allocation ===");
    let shares = total.allocate(&[1, 1, 1])?;
    for (index, share) in shares.iter().enumerate() {
        println!("  share {}: {}", index, share.format(None));
    }

    // Strict form input against Indian grouping
    println!("\n=== Strict Parsing ===");
    let form = MoneyConfig::strict_input("INR", "en-IN");
    match Money::parse_with("12,34,567.89", &form) {
        Ok(amount) => println!("  accepted: {}", amount.format(None)),
        Err(e) => println!("  rejected: {}", e),
    }
    match Money::parse_with("1,234,567.89", &form) {
        Ok(amount) => println!("  accepted: {}", amount.format(None)),
        Err(e) => println!("  rejected: {}", e),
    }

    // Audit trail
    println!("\n=== Canonical Trace ===");
    let audited = shares[0].with_trace(&json!({"invoice": "INV-2024-001", "payer": 1}))?;
    println!("{}", audited.to_canonical_string()?);

    Ok(())
}
