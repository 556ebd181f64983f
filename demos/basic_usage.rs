// ============================================================================
// Basic Usage Example
// ============================================================================

use num_bigint::BigInt;
use token_quantity::prelude::*;

fn main() {
    println!("=== Token Quantity Example ===\n");

    // Metadata and raw balances as an external token lookup would supply them
    let info = TokenInfo::new("ARM", 12).with_name("Armstrong");
    println!("Token: {} (denomination {})\n", info.ticker, info.denomination);

    let balances = [
        ("addr-a", BigInt::from(45_682_000_000_000i64)),
        ("addr-b", BigInt::from(2_200_000_000_000i64)),
        ("addr-c", BigInt::from(100_500_400_000_000i64)),
    ];

    println!("Balances:");
    let wrapped: Vec<Quantity> = balances
        .iter()
        .map(|(_, raw)| info.quantity_from_raw(raw.clone()))
        .collect();
    for ((address, _), quantity) in balances.iter().zip(&wrapped) {
        println!(
            "  {} -> {}",
            address,
            quantity.to_locale_string(&FormatOptions::new())
        );
    }

    let mut total = Quantity::zero(info.denomination);
    for quantity in &wrapped {
        total += quantity;
    }
    println!("\nTotal: {}", total);

    if let Some(largest) = Quantity::max_of(&wrapped) {
        println!("Largest balance: {}", largest);
    }

    // Pure operators widen to the larger denomination
    let price = info.quantity_from_str("2.2").expect("valid price literal");
    let value = &total * &price;
    println!("\nTotal at price {}: {}", price, value);

    // Narrowing deliberately discards low-order digits
    let cents = value.convert(2);
    println!("Truncated to 2 fractional digits: {}", cents);

    // The raw scaled integer is what a ledger message would carry
    println!("\nOutbound raw value: {}", value.raw());
}
