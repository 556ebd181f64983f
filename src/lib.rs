// ============================================================================
// Token Quantity Library
// Arbitrary-precision denominated quantities for ledger computation
// ============================================================================

//! # Token Quantity
//!
//! Exact decimal quantities for token ledgers: an arbitrary-precision
//! integer scaled by a declared number of fractional digits (the
//! "denomination"), the fixed-point-over-bigint pattern ledgers use so that
//! only scaled integers ever cross the wire.
//!
//! ## Features
//!
//! - **Lossless by default**: pure operators align operands to the wider
//!   denomination and keep it; precision is lost only on explicit narrowing
//! - **Truncation, never rounding**: parsing, narrowing conversion and
//!   division all discard excess digits deterministically
//! - **Two operator families**: pure operators return new values at the
//!   aligned denomination; in-place operators narrow back to the receiver's
//!   original denomination
//! - **String-mediated float boundary**: native floats enter through their
//!   decimal rendering, so binary rounding error never reaches the raw
//!   integer
//!
//! ## Example
//!
//! ```rust
//! use token_quantity::prelude::*;
//! use num_bigint::BigInt;
//!
//! // Denomination and raw balances arrive from an external token lookup.
//! let info = TokenInfo::new("ARM", 12);
//! let balance = info.quantity_from_raw(BigInt::from(45_682_000_000_000u64));
//! let price = info.quantity_from_str("2.2").unwrap();
//!
//! assert_eq!(balance.to_string(), "45.682");
//! assert!(info.is_quantity_of(&balance));
//!
//! let total = &balance * &price;
//! assert_eq!(total.to_string(), "100.5004");
//!
//! // The raw scaled integer is what goes back out to the ledger.
//! assert_eq!(total.raw(), &BigInt::from(100_500_400_000_000u64));
//! ```

pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::TokenInfo;
    pub use crate::numeric::{FormatOptions, Quantity, QuantityError, QuantityResult};
}
