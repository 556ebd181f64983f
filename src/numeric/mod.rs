// ============================================================================
// Numeric Module
// Arbitrary-precision denominated arithmetic for ledger quantities
// ============================================================================
//
// This module provides:
// - Quantity: arbitrary-precision value scaled by a decimal denomination
// - FormatOptions: locale-style rendering controls
// - QuantityError: error types for construction and arithmetic
//
// Design principles:
// - No floating-point arithmetic anywhere in the representation
// - Pure operators widen to the larger denomination and never lose precision
// - Precision is lost only on explicit narrowing (conversion or the
//   in-place operator family), by truncation rather than rounding

mod errors;
mod format;
mod quantity;

pub use errors::{QuantityError, QuantityResult};
pub use format::FormatOptions;
pub use quantity::Quantity;
