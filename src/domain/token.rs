// ============================================================================
// Token Domain Model
// ============================================================================

use crate::numeric::{Quantity, QuantityResult};
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata describing a token ledger, as resolved by an external lookup
/// service.
///
/// The lookup itself is out of scope here; this type only carries the two
/// facts the numeric core consumes — most importantly the denomination under
/// which the ledger reports raw balances.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenInfo {
    /// Ledger ticker symbol (e.g. "ARM")
    pub ticker: String,

    /// Optional human-readable token name
    pub name: Option<String>,

    /// Number of fractional digits the ledger's raw balances carry
    pub denomination: u32,
}

impl TokenInfo {
    pub fn new(ticker: impl Into<String>, denomination: u32) -> Self {
        Self {
            ticker: ticker.into(),
            name: None,
            denomination,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True iff `value` is denominated exactly as this token's ledger
    /// reports balances.
    ///
    /// Quantities converted to another denomination are no longer quantities
    /// *of* this token, even when they represent the same number.
    #[inline]
    pub fn is_quantity_of(&self, value: &Quantity) -> bool {
        value.denomination() == self.denomination
    }

    /// Wrap a raw balance reported by the ledger into a quantity under this
    /// token's denomination.
    #[inline]
    pub fn quantity_from_raw(&self, raw: BigInt) -> Quantity {
        Quantity::from_raw(raw, self.denomination)
    }

    /// Parse a decimal string under this token's denomination.
    ///
    /// # Errors
    /// Returns `Parse` on non-numeric content.
    #[inline]
    pub fn quantity_from_str(&self, input: &str) -> QuantityResult<Quantity> {
        Quantity::from_str_denominated(input, self.denomination)
    }
}
