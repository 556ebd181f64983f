// ============================================================================
// Domain Models Module
// Value objects for the token ledger boundary
// ============================================================================

pub mod token;

pub use token::TokenInfo;
