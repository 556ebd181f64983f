// ============================================================================
// Quantity Errors
// Error types for denominated decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or operating on quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityError {
    /// Decimal string contained non-numeric content
    Parse,
    /// Whole-number construction from a float with a fractional part
    NonInteger,
    /// Operand is not a usable value (e.g. a non-finite float)
    InvalidOperand,
    /// Attempted division by zero
    DivisionByZero,
    /// Value does not fit a fixed-width target representation
    Overflow,
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityError::Parse => {
                write!(f, "parse error: could not interpret input as a decimal")
            },
            QuantityError::NonInteger => {
                write!(f, "non-integer: whole-number construction from a fractional float")
            },
            QuantityError::InvalidOperand => write!(f, "invalid operand: value is not usable"),
            QuantityError::DivisionByZero => write!(f, "division by zero"),
            QuantityError::Overflow => write!(
                f,
                "overflow: value does not fit the fixed-width target"
            ),
        }
    }
}

impl std::error::Error for QuantityError {}

/// Result type alias for quantity operations
pub type QuantityResult<T> = Result<T, QuantityError>;
