// ============================================================================
// Quantity Formatting
// Human-facing rendering and the lossy numeric escape hatch
// ============================================================================

use crate::numeric::Quantity;
use num_traits::Zero;
use std::fmt;
use thousands::Separable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Format Options
// ============================================================================

/// Options for locale-style rendering of a quantity.
///
/// Locale facilities typically round excess fractional digits; ledger
/// rendering must truncate instead, so the fractional digits are handled
/// manually and only the integer part is delegated to digit grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Zero-pad the fraction up to this many digits
    pub minimum_fraction_digits: usize,

    /// Truncate (never round) the fraction beyond this many digits.
    /// `None` means the value's own denomination.
    pub maximum_fraction_digits: Option<usize>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self {
            minimum_fraction_digits: 0,
            maximum_fraction_digits: None,
        }
    }

    pub fn with_minimum_fraction_digits(mut self, digits: usize) -> Self {
        self.minimum_fraction_digits = digits;
        self
    }

    pub fn with_maximum_fraction_digits(mut self, digits: usize) -> Self {
        self.maximum_fraction_digits = Some(digits);
        self
    }
}

impl Default for FormatOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl Quantity {
    /// Fractional digits zero-padded on the left to the full denomination.
    fn fraction_digits(&self) -> String {
        let width = self.denomination() as usize;
        if width == 0 {
            String::new()
        } else {
            format!("{:0>width$}", self.fractional_part().to_string(), width = width)
        }
    }

    /// Render with grouped integer digits and configurable fraction width.
    ///
    /// The integer part is grouped with thousands separators; fractional
    /// digits are truncated beyond `maximum_fraction_digits` and zero-padded
    /// up to `minimum_fraction_digits`.
    pub fn to_locale_string(&self, options: &FormatOptions) -> String {
        let digits = self.fraction_digits();
        let max = options.maximum_fraction_digits.unwrap_or(digits.len());
        let truncated = &digits[..digits.len().min(max)];
        let mut kept = truncated.trim_end_matches('0').to_string();
        while kept.len() < options.minimum_fraction_digits {
            kept.push('0');
        }

        let grouped = self.integer_part().magnitude().separate_with_commas();
        let sign = if self.is_negative() { "-" } else { "" };
        if kept.is_empty() {
            format!("{}{}", sign, grouped)
        } else {
            format!("{}{}.{}", sign, grouped, kept)
        }
    }

    /// Lossy numeric escape hatch: renders to a string, then parses that as
    /// a native float. Precision loss on this path is accepted; the internal
    /// representation is never affected.
    pub fn to_f64(&self) -> f64 {
        self.to_string()
            .parse()
            .expect("rendered quantity is a valid float literal")
    }
}

impl fmt::Display for Quantity {
    /// Plain digits, sign preserved; fractional digits padded to the
    /// denomination and trailing zeros stripped. The zero value renders as
    /// `"0"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.fraction_digits();
        let trimmed = digits.trim_end_matches('0');
        let int_part = self.integer_part();

        if trimmed.is_empty() {
            write!(f, "{}", int_part)
        } else if self.is_negative() && int_part.is_zero() {
            // Handle -0.xxx case
            write!(f, "-0.{}", trimmed)
        } else {
            write!(f, "{}.{}", int_part, trimmed)
        }
    }
}

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quantity({}, raw={}, denom={})",
            self,
            self.raw(),
            self.denomination()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
