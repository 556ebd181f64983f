// ============================================================================
// Quantity
// Arbitrary-precision fixed-point values scaled by a decimal denomination
// ============================================================================

use super::errors::{QuantityError, QuantityResult};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scale factor for a denomination (10^n)
fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// A ledger quantity: an arbitrary-precision integer scaled by a decimal
/// denomination.
///
/// Internally stores `value × 10^denomination` as a [`BigInt`]. The scaled
/// integer (`raw`) is the only persisted state and is what crosses any
/// serialization boundary; the denomination says how many of its low-order
/// decimal digits are fractional.
///
/// Two operator families are provided:
/// - **Pure** operators (`+`, `-`, `*`, [`checked_div`](Self::checked_div),
///   ...) align both operands to the wider denomination first and keep that
///   denomination in the result, so they never lose precision on their own
///   account.
/// - **In-place** operators (`+=`, `-=`, `*=`,
///   [`checked_div_assign`](Self::checked_div_assign), ...) apply the same
///   result to the receiver and then convert it back to the receiver's
///   original denomination, truncating when the operand was wider.
///
/// # Example
/// ```ignore
/// use token_quantity::numeric::Quantity;
///
/// let price = Quantity::from_str_denominated("2.2", 12)?;   // 2.200000000000
/// let amount = Quantity::from_integer(3, 12);               // 3.000000000000
/// let total = &price * &amount;                             // 6.600000000000
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity {
    raw: BigInt,
    denomination: u32,
}

impl Quantity {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a pre-scaled raw integer under a known denomination, verbatim.
    ///
    /// This is the ingestion path for balances supplied by an external
    /// ledger lookup, which reports magnitudes as already-scaled integers.
    #[inline]
    pub fn from_raw(raw: BigInt, denomination: u32) -> Self {
        Self { raw, denomination }
    }

    /// The zero value at the given denomination.
    #[inline]
    pub fn zero(denomination: u32) -> Self {
        Self {
            raw: BigInt::zero(),
            denomination,
        }
    }

    /// The multiplicative identity (1) at the given denomination.
    #[inline]
    pub fn one(denomination: u32) -> Self {
        Self {
            raw: pow10(denomination),
            denomination,
        }
    }

    /// Create from a whole number of units.
    #[inline]
    pub fn from_integer<T: Into<BigInt>>(value: T, denomination: u32) -> Self {
        Self {
            raw: value.into() * pow10(denomination),
            denomination,
        }
    }

    /// Parse a decimal string under a target denomination.
    ///
    /// Grouping commas are stripped before parsing. Fractional digits beyond
    /// the denomination are discarded, never rounded; shorter fractions are
    /// right-padded with zeros. Empty input yields the zero value.
    ///
    /// # Errors
    /// Returns `Parse` on non-numeric content in either the integer or the
    /// fractional segment, or on more than one decimal point.
    pub fn from_str_denominated(input: &str, denomination: u32) -> QuantityResult<Self> {
        let cleaned = input.trim().replace(',', "");
        if cleaned.is_empty() {
            return Ok(Self::zero(denomination));
        }

        let (negative, body) = if let Some(rest) = cleaned.strip_prefix('-') {
            (true, rest)
        } else {
            (false, cleaned.strip_prefix('+').unwrap_or(&cleaned))
        };
        if body.is_empty() {
            return Err(QuantityError::Parse);
        }

        let mut parts = body.splitn(3, '.');
        let int_digits = parts.next().unwrap_or("");
        let frac_digits = parts.next();
        if parts.next().is_some() {
            return Err(QuantityError::Parse);
        }

        let int_value: BigInt = if int_digits.is_empty() {
            BigInt::zero()
        } else if int_digits.bytes().all(|b| b.is_ascii_digit()) {
            int_digits.parse().map_err(|_| QuantityError::Parse)?
        } else {
            return Err(QuantityError::Parse);
        };

        let frac_value: BigInt = match frac_digits {
            None => BigInt::zero(),
            Some(digits) => {
                if !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(QuantityError::Parse);
                }
                // Keep at most `denomination` digits; the rest is truncated.
                let kept = &digits[..digits.len().min(denomination as usize)];
                if kept.is_empty() {
                    BigInt::zero()
                } else {
                    let padded = format!("{:0<width$}", kept, width = denomination as usize);
                    padded.parse().map_err(|_| QuantityError::Parse)?
                }
            },
        };

        let mut raw = int_value * pow10(denomination) + frac_value;
        if negative {
            raw = -raw;
        }
        Ok(Self { raw, denomination })
    }

    /// Create from a native float by rendering it to its decimal string form
    /// and parsing that.
    ///
    /// The string round-trip is deliberate: scaling the binary float
    /// directly would bake its rounding error into the raw integer.
    ///
    /// # Errors
    /// Returns `InvalidOperand` for non-finite input, `Parse` if the
    /// rendering is not a plain decimal.
    pub fn from_f64(value: f64, denomination: u32) -> QuantityResult<Self> {
        if !value.is_finite() {
            return Err(QuantityError::InvalidOperand);
        }
        Self::from_str_denominated(&value.to_string(), denomination)
    }

    /// Create a whole-unit quantity from a float that must carry no
    /// fractional part.
    ///
    /// # Errors
    /// Returns `InvalidOperand` for non-finite input and `NonInteger` when
    /// the float has a fractional part.
    pub fn from_whole_f64(value: f64, denomination: u32) -> QuantityResult<Self> {
        if !value.is_finite() {
            return Err(QuantityError::InvalidOperand);
        }
        if value.fract() != 0.0 {
            return Err(QuantityError::NonInteger);
        }
        Self::from_str_denominated(&value.to_string(), denomination)
    }

    /// Converting copy: clone this value under a different denomination.
    ///
    /// Equivalent to `clone` + [`convert`](Self::convert).
    #[inline]
    pub fn with_denomination(&self, target: u32) -> Self {
        self.convert(target)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The underlying scaled integer.
    ///
    /// This is the exact value to serialize into outbound ledger messages;
    /// no string round-trip is involved.
    #[inline]
    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    /// Consume the quantity, returning the scaled integer.
    #[inline]
    pub fn into_raw(self) -> BigInt {
        self.raw
    }

    /// Number of low-order decimal digits of `raw` that are fractional.
    #[inline]
    pub fn denomination(&self) -> u32 {
        self.denomination
    }

    /// Whole-unit part, truncated toward zero. Carries the sign.
    #[inline]
    pub fn integer_part(&self) -> BigInt {
        &self.raw / pow10(self.denomination)
    }

    /// Magnitude of the fractional remainder (`|raw % 10^denomination|`).
    #[inline]
    pub fn fractional_part(&self) -> BigInt {
        (&self.raw % pow10(self.denomination)).abs()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.raw.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.raw.is_negative()
    }

    // ========================================================================
    // Denomination Conversion
    // ========================================================================

    /// Rescale to a target denomination.
    ///
    /// Widening (`target >= denomination`) is exact. Narrowing divides the
    /// raw integer, truncating toward zero — low-order digits are discarded
    /// and cannot be recovered.
    pub fn convert(&self, target: u32) -> Self {
        match target.cmp(&self.denomination) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self {
                raw: &self.raw * pow10(target - self.denomination),
                denomination: target,
            },
            Ordering::Less => {
                let divisor = pow10(self.denomination - target);
                if !(&self.raw % &divisor).is_zero() {
                    tracing::trace!(
                        from = self.denomination,
                        to = target,
                        "narrowing conversion discarded nonzero fractional digits"
                    );
                }
                Self {
                    raw: &self.raw / divisor,
                    denomination: target,
                }
            },
        }
    }

    /// In-place variant of [`convert`](Self::convert): overwrites both the
    /// raw integer and the denomination of the receiver.
    #[inline]
    pub fn convert_in_place(&mut self, target: u32) {
        *self = self.convert(target);
    }

    /// Align a set of quantities to the maximum denomination among them.
    ///
    /// Always lossless, since the maximum is at least every input's own
    /// denomination. Zero or one element is a no-op. This is the
    /// normalization step behind every binary operator and comparison.
    pub fn same_denomination(values: &mut [Self]) {
        let Some(max) = values.iter().map(|v| v.denomination).max() else {
            return;
        };
        for value in values.iter_mut() {
            if value.denomination != max {
                value.convert_in_place(max);
            }
        }
    }

    /// Raw integers of both operands at their common (maximum) denomination.
    fn aligned_raws(&self, other: &Self) -> (BigInt, BigInt, u32) {
        match self.denomination.cmp(&other.denomination) {
            Ordering::Equal => (self.raw.clone(), other.raw.clone(), self.denomination),
            Ordering::Less => (
                &self.raw * pow10(other.denomination - self.denomination),
                other.raw.clone(),
                other.denomination,
            ),
            Ordering::Greater => (
                self.raw.clone(),
                &other.raw * pow10(self.denomination - other.denomination),
                self.denomination,
            ),
        }
    }

    // ========================================================================
    // Arithmetic — pure family
    // ========================================================================
    // Each operation aligns denominations first and keeps the aligned
    // denomination in the result. Precision is only ever lost when a caller
    // explicitly converts back down (which the in-place family does).

    fn widening_add(&self, rhs: &Self) -> Self {
        let (a, b, denomination) = self.aligned_raws(rhs);
        Self {
            raw: a + b,
            denomination,
        }
    }

    fn widening_sub(&self, rhs: &Self) -> Self {
        let (a, b, denomination) = self.aligned_raws(rhs);
        Self {
            raw: a - b,
            denomination,
        }
    }

    fn widening_mul(&self, rhs: &Self) -> Self {
        // The product of two 10^D-scaled integers is scaled by 10^(2D);
        // one truncating division restores scale D.
        let (a, b, denomination) = self.aligned_raws(rhs);
        Self {
            raw: (a * b) / pow10(denomination),
            denomination,
        }
    }

    /// Divide, preserving the aligned denomination in the quotient.
    ///
    /// The dividend is pre-scaled by `10^D` before integer division, so the
    /// quotient keeps `D` fractional digits and truncates toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the divisor's raw value is zero.
    pub fn checked_div(&self, rhs: &Self) -> QuantityResult<Self> {
        let (a, b, denomination) = self.aligned_raws(rhs);
        if b.is_zero() {
            return Err(QuantityError::DivisionByZero);
        }
        Ok(Self {
            raw: (a * pow10(denomination)) / b,
            denomination,
        })
    }

    /// Remainder after aligned integer division. Sign follows the dividend,
    /// matching truncating division semantics.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the divisor's raw value is zero.
    pub fn checked_rem(&self, rhs: &Self) -> QuantityResult<Self> {
        let (a, b, denomination) = self.aligned_raws(rhs);
        if b.is_zero() {
            return Err(QuantityError::DivisionByZero);
        }
        Ok(Self {
            raw: a % b,
            denomination,
        })
    }

    /// Raise to a whole-number exponent.
    ///
    /// A zero exponent yields the multiplicative identity at this value's
    /// denomination. Positive exponents are computed by left-to-right
    /// repeated multiplication, truncating at each step exactly like `*`.
    /// Negative exponents take the reciprocal of the positive power.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when a negative exponent is applied to a
    /// value whose positive power truncates to zero.
    pub fn checked_pow(&self, exponent: i32) -> QuantityResult<Self> {
        if exponent == 0 {
            return Ok(Self::one(self.denomination));
        }
        let steps = i64::from(exponent).unsigned_abs();
        let mut result = self.clone();
        for _ in 1..steps {
            result = result.widening_mul(self);
        }
        if exponent > 0 {
            Ok(result)
        } else {
            Self::one(self.denomination).checked_div(&result)
        }
    }

    /// Absolute value. Denomination unchanged.
    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            raw: self.raw.abs(),
            denomination: self.denomination,
        }
    }

    /// Remove the fractional remainder, truncating toward zero.
    pub fn trunc(&self) -> Self {
        let scale = pow10(self.denomination);
        Self {
            raw: &self.raw - (&self.raw % &scale),
            denomination: self.denomination,
        }
    }

    /// Round toward negative infinity in whole units.
    pub fn floor(&self) -> Self {
        let scale = pow10(self.denomination);
        let remainder = &self.raw % &scale;
        let mut raw = &self.raw - &remainder;
        if remainder.is_negative() {
            raw -= &scale;
        }
        Self {
            raw,
            denomination: self.denomination,
        }
    }

    /// Round toward positive infinity in whole units.
    pub fn ceil(&self) -> Self {
        let scale = pow10(self.denomination);
        let remainder = &self.raw % &scale;
        let mut raw = &self.raw - &remainder;
        if remainder.is_positive() {
            raw += &scale;
        }
        Self {
            raw,
            denomination: self.denomination,
        }
    }

    /// Smallest of a list of quantities, compared after alignment.
    /// Empty input yields `None` rather than implying a default identity.
    #[inline]
    pub fn min_of(values: &[Self]) -> Option<Self> {
        values.iter().min().cloned()
    }

    /// Largest of a list of quantities, compared after alignment.
    /// Empty input yields `None` rather than implying a default identity.
    #[inline]
    pub fn max_of(values: &[Self]) -> Option<Self> {
        values.iter().max().cloned()
    }

    // ========================================================================
    // Arithmetic — in-place family
    // ========================================================================
    // Mirrors of the pure operators that narrow the result back to the
    // receiver's original denomination, trading precision for denomination
    // identity.

    /// In-place division; result is narrowed back to the receiver's
    /// original denomination.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the divisor's raw value is zero; the
    /// receiver is left untouched on error.
    pub fn checked_div_assign(&mut self, rhs: &Self) -> QuantityResult<()> {
        let target = self.denomination;
        let quotient = self.checked_div(rhs)?;
        *self = quotient.convert(target);
        Ok(())
    }

    /// In-place remainder; result is narrowed back to the receiver's
    /// original denomination.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the divisor's raw value is zero; the
    /// receiver is left untouched on error.
    pub fn checked_rem_assign(&mut self, rhs: &Self) -> QuantityResult<()> {
        let target = self.denomination;
        let remainder = self.checked_rem(rhs)?;
        *self = remainder.convert(target);
        Ok(())
    }

    /// In-place power; result is narrowed back to the receiver's original
    /// denomination.
    ///
    /// # Errors
    /// Returns `DivisionByZero` on the reciprocal path of a negative
    /// exponent; the receiver is left untouched on error.
    pub fn checked_pow_assign(&mut self, exponent: i32) -> QuantityResult<()> {
        let target = self.denomination;
        let power = self.checked_pow(exponent)?;
        *self = power.convert(target);
        Ok(())
    }

    /// Negate in place.
    #[inline]
    pub fn neg_assign(&mut self) {
        self.raw = -&self.raw;
    }

    /// Replace with the absolute value in place.
    #[inline]
    pub fn abs_assign(&mut self) {
        self.raw = self.raw.abs();
    }

    /// Truncate toward zero in place.
    #[inline]
    pub fn trunc_assign(&mut self) {
        *self = self.trunc();
    }

    /// Floor in place.
    #[inline]
    pub fn floor_assign(&mut self) {
        *self = self.floor();
    }

    /// Ceil in place.
    #[inline]
    pub fn ceil_assign(&mut self) {
        *self = self.ceil();
    }

    // ========================================================================
    // Canonical form
    // ========================================================================

    /// Trailing-zero-reduced representation: the smallest raw/denomination
    /// pair representing the same number. Used to keep `Hash` consistent
    /// with the denomination-reconciling `Eq`.
    fn canonical(&self) -> (BigInt, u32) {
        let ten = BigInt::from(10u32);
        let mut raw = self.raw.clone();
        let mut denomination = self.denomination;
        while denomination > 0 && !raw.is_zero() && (&raw % &ten).is_zero() {
            raw /= &ten;
            denomination -= 1;
        }
        if raw.is_zero() {
            denomination = 0;
        }
        (raw, denomination)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Quantity {
    /// Convert from a fixed-width [`rust_decimal::Decimal`] at an API
    /// boundary.
    ///
    /// The decimal's mantissa/scale pair is taken verbatim and then rescaled
    /// to the requested denomination; narrowing truncates like
    /// [`convert`](Self::convert).
    pub fn from_decimal(value: Decimal, denomination: u32) -> Self {
        let at_scale = Self {
            raw: BigInt::from(value.mantissa()),
            denomination: value.scale(),
        };
        at_scale.convert(denomination)
    }

    /// Convert to a fixed-width [`rust_decimal::Decimal`].
    ///
    /// # Errors
    /// Returns `Overflow` when the raw integer exceeds the 96-bit mantissa
    /// or the denomination exceeds the fixed-width scale limit. This is the
    /// one place the arbitrary-precision core meets a fixed-width target.
    pub fn to_decimal(&self) -> QuantityResult<Decimal> {
        let mantissa = self.raw.to_i128().ok_or(QuantityError::Overflow)?;
        Decimal::try_from_i128_with_scale(mantissa, self.denomination)
            .map_err(|_| QuantityError::Overflow)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Quantity {
    /// Exact integer equality after denomination alignment. No epsilon.
    fn eq(&self, other: &Self) -> bool {
        let (a, b, _) = self.aligned_raws(other);
        a == b
    }
}

impl Eq for Quantity {}

impl PartialOrd for Quantity {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.aligned_raws(other);
        a.cmp(&b)
    }
}

impl Hash for Quantity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (raw, denomination) = self.canonical();
        raw.hash(state);
        denomination.hash(state);
    }
}

impl Neg for &Quantity {
    type Output = Quantity;

    #[inline]
    fn neg(self) -> Quantity {
        Quantity {
            raw: -&self.raw,
            denomination: self.denomination,
        }
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    #[inline]
    fn neg(self) -> Quantity {
        Quantity {
            raw: -self.raw,
            denomination: self.denomination,
        }
    }
}

impl Add<&Quantity> for &Quantity {
    type Output = Quantity;

    #[inline]
    fn add(self, rhs: &Quantity) -> Quantity {
        self.widening_add(rhs)
    }
}

impl Add for Quantity {
    type Output = Quantity;

    #[inline]
    fn add(self, rhs: Quantity) -> Quantity {
        self.widening_add(&rhs)
    }
}

impl Sub<&Quantity> for &Quantity {
    type Output = Quantity;

    #[inline]
    fn sub(self, rhs: &Quantity) -> Quantity {
        self.widening_sub(rhs)
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    #[inline]
    fn sub(self, rhs: Quantity) -> Quantity {
        self.widening_sub(&rhs)
    }
}

impl Mul<&Quantity> for &Quantity {
    type Output = Quantity;

    #[inline]
    fn mul(self, rhs: &Quantity) -> Quantity {
        self.widening_mul(rhs)
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    #[inline]
    fn mul(self, rhs: Quantity) -> Quantity {
        self.widening_mul(&rhs)
    }
}

// Infallible Div/Rem for ergonomics (panic on zero divisor - use checked_* in
// production)
impl Div<&Quantity> for &Quantity {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: &Quantity) -> Quantity {
        self.checked_div(rhs).expect("Quantity division by zero")
    }
}

impl Div for Quantity {
    type Output = Quantity;

    #[inline]
    fn div(self, rhs: Quantity) -> Quantity {
        self.checked_div(&rhs).expect("Quantity division by zero")
    }
}

impl Rem<&Quantity> for &Quantity {
    type Output = Quantity;

    #[inline]
    fn rem(self, rhs: &Quantity) -> Quantity {
        self.checked_rem(rhs).expect("Quantity remainder by zero")
    }
}

impl Rem for Quantity {
    type Output = Quantity;

    #[inline]
    fn rem(self, rhs: Quantity) -> Quantity {
        self.checked_rem(&rhs).expect("Quantity remainder by zero")
    }
}

impl AddAssign<&Quantity> for Quantity {
    fn add_assign(&mut self, rhs: &Quantity) {
        let target = self.denomination;
        *self = self.widening_add(rhs).convert(target);
    }
}

impl AddAssign for Quantity {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity) {
        *self += &rhs;
    }
}

impl SubAssign<&Quantity> for Quantity {
    fn sub_assign(&mut self, rhs: &Quantity) {
        let target = self.denomination;
        *self = self.widening_sub(rhs).convert(target);
    }
}

impl SubAssign for Quantity {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity) {
        *self -= &rhs;
    }
}

impl MulAssign<&Quantity> for Quantity {
    fn mul_assign(&mut self, rhs: &Quantity) {
        let target = self.denomination;
        *self = self.widening_mul(rhs).convert(target);
    }
}

impl MulAssign for Quantity {
    #[inline]
    fn mul_assign(&mut self, rhs: Quantity) {
        *self *= &rhs;
    }
}

impl DivAssign<&Quantity> for Quantity {
    #[inline]
    fn div_assign(&mut self, rhs: &Quantity) {
        self.checked_div_assign(rhs).expect("Quantity division by zero")
    }
}

impl DivAssign for Quantity {
    #[inline]
    fn div_assign(&mut self, rhs: Quantity) {
        *self /= &rhs;
    }
}

impl RemAssign<&Quantity> for Quantity {
    #[inline]
    fn rem_assign(&mut self, rhs: &Quantity) {
        self.checked_rem_assign(rhs).expect("Quantity remainder by zero")
    }
}

impl RemAssign for Quantity {
    #[inline]
    fn rem_assign(&mut self, rhs: Quantity) {
        *self %= &rhs;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn q(raw: i128, denomination: u32) -> Quantity {
        Quantity::from_raw(BigInt::from(raw), denomination)
    }

    #[test]
    fn test_identities() {
        assert_eq!(Quantity::zero(5).raw(), &BigInt::zero());
        assert_eq!(Quantity::one(5).raw(), &BigInt::from(100_000));
        assert_eq!(Quantity::one(0).raw(), &BigInt::from(1));
    }

    #[test]
    fn test_from_integer() {
        let x = Quantity::from_integer(100, 9);
        assert_eq!(x.raw(), &BigInt::from(100_000_000_000i64));
        assert_eq!(x.integer_part(), BigInt::from(100));
        assert_eq!(x.fractional_part(), BigInt::zero());

        let y = Quantity::from_integer(-3, 2);
        assert_eq!(y.raw(), &BigInt::from(-300));
    }

    #[test]
    fn test_from_str_basic() {
        let x = Quantity::from_str_denominated("123.456", 5).unwrap();
        assert_eq!(x.raw(), &BigInt::from(12_345_600));

        let y = Quantity::from_str_denominated("42", 3).unwrap();
        assert_eq!(y.raw(), &BigInt::from(42_000));

        let z = Quantity::from_str_denominated("-0.001", 5).unwrap();
        assert_eq!(z.raw(), &BigInt::from(-100));
    }

    #[test]
    fn test_from_str_pads_short_fraction() {
        // denomination 5, fractional "55" scales as "55000"
        let x = Quantity::from_str_denominated("12456.55", 5).unwrap();
        assert_eq!(x.raw(), &BigInt::from(1_245_655_000i64));
    }

    #[test]
    fn test_from_str_truncates_excess_fraction() {
        // Digits beyond the 5th fractional place are dropped, never rounded.
        let x = Quantity::from_str_denominated("12456.000055", 5).unwrap();
        assert_eq!(x.raw(), &BigInt::from(1_245_600_005i64));
        assert_eq!(x.integer_part(), BigInt::from(12_456));
        assert_eq!(x.fractional_part(), BigInt::from(5));

        // Rounding would have produced 1.24; truncation keeps 1.23.
        let y = Quantity::from_str_denominated("1.239", 2).unwrap();
        assert_eq!(y.raw(), &BigInt::from(123));
    }

    #[test]
    fn test_from_str_strips_grouping_commas() {
        let x = Quantity::from_str_denominated("1,234,567.89", 2).unwrap();
        assert_eq!(x.raw(), &BigInt::from(123_456_789));
    }

    #[test]
    fn test_from_str_empty_is_zero() {
        assert!(Quantity::from_str_denominated("", 5).unwrap().is_zero());
        assert!(Quantity::from_str_denominated("   ", 5).unwrap().is_zero());
    }

    #[test]
    fn test_from_str_zero_denomination_drops_fraction() {
        let x = Quantity::from_str_denominated("1.9", 0).unwrap();
        assert_eq!(x.raw(), &BigInt::from(1));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            Quantity::from_str_denominated("abc", 5),
            Err(QuantityError::Parse)
        );
        assert_eq!(
            Quantity::from_str_denominated("1.2.3", 5),
            Err(QuantityError::Parse)
        );
        assert_eq!(
            Quantity::from_str_denominated("12x.4", 5),
            Err(QuantityError::Parse)
        );
        assert_eq!(
            Quantity::from_str_denominated("1.4x", 5),
            Err(QuantityError::Parse)
        );
        assert_eq!(
            Quantity::from_str_denominated("-", 5),
            Err(QuantityError::Parse)
        );
        assert_eq!(
            Quantity::from_str_denominated("1.-4", 5),
            Err(QuantityError::Parse)
        );
    }

    #[test]
    fn test_from_f64_goes_through_string_form() {
        let x = Quantity::from_f64(2.5, 3).unwrap();
        assert_eq!(x.raw(), &BigInt::from(2_500));

        // 0.1 has no exact binary form; the string path keeps the decimal
        // rendering rather than the binary expansion.
        let y = Quantity::from_f64(0.1, 12).unwrap();
        assert_eq!(y.raw(), &BigInt::from(100_000_000_000i64));

        assert_eq!(
            Quantity::from_f64(f64::NAN, 3),
            Err(QuantityError::InvalidOperand)
        );
        assert_eq!(
            Quantity::from_f64(f64::INFINITY, 3),
            Err(QuantityError::InvalidOperand)
        );
    }

    #[test]
    fn test_from_whole_f64() {
        let x = Quantity::from_whole_f64(50_000.0, 6).unwrap();
        assert_eq!(x, Quantity::from_integer(50_000, 6));

        assert_eq!(
            Quantity::from_whole_f64(1.5, 6),
            Err(QuantityError::NonInteger)
        );
        assert_eq!(
            Quantity::from_whole_f64(f64::NAN, 6),
            Err(QuantityError::InvalidOperand)
        );
    }

    #[test]
    fn test_convert_widening_is_exact() {
        let x = q(123, 2); // 1.23
        let wide = x.convert(5);
        assert_eq!(wide.raw(), &BigInt::from(123_000));
        assert_eq!(wide.denomination(), 5);
        assert_eq!(wide, x);
    }

    #[test]
    fn test_convert_narrowing_truncates_toward_zero() {
        let x = q(12_399, 4); // 1.2399
        let narrow = x.convert(2);
        assert_eq!(narrow.raw(), &BigInt::from(123)); // 1.23, not 1.24

        let y = q(-12_399, 4);
        assert_eq!(y.convert(2).raw(), &BigInt::from(-123)); // toward zero
    }

    #[test]
    fn test_convert_in_place() {
        let mut x = q(5, 1);
        x.convert_in_place(4);
        assert_eq!(x.raw(), &BigInt::from(5_000));
        assert_eq!(x.denomination(), 4);
    }

    #[test]
    fn test_same_denomination_aligns_to_max() {
        let mut values = [q(2, 0), q(55, 3), q(1, 1)];
        Quantity::same_denomination(&mut values);
        assert!(values.iter().all(|v| v.denomination() == 3));
        assert_eq!(values[0].raw(), &BigInt::from(2_000));
        assert_eq!(values[1].raw(), &BigInt::from(55));
        assert_eq!(values[2].raw(), &BigInt::from(100));
    }

    #[test]
    fn test_same_denomination_idempotent() {
        let mut values = [q(200, 4), q(55, 4)];
        Quantity::same_denomination(&mut values);
        let snapshot: Vec<Quantity> = values.to_vec();
        Quantity::same_denomination(&mut values);
        for (a, b) in values.iter().zip(snapshot.iter()) {
            assert_eq!(a.raw(), b.raw());
            assert_eq!(a.denomination(), b.denomination());
        }
    }

    #[test]
    fn test_same_denomination_trivial_inputs() {
        let mut empty: [Quantity; 0] = [];
        Quantity::same_denomination(&mut empty);

        let mut single = [q(7, 2)];
        Quantity::same_denomination(&mut single);
        assert_eq!(single[0].denomination(), 2);
    }

    #[test]
    fn test_equality_reconciles_denominations() {
        // raw 200 at 12 fractional digits equals raw 2 at 10 once aligned
        assert_eq!(q(200, 12), q(2, 10));
        assert_ne!(q(200, 12), q(200, 10));
    }

    #[test]
    fn test_ordering_reconciles_denominations() {
        assert!(q(15, 1) < q(160, 2)); // 1.5 < 1.60
        assert!(q(-5, 0) < q(1, 3));
        assert!(q(160, 2) <= q(16, 1));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(value: &Quantity) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(hash_of(&q(200, 12)), hash_of(&q(2, 10)));
        assert_eq!(hash_of(&Quantity::zero(0)), hash_of(&Quantity::zero(9)));
    }

    #[test]
    fn test_add_widens_to_max_denomination() {
        let a = q(125, 2); // 1.25
        let b = q(4, 5); // 0.00004
        let sum = &a + &b;
        assert_eq!(sum.denomination(), 5);
        assert_eq!(sum.raw(), &BigInt::from(125_004));
    }

    #[test]
    fn test_additive_inverse() {
        let v = q(-5_389, 2);
        assert!((&v + &(-&v)).is_zero());
    }

    #[test]
    fn test_sub() {
        let a = q(1_000, 3); // 1.000
        let b = q(1, 1); // 0.1
        assert_eq!((&a - &b).raw(), &BigInt::from(900));
    }

    #[test]
    fn test_mul_rescales_product() {
        let a = q(150, 2); // 1.5
        let b = q(150, 2); // 1.5
        let product = &a * &b;
        assert_eq!(product.raw(), &BigInt::from(225)); // 2.25
        assert_eq!(product.denomination(), 2);
    }

    #[test]
    fn test_multiplicative_identity() {
        let v = q(123_456, 4);
        assert_eq!(&v * &Quantity::one(v.denomination()), v);
        assert_eq!(&v * &Quantity::one(0), v);
    }

    #[test]
    fn test_div_preserves_aligned_denomination() {
        // 456.82 (denom 11) / 2.2 (denom 12) truncates the repeating
        // quotient at the aligned denomination.
        let dividend = q(45_682_000_000_000, 11);
        let divisor = q(2_200_000_000_000, 12);
        let quotient = dividend.checked_div(&divisor).unwrap();
        assert_eq!(quotient.denomination(), 12);
        assert_eq!(quotient.raw(), &BigInt::from(207_645_454_545_454i64));
    }

    #[test]
    fn test_div_by_zero() {
        let v = q(100, 2);
        assert_eq!(
            v.checked_div(&Quantity::zero(2)),
            Err(QuantityError::DivisionByZero)
        );
    }

    #[test]
    fn test_rem_sign_follows_dividend() {
        let a = q(-7, 0);
        let b = q(2, 0);
        assert_eq!(a.checked_rem(&b).unwrap().raw(), &BigInt::from(-1));
        assert_eq!(b.checked_rem(&a).unwrap().raw(), &BigInt::from(2));

        assert_eq!(
            a.checked_rem(&Quantity::zero(0)),
            Err(QuantityError::DivisionByZero)
        );
    }

    #[test]
    fn test_pow_zero_exponent_is_identity() {
        let v = q(123, 2);
        assert_eq!(v.checked_pow(0).unwrap(), Quantity::one(2));
    }

    #[test]
    fn test_pow_positive_is_repeated_multiplication() {
        let v = q(15, 1); // 1.5
        let direct = v.checked_pow(3).unwrap();
        let iterated = &(&v * &v) * &v;
        assert_eq!(direct, iterated);
        assert_eq!(direct.raw(), &BigInt::from(33)); // 3.375 truncated per step

        let whole = Quantity::from_integer(2, 6);
        assert_eq!(whole.checked_pow(10).unwrap(), Quantity::from_integer(1_024, 6));
    }

    #[test]
    fn test_pow_negative_is_reciprocal() {
        let v = Quantity::from_integer(2, 4);
        let inverse = v.checked_pow(-1).unwrap();
        assert_eq!(inverse.raw(), &BigInt::from(5_000)); // 0.5

        let tiny = q(1, 1); // 0.1 — cubing truncates to zero at denom 1
        assert_eq!(tiny.checked_pow(-3), Err(QuantityError::DivisionByZero));
    }

    #[test]
    fn test_neg_and_abs() {
        let v = q(-250, 2);
        assert_eq!((-&v).raw(), &BigInt::from(250));
        assert_eq!(v.abs().raw(), &BigInt::from(250));
        assert_eq!(q(250, 2).abs().raw(), &BigInt::from(250));
    }

    #[test]
    fn test_trunc() {
        assert_eq!(q(5_389, 2).trunc().raw(), &BigInt::from(5_300));
        assert_eq!(q(-5_389, 2).trunc().raw(), &BigInt::from(-5_300));
        assert_eq!(q(5_300, 2).trunc().raw(), &BigInt::from(5_300));
    }

    #[test]
    fn test_floor_rounds_toward_negative_infinity() {
        assert_eq!(q(-5_389, 2).floor().raw(), &BigInt::from(-5_400));
        assert_eq!(q(5_389, 2).floor().raw(), &BigInt::from(5_300));
        assert_eq!(q(-5_400, 2).floor().raw(), &BigInt::from(-5_400));
    }

    #[test]
    fn test_ceil_rounds_toward_positive_infinity() {
        assert_eq!(q(5_389, 2).ceil().raw(), &BigInt::from(5_400));
        assert_eq!(q(-5_389, 2).ceil().raw(), &BigInt::from(-5_300));
        assert_eq!(q(5_400, 2).ceil().raw(), &BigInt::from(5_400));
    }

    #[test]
    fn test_min_max_of() {
        let values = [q(15, 1), q(149, 2), q(2, 0)];
        assert_eq!(Quantity::min_of(&values).unwrap(), q(149, 2));
        assert_eq!(Quantity::max_of(&values).unwrap(), q(2, 0));

        assert_eq!(Quantity::min_of(&[]), None);
        assert_eq!(Quantity::max_of(&[]), None);
    }

    #[test]
    fn test_add_assign_narrows_to_receiver_denomination() {
        let mut receiver = q(125, 2); // 1.25
        let operand = q(4, 5); // 0.00004
        receiver += &operand;
        assert_eq!(receiver.denomination(), 2);
        assert_eq!(receiver.raw(), &BigInt::from(125)); // sum truncated back

        // The pure operator on the same inputs keeps the wider denomination.
        let pure = &q(125, 2) + &operand;
        assert_eq!(pure.denomination(), 5);
        assert_eq!(pure.raw(), &BigInt::from(125_004));
    }

    #[test]
    fn test_sub_mul_assign() {
        let mut x = q(300, 2); // 3.00
        x -= &q(5, 1); // - 0.5
        assert_eq!(x, q(250, 2));

        x *= &q(2_000, 3); // * 2.000
        assert_eq!(x.denomination(), 2);
        assert_eq!(x.raw(), &BigInt::from(500));
    }

    #[test]
    fn test_checked_div_assign() {
        let mut x = q(100, 2); // 1.00
        x.checked_div_assign(&q(3_000, 3)).unwrap(); // / 3.000
        assert_eq!(x.denomination(), 2);
        assert_eq!(x.raw(), &BigInt::from(33)); // 0.33

        let mut y = q(100, 2);
        assert_eq!(
            y.checked_div_assign(&Quantity::zero(2)),
            Err(QuantityError::DivisionByZero)
        );
        assert_eq!(y, q(100, 2)); // untouched on error
    }

    #[test]
    fn test_checked_pow_assign() {
        let mut x = q(15, 1); // 1.5
        x.checked_pow_assign(2).unwrap();
        assert_eq!(x, q(22, 1)); // 2.25 truncated at denomination 1
    }

    #[test]
    fn test_unary_assigns() {
        let mut x = q(-5_389, 2);
        x.neg_assign();
        assert_eq!(x.raw(), &BigInt::from(5_389));
        x.neg_assign();
        x.abs_assign();
        assert_eq!(x.raw(), &BigInt::from(5_389));

        let mut y = q(-5_389, 2);
        y.floor_assign();
        assert_eq!(y.raw(), &BigInt::from(-5_400));

        let mut z = q(5_389, 2);
        z.ceil_assign();
        assert_eq!(z.raw(), &BigInt::from(5_400));

        let mut w = q(5_389, 2);
        w.trunc_assign();
        assert_eq!(w.raw(), &BigInt::from(5_300));
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(12_345, 2); // 123.45
        let x = Quantity::from_decimal(d, 9);
        assert_eq!(x.raw(), &BigInt::from(123_450_000_000i64));

        // Narrowing a wider decimal truncates like convert()
        let e = Decimal::new(12_399, 4); // 1.2399
        assert_eq!(Quantity::from_decimal(e, 2).raw(), &BigInt::from(123));
    }

    #[test]
    fn test_to_decimal_round_trip() {
        let x = q(123_450_000, 6);
        let d = x.to_decimal().unwrap();
        assert_eq!(d.to_string(), "123.450000");
        assert_eq!(Quantity::from_decimal(d, 6), x);
    }

    #[test]
    fn test_to_decimal_overflow_on_fixed_width_target() {
        let huge = Quantity::from_raw(BigInt::from(10u32).pow(50), 12);
        assert_eq!(huge.to_decimal(), Err(QuantityError::Overflow));

        let deep = q(1, 40);
        assert_eq!(deep.to_decimal(), Err(QuantityError::Overflow));
    }

    #[test]
    fn test_with_denomination_copy() {
        let x = q(125, 2);
        let wide = x.with_denomination(6);
        assert_eq!(wide.denomination(), 6);
        assert_eq!(wide, x);
        assert_eq!(x.denomination(), 2); // source untouched
    }
}
