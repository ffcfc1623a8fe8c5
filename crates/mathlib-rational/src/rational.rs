//! Exact fractions over `i64`.
//!
//! This module provides the rational value type used as an exact
//! coefficient domain for polynomial evaluation.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::MathError;

/// An exact fraction over machine integers.
///
/// Rationals are always stored in lowest terms with a positive denominator;
/// the sign is carried by the numerator and zero is stored as `0/1`. All
/// intermediate arithmetic widens to `i128`, so a result is exact whenever
/// the reduced fraction fits back into `i64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// The pair is reduced by its greatest common divisor and the sign is
    /// normalized onto the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if the denominator is zero, and
    /// [`MathError::ArithmeticOverflow`] if the normalized pair does not fit
    /// in `i64` (only possible for `new(i64::MIN, d)` with `d < 0`).
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, MathError> {
        Self::from_i128(i128::from(numerator), i128::from(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Reduces a widened pair and narrows it back to `i64` fields.
    ///
    /// Callers only pass sums and products of `i64` values, which stay well
    /// clear of the `i128` range, so the internal negation cannot overflow.
    fn from_i128(numerator: i128, denominator: i128) -> Result<Self, MathError> {
        if denominator == 0 {
            return Err(MathError::DivisionByZero);
        }

        let (n, d) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        // d > 0, so the gcd is never zero even when n is.
        let g = gcd(n.unsigned_abs(), d.unsigned_abs());
        let n = n / i128::try_from(g).map_err(|_| MathError::ArithmeticOverflow)?;
        let d = d / i128::try_from(g).map_err(|_| MathError::ArithmeticOverflow)?;

        let num = i64::try_from(n).map_err(|_| MathError::ArithmeticOverflow)?;
        let den = i64::try_from(d).map_err(|_| MathError::ArithmeticOverflow)?;
        Ok(Self { num, den })
    }

    /// Returns the numerator (carries the sign).
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.num
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.den
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub const fn signum(&self) -> i8 {
        if self.num == 0 {
            0
        } else if self.num > 0 {
            1
        } else {
            -1
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if the rational is zero, and
    /// [`MathError::ArithmeticOverflow`] if the flipped pair does not fit
    /// in `i64`.
    pub fn recip(&self) -> Result<Self, MathError> {
        Self::from_i128(i128::from(self.den), i128::from(self.num))
    }

    /// Computes `self + rhs` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ArithmeticOverflow`] if the reduced sum does not
    /// fit in `i64`.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MathError> {
        let n = i128::from(self.num) * i128::from(rhs.den)
            + i128::from(rhs.num) * i128::from(self.den);
        let d = i128::from(self.den) * i128::from(rhs.den);
        Self::from_i128(n, d)
    }

    /// Computes `self - rhs` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ArithmeticOverflow`] if the reduced difference
    /// does not fit in `i64`.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MathError> {
        let n = i128::from(self.num) * i128::from(rhs.den)
            - i128::from(rhs.num) * i128::from(self.den);
        let d = i128::from(self.den) * i128::from(rhs.den);
        Self::from_i128(n, d)
    }

    /// Computes `self * rhs` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ArithmeticOverflow`] if the reduced product does
    /// not fit in `i64`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, MathError> {
        let n = i128::from(self.num) * i128::from(rhs.num);
        let d = i128::from(self.den) * i128::from(rhs.den);
        Self::from_i128(n, d)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::from_integer(0)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Cross-multiplied comparison in `i128`.
    ///
    /// Denominators are positive by invariant, so `a/b < c/d` iff
    /// `a*d < c*b`; the widening makes the products exact for any `i64`
    /// operands.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.num) * i128::from(other.den);
        let rhs = i128::from(other.num) * i128::from(self.den);
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

// Operator impls delegate to the checked forms. The panics below are the
// documented overflow policy for operator syntax; fallible callers use
// `checked_add`/`checked_sub`/`checked_mul` directly.

impl Add for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the reduced sum does not fit in `i64`.
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).expect("rational addition overflowed i64")
    }
}

impl Add for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if the reduced sum does not fit in `i64`.
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("rational addition overflowed i64")
    }
}

impl Sub for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the reduced difference does not fit in `i64`.
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).expect("rational subtraction overflowed i64")
    }
}

impl Sub for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if the reduced difference does not fit in `i64`.
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("rational subtraction overflowed i64")
    }
}

impl Mul for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the reduced product does not fit in `i64`.
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(&rhs).expect("rational multiplication overflowed i64")
    }
}

impl Mul for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if the reduced product does not fit in `i64`.
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("rational multiplication overflowed i64")
    }
}

impl Neg for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the negated numerator does not fit in `i64` (only for
    /// `i64::MIN` numerators).
    fn neg(self) -> Self::Output {
        Self::from_i128(-i128::from(self.num), i128::from(self.den))
            .expect("rational negation overflowed i64")
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}
