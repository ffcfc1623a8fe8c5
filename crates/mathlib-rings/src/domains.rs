//! The concrete coefficient domains.
//!
//! One `Semiring` implementation per domain observed at the evaluation call
//! sites: double-precision floats, machine integers, exact rationals, and
//! complex numbers.

use mathlib_rational::Rational;
use num_complex::Complex;
use num_traits::{One, Zero};

use crate::traits::Semiring;

/// IEEE 754 double-precision arithmetic.
impl Semiring for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self * rhs
    }
}

/// Machine integers with WRAPPING overflow semantics.
///
/// Overflow wraps around two's complement rather than panicking, so
/// `Semiring::add`/`mul` stay total; callers needing range guarantees should
/// evaluate over `Rational` instead.
impl Semiring for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn add(&self, rhs: &Self) -> Self {
        self.wrapping_add(*rhs)
    }

    fn mul(&self, rhs: &Self) -> Self {
        self.wrapping_mul(*rhs)
    }
}

/// Exact fraction arithmetic.
///
/// Delegates to the `Rational` operators, which panic on `i64` overflow of
/// the reduced result (see `mathlib_rational::Rational::checked_add`).
impl Semiring for Rational {
    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self * rhs
    }
}

/// Complex numbers over double-precision floats.
impl Semiring for Complex<f64> {
    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    fn one() -> Self {
        Complex::new(1.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self * rhs
    }
}
