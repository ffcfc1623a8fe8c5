//! Algebraic capability traits.
//!
//! This module defines the coefficient-domain contract required by the
//! generic polynomial evaluator.

use std::fmt::Debug;

/// A semiring is a set with addition and multiplication operations.
///
/// This is the minimal capability a polynomial coefficient domain needs:
/// evaluation uses only `add`, `mul`, and the additive identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
///
/// Approximate domains (`f64`, `Complex<f64>`) satisfy the laws only up to
/// rounding, which is why the bound is `PartialEq` rather than `Eq`.
///
/// `add` and `mul` are trait methods rather than operator supertraits so a
/// domain can carry semantics the native operators lack (the `i64` domain
/// wraps instead of panicking in debug builds).
pub trait Semiring: Clone + PartialEq + Debug {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Computes `self + rhs`.
    #[must_use]
    fn add(&self, rhs: &Self) -> Self;

    /// Computes `self * rhs`.
    #[must_use]
    fn mul(&self, rhs: &Self) -> Self;
}
