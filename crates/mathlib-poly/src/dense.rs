//! Dense univariate polynomials.
//!
//! This module provides a generic evaluator over any `Semiring` coefficient
//! domain.

use mathlib_rings::Semiring;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order: index 0 is the
/// constant term, index i the coefficient of x^i. The empty sequence is the
/// zero polynomial.
///
/// The stored sequence is exactly what the caller supplied: trailing zero
/// coefficients are kept, so `coeffs()` round-trips `set_coeffs` verbatim.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<R: Semiring> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<R>,
}

impl<R: Semiring> Polynomial<R> {
    /// Creates the zero polynomial (no coefficients).
    #[must_use]
    pub const fn new() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates a polynomial from coefficients in ascending degree order.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<R>) -> Self {
        Self { coeffs }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self {
            coeffs: vec![R::zero(), R::one()],
        }
    }

    /// Replaces the coefficient sequence wholesale.
    ///
    /// The empty sequence is accepted and makes this the zero polynomial.
    pub fn set_coeffs(&mut self, coeffs: Vec<R>) {
        self.coeffs = coeffs;
    }

    /// Returns the coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Consumes the polynomial and returns its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<R> {
        self.coeffs
    }

    /// Returns the degree, or `None` for the zero polynomial.
    ///
    /// Trailing zero coefficients are ignored, so `[1, 2, 0]` has degree 1.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_zero())
    }

    /// Returns true if every stored coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Semiring::is_zero)
    }

    /// Evaluates the polynomial at a point using Horner's method.
    ///
    /// The accumulator starts from the highest-degree coefficient and folds
    /// downward (`acc = acc*x + c_i`), giving O(n) multiplications.
    ///
    /// An empty coefficient sequence returns the additive identity without
    /// touching `x` at all, and a single coefficient is returned as-is, so
    /// non-finite evaluation points are inert in both cases.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut rev = self.coeffs.iter().rev();
        let Some(lead) = rev.next() else {
            return R::zero();
        };

        let mut acc = lead.clone();
        for c in rev {
            acc = acc.mul(x).add(c);
        }
        acc
    }
}

impl<R: Semiring> Default for Polynomial<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Semiring> std::fmt::Display for Polynomial<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c:?}"),
                1 => format!("{c:?}*x"),
                _ => format!("{c:?}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
