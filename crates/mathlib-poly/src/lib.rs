//! # mathlib-poly
//!
//! Generic polynomial evaluation for mathlib.
//!
//! This crate provides a dense univariate polynomial written once over the
//! `Semiring` coefficient contract and instantiated for every domain in
//! `mathlib-rings` (`f64`, `i64`, `Rational`, `Complex<f64>`).
//!
//! Evaluation uses Horner's method: O(n) multiplications and numerically
//! stable accumulation for the floating-point domains.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;


pub use dense::Polynomial;
