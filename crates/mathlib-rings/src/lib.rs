//! # mathlib-rings
//!
//! Coefficient domains for mathlib.
//!
//! This crate provides:
//! - The `Semiring` capability trait (`{zero, one, add, mul}`)
//! - Implementations for the four coefficient domains: `f64`, `i64`
//!   (wrapping), `Rational`, and `Complex<f64>`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod domains;
pub mod traits;

pub use traits::Semiring;
