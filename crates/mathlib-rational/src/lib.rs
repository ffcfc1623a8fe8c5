//! # mathlib-rational
//!
//! Exact rational arithmetic over machine integers for mathlib.
//!
//! This crate provides:
//! - An exact fraction value type (`Rational`) over `i64`
//! - The shared error taxonomy (`MathError`)
//!
//! ## Overflow Policy
//!
//! All intermediate arithmetic (reduction, fraction addition and
//! multiplication, cross-multiplied comparison) runs in `i128`, so results
//! are exact whenever the reduced fraction fits back into `i64`. The
//! `checked_*` operations report `ArithmeticOverflow` when it does not.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::MathError;
pub use rational::Rational;
