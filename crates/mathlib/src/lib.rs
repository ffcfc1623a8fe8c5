//! # mathlib
//!
//! A small numeric library: exact rational arithmetic and a generic
//! polynomial evaluator written once over a semiring contract and
//! instantiated for doubles, machine integers, rationals, and complex
//! numbers.
//!
//! ## Quick Start
//!
//! ```rust
//! use mathlib::prelude::*;
//!
//! // 3 + 5x + 7x^2 + 11x^3
//! let p = Polynomial::from_coeffs(vec![3.0, 5.0, 7.0, 11.0]);
//! assert_eq!(p.eval(&2.0), 129.0);
//!
//! let q = Polynomial::from_coeffs(vec![
//!     Rational::new(7, 11)?,
//!     Rational::new(11, 13)?,
//!     Rational::new(13, 17)?,
//! ]);
//! let y = q.eval(&Rational::new(5, 7)?);
//! assert_eq!(y.to_string(), "194273/119119");
//! # Ok::<(), MathError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use mathlib_poly as poly;
pub use mathlib_rational as rational;
pub use mathlib_rings as rings;

/// The crate version, matching the native library's reported version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use mathlib_poly::Polynomial;
    pub use mathlib_rational::{MathError, Rational};
    pub use mathlib_rings::Semiring;
}
