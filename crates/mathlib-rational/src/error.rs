//! Error taxonomy for exact arithmetic.

use thiserror::Error;

/// Errors raised by exact arithmetic operations.
///
/// All failures are local to the operation that raised them; no partial
/// results are produced. Callers may retry only with corrected inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MathError {
    /// A rational was constructed with a zero denominator, or a zero
    /// value was inverted.
    #[error("division by zero")]
    DivisionByZero,

    /// A reduced fraction no longer fits in the underlying `i64` fields.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}
