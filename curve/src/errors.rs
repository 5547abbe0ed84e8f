//! Error types for curve lookup and point arithmetic.

use thiserror::Error;

/// Errors surfaced by the arithmetic core.
///
/// Only recoverable conditions are reported here. Feeding points that are not
/// on the curve, or coordinates outside `[0, p)`, is a caller precondition and
/// is not checked on the arithmetic paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// No built-in curve carries exactly this name.
    #[error("unknown curve: {0:?}")]
    UnknownCurve(String),

    /// The value is a quadratic non-residue modulo the prime.
    #[error("value has no square root modulo p")]
    NoSquareRoot,

    /// Base points and scalars of a multi-scalar multiplication differ in length.
    #[error("{bases} bases but {scalars} scalars")]
    LengthMismatch { bases: usize, scalars: usize },

    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// Custom curve parameters were rejected.
    #[error("invalid curve parameters: {0}")]
    InvalidParameters(&'static str),

    /// A byte string does not encode a reduced field element.
    #[error("non-canonical field element encoding")]
    NonCanonicalEncoding,
}
