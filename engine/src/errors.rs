//! Error types for the handle engine.

use thiserror::Error;
use wcurve::CurveError;

/// Errors that can occur when operating through engine handles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The id does not name a live curve or table.
    ///
    /// Returned for ids that were never issued and for ids whose resource has
    /// already been released.
    #[error("unknown handle {0}")]
    UnknownHandle(u64),

    /// A fixed-base table was used with a curve other than the one it was
    /// built on.
    #[error("table {table} belongs to curve {owner}, not curve {curve}")]
    TableCurveMismatch { table: u64, owner: u64, curve: u64 },

    #[error(transparent)]
    Curve(#[from] CurveError),
}
