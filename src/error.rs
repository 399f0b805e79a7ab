//! Crate-wide error type.

use thiserror::Error;

/// Convenience result type for fractal evaluation.
pub type Result<T> = std::result::Result<T, FractalError>;

/// Errors surfaced before or during grid evaluation.
///
/// Validation failures are reported immediately; no partial grid is ever
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractalError {
    /// Width or height below the minimum the coordinate mapping supports.
    #[error("invalid dimensions {width}x{height}: width and height must be at least 2")]
    InvalidDimension {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Non-positive iteration bound.
    #[error("invalid iteration bound {max_iterations}: must be at least 1")]
    InvalidIterationBound {
        /// Requested iteration bound.
        max_iterations: u32,
    },

    /// Label that does not name a supported fractal kind.
    #[error("unknown fractal kind: {name}")]
    UnknownKind {
        /// The label as given.
        name: String,
    },

    /// Evaluation was cancelled through a `CancelToken`.
    #[error("evaluation cancelled")]
    Cancelled,
}
