//! Error handling for Artkit
//!
//! Provides the error taxonomy shared by the geometry and scene crates.
//! "No visible bounds" is deliberately not an error: the bounds engine
//! reports it as `Ok(None)` so callers must branch on it explicitly.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Unified error type for geometry and bounds computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A scale factor was requested against a zero-size reference dimension
    #[error("Scale reference dimension is zero on the {axis} axis")]
    DivisionByZero {
        /// The axis whose reference dimension was zero ("width" or "height").
        axis: String,
    },

    /// Tree traversal exceeded the recursion guard
    #[error("Recursion limit of {limit} exceeded while traversing the scene tree")]
    RecursionLimitExceeded {
        /// The depth limit that was exceeded.
        limit: usize,
    },

    /// A rectangle input carried a non-finite component
    #[error("Invalid rectangle: {detail}")]
    InvalidRectangle {
        /// A description of the invalid component.
        detail: String,
    },
}

/// Result type alias using the Artkit [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
