//! # Artkit Core
//!
//! Core types and utilities shared by the Artkit crates.
//! Provides the fundamental geometry primitives (points and Y-up
//! rectangles), document unit handling, and the common error taxonomy.

pub mod error;
pub mod geom;
pub mod units;

pub use error::{Error, Result};
pub use geom::{Point, Rect};
pub use units::DocumentUnits;
