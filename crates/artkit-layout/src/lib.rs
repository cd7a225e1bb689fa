//! # Artkit Layout
//!
//! Pure helpers built on top of bounds rectangles: placement info, scale
//! and move transforms between a source and target rectangle, alignment of
//! whole selections, and grouping shapes into rows by vertical proximity.
//!
//! Everything here consumes rectangles the bounds engine (or any other
//! source) produced; nothing touches a scene tree.

pub mod alignment;
pub mod placement;
pub mod rows;
pub mod transform;

pub use alignment::{alignment_deltas, Alignment};
pub use placement::Placement;
pub use rows::{cluster_rows, RowCluster};
pub use transform::{Anchor, ScaleAxis, ScaleTransform, Translation};
