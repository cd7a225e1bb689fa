//! # Artkit Scene
//!
//! The scene-tree model of a vector document and the visible-bounds engine
//! that queries it.
//!
//! ## Core Components
//!
//! - **Nodes**: plain paths, compound paths, and (possibly clipping) groups
//! - **Visible bounds**: the true on-canvas bounding box of a node, honoring
//!   clipping masks, guides, and degenerate compound paths
//!
//! ## Architecture
//!
//! The scene tree is owned by the caller and traversed read-only:
//!
//! ```text
//! SceneNode (Leaf | CompoundPath | Group)
//!   └── visible_bounds (recursive query)
//!         ├── clip-boundary resolution
//!         └── degenerate-compound flattening
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use artkit_core::Rect;
//! use artkit_scene::{visible_bounds, Group, PathLeaf, SceneNode};
//!
//! let group = SceneNode::Group(Group::new(vec![
//!     SceneNode::Leaf(PathLeaf::new(Rect::new(0.0, 10.0, 10.0, 0.0))),
//!     SceneNode::Leaf(PathLeaf::new(Rect::new(5.0, 20.0, 15.0, 5.0))),
//! ]));
//!
//! let bounds = visible_bounds(&group).unwrap().unwrap();
//! assert_eq!(bounds, Rect::new(0.0, 20.0, 15.0, 0.0));
//! ```

pub mod bounds;
pub mod node;

pub use bounds::{
    clip_bounds_with_resolution, combined_visible_bounds, flatten_degenerate, visible_bounds,
    ClipResolution, MAX_DEPTH,
};
pub use node::{CompoundPath, Group, NodeKind, PathLeaf, SceneNode};
