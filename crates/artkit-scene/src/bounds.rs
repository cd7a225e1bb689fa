//! Visible-bounds engine.
//!
//! Computes the true on-canvas bounding box of a scene node: guides are
//! excluded, group bounds are the union of their children, and a clipping
//! group is capped at its clip boundary no matter how large the masked
//! content is. `Ok(None)` means "no visible geometry" and is distinct from
//! a zero-size rectangle.
//!
//! The traversal is read-only and reentrant; two calls on an unchanged tree
//! yield bit-identical results.

use tracing::warn;

use artkit_core::{Error, Rect, Result};

use crate::node::{CompoundPath, Group, SceneNode};

/// Maximum tree depth the engine will traverse.
///
/// Host documents nest groups a handful of levels deep; the guard exists
/// for malformed trees handed in from elsewhere.
pub const MAX_DEPTH: usize = 64;

/// How the clip boundary of a clipping group was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipResolution {
    /// A child explicitly marked as the clip boundary was found.
    Explicit,
    /// No marked child existed; the first child's bounds were used.
    DefaultedFirstChild,
}

/// Computes the visible bounding rectangle of a node.
///
/// Returns `Ok(None)` when the node contributes no geometry: a guide, an
/// empty group, or a group whose children all contribute nothing.
pub fn visible_bounds(node: &SceneNode) -> Result<Option<Rect>> {
    bounds_at_depth(node, 0)
}

/// Unions the visible bounds of a list of nodes.
///
/// Callers usually hand the engine a selection rather than a single root.
/// Nodes without visible geometry are skipped; `Ok(None)` when nothing in
/// the list contributes any.
pub fn combined_visible_bounds(nodes: &[SceneNode]) -> Result<Option<Rect>> {
    let mut combined: Option<Rect> = None;
    for node in nodes {
        if let Some(bounds) = bounds_at_depth(node, 0)? {
            combined = Some(match combined {
                Some(current) => current.union(&bounds),
                None => bounds,
            });
        }
    }
    Ok(combined)
}

/// Resolves the clip boundary of a clipping group, reporting how it was
/// found.
///
/// The engine itself only needs the rectangle; this entry point exists so
/// callers can distinguish a marked boundary from the defaulted-first-child
/// fallback and treat the latter as suspect input.
pub fn clip_bounds_with_resolution(group: &Group) -> Result<Option<(Rect, ClipResolution)>> {
    if group.children.is_empty() {
        return Ok(None);
    }
    clip_bounds(group, 0)
}

/// Recovers the effective bounds of a degenerate compound path by unioning
/// its structural sub-paths, guides excluded. Side-effect free: the legacy
/// scratch-copy document mutation has no counterpart here.
pub fn flatten_degenerate(cp: &CompoundPath) -> Option<Rect> {
    Rect::union_all(
        cp.paths
            .iter()
            .filter(|p| !p.guide)
            .map(|p| p.bounds.normalized()),
    )
}

fn bounds_at_depth(node: &SceneNode, depth: usize) -> Result<Option<Rect>> {
    if depth >= MAX_DEPTH {
        return Err(Error::RecursionLimitExceeded { limit: MAX_DEPTH });
    }
    if node.is_guide() {
        return Ok(None);
    }
    match node {
        SceneNode::Leaf(leaf) => {
            leaf.bounds.validate()?;
            Ok(Some(leaf.bounds.normalized()))
        }
        SceneNode::CompoundPath(cp) => compound_bounds(cp),
        SceneNode::Group(group) => group_bounds(group, depth),
    }
}

/// Effective geometric bounds of a compound path: the host-authoritative
/// bounds when present, otherwise the flattened union of its sub-paths.
fn compound_bounds(cp: &CompoundPath) -> Result<Option<Rect>> {
    if let Some(bounds) = cp.bounds {
        bounds.validate()?;
        return Ok(Some(bounds.normalized()));
    }
    for path in &cp.paths {
        path.bounds.validate()?;
    }
    Ok(flatten_degenerate(cp))
}

fn group_bounds(group: &Group, depth: usize) -> Result<Option<Rect>> {
    if group.children.is_empty() {
        return Ok(None);
    }
    if group.clips {
        return Ok(clip_bounds(group, depth)?.map(|(bounds, _)| bounds));
    }

    let mut combined: Option<Rect> = None;
    for child in &group.children {
        if let Some(bounds) = bounds_at_depth(child, depth + 1)? {
            combined = Some(match combined {
                Some(current) => current.union(&bounds),
                None => bounds,
            });
        }
    }
    Ok(combined)
}

/// Scans the children of a clipping group for the clip boundary.
///
/// Traversal order decides ties: the first match wins and later marked
/// children are silently ignored. A degenerate compound path encountered
/// during the scan is taken as the boundary once flattening recovers its
/// geometry, matching how the host treats compound clipping masks.
fn clip_bounds(group: &Group, depth: usize) -> Result<Option<(Rect, ClipResolution)>> {
    for child in &group.children {
        if child.is_guide() {
            continue;
        }
        match child {
            SceneNode::Leaf(leaf) if leaf.clip_path => {
                leaf.bounds.validate()?;
                return Ok(Some((leaf.bounds.normalized(), ClipResolution::Explicit)));
            }
            SceneNode::CompoundPath(cp) => {
                let marked = cp.clip_path || cp.paths.iter().any(|p| p.clip_path);
                if cp.is_degenerate() || marked {
                    if let Some(bounds) = compound_bounds(cp)? {
                        return Ok(Some((bounds, ClipResolution::Explicit)));
                    }
                    // Nothing recoverable inside; keep scanning.
                }
            }
            _ => {}
        }
    }

    // The legacy scripts silently fell back to the first child here. The
    // fallback is kept for compatibility but no longer silent.
    warn!(
        group = group.name.as_deref().unwrap_or("<unnamed>"),
        "clipping group has no marked clip boundary; defaulting to first child"
    );
    Ok(bounds_at_depth(&group.children[0], depth + 1)?
        .map(|bounds| (bounds, ClipResolution::DefaultedFirstChild)))
}
