//! Scene-tree node types.
//!
//! A scene tree mirrors the host document's object graph: plain paths,
//! compound paths (a set of sub-paths rendered as one object), and groups,
//! which may act as clipping masks. Nodes are built by the caller and
//! traversed read-only by the bounds engine.

use serde::{Deserialize, Serialize};

use artkit_core::Rect;

/// Discriminant for the three node shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Leaf,
    CompoundPath,
    Group,
}

/// A node in the scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneNode {
    Leaf(PathLeaf),
    CompoundPath(CompoundPath),
    Group(Group),
}

/// A plain drawable path with intrinsic geometric bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathLeaf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Intrinsic geometric bounds in Y-up document coordinates.
    pub bounds: Rect,
    /// Construction guides carry no visible geometry.
    #[serde(default)]
    pub guide: bool,
    /// Marks the clip boundary inside a clipping group.
    #[serde(default)]
    pub clip_path: bool,
}

impl PathLeaf {
    pub fn new(bounds: Rect) -> Self {
        Self {
            name: None,
            bounds,
            guide: false,
            clip_path: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn as_guide(mut self) -> Self {
        self.guide = true;
        self
    }

    pub fn as_clip_path(mut self) -> Self {
        self.clip_path = true;
        self
    }
}

/// A compound path: several sub-paths rendered as a single object.
///
/// `bounds` is the host-authoritative union of the sub-paths when known.
/// A compound path without it is *degenerate* — the host quirk where an
/// empty wrapper still geometrically represents content one level down —
/// and its effective bounds must be recovered from `paths`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundPath {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The structurally contained sub-paths.
    pub paths: Vec<PathLeaf>,
    /// Unioned bounds as reported by the host, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Rect>,
    #[serde(default)]
    pub guide: bool,
    #[serde(default)]
    pub clip_path: bool,
}

impl CompoundPath {
    /// Builds a compound path whose bounds are the union of `paths`.
    ///
    /// Trees built this way never contain hidden geometry: the stored
    /// bounds always agree with the structural sub-paths.
    pub fn from_paths(paths: Vec<PathLeaf>) -> Self {
        let bounds = Rect::union_all(paths.iter().map(|p| p.bounds.normalized()));
        Self {
            name: None,
            paths,
            bounds,
            guide: false,
            clip_path: false,
        }
    }

    /// Builds a degenerate compound path: sub-paths present structurally
    /// but no authoritative bounds. Models the host quirk for tests and
    /// for callers importing trees from a live document.
    pub fn degenerate(paths: Vec<PathLeaf>) -> Self {
        Self {
            name: None,
            paths,
            bounds: None,
            guide: false,
            clip_path: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn as_guide(mut self) -> Self {
        self.guide = true;
        self
    }

    pub fn as_clip_path(mut self) -> Self {
        self.clip_path = true;
        self
    }

    /// True when the host-authoritative bounds are missing.
    pub fn is_degenerate(&self) -> bool {
        self.bounds.is_none()
    }
}

/// An ordered group of child nodes, optionally acting as a clipping mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub children: Vec<SceneNode>,
    /// True when the group behaves as a clipping mask: one descendant is
    /// the clip boundary, the rest are masked content.
    #[serde(default)]
    pub clips: bool,
}

impl Group {
    pub fn new(children: Vec<SceneNode>) -> Self {
        Self {
            name: None,
            children,
            clips: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn clipping(mut self) -> Self {
        self.clips = true;
        self
    }
}

impl SceneNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            SceneNode::Leaf(_) => NodeKind::Leaf,
            SceneNode::CompoundPath(_) => NodeKind::CompoundPath,
            SceneNode::Group(_) => NodeKind::Group,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            SceneNode::Leaf(leaf) => leaf.name.as_deref(),
            SceneNode::CompoundPath(cp) => cp.name.as_deref(),
            SceneNode::Group(group) => group.name.as_deref(),
        }
    }

    /// Guides carry no visible geometry. Only leaf and compound items can
    /// be guides in the host model; groups never are.
    pub fn is_guide(&self) -> bool {
        match self {
            SceneNode::Leaf(leaf) => leaf.guide,
            SceneNode::CompoundPath(cp) => cp.guide,
            SceneNode::Group(_) => false,
        }
    }

    /// True when this node is marked as the clip boundary of its parent.
    pub fn is_clip_path(&self) -> bool {
        match self {
            SceneNode::Leaf(leaf) => leaf.clip_path,
            SceneNode::CompoundPath(cp) => cp.clip_path,
            SceneNode::Group(_) => false,
        }
    }

    /// Child nodes; empty for leaves and compound paths.
    pub fn children(&self) -> &[SceneNode] {
        match self {
            SceneNode::Group(group) => &group.children,
            _ => &[],
        }
    }

    /// Depth-first pre-order iterator over this node and all descendants.
    pub fn iter(&self) -> SceneIter<'_> {
        SceneIter { stack: vec![self] }
    }

    /// Total number of nodes in this subtree, the root included.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// First node in pre-order whose name matches, this node included.
    pub fn find_by_name(&self, name: &str) -> Option<&SceneNode> {
        self.iter().find(|node| node.name() == Some(name))
    }
}

/// Depth-first pre-order traversal over a scene subtree.
pub struct SceneIter<'a> {
    stack: Vec<&'a SceneNode>,
}

impl<'a> Iterator for SceneIter<'a> {
    type Item = &'a SceneNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let SceneNode::Group(group) = node {
            for child in group.children.iter().rev() {
                self.stack.push(child);
            }
        }
        Some(node)
    }
}
