//! Host scene seam.
//!
//! The layout engine never owns element transforms. It talks to whatever
//! scene graph hosts the elements through [`SceneHost`], and an element may
//! take over how it reaches a target position by exposing an
//! [`ElementMover`].
//!
//! [`Scene`] is a small arena-backed host used by tests and the CLI.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::primitives::{Size, Vec3};

// =========================================================================
// Capabilities
// =========================================================================

/// Optional capability an element exposes to own its transition to a target.
///
/// Implementations may jump immediately or interpolate over time; the layout
/// pass only hands over the target and never looks at the element's position
/// again.
pub trait ElementMover {
    fn move_element(&mut self, target: Vec3);
}

impl<F: FnMut(Vec3)> ElementMover for F {
    fn move_element(&mut self, target: Vec3) {
        self(target)
    }
}

/// The scene-graph operations a layout container needs from its host.
pub trait SceneHost {
    /// Reference-identity handle to a node.
    type Node: Copy + Eq + fmt::Debug;

    /// Human-readable identity, used in error reports.
    fn name(&self, node: Self::Node) -> String;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Direct children in sibling order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Reparent `node`; `None` detaches it.
    ///
    /// A parent that is `node` itself or one of its descendants must be
    /// refused, leaving the graph unchanged.
    fn set_parent(&mut self, node: Self::Node, parent: Option<Self::Node>);

    fn local_position(&self, node: Self::Node) -> Vec3;

    fn set_local_position(&mut self, node: Self::Node, position: Vec3);

    /// Intrinsic rectangle size of a rectangle element (or container).
    fn rect_size(&self, node: Self::Node) -> Option<Size>;

    /// Visual bounds attached directly to `node`, without looking at children.
    fn bounds_size(&self, node: Self::Node) -> Option<Size>;

    /// The element's mover capability, if it has one.
    fn mover(&mut self, node: Self::Node) -> Option<&mut dyn ElementMover>;
}

// =========================================================================
// In-memory scene
// =========================================================================

/// Handle to a node in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    position: Vec3,
    rect: Option<Size>,
    bounds: Option<Size>,
    mover: Option<Box<dyn ElementMover>>,
}

/// Arena-backed scene graph.
///
/// Parent and child links are kept consistent by [`SceneHost::set_parent`];
/// reparenting appends the node as the last sibling and never forms a cycle.
///
/// # Panics
///
/// A [`NodeId`] is only meaningful for the scene that spawned it. Passing an
/// id from another scene to any method here panics when it is out of range.
#[derive(Default)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node.
    ///
    /// # Panics
    ///
    /// Panics once the arena holds `u32::MAX` nodes.
    pub fn spawn(&mut self, name: impl Into<String>) -> NodeId {
        let Ok(index) = u32::try_from(self.nodes.len()) else {
            panic!("scene arena exceeded u32::MAX nodes");
        };
        let id = NodeId(index);
        self.nodes.push(Node {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            position: Vec3::ZERO,
            rect: None,
            bounds: None,
            mover: None,
        });
        id
    }

    /// Create a node as the last child of `parent`.
    pub fn spawn_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = self.spawn(name);
        self.set_parent(id, Some(parent));
        id
    }

    /// Give a node an intrinsic rectangle size.
    pub fn set_rect(&mut self, node: NodeId, size: Size) {
        self.node_mut(node).rect = Some(size);
    }

    /// Attach a bounds provider to a node.
    pub fn set_bounds(&mut self, node: NodeId, size: Size) {
        self.node_mut(node).bounds = Some(size);
    }

    /// Detach the bounds provider from a node.
    pub fn clear_bounds(&mut self, node: NodeId) {
        self.node_mut(node).bounds = None;
    }

    /// Attach a mover capability to a node.
    pub fn set_mover(&mut self, node: NodeId, mover: impl ElementMover + 'static) {
        self.node_mut(node).mover = Some(Box::new(mover));
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    /// Whether `ancestor` is `node` or lies on `node`'s parent chain.
    fn is_self_or_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }
}

impl SceneHost for Scene {
    type Node = NodeId;

    fn name(&self, node: NodeId) -> String {
        self.node(node).name.clone()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node).children.clone()
    }

    fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) {
        let old = self.node(node).parent;
        if old == parent {
            return;
        }
        if let Some(new) = parent {
            if self.is_self_or_ancestor(node, new) {
                tracing::warn!(?node, parent = ?new, "refusing reparent that would form a cycle");
                return;
            }
        }
        if let Some(old) = old {
            self.node_mut(old).children.retain(|&child| child != node);
        }
        if let Some(new) = parent {
            self.node_mut(new).children.push(node);
        }
        self.node_mut(node).parent = parent;
    }

    fn local_position(&self, node: NodeId) -> Vec3 {
        self.node(node).position
    }

    fn set_local_position(&mut self, node: NodeId, position: Vec3) {
        self.node_mut(node).position = position;
    }

    fn rect_size(&self, node: NodeId) -> Option<Size> {
        self.node(node).rect
    }

    fn bounds_size(&self, node: NodeId) -> Option<Size> {
        self.node(node).bounds
    }

    fn mover(&mut self, node: NodeId) -> Option<&mut dyn ElementMover> {
        self.node_mut(node)
            .mover
            .as_mut()
            .map(|mover| mover.as_mut() as &mut dyn ElementMover)
    }
}
