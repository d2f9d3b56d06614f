//! Presentation seam between the simulation and whatever draws it
//!
//! A [`WalkerContainer`] is the parent that walker visuals are appended to.
//! The simulation only ever appends, moves and clears nodes, and asks for the
//! container's client rectangle when confining walkers. [`MemoryContainer`]
//! is the headless implementation used for tests and batch runs.

use randwalk_math::{Rect, Vec2};

/// The visual record for one walker
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkerNode {
    /// Index of the walker this node draws
    pub index: usize,
    /// Position of the node's top-left corner
    pub position: Vec2,
}

impl WalkerNode {
    pub fn new(index: usize, position: Vec2) -> Self {
        Self { index, position }
    }
}

/// A parent for walker visuals
pub trait WalkerContainer {
    /// The drawable region walkers are confined to
    fn client_rect(&self) -> Rect;

    /// Append a node as the last child
    fn append_node(&mut self, node: WalkerNode);

    /// Move the node drawing walker `index`
    ///
    /// Unknown indices are ignored.
    fn move_node(&mut self, index: usize, position: Vec2);

    /// Remove every child node
    fn remove_all(&mut self);

    /// Number of child nodes
    fn child_count(&self) -> usize;
}

/// A container that keeps its nodes in memory
#[derive(Clone, Debug, Default)]
pub struct MemoryContainer {
    rect: Rect,
    nodes: Vec<WalkerNode>,
}

impl MemoryContainer {
    /// Create an empty container with the given client rectangle
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            nodes: Vec::new(),
        }
    }

    /// Replace the client rectangle (e.g. after a resize)
    pub fn set_client_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// All child nodes in append order
    pub fn nodes(&self) -> &[WalkerNode] {
        &self.nodes
    }
}

impl WalkerContainer for MemoryContainer {
    fn client_rect(&self) -> Rect {
        self.rect
    }

    fn append_node(&mut self, node: WalkerNode) {
        self.nodes.push(node);
    }

    fn move_node(&mut self, index: usize, position: Vec2) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.index == index) {
            node.position = position;
        }
    }

    fn remove_all(&mut self) {
        self.nodes.clear();
    }

    fn child_count(&self) -> usize {
        self.nodes.len()
    }
}
