//! GPU-backed walker container
//!
//! [`CanvasContainer`] is the windowed counterpart of
//! [`MemoryContainer`](randwalk_core::MemoryContainer): it keeps the walker
//! nodes the simulation appends and moves, remembers whether they changed
//! since the last upload, and turns them into [`WalkerInstance`]s.

use randwalk_core::{Rect, Vec2, WalkerContainer, WalkerNode};

use crate::pipeline::WalkerInstance;

/// Walker nodes laid out on the window surface
#[derive(Clone, Debug)]
pub struct CanvasContainer {
    rect: Rect,
    nodes: Vec<WalkerNode>,
    dirty: bool,
}

impl CanvasContainer {
    /// Create an empty canvas covering `rect`
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            nodes: Vec::new(),
            dirty: true,
        }
    }

    /// Update the client rectangle after a surface resize
    pub fn set_client_rect(&mut self, rect: Rect) {
        if self.rect != rect {
            self.rect = rect;
            self.dirty = true;
        }
    }

    /// All child nodes in append order
    pub fn nodes(&self) -> &[WalkerNode] {
        &self.nodes
    }

    /// True if nodes changed since the last `take_dirty`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Build one instance per node
    pub fn instances(&self, size: f32, color: [f32; 4]) -> Vec<WalkerInstance> {
        self.nodes
            .iter()
            .map(|node| WalkerInstance::new(node.position.to_array(), size, color))
            .collect()
    }
}

impl WalkerContainer for CanvasContainer {
    fn client_rect(&self) -> Rect {
        self.rect
    }

    fn append_node(&mut self, node: WalkerNode) {
        self.nodes.push(node);
        self.dirty = true;
    }

    fn move_node(&mut self, index: usize, position: Vec2) {
        // Indices follow array position, so try the direct slot first
        let slot = match self.nodes.get(index) {
            Some(node) if node.index == index => Some(index),
            _ => self.nodes.iter().position(|n| n.index == index),
        };
        if let Some(slot) = slot {
            if self.nodes[slot].position != position {
                self.nodes[slot].position = position;
                self.dirty = true;
            }
        }
    }

    fn remove_all(&mut self) {
        if !self.nodes.is_empty() {
            self.nodes.clear();
            self.dirty = true;
        }
    }

    fn child_count(&self) -> usize {
        self.nodes.len()
    }
}
