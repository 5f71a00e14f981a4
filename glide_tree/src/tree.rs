// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, world updates, traversal.

use alloc::vec::Vec;
use glam::Mat4;

use crate::types::{LocalNode, NodeFlags, NodeId, TraverseFilter};

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Owning transform hierarchy.
///
/// All nodes live in one flat store; each node owns an ordered list of child
/// ids. Dropping the tree drops every subtree.
pub struct Tree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let hidden = self
            .nodes
            .iter()
            .filter(|n| !n.local.flags.contains(NodeFlags::VISIBLE))
            .count();
        f.debug_struct("Tree")
            .field("nodes_total", &self.nodes.len())
            .field("nodes_hidden", &hidden)
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    children: Vec<NodeId>,
    local: LocalNode,
    world: Mat4,
}

impl Node {
    fn new(local: LocalNode) -> Self {
        Self {
            children: Vec::new(),
            local,
            world: Mat4::IDENTITY,
        }
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Insert a new node as the last child of `parent` (or as a new root if `None`).
    ///
    /// The node's world transform reads as identity until the next [`Tree::update`].
    ///
    /// # Panics
    ///
    /// If `parent` was not issued by this tree.
    pub fn insert(&mut self, parent: Option<NodeId>, local: LocalNode) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId indices are 32-bit; trees stay far below that."
        )]
        let id = NodeId::new(self.nodes.len() as u32);
        match parent {
            Some(p) => self
                .nodes
                .get_mut(p.idx())
                .expect("parent NodeId does not belong to this tree")
                .children
                .push(id),
            None => self.roots.push(id),
        }
        self.nodes.push(Node::new(local));
        id
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root nodes in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.node(id).map(|n| n.children.as_slice())
    }

    /// Local data of `id`.
    pub fn local(&self, id: NodeId) -> Option<&LocalNode> {
        self.node(id).map(|n| &n.local)
    }

    /// World transform of `id` as of the last update that reached it.
    ///
    /// Local changes made since then are not reflected until [`Tree::update`] runs.
    pub fn world(&self, id: NodeId) -> Option<Mat4> {
        self.node(id).map(|n| n.world)
    }

    /// Flags of `id`.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node(id).map(|n| n.local.flags)
    }

    /// Update local transform.
    pub fn set_local_transform(&mut self, id: NodeId, transform: Mat4) {
        if let Some(n) = self.node_mut(id) {
            n.local.local_transform = transform;
        }
    }

    /// Update node flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_mut(id) {
            n.local.flags = flags;
        }
    }

    /// Recompute world transforms for every root (with an identity parent) and all descendants.
    ///
    /// Call once per frame after mutating local transforms and before reading
    /// world transforms or traversing.
    pub fn update(&mut self) {
        let mut count = 0;
        for i in 0..self.roots.len() {
            let root = self.roots[i];
            count += self.update_world_recursive(root, Mat4::IDENTITY);
        }
        log::trace!("updated {count} world transforms");
    }

    /// Recompute the subtree at `id` as if its parent's world transform were `parent_world`.
    pub fn update_from(&mut self, id: NodeId, parent_world: Mat4) {
        if self.node(id).is_some() {
            self.update_world_recursive(id, parent_world);
        }
    }

    /// Visit every node depth-first, pre-order, roots and children in insertion order.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(NodeId, &Mat4),
    {
        for &root in &self.roots {
            self.walk(root, TraverseFilter::default(), &mut visit);
        }
    }

    /// Visit the subtree at `id` in the same order as [`Tree::traverse`].
    pub fn traverse_from<F>(&self, id: NodeId, mut visit: F)
    where
        F: FnMut(NodeId, &Mat4),
    {
        if self.node(id).is_some() {
            self.walk(id, TraverseFilter::default(), &mut visit);
        }
    }

    /// Like [`Tree::traverse`], honoring [`TraverseFilter`].
    pub fn traverse_filtered<F>(&self, filter: TraverseFilter, mut visit: F)
    where
        F: FnMut(NodeId, &Mat4),
    {
        for &root in &self.roots {
            self.walk(root, filter, &mut visit);
        }
    }

    // --- internals ---

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.idx())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.idx())
    }

    fn update_world_recursive(&mut self, id: NodeId, parent_world: Mat4) -> usize {
        let world = {
            let node = &mut self.nodes[id.idx()];
            node.world = parent_world * node.local.local_transform;
            node.world
        };
        let mut count = 1;
        for i in 0..self.nodes[id.idx()].children.len() {
            let child = self.nodes[id.idx()].children[i];
            count += self.update_world_recursive(child, world);
        }
        count
    }

    fn walk<F>(&self, id: NodeId, filter: TraverseFilter, visit: &mut F)
    where
        F: FnMut(NodeId, &Mat4),
    {
        let node = &self.nodes[id.idx()];
        if filter.visible_only && !node.local.flags.contains(NodeFlags::VISIBLE) {
            return;
        }
        visit(id, &node.world);
        for &child in &node.children {
            self.walk(child, filter, visit);
        }
    }
}
