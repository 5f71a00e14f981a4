// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the transform tree: node identifiers, flags, and local data.

use glam::Mat4;

/// Identifier for a node in the tree.
///
/// A small, copyable index into the tree's node storage. Nodes are never
/// removed individually, so an id stays valid for the life of the tree that
/// issued it. Passing an id to a different tree is a logic error; setters
/// ignore ids that are out of range and getters return `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling draw submission.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible. Hidden nodes and their subtrees are skipped by
        /// [`Tree::traverse_filtered`](crate::Tree::traverse_filtered) when
        /// [`TraverseFilter::visible_only`] is set.
        const VISIBLE = 0b0000_0001;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Caller-owned data for a node.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalNode {
    /// Transform relative to the parent's world space.
    pub local_transform: Mat4,
    /// Visibility flags.
    pub flags: NodeFlags,
}

impl Default for LocalNode {
    fn default() -> Self {
        Self {
            local_transform: Mat4::IDENTITY,
            flags: NodeFlags::default(),
        }
    }
}

impl LocalNode {
    /// A visible node with the given local transform.
    pub fn from_transform(local_transform: Mat4) -> Self {
        Self {
            local_transform,
            ..Self::default()
        }
    }
}

/// Filters applied during traversal.
///
/// Used by [`Tree::traverse_filtered`](crate::Tree::traverse_filtered).
#[derive(Clone, Copy, Debug, Default)]
pub struct TraverseFilter {
    /// If true, skip nodes without [`NodeFlags::VISIBLE`] along with their descendants.
    pub visible_only: bool,
}
