// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glide_tree --heading-base-level=0

//! Glide Tree: an owning transform hierarchy.
//!
//! Each node holds a local transform relative to its parent and a derived world
//! transform. The tree is built once, then re-evaluated every frame:
//!
//! 1. Mutate local transforms ([`Tree::set_local_transform`]).
//! 2. Call [`Tree::update`] once; it sets `world = parent_world × local` top-down.
//! 3. Read world transforms ([`Tree::world`]) or submit draws with [`Tree::traverse`].
//!
//! There is no staleness query. Between a local change and the next update the
//! old world transform is what you read; nodes that have never been updated read
//! as identity.
//!
//! ## Ownership
//!
//! Nodes live in a flat store inside [`Tree`] and are addressed by [`NodeId`].
//! A node owns its ordered list of children; no node records its parent since
//! every operation runs top-down. Nodes are not removed or re-parented after
//! construction, and dropping the tree releases everything at once.
//!
//! ## Ordering
//!
//! Traversal is depth-first and pre-order: a node is visited before any of its
//! descendants, and siblings in insertion order. Draw order that depends on this
//! (transparency, overlays) is therefore deterministic.
//!
//! ## API overview
//!
//! - [`Tree`]: container owning nodes.
//! - [`LocalNode`]: per-node local transform and [`NodeFlags`].
//! - [`TraverseFilter`]: restricts traversal to visible subtrees.
//!
//! # Example
//!
//! ```rust
//! use glam::{Mat4, Vec3};
//! use glide_tree::{LocalNode, Tree};
//!
//! let mut tree = Tree::new();
//! let body = tree.insert(None, LocalNode::default());
//! let antenna = tree.insert(
//!     Some(body),
//!     LocalNode::from_transform(Mat4::from_translation(Vec3::Y)),
//! );
//!
//! // Move the body, then propagate.
//! tree.set_local_transform(body, Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)));
//! tree.update();
//!
//! let tip = tree.world(antenna).unwrap().transform_point3(Vec3::ZERO);
//! assert_eq!(tip, Vec3::new(5.0, 1.0, 0.0));
//!
//! let mut drawn = Vec::new();
//! tree.traverse(|id, _world| drawn.push(id));
//! assert_eq!(drawn, [body, antenna]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::Tree;
pub use types::{LocalNode, NodeFlags, NodeId, TraverseFilter};
