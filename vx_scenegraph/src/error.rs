// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by scene graph API misuse.
//!
//! These are "hard errors" in the sense of `spec.md` §7: the graph's API
//! guarantees (valid ids, existing parents) are expected to hold before the
//! call is made, so callers should treat these as bugs to fix rather than
//! conditions to gracefully recover from at runtime.

/// An error produced by a [`SceneGraph`](crate::SceneGraph) operation given
/// an id that does not name a live node.
#[derive(Debug, thiserror::Error)]
pub enum SceneGraphError {
    /// No node exists with this id.
    #[error("no node with id {id}")]
    MissingNode {
        /// The id that was looked up.
        id: i32,
    },
}
