// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene graph: a small arena of named, keyframed [`SceneGraphNode`]s,
//! each optionally owning (or sharing) a [`vx_voxel::RawVolume`].
//!
//! This crate has no knowledge of file formats or editing tools — it is
//! the in-memory document model that `vx_codec` serializes and
//! `vx_modifier` edits.

mod error;
mod graph;
mod node;
mod transform;

pub use error::SceneGraphError;
pub use graph::{add_scene_graph_nodes, copy_node, SceneGraph, NO_PARENT, ROOT_ID};
pub use node::{SceneGraphNode, SceneGraphNodeType, VolumeHandle};
pub use transform::{KeyFrame, KeyFrames, Transform};
