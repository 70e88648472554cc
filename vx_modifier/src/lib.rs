// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive modifier engine: a cursor/AABB state machine that turns
//! cursor positions, two- and three-click picks, a selection, a mirror
//! axis, and a shape/mode matrix into voxel writes.
//!
//! `vx_modifier` is the top of the workspace's dependency stack — it
//! builds on `vx_voxel`'s `RawVolume`, dispatches through the rasterizers
//! and tools in `vx_shapes`, and exposes the command surface (`Command`)
//! an input-binding layer would call. It does not itself know about scene
//! graphs or codecs; callers are expected to resolve "the active Model
//! node's volume" themselves and hand this crate a `&mut RawVolume`.

mod command;
mod mirror;
mod modifier;
mod selection;
mod tool;
mod wrapper;

pub use command::{Command, CommandEffect};
pub use mirror::reflect_region;
pub use modifier::{AabbState, Modifier};
pub use selection::Selection;
pub use tool::{ModifierMode, ModifierTool, ShapeType, WritePolicy};
pub use vx_shapes::Face;
pub use wrapper::ModifierVolumeWrapper;
