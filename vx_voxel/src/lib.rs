// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dense voxel grid: [`Voxel`], [`RawVolume`], and its [`Sampler`]
//! cursor.
//!
//! `vx_voxel` knows nothing about scene graphs, palettes, or codecs — it is
//! the storage layer every higher crate (`vx_scenegraph`, `vx_shapes`,
//! `vx_modifier`, `vx_vxl`) builds on.

mod raw_volume;
mod voxel;

pub use raw_volume::{RawVolume, Sampler};
pub use voxel::{Voxel, VoxelType};
