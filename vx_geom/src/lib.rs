// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer geometry shared by the voxel scene-graph model and the modifier
//! engine: axis-aligned bounding boxes ([`Region`]) and the [`Axis`] enum
//! used to name a principal direction.
//!
//! This crate has no knowledge of voxels, palettes, or scene graphs — it is
//! the same kind of leaf geometry crate `vx_voxel` and `vx_scenegraph`
//! build on, kept separate so it can be reused (and tested) on its own.

mod axis;
mod region;

pub use axis::Axis;
pub use region::Region;
