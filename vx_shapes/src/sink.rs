// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The write target every rasterizer, plane op, path writer, and raycast
//! step in this crate goes through.

use vx_voxel::Voxel;

/// A position that can be read and written one voxel at a time.
///
/// `vx_modifier::ModifierVolumeWrapper` is the production implementation:
/// it interprets the requested voxel according to the active write policy
/// (Place/Erase/Paint/Override) and accumulates a dirty region. Nothing in
/// this crate knows about that policy — every function here just calls
/// `set_voxel` with the voxel it would like written and trusts the sink to
/// decide whether the write actually happens, which is what lets the same
/// rasterizer serve Place, Erase, and Paint alike.
pub trait VoxelSink {
    /// Read the voxel at `(x, y, z)`.
    fn voxel(&self, x: i32, y: i32, z: i32) -> Voxel;

    /// Request that `(x, y, z)` become `voxel`. Returns `true` iff the
    /// sink actually changed the stored voxel.
    fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) -> bool;
}
