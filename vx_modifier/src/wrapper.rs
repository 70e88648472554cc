// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The write-policy-aware volume wrapper every modifier tool writes
//! through.

use glam::IVec3;
use vx_geom::Region;
use vx_shapes::VoxelSink;
use vx_voxel::{RawVolume, Voxel};

use crate::tool::WritePolicy;

/// Wraps a [`RawVolume`], interpreting every write through a
/// [`WritePolicy`] and accumulating the union of successful writes' bounds
/// as a dirty region.
///
/// `spec.md` §4.F: "ModifierVolumeWrapper interprets `modifierType` when
/// writing a single voxel: Place writes only into air; Erase writes Air
/// only where solid; Paint overwrites only solid; `Place|Erase`
/// unconditionally writes. It accumulates a `dirtyRegion` as the union of
/// bounding boxes of successful writes." Every tool in this crate (Line,
/// Path, Plane, Shape) and every rasterizer in `vx_shapes` writes through
/// this one policy function, which is what lets the same shape/line/path
/// machinery serve Place, Erase, Paint, and Override alike.
#[derive(Debug)]
pub struct ModifierVolumeWrapper<'v> {
    volume: &'v mut RawVolume,
    write_policy: WritePolicy,
    dirty_region: Option<Region>,
}

impl<'v> ModifierVolumeWrapper<'v> {
    /// Wrap `volume` for writes under `write_policy`, with no dirty region
    /// accumulated yet.
    pub fn new(volume: &'v mut RawVolume, write_policy: WritePolicy) -> Self {
        Self { volume, write_policy, dirty_region: None }
    }

    /// The write policy this wrapper enforces.
    #[must_use]
    pub const fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }

    /// Change the write policy applied to subsequent writes.
    pub fn set_write_policy(&mut self, write_policy: WritePolicy) {
        self.write_policy = write_policy;
    }

    /// The union of bounding boxes of every successful write so far, if
    /// any writes happened.
    #[must_use]
    pub fn dirty_region(&self) -> Option<Region> {
        self.dirty_region
    }

    /// Clear the accumulated dirty region (e.g. between disjoint mirror
    /// emissions; see `spec.md` §4.F's mirror note).
    pub fn take_dirty_region(&mut self) -> Option<Region> {
        self.dirty_region.take()
    }

    fn accumulate_dirty(&mut self, pos: IVec3) {
        let point = Region::new(pos, pos);
        self.dirty_region = Some(match self.dirty_region {
            Some(existing) => existing.union(&point),
            None => point,
        });
    }

    /// `true` iff `requested` is permitted to replace `existing` under
    /// `policy`.
    fn allows(policy: WritePolicy, existing: Voxel, requested: Voxel) -> bool {
        match policy {
            WritePolicy::Place => existing.is_air(),
            WritePolicy::Erase => existing.is_blocked(),
            WritePolicy::Paint => existing.is_blocked(),
            WritePolicy::Override => true,
        }
    }
}

impl VoxelSink for ModifierVolumeWrapper<'_> {
    fn voxel(&self, x: i32, y: i32, z: i32) -> Voxel {
        self.volume.voxel(x, y, z)
    }

    fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) -> bool {
        let existing = self.volume.voxel(x, y, z);
        if !Self::allows(self.write_policy, existing, voxel) {
            return false;
        }
        let pos = IVec3::new(x, y, z);
        if self.volume.set_voxel(x, y, z, voxel) {
            self.accumulate_dirty(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vx_voxel::VoxelType;

    fn volume() -> RawVolume {
        RawVolume::new(Region::from_coords(0, 0, 0, 7, 7, 7))
    }

    #[test]
    fn place_never_overwrites_solid() {
        let mut vol = volume();
        let a = Voxel::new(VoxelType::Generic, 1);
        let b = Voxel::new(VoxelType::Generic, 2);
        let mut w = ModifierVolumeWrapper::new(&mut vol, WritePolicy::Place);
        assert!(w.set_voxel(0, 0, 0, a));
        assert!(!w.set_voxel(0, 0, 0, b));
        assert_eq!(w.voxel(0, 0, 0), a);
    }

    #[test]
    fn erase_never_writes_where_air() {
        let mut vol = volume();
        let mut w = ModifierVolumeWrapper::new(&mut vol, WritePolicy::Erase);
        assert!(!w.set_voxel(0, 0, 0, Voxel::AIR));
        assert!(w.dirty_region().is_none());
    }

    #[test]
    fn erase_clears_solid() {
        let mut vol = volume();
        vol.set_voxel(0, 0, 0, Voxel::new(VoxelType::Generic, 1));
        let mut w = ModifierVolumeWrapper::new(&mut vol, WritePolicy::Erase);
        assert!(w.set_voxel(0, 0, 0, Voxel::AIR));
    }

    #[test]
    fn paint_only_overwrites_solid() {
        let mut vol = volume();
        let mut w = ModifierVolumeWrapper::new(&mut vol, WritePolicy::Paint);
        assert!(!w.set_voxel(0, 0, 0, Voxel::new(VoxelType::Generic, 1)));
        w.set_write_policy(WritePolicy::Override);
        assert!(w.set_voxel(0, 0, 0, Voxel::new(VoxelType::Generic, 1)));
        w.set_write_policy(WritePolicy::Paint);
        assert!(w.set_voxel(0, 0, 0, Voxel::new(VoxelType::Generic, 2)));
    }

    #[test]
    fn override_writes_unconditionally() {
        let mut vol = volume();
        let mut w = ModifierVolumeWrapper::new(&mut vol, WritePolicy::Override);
        assert!(w.set_voxel(0, 0, 0, Voxel::new(VoxelType::Generic, 1)));
        assert!(w.set_voxel(0, 0, 0, Voxel::AIR));
    }

    #[test]
    fn dirty_region_is_the_union_of_successful_writes() {
        let mut vol = volume();
        let mut w = ModifierVolumeWrapper::new(&mut vol, WritePolicy::Place);
        w.set_voxel(1, 1, 1, Voxel::new(VoxelType::Generic, 1));
        w.set_voxel(3, 3, 3, Voxel::new(VoxelType::Generic, 1));
        assert_eq!(w.dirty_region(), Some(Region::from_coords(1, 1, 1, 3, 3, 3)));
    }

    #[test]
    fn failed_writes_do_not_grow_the_dirty_region() {
        let mut vol = volume();
        vol.set_voxel(0, 0, 0, Voxel::new(VoxelType::Generic, 5));
        let mut w = ModifierVolumeWrapper::new(&mut vol, WritePolicy::Place);
        assert!(!w.set_voxel(0, 0, 0, Voxel::new(VoxelType::Generic, 1)));
        assert!(w.dirty_region().is_none());
    }
}
