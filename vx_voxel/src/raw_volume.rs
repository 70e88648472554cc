// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A dense 3D voxel grid over an integer [`Region`], plus its [`Sampler`]
//! cursor.

use glam::IVec3;
use vx_geom::Region;

use crate::Voxel;

/// A dense array of [`Voxel`]s over a [`Region`].
///
/// Reads outside the region return [`Voxel::AIR`]; writes outside the
/// region are rejected and return `false`. The backing storage always has
/// exactly `width * height * depth` elements.
#[derive(Clone, Debug)]
pub struct RawVolume {
    region: Region,
    // Indexed as `x + width * (y + height * z)`, all coordinates relative
    // to `region.mins()`.
    data: Vec<Voxel>,
}

impl RawVolume {
    /// Create an all-air volume over `region`.
    ///
    /// # Panics
    ///
    /// Panics if `region` is invalid (`mins > maxs` on some axis).
    #[must_use]
    pub fn new(region: Region) -> Self {
        assert!(region.is_valid(), "RawVolume requires a valid region");
        let dims = region.dimensions_in_voxels();
        #[allow(clippy::cast_sign_loss, reason = "dims are positive for a valid region")]
        let len = (dims.x as usize) * (dims.y as usize) * (dims.z as usize);
        Self {
            region,
            data: vec![Voxel::AIR; len],
        }
    }

    /// The region this volume spans.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Shift the region's origin by `delta` without touching stored data.
    pub fn translate(&mut self, delta: IVec3) {
        self.region.translate(delta);
    }

    /// Read the voxel at `(x, y, z)`, or [`Voxel::AIR`] if outside the
    /// region.
    #[must_use]
    pub fn voxel(&self, x: i32, y: i32, z: i32) -> Voxel {
        match self.index_of(x, y, z) {
            Some(idx) => self.data[idx],
            None => Voxel::AIR,
        }
    }

    /// Write `voxel` at `(x, y, z)`.
    ///
    /// Returns `false` (and leaves storage untouched) if the coordinate is
    /// outside the region, or if the stored voxel already equals `voxel` —
    /// the latter lets callers use the return value to track whether a
    /// write actually changed anything (dirty-region accumulation relies on
    /// this).
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) -> bool {
        let Some(idx) = self.index_of(x, y, z) else {
            return false;
        };
        if self.data[idx] == voxel {
            return false;
        }
        self.data[idx] = voxel;
        true
    }

    /// Linear index of `(x, y, z)` within `data`, or `None` if outside the
    /// region.
    fn index_of(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.region.contains_point(IVec3::new(x, y, z)) {
            return None;
        }
        let mins = self.region.mins();
        let dims = self.region.dimensions_in_voxels();
        #[allow(clippy::cast_sign_loss, reason = "coordinates are bounds-checked above")]
        let (lx, ly, lz, w, h) = (
            (x - mins.x) as usize,
            (y - mins.y) as usize,
            (z - mins.z) as usize,
            dims.x as usize,
            dims.y as usize,
        );
        Some(lx + w * (ly + h * lz))
    }

    /// Create a [`Sampler`] positioned at `(0, 0, 0)` in world coordinates
    /// (which is invalid unless the region contains the origin — call
    /// [`Sampler::set_position`] before reading).
    #[must_use]
    pub fn sampler(&self) -> Sampler<'_> {
        Sampler::new(self)
    }
}

/// A movable cursor over a [`RawVolume`] that amortizes index arithmetic.
///
/// Advancing along an axis with [`Sampler::move_positive_x`] /
/// [`Sampler::move_positive_y`] / [`Sampler::move_positive_z`] is O(1).
/// Crossing the region boundary invalidates the sampler (subsequent reads
/// return [`Voxel::AIR`]) until [`Sampler::set_position`] restores it.
#[derive(Debug)]
pub struct Sampler<'v> {
    volume: &'v RawVolume,
    position: IVec3,
    index: Option<usize>,
}

impl<'v> Sampler<'v> {
    fn new(volume: &'v RawVolume) -> Self {
        let mut s = Self {
            volume,
            position: IVec3::ZERO,
            index: None,
        };
        s.set_position(IVec3::ZERO);
        s
    }

    /// Move the cursor to `pos`, recomputing its index from scratch.
    /// Returns `true` iff `pos` is inside the volume's region.
    pub fn set_position(&mut self, pos: IVec3) -> bool {
        self.position = pos;
        self.index = self.volume.index_of(pos.x, pos.y, pos.z);
        self.index.is_some()
    }

    /// The cursor's current position (valid or not).
    #[must_use]
    pub const fn position(&self) -> IVec3 {
        self.position
    }

    /// Read the voxel at the cursor's current position, or
    /// [`Voxel::AIR`] if the cursor is invalid.
    #[must_use]
    pub fn voxel(&self) -> Voxel {
        match self.index {
            Some(idx) => self.volume.data[idx],
            None => Voxel::AIR,
        }
    }

    /// Advance one voxel in `+x`. O(1): adjusts the cached index by one
    /// instead of recomputing it.
    pub fn move_positive_x(&mut self) {
        self.step(IVec3::X, 1);
    }

    /// Advance one voxel in `+y`.
    pub fn move_positive_y(&mut self) {
        let stride = self.volume.region.width();
        self.step(IVec3::Y, stride);
    }

    /// Advance one voxel in `+z`.
    pub fn move_positive_z(&mut self) {
        let dims = self.volume.region.dimensions_in_voxels();
        self.step(IVec3::Z, dims.x * dims.y);
    }

    fn step(&mut self, axis_delta: IVec3, index_stride: i32) {
        let next = self.position + axis_delta;
        self.position = next;
        self.index = match self.index {
            Some(idx) if self.volume.region.contains_point(next) => {
                #[allow(clippy::cast_sign_loss, reason = "stride is positive and idx stays in-bounds by construction")]
                Some((idx as i64 + i64::from(index_stride)) as usize)
            }
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VoxelType;

    fn cube(size: i32) -> RawVolume {
        RawVolume::new(Region::from_coords(0, 0, 0, size - 1, size - 1, size - 1))
    }

    #[test]
    fn reads_outside_region_are_air() {
        let v = cube(4);
        assert_eq!(v.voxel(100, 0, 0), Voxel::AIR);
    }

    #[test]
    fn write_outside_region_is_rejected() {
        let mut v = cube(4);
        let solid = Voxel::new(VoxelType::Generic, 1);
        assert!(!v.set_voxel(-1, 0, 0, solid));
        assert_eq!(v.voxel(-1, 0, 0), Voxel::AIR);
    }

    #[test]
    fn write_that_does_not_change_value_returns_false() {
        let mut v = cube(4);
        assert!(!v.set_voxel(0, 0, 0, Voxel::AIR));
        let solid = Voxel::new(VoxelType::Generic, 1);
        assert!(v.set_voxel(0, 0, 0, solid));
        assert!(!v.set_voxel(0, 0, 0, solid));
    }

    #[test]
    fn closure_setvoxel_then_voxel_roundtrips() {
        let mut v = cube(8);
        let solid = Voxel::new(VoxelType::Generic, 9);
        for z in 0..8 {
            for y in 0..8 {
                for x in 0..8 {
                    assert!(v.set_voxel(x, y, z, solid));
                    assert_eq!(v.voxel(x, y, z), solid);
                }
            }
        }
    }

    #[test]
    fn sampler_matches_direct_reads() {
        let mut v = cube(4);
        let solid = Voxel::new(VoxelType::Generic, 5);
        v.set_voxel(2, 1, 3, solid);
        let mut s = v.sampler();
        for z in 0..4 {
            for y in 0..4 {
                for x in 0..4 {
                    s.set_position(IVec3::new(x, y, z));
                    assert_eq!(s.voxel(), v.voxel(x, y, z));
                }
            }
        }
    }

    #[test]
    fn sampler_move_positive_axes_are_o1_equivalent_to_set_position() {
        let mut v = cube(6);
        let solid = Voxel::new(VoxelType::Generic, 1);
        v.set_voxel(3, 3, 3, solid);
        let mut s = v.sampler();
        s.set_position(IVec3::ZERO);
        for x in 1..6 {
            s.move_positive_x();
            assert_eq!(s.position(), IVec3::new(x, 0, 0));
            assert_eq!(s.voxel(), v.voxel(x, 0, 0));
        }
        s.set_position(IVec3::new(3, 0, 3));
        s.move_positive_y();
        s.move_positive_y();
        s.move_positive_y();
        assert_eq!(s.position(), IVec3::new(3, 3, 3));
        assert_eq!(s.voxel(), solid);
    }

    #[test]
    fn sampler_invalidates_on_crossing_boundary() {
        let v = cube(2);
        let mut s = v.sampler();
        s.set_position(IVec3::new(1, 0, 0));
        s.move_positive_x();
        assert_eq!(s.voxel(), Voxel::AIR);
        assert!(s.set_position(IVec3::new(0, 0, 0)));
        assert_eq!(s.voxel(), v.voxel(0, 0, 0));
    }

    #[test]
    fn translate_shifts_region_without_touching_data() {
        let mut v = cube(3);
        let solid = Voxel::new(VoxelType::Generic, 2);
        v.set_voxel(1, 1, 1, solid);
        v.translate(IVec3::new(10, 0, 0));
        assert_eq!(v.region(), Region::from_coords(10, 0, 0, 12, 2, 2));
        assert_eq!(v.voxel(11, 1, 1), solid);
        assert_eq!(v.voxel(1, 1, 1), Voxel::AIR);
    }
}
