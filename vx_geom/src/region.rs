// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer axis-aligned bounding boxes over voxel coordinates.

use glam::IVec3;

/// An inclusive integer AABB `[mins, maxs]`.
///
/// Both corners are part of the region: a `Region` with `mins == maxs` has
/// exactly one voxel. A region is only meaningful when `mins <= maxs`
/// componentwise; [`Region::INVALID`] is the canonical "no region" sentinel
/// used by [`Selection`](crate::Selection) and by codecs that have not yet
/// established a volume's extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    mins: IVec3,
    maxs: IVec3,
}

impl Region {
    /// A region whose `mins` are greater than its `maxs` on every axis, so
    /// [`Region::is_valid`] is always `false` for it.
    pub const INVALID: Self = Self {
        mins: IVec3::new(1, 1, 1),
        maxs: IVec3::new(-1, -1, -1),
    };

    /// Create a region from inclusive corners. Does not validate `mins <=
    /// maxs`; use [`Region::is_valid`] to check.
    #[must_use]
    pub const fn new(mins: IVec3, maxs: IVec3) -> Self {
        Self { mins, maxs }
    }

    /// Create a region from individual inclusive corner coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, z0: i32, x1: i32, y1: i32, z1: i32) -> Self {
        Self::new(IVec3::new(x0, y0, z0), IVec3::new(x1, y1, z1))
    }

    /// Create a region from an origin and voxel-space dimensions (`dims` is
    /// the width/height/depth, not the upper corner).
    #[must_use]
    pub fn from_origin_and_dims(origin: IVec3, dims: IVec3) -> Self {
        Self::new(origin, origin + dims - IVec3::ONE)
    }

    /// Lower (inclusive) corner.
    #[must_use]
    pub const fn mins(&self) -> IVec3 {
        self.mins
    }

    /// Upper (inclusive) corner.
    #[must_use]
    pub const fn maxs(&self) -> IVec3 {
        self.maxs
    }

    /// `true` iff `mins <= maxs` on every axis.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.mins.x <= self.maxs.x && self.mins.y <= self.maxs.y && self.mins.z <= self.maxs.z
    }

    /// Width (`x` extent), `maxs.x - mins.x + 1`.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.maxs.x - self.mins.x + 1
    }

    /// Height (`y` extent), `maxs.y - mins.y + 1`.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.maxs.y - self.mins.y + 1
    }

    /// Depth (`z` extent), `maxs.z - mins.z + 1`.
    #[must_use]
    pub fn depth(&self) -> i32 {
        self.maxs.z - self.mins.z + 1
    }

    /// `(width, height, depth)` as a vector.
    #[must_use]
    pub fn dimensions_in_voxels(&self) -> IVec3 {
        IVec3::new(self.width(), self.height(), self.depth())
    }

    /// The integer center, rounded towards `mins` on ties.
    #[must_use]
    pub fn center(&self) -> IVec3 {
        self.mins + (self.maxs - self.mins) / 2
    }

    /// `true` iff `point` lies within `[mins, maxs]` inclusive.
    #[must_use]
    pub fn contains_point(&self, point: IVec3) -> bool {
        point.x >= self.mins.x
            && point.y >= self.mins.y
            && point.z >= self.mins.z
            && point.x <= self.maxs.x
            && point.y <= self.maxs.y
            && point.z <= self.maxs.z
    }

    /// `true` iff the two regions share at least one voxel.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.mins.x <= other.maxs.x
            && self.maxs.x >= other.mins.x
            && self.mins.y <= other.maxs.y
            && self.maxs.y >= other.mins.y
            && self.mins.z <= other.maxs.z
            && self.maxs.z >= other.mins.z
    }

    /// The intersection of two regions. The result may be invalid (empty)
    /// if the regions do not overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::new(self.mins.max(other.mins), self.maxs.min(other.maxs))
    }

    /// The smallest region enclosing both inputs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if !self.is_valid() {
            return *other;
        }
        if !other.is_valid() {
            return *self;
        }
        Self::new(self.mins.min(other.mins), self.maxs.max(other.maxs))
    }

    /// Clip `self` to `other` in place (intersect-in-place).
    pub fn crop_to(&mut self, other: &Self) {
        *self = self.intersection(other);
    }

    /// Shift the region's origin by `delta`, preserving its dimensions.
    pub fn translate(&mut self, delta: IVec3) {
        self.mins += delta;
        self.maxs += delta;
    }
}
