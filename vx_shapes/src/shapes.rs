// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Analytic shape rasterizers: [`cube`], [`torus`], [`cylinder`], [`cone`],
//! [`dome`], [`ellipse`].
//!
//! Every rasterizer writes through a [`VoxelSink`] so selection clipping
//! and dirty-region tracking (both the caller's responsibility, e.g.
//! `vx_modifier::ModifierVolumeWrapper`) apply uniformly regardless of
//! which shape is active. Ground truth: `Modifier::executeShapeAction` in
//! `original_source`'s `Modifier.cpp` names these six shapes and the
//! parameters (`size`, `height`, `axis`) each one is driven by; the
//! `voxelgenerator::shape::create*` bodies themselves were not retrieved,
//! so the rasterization math below is a from-scratch implementation of the
//! formulas `spec.md` §4.G spells out.

use glam::IVec3;
use vx_geom::{Axis, Region};
use vx_voxel::Voxel;

use crate::sink::VoxelSink;

/// Axis-aligned fill of `region`, in `z`, then `y`, then `x` order (the
/// deterministic write order `spec.md` §5 requires for shape actions).
pub fn cube(sink: &mut dyn VoxelSink, region: Region, voxel: Voxel) {
    let mins = region.mins();
    let maxs = region.maxs();
    for z in mins.z..=maxs.z {
        for y in mins.y..=maxs.y {
            for x in mins.x..=maxs.x {
                sink.set_voxel(x, y, z, voxel);
            }
        }
    }
}

fn resolve_axis(axis: Axis) -> Axis {
    if axis == Axis::None {
        Axis::Y
    } else {
        axis
    }
}

/// A torus around `center`, ring plane perpendicular to `axis` (defaulting
/// to `Y`), per `spec.md` §4.G: `(sqrt(u^2+v^2) - major_radius)^2 + w^2 <=
/// minor_radius^2` where `w` runs along `axis` and `(u, v)` are the other
/// two coordinates.
pub fn torus(sink: &mut dyn VoxelSink, center: IVec3, minor_radius: f64, major_radius: f64, axis: Axis, voxel: Voxel) {
    let axis = resolve_axis(axis);
    let ring_bound = (major_radius + minor_radius).ceil() as i32 + 1;
    let height_bound = minor_radius.ceil() as i32 + 1;
    let (bx, by, bz) = match axis {
        Axis::X => (height_bound, ring_bound, ring_bound),
        Axis::Y => (ring_bound, height_bound, ring_bound),
        Axis::Z => (ring_bound, ring_bound, height_bound),
        Axis::None => unreachable!("resolve_axis never returns None"),
    };
    let minor_sq = minor_radius * minor_radius;
    for dz in -bz..=bz {
        for dy in -by..=by {
            for dx in -bx..=bx {
                let (u, v, w) = match axis {
                    Axis::X => (f64::from(dy), f64::from(dz), f64::from(dx)),
                    Axis::Y => (f64::from(dx), f64::from(dz), f64::from(dy)),
                    Axis::Z => (f64::from(dx), f64::from(dy), f64::from(dz)),
                    Axis::None => unreachable!("resolve_axis never returns None"),
                };
                let ring_delta = (u * u + v * v).sqrt() - major_radius;
                if ring_delta * ring_delta + w * w <= minor_sq {
                    sink.set_voxel(center.x + dx, center.y + dy, center.z + dz, voxel);
                }
            }
        }
    }
}

/// A solid cylinder of `radius`, `height` voxels tall along `axis`
/// (defaulting to `Y`), starting at `center_bottom`.
pub fn cylinder(sink: &mut dyn VoxelSink, center_bottom: IVec3, axis: Axis, radius: i32, height: i32, voxel: Voxel) {
    let axis = resolve_axis(axis);
    let radius_sq = radius * radius;
    for h in 0..height.max(0) {
        for v in -radius..=radius {
            for u in -radius..=radius {
                if u * u + v * v > radius_sq {
                    continue;
                }
                let (x, y, z) = match axis {
                    Axis::X => (center_bottom.x + h, center_bottom.y + u, center_bottom.z + v),
                    Axis::Y => (center_bottom.x + u, center_bottom.y + h, center_bottom.z + v),
                    Axis::Z => (center_bottom.x + u, center_bottom.y + v, center_bottom.z + h),
                    Axis::None => unreachable!("resolve_axis never returns None"),
                };
                sink.set_voxel(x, y, z, voxel);
            }
        }
    }
}

/// Radii of the ellipsoid inscribed in `region`, halving each dimension.
fn ellipsoid_radii(region: Region) -> (f64, f64, f64) {
    let dims = region.dimensions_in_voxels();
    (f64::from(dims.x) / 2.0, f64::from(dims.y) / 2.0, f64::from(dims.z) / 2.0)
}

/// An ellipsoid inscribed in `region`, boundary voxels included.
pub fn ellipse(sink: &mut dyn VoxelSink, region: Region, voxel: Voxel) {
    let center = region.center();
    let (rx, ry, rz) = ellipsoid_radii(region);
    let mins = region.mins();
    let maxs = region.maxs();
    for z in mins.z..=maxs.z {
        for y in mins.y..=maxs.y {
            for x in mins.x..=maxs.x {
                let dx = f64::from(x - center.x) / rx.max(0.5);
                let dy = f64::from(y - center.y) / ry.max(0.5);
                let dz = f64::from(z - center.z) / rz.max(0.5);
                if dx * dx + dy * dy + dz * dz <= 1.0 {
                    sink.set_voxel(x, y, z, voxel);
                }
            }
        }
    }
}

/// A hemisphere filling `region`: flat base at `region`'s lower `y`, apex
/// at the upper `y`, squashed to the full width/depth of `region`.
pub fn dome(sink: &mut dyn VoxelSink, region: Region, voxel: Voxel) {
    let center = region.center();
    let (rx, _, rz) = ellipsoid_radii(region);
    let ry = f64::from(region.height());
    let mins = region.mins();
    let maxs = region.maxs();
    for z in mins.z..=maxs.z {
        for y in mins.y..=maxs.y {
            for x in mins.x..=maxs.x {
                let dx = f64::from(x - center.x) / rx.max(0.5);
                let dy = f64::from(y - mins.y) / ry.max(0.5);
                let dz = f64::from(z - center.z) / rz.max(0.5);
                if dx * dx + dy * dy + dz * dz <= 1.0 {
                    sink.set_voxel(x, y, z, voxel);
                }
            }
        }
    }
}

/// A cone with its base at `region`'s lower `y` and its apex at the upper
/// `y`, radius narrowing linearly from full width/depth at the base to
/// zero at the apex.
pub fn cone(sink: &mut dyn VoxelSink, region: Region, voxel: Voxel) {
    let center = region.center();
    let (rx, _, rz) = ellipsoid_radii(region);
    let height = f64::from(region.height().max(1));
    let mins = region.mins();
    let maxs = region.maxs();
    for z in mins.z..=maxs.z {
        for y in mins.y..=maxs.y {
            for x in mins.x..=maxs.x {
                let t = f64::from(y - mins.y) / height;
                let shrink = (1.0 - t).max(0.0);
                let dx = f64::from(x - center.x) / (rx.max(0.5) * shrink.max(1e-6));
                let dz = f64::from(z - center.z) / (rz.max(0.5) * shrink.max(1e-6));
                if dx * dx + dz * dz <= 1.0 {
                    sink.set_voxel(x, y, z, voxel);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vx_voxel::{RawVolume, VoxelType};

    struct VolumeSink(RawVolume);

    impl VoxelSink for VolumeSink {
        fn voxel(&self, x: i32, y: i32, z: i32) -> Voxel {
            self.0.voxel(x, y, z)
        }
        fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) -> bool {
            self.0.set_voxel(x, y, z, voxel)
        }
    }

    fn sink(size: i32) -> VolumeSink {
        VolumeSink(RawVolume::new(Region::from_coords(-size, -size, -size, size, size, size)))
    }

    #[test]
    fn cube_fills_every_voxel_in_its_region() {
        let mut s = sink(4);
        let region = Region::from_coords(1, 1, 1, 3, 3, 3);
        let voxel = Voxel::new(VoxelType::Generic, 3);
        cube(&mut s, region, voxel);
        let mut count = 0;
        for z in -4..=4 {
            for y in -4..=4 {
                for x in -4..=4 {
                    if s.voxel(x, y, z) == voxel {
                        count += 1;
                    }
                }
            }
        }
        assert_eq!(count, 27);
    }

    #[test]
    fn torus_is_symmetric_about_its_center() {
        let mut s = sink(10);
        let voxel = Voxel::new(VoxelType::Generic, 1);
        torus(&mut s, IVec3::ZERO, 2.0, 4.0, Axis::None, voxel);
        assert!(s.voxel(6, 0, 0).is_blocked());
        assert!(s.voxel(-6, 0, 0).is_blocked());
        assert!(s.voxel(0, 0, 0).is_air(), "hole in the middle of the torus");
    }

    #[test]
    fn cylinder_fills_a_disk_per_height_step() {
        let mut s = sink(10);
        let voxel = Voxel::new(VoxelType::Generic, 1);
        cylinder(&mut s, IVec3::new(0, 0, 0), Axis::Y, 2, 3, voxel);
        assert!(s.voxel(0, 0, 0).is_blocked());
        assert!(s.voxel(2, 0, 0).is_blocked());
        assert!(s.voxel(3, 0, 0).is_air());
        assert!(s.voxel(0, 3, 0).is_air(), "cylinder stops at height 3");
    }

    #[test]
    fn ellipse_fills_its_center_and_leaves_far_corners_air() {
        let mut s = sink(10);
        let region = Region::from_coords(-4, -4, -4, 4, 4, 4);
        let voxel = Voxel::new(VoxelType::Generic, 1);
        ellipse(&mut s, region, voxel);
        assert!(s.voxel(0, 0, 0).is_blocked());
        assert!(s.voxel(-4, -4, -4).is_air(), "ellipsoid excludes the AABB's corners");
    }

    #[test]
    fn cone_narrows_from_base_to_apex() {
        let mut s = sink(10);
        let region = Region::from_coords(-4, 0, -4, 4, 8, 4);
        let voxel = Voxel::new(VoxelType::Generic, 1);
        cone(&mut s, region, voxel);
        assert!(s.voxel(3, 0, 0).is_blocked(), "base is wide");
        assert!(s.voxel(3, 8, 0).is_air(), "apex is narrow");
    }

    #[test]
    fn dome_has_a_flat_base_and_a_rounded_top() {
        let mut s = sink(10);
        let region = Region::from_coords(-4, 0, -4, 4, 4, 4);
        let voxel = Voxel::new(VoxelType::Generic, 1);
        dome(&mut s, region, voxel);
        assert!(s.voxel(3, 0, 0).is_blocked(), "base covers the full width");
        assert!(s.voxel(4, 4, 4).is_air(), "top corner is outside the dome");
    }
}
