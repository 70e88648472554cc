// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reflecting an AABB through a mirror plane on one axis.

use glam::IVec3;
use vx_geom::{Axis, Region};

/// Reflect `region` through `mirror_pos` on `axis`, preserving its size on
/// the other two axes.
///
/// Ground truth: `Modifier::getMirrorAABB` (named in `Modifier.cpp`'s
/// mirror branch); this is the closed-form equivalent of its delta-shift
/// arithmetic (`new_mins = 2*mirror_pos - maxs`, `new_maxs = 2*mirror_pos
/// - mins`, on the mirrored axis only), verified directly against
/// `spec.md` §8's S3 scenario: axis X, `mirror_pos.x = 0`, primary AABB
/// `[(1,0,0),(2,0,0)]` reflects to `[(-2,0,0),(-1,0,0)]`.
///
/// # Panics
///
/// Panics if `axis` is [`Axis::None`] — callers must check `axis !=
/// Axis::None` before mirroring, matching `spec.md` §4.F's "if mirrorAxis
/// ≠ None" guard.
#[must_use]
pub fn reflect_region(region: Region, axis: Axis, mirror_pos: IVec3) -> Region {
    assert!(axis != Axis::None, "reflect_region requires a concrete axis");
    let idx = axis.index();
    let mut mins = region.mins().to_array();
    let mut maxs = region.maxs().to_array();
    let pivot = mirror_pos.to_array()[idx];
    let (old_min, old_max) = (mins[idx], maxs[idx]);
    mins[idx] = 2 * pivot - old_max;
    maxs[idx] = 2 * pivot - old_min;
    Region::new(IVec3::from_array(mins), IVec3::from_array(maxs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s3_mirror_scenario_reflects_across_x_zero() {
        let primary = Region::from_coords(1, 0, 0, 2, 0, 0);
        let mirrored = reflect_region(primary, Axis::X, IVec3::ZERO);
        assert_eq!(mirrored, Region::from_coords(-2, 0, 0, -1, 0, 0));
    }

    #[test]
    fn reflecting_through_a_nonzero_pivot() {
        let primary = Region::from_coords(5, 0, 0, 7, 0, 0);
        let mirrored = reflect_region(primary, Axis::X, IVec3::new(10, 0, 0));
        // Pivot at x=10: x=5 -> 15, x=7 -> 13.
        assert_eq!(mirrored, Region::from_coords(13, 0, 0, 15, 0, 0));
    }

    #[test]
    fn reflecting_twice_returns_the_original() {
        let primary = Region::from_coords(-3, 1, 2, 4, 6, 9);
        let once = reflect_region(primary, Axis::Z, IVec3::new(0, 0, 3));
        let twice = reflect_region(once, Axis::Z, IVec3::new(0, 0, 3));
        assert_eq!(twice, primary);
    }

    #[test]
    #[should_panic(expected = "reflect_region requires a concrete axis")]
    fn none_axis_panics() {
        let _ = reflect_region(Region::from_coords(0, 0, 0, 1, 1, 1), Axis::None, IVec3::ZERO);
    }
}
