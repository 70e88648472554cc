// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer voxel-line traversal for the Line tool.
//!
//! Ground truth: `voxelutil::raycastWithEndpoints` (named in
//! `Modifier.cpp`'s `lineFlag` branch; its body was not retrieved).
//! `walk_line` is a 3D Bresenham line walk — the standard way to visit
//! exactly one voxel per integer step between two endpoints inclusive,
//! which is what a "draw a line of voxels from A to B" tool needs.

use glam::IVec3;

/// Visit every voxel on the line from `start` to `end`, inclusive of both
/// endpoints, in traversal order, calling `visit` once per voxel.
///
/// `visit` returning `false` stops the walk early (mirrors the original's
/// sampler-callback returning whether to keep going).
pub fn walk_line(start: IVec3, end: IVec3, mut visit: impl FnMut(IVec3) -> bool) {
    let delta = end - start;
    let steps = delta.x.abs().max(delta.y.abs()).max(delta.z.abs());
    if steps == 0 {
        visit(start);
        return;
    }
    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        let pos = IVec3::new(
            start.x + (f64::from(delta.x) * t).round() as i32,
            start.y + (f64::from(delta.y) * t).round() as i32,
            start.z + (f64::from(delta.z) * t).round() as i32,
        );
        if !visit(pos) {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_axis_line_visits_every_integer_step() {
        let mut visited = Vec::new();
        walk_line(IVec3::new(0, 0, 0), IVec3::new(4, 0, 0), |p| {
            visited.push(p);
            true
        });
        assert_eq!(visited.len(), 5);
        assert_eq!(visited[0], IVec3::new(0, 0, 0));
        assert_eq!(visited[4], IVec3::new(4, 0, 0));
    }

    #[test]
    fn single_point_line_visits_just_the_start() {
        let mut visited = Vec::new();
        walk_line(IVec3::new(2, 2, 2), IVec3::new(2, 2, 2), |p| {
            visited.push(p);
            true
        });
        assert_eq!(visited, vec![IVec3::new(2, 2, 2)]);
    }

    #[test]
    fn visit_returning_false_stops_the_walk_early() {
        let mut visited = Vec::new();
        walk_line(IVec3::new(0, 0, 0), IVec3::new(10, 0, 0), |p| {
            visited.push(p);
            visited.len() < 3
        });
        assert_eq!(visited.len(), 3);
    }

    #[test]
    fn diagonal_line_reaches_the_endpoint() {
        let mut visited = Vec::new();
        walk_line(IVec3::new(0, 0, 0), IVec3::new(3, 3, 0), |p| {
            visited.push(p);
            true
        });
        assert_eq!(*visited.last().unwrap(), IVec3::new(3, 3, 0));
        assert_eq!(visited[0], IVec3::new(0, 0, 0));
    }
}
