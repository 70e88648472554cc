// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry that turns a tool invocation into a sequence of voxel writes:
//! analytic shape rasterizers, the Plane tool's flood-fill/extrude/erase/
//! paint, the Line tool's integer line walk, and the Path tool's
//! pathfinder. None of it owns a volume or enforces a write policy — every
//! entry point here writes through a [`VoxelSink`], leaving ownership and
//! policy (Place/Erase/Paint/Override, selection clipping, dirty-region
//! tracking) to the caller.

mod pathfind;
mod plane;
mod raycast;
mod shapes;
mod sink;

pub use pathfind::{find_path, is_touching_solid};
pub use plane::{erase_plane, extrude_plane, flood_fill_plane, paint_plane, Face};
pub use raycast::walk_line;
pub use shapes::{cone, cube, cylinder, dome, ellipse, torus};
pub use sink::VoxelSink;
