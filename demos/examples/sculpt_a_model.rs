// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a scene graph with one Model node, carve a mirrored torus into its
//! volume with the modifier engine, then report the dirty region.
//!
//! Run:
//! - `cargo run -p vxedit_demos --example sculpt_a_model`

use glam::IVec3;
use vx_geom::{Axis, Region};
use vx_modifier::{Modifier, ShapeType};
use vx_scenegraph::{SceneGraph, SceneGraphNode, SceneGraphNodeType, VolumeHandle, ROOT_ID};
use vx_voxel::{RawVolume, Voxel, VoxelType};

fn main() {
    env_logger::init();

    let mut graph = SceneGraph::new();
    let mut model = SceneGraphNode::new(SceneGraphNodeType::Model, "statue");
    let region = Region::from_coords(-16, -16, -16, 16, 16, 16);
    let handle: VolumeHandle = std::rc::Rc::new(std::cell::RefCell::new(RawVolume::new(region)));
    model.set_volume(handle.clone());
    let model_id = graph.emplace(model, ROOT_ID);

    let mut modifier = Modifier::new();
    modifier.set_shape_type(ShapeType::Torus);
    modifier.set_cursor_voxel(Voxel::new(VoxelType::Generic, 1));
    modifier.set_mirror_axis(Axis::X);
    modifier.set_mirror_pos(IVec3::ZERO);
    modifier.set_cursor_position(IVec3::new(4, -8, -8));
    modifier.aabb_start();
    modifier.set_cursor_position(IVec3::new(12, 8, 8));
    modifier.aabb_step();

    let mut volume = handle.borrow_mut();
    let mut dirty_total = Region::INVALID;
    let applied = modifier.aabb_action(&mut *volume, |region, tool| {
        println!("{model_id}: {tool:?} dirtied {region:?}");
        dirty_total = dirty_total.union(&region);
    });
    drop(volume);

    if applied {
        println!("sculpted {}, total dirty region {:?}", graph.node(model_id).unwrap().name(), dirty_total);
    } else {
        println!("modifier action did not apply");
    }
}
