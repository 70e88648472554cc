// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Save a small hand-built volume as AoS-VXL, then load it back and report
//! the palette and voxel counts recovered from the wire format.
//!
//! Run:
//! - `cargo run -p vxedit_demos --example vxl_round_trip`

use std::io::{Cursor, Seek, SeekFrom};

use glam::IVec3;
use vx_codec::{CancelToken, Codec};
use vx_geom::Region;
use vx_palette::{Palette, Rgba};
use vx_scenegraph::{SceneGraph, SceneGraphNode, SceneGraphNodeType, ROOT_ID};
use vx_voxel::{RawVolume, Voxel, VoxelType};
use vx_vxl::{AosVxlFormat, COLUMN_HEIGHT};

fn main() {
    env_logger::init();

    let width = 4;
    let depth = 4;
    let codec = AosVxlFormat::new(width, depth);
    let region = Region::from_origin_and_dims(IVec3::ZERO, IVec3::new(width, COLUMN_HEIGHT, depth));

    let mut volume = RawVolume::new(region);
    let mut palette = Palette::new();
    let roof = palette.insert(Rgba::new(200, 40, 40, 255));
    for x in 0..width {
        for z in 0..depth {
            volume.set_voxel(x, COLUMN_HEIGHT - 1, z, Voxel::new(VoxelType::Generic, roof));
        }
    }

    let mut graph = SceneGraph::new();
    let mut node = SceneGraphNode::new(SceneGraphNodeType::Model, "roof.vxl");
    node.set_palette(palette);
    node.set_volume(std::rc::Rc::new(std::cell::RefCell::new(volume)));
    graph.emplace(node, ROOT_ID);

    let cancel = CancelToken::new();
    let mut stream = Cursor::new(Vec::new());
    codec.save_groups(&graph, "roof.vxl", &mut stream, &cancel).expect("save should succeed");
    println!("wrote {} bytes", stream.get_ref().len());

    stream.seek(SeekFrom::Start(0)).expect("seek back to start");
    let mut loaded = SceneGraph::new();
    codec.load_groups("roof.vxl", &mut stream, &mut loaded, &cancel).expect("load should succeed");

    let loaded_node = loaded.model_nodes().next().expect("one model node round-trips");
    let loaded_volume = loaded_node.volume().expect("model node carries a volume").borrow();
    let solid_count = (0..width)
        .flat_map(|x| (0..depth).map(move |z| (x, z)))
        .filter(|&(x, z)| loaded_volume.voxel(x, COLUMN_HEIGHT - 1, z).is_blocked())
        .count();
    println!("recovered {solid_count} solid roof voxels, palette has {} colors", loaded_node.palette().color_count());
}
