// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Codec`] implementation for the AoS-VXL wire format.

use vx_codec::{CancelToken, Codec, CodecError, FormatFlags};
use vx_io::{ReadStream, WriteStream};
use vx_palette::Palette;
use vx_scenegraph::{SceneGraph, SceneGraphNode, SceneGraphNodeType, VolumeHandle, ROOT_ID};
use vx_voxel::RawVolume;

use crate::column::{load_column, map_region, save_column, should_abort, COLUMN_HEIGHT};

/// Largest map axis this codec will accept, per `spec.md` §7's "impossible
/// dimension (e.g. any axis > 2048)" malformed-input example.
const MAX_MAP_AXIS: i32 = 2048;

/// AceOfSpades-style RLE columnar voxel format.
///
/// Unlike most voxel container formats, the AoS-VXL wire layout carries no
/// width/depth header at all — the map grid's `(width, depth)` is a
/// property of the *map*, not the stream, and the original engine always
/// knew it ahead of time (from a fixed compiled-in map size or a sibling
/// metadata file neither of which survived extraction into
/// `original_source`). `AosVxlFormat` therefore takes `(width, depth)`
/// explicitly at construction rather than trying to recover them from the
/// byte stream; see `DESIGN.md` for this Open Question's resolution.
/// `COLUMN_HEIGHT` (256) is fixed by the format itself and is not
/// configurable.
#[derive(Clone, Copy, Debug)]
pub struct AosVxlFormat {
    width: i32,
    depth: i32,
}

impl AosVxlFormat {
    /// The classic AceOfSpades map size, used by [`AosVxlFormat::default`].
    pub const DEFAULT_MAP_SIZE: i32 = 512;

    /// A format instance for a map grid of `width * depth` columns.
    #[must_use]
    pub const fn new(width: i32, depth: i32) -> Self {
        Self { width, depth }
    }

    fn validate_dimensions(&self) -> Result<(), CodecError> {
        if self.width <= 0 || self.width > MAX_MAP_AXIS {
            return Err(CodecError::DimensionOutOfRange { axis: "x", value: i64::from(self.width) });
        }
        if self.depth <= 0 || self.depth > MAX_MAP_AXIS {
            return Err(CodecError::DimensionOutOfRange { axis: "z", value: i64::from(self.depth) });
        }
        Ok(())
    }

    /// Load the raw volume and palette, without wrapping them in a scene
    /// graph. Shared by [`Codec::load_groups`] and [`Codec::load_palette`]
    /// (the latter discards the volume), matching `Format::loadGroupsPalette`'s
    /// role as the common implementation both entry points delegate to.
    fn load_volume(
        &self,
        stream: &mut dyn ReadStream,
        cancel: &CancelToken,
    ) -> Result<(RawVolume, Palette), CodecError> {
        self.validate_dimensions()?;
        let region = map_region(self.width, self.depth);
        let mut volume = RawVolume::new(region);
        let mut palette = Palette::new();

        for z in 0..self.depth {
            if should_abort(cancel) {
                log::error!("aos-vxl load cancelled at column z={z}");
                return Err(CodecError::Cancelled);
            }
            for x in 0..self.width {
                load_column(stream, &mut volume, &mut palette, x, z)?;
            }
        }
        Ok((volume, palette))
    }
}

impl Default for AosVxlFormat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAP_SIZE, Self::DEFAULT_MAP_SIZE)
    }
}

impl Codec for AosVxlFormat {
    fn flags(&self) -> FormatFlags {
        // Colors live inline in spans (spec.md §4.E); there is no embedded
        // palette chunk or screenshot to report.
        FormatFlags::empty()
    }

    fn load_groups(
        &self,
        filename: &str,
        stream: &mut dyn ReadStream,
        graph: &mut SceneGraph,
        cancel: &CancelToken,
    ) -> Result<(), CodecError> {
        let (volume, palette) = self.load_volume(stream, cancel)?;
        let mut node = SceneGraphNode::new(SceneGraphNodeType::Model, filename);
        node.set_palette(palette);
        let handle: VolumeHandle = std::rc::Rc::new(std::cell::RefCell::new(volume));
        node.set_volume(handle);
        if graph.emplace(node, ROOT_ID) < 0 {
            return Err(CodecError::Malformed { reason: "root node missing".to_owned() });
        }
        Ok(())
    }

    fn save_groups(
        &self,
        graph: &SceneGraph,
        _filename: &str,
        stream: &mut dyn WriteStream,
        cancel: &CancelToken,
    ) -> Result<(), CodecError> {
        let Some(node) = graph.model_nodes().find(|n| n.volume().is_some()) else {
            return Err(CodecError::Malformed { reason: "no model node with a volume to save".to_owned() });
        };
        let handle = node.volume().expect("checked is_some above");
        let volume = handle.borrow();
        let region = volume.region();
        if region.height() != COLUMN_HEIGHT {
            return Err(CodecError::DimensionOutOfRange { axis: "y", value: i64::from(region.height()) });
        }

        let mut palette = node.palette().clone();
        let mins = region.mins();
        for local_z in 0..region.depth() {
            if should_abort(cancel) {
                log::error!("aos-vxl save cancelled at column z={local_z}");
                return Err(CodecError::Cancelled);
            }
            for local_x in 0..region.width() {
                save_column(stream, &volume, &mut palette, mins.x + local_x, mins.z + local_z)?;
            }
        }
        Ok(())
    }

    fn load_palette(&self, _filename: &str, stream: &mut dyn ReadStream) -> Result<Palette, CodecError> {
        let cancel = CancelToken::new();
        let (_volume, palette) = self.load_volume(stream, &cancel)?;
        Ok(palette)
    }
}
