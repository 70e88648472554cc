// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The codec contract.

use std::cell::RefCell;
use std::rc::Rc;

use vx_io::{ReadStream, WriteStream};
use vx_palette::Palette;
use vx_scenegraph::{SceneGraph, SceneGraphNode, SceneGraphNodeType, ROOT_ID};
use vx_voxel::RawVolume;

use crate::cancel::CancelToken;
use crate::error::CodecError;
use crate::flags::FormatFlags;

/// A single voxel format's load/save contract.
///
/// Every long-running entry point takes a [`CancelToken`] explicitly
/// (REDESIGN FLAG (a) in `spec.md` §9) instead of polling a global
/// `stopExecution()`; an implementation should check
/// `cancel.is_cancelled()` at natural loop boundaries (per node, per span,
/// per row) and return [`CodecError::Cancelled`] promptly when set.
pub trait Codec {
    /// Capability flags for this format. Defaults to none set.
    fn flags(&self) -> FormatFlags {
        FormatFlags::empty()
    }

    /// Populate `graph` from `stream`.
    fn load_groups(
        &self,
        filename: &str,
        stream: &mut dyn ReadStream,
        graph: &mut SceneGraph,
        cancel: &CancelToken,
    ) -> Result<(), CodecError>;

    /// Serialize `graph` to `stream`.
    fn save_groups(
        &self,
        graph: &SceneGraph,
        filename: &str,
        stream: &mut dyn WriteStream,
        cancel: &CancelToken,
    ) -> Result<(), CodecError>;

    /// Load just the embedded palette, if this format carries one.
    ///
    /// Default: formats with no palette support report an empty palette,
    /// matching `Format::loadPalette`'s `return 0` default.
    fn load_palette(&self, filename: &str, _stream: &mut dyn ReadStream) -> Result<Palette, CodecError> {
        log::debug!("{filename} has no embedded palette support");
        Ok(Palette::new())
    }

    /// Load an embedded screenshot/thumbnail, if this format carries one.
    ///
    /// Default: no supported embedded screenshot, matching
    /// `Format::loadScreenshot`'s default.
    fn load_screenshot(&self, filename: &str, _stream: &mut dyn ReadStream) -> Result<Option<Vec<u8>>, CodecError> {
        log::debug!("{filename} doesn't have a supported embedded screenshot");
        Ok(None)
    }
}

/// Save a single, unparented volume by wrapping it in a minimal one-node
/// graph, mirroring `Format::save`.
///
/// The wrapping node does *not* take ownership of `volume` (it clones the
/// handle rather than moving it), matching the original's
/// `node.setVolume(volume, false)`.
pub fn save(
    codec: &dyn Codec,
    volume: &Rc<RefCell<RawVolume>>,
    filename: &str,
    stream: &mut dyn WriteStream,
    cancel: &CancelToken,
) -> Result<(), CodecError> {
    let mut graph = SceneGraph::new();
    let mut node = SceneGraphNode::new(SceneGraphNodeType::Model, filename);
    node.set_volume(volume.clone());
    graph.emplace(node, ROOT_ID);
    codec.save_groups(&graph, filename, stream, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vx_geom::Region;
    use glam::IVec3;

    struct NullCodec;

    impl Codec for NullCodec {
        fn load_groups(
            &self,
            _filename: &str,
            _stream: &mut dyn ReadStream,
            _graph: &mut SceneGraph,
            _cancel: &CancelToken,
        ) -> Result<(), CodecError> {
            Ok(())
        }

        fn save_groups(
            &self,
            graph: &SceneGraph,
            _filename: &str,
            _stream: &mut dyn WriteStream,
            _cancel: &CancelToken,
        ) -> Result<(), CodecError> {
            assert_eq!(graph.model_nodes().count(), 1);
            Ok(())
        }
    }

    #[test]
    fn save_wraps_a_lone_volume_in_a_minimal_graph_without_taking_ownership() {
        let region = Region::from_origin_and_dims(IVec3::ZERO, IVec3::new(2, 2, 2));
        let volume = Rc::new(RefCell::new(RawVolume::new(region)));
        let mut stream = Cursor::new(Vec::new());
        let cancel = CancelToken::new();

        save(&NullCodec, &volume, "test.vol", &mut stream, &cancel).unwrap();

        assert_eq!(Rc::strong_count(&volume), 1);
    }

    #[test]
    fn default_load_palette_reports_empty() {
        let mut stream = Cursor::new(Vec::new());
        let palette = NullCodec.load_palette("test.vol", &mut stream).unwrap();
        assert_eq!(palette.color_count(), 0);
    }
}
