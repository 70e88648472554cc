// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ordered, fixed-capacity RGBA color table with deduplicating
//! insertion and perceptual (HSB-space) nearest-match lookup.
//!
//! Used by [`SceneGraphNode`](../vx_scenegraph/struct.SceneGraphNode.html)
//! (one palette per Model node) and by codecs that quantize true-color
//! input down to a 256-entry table (for example `vx_vxl`).

mod palette;
mod rgba;

pub use palette::{Palette, MAX_COLORS};
pub use rgba::Rgba;
