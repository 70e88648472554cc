// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! AoS-VXL-style RLE columnar voxel format.
//!
//! This is the one concrete [`vx_codec::Codec`] implementation this
//! workspace ships, standing in for the 30+ format registry `spec.md` §1
//! calls out of scope: the load/save contract every real format follows is
//! identical, so this is the representative exemplar. See `spec.md` §4.E
//! for the wire layout and `column.rs` for the per-`(x, z)` span codec.

mod codec;
mod column;
mod header;

pub use codec::AosVxlFormat;
pub use column::COLUMN_HEIGHT;
pub use header::SpanHeader;
