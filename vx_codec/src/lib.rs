// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The codec contract: load/save a [`vx_scenegraph::SceneGraph`] through a
//! cancellable, stream-based interface.
//!
//! `vx_codec` has no concrete formats of its own — it defines the
//! [`Codec`] trait and its supporting types (`FormatFlags`, `CancelToken`,
//! `CodecError`); `vx_vxl` implements it for the AoS-VXL wire format.

mod cancel;
mod codec;
mod error;
mod flags;

pub use cancel::CancelToken;
pub use codec::{save, Codec};
pub use error::CodecError;
pub use flags::FormatFlags;
