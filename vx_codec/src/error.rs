// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors a [`crate::Codec`] can fail with.
//!
//! `spec.md` §7 specifies a `bool`-returning failure contract ("codecs
//! must not throw; they signal failure with `false` and a logged
//! reason"); `Result::is_ok()` is that `bool` here, with a concrete reason
//! attached for callers and tests. No retries are attempted anywhere.

/// A codec operation failure.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input does not conform to the expected wire format.
    #[error("malformed input: {reason}")]
    Malformed {
        /// Human-readable description of what was wrong.
        reason: String,
    },
    /// A dimension (width, height, depth, or span count) fell outside the
    /// format's representable range.
    #[error("dimension out of range on axis {axis}: {value}")]
    DimensionOutOfRange {
        /// Which axis (`"x"`, `"y"`, `"z"`, or similar) was out of range.
        axis: &'static str,
        /// The offending value.
        value: i64,
    },
    /// The operation was cancelled via a [`crate::CancelToken`].
    #[error("operation cancelled")]
    Cancelled,
    /// An underlying I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
