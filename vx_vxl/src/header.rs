// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 4-byte span header.

/// One column span header, matching the `Header` struct in
/// `AoSVXLFormat.h` field-for-field (`len`, `colorStartIdx`,
/// `colorEndIdx`, `airStartIdx`, each a single byte).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanHeader {
    /// Number of 4-byte chunks (header + colors) this span occupies, or
    /// `0` to mark the last span in the column.
    pub len: u8,
    /// First index (inclusive) of this span's explicitly colored run.
    pub color_start: u8,
    /// Last index (inclusive) of this span's explicitly colored run.
    pub color_end: u8,
    /// First index (inclusive) of this span's implicit (uncolored) solid
    /// run, which extends up to `color_start`.
    pub air_start: u8,
}

impl SpanHeader {
    /// Sentinel `color_start`/`color_end` pair meaning "zero explicit
    /// colors in this span" — used only by the terminal (`len == 0`) span
    /// of an all-air column, where `color_end - color_start + 1` would
    /// otherwise be unable to express an empty range in unsigned bytes.
    pub const EMPTY_COLOR_START: u8 = 1;
    /// See [`SpanHeader::EMPTY_COLOR_START`].
    pub const EMPTY_COLOR_END: u8 = 0;

    /// Number of explicitly colored voxels this span carries, using
    /// `len` (for non-terminal spans, where it is authoritative) or the
    /// signed `color_end - color_start + 1` difference (for the terminal
    /// span, where `len` is always `0`).
    #[must_use]
    pub const fn color_count(&self) -> usize {
        if self.len != 0 {
            (self.len - 1) as usize
        } else {
            let diff = self.color_end as i32 - self.color_start as i32 + 1;
            if diff > 0 {
                diff as usize
            } else {
                0
            }
        }
    }

    #[must_use]
    pub(crate) const fn empty_terminal() -> Self {
        Self {
            len: 0,
            color_start: Self::EMPTY_COLOR_START,
            color_end: Self::EMPTY_COLOR_END,
            air_start: Self::EMPTY_COLOR_START,
        }
    }
}
