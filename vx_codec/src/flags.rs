// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-format capability flags.

bitflags::bitflags! {
    /// Capability bits for a concrete format, mirroring the
    /// `VOX_FORMAT_FLAG_*` C defines in `VolumeFormat.h`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u8 {
        /// The format can carry an embedded screenshot/thumbnail.
        const SCREENSHOT_EMBEDDED = 1 << 0;
        /// The format can carry an embedded palette.
        const PALETTE_EMBEDDED = 1 << 1;
        /// The format is a mesh export target rather than a voxel volume
        /// format (round-tripping through it loses voxel identity).
        const MESH_EXPORT = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_compose_and_test_independently() {
        let flags = FormatFlags::SCREENSHOT_EMBEDDED | FormatFlags::PALETTE_EMBEDDED;
        assert!(flags.contains(FormatFlags::SCREENSHOT_EMBEDDED));
        assert!(flags.contains(FormatFlags::PALETTE_EMBEDDED));
        assert!(!flags.contains(FormatFlags::MESH_EXPORT));
    }
}
