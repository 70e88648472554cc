// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The modifier's tool selector, write policy, shape selector, and
//! orthogonal mode flags.
//!
//! `spec.md` §9 REDESIGN FLAGS (b) replaces the original `modifierType`
//! bitmask — `⊆ {Place, Erase, Paint, Select, ColorPicker, Line, Path,
//! Plane, Single}` — with a pair `(tool: ModifierTool, write_policy:
//! WritePolicy)` plus a `bitflags!` set for the two members of that
//! bitmask that are genuinely orthogonal booleans rather than alternatives
//! of each other: `Plane` (apply the active shape/policy via a
//! flood-filled plane instead of rasterizing an AABB) and `Single` (the
//! AABB state machine never latches; every trigger is a unit action).

use bitflags::bitflags;

/// Which action `Modifier::aabb_action` dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ModifierTool {
    /// Replace the selection with the current AABB. Writes no voxels.
    Select,
    /// Read the voxel at the cursor into `cursor_voxel`. Writes no voxels.
    ColorPicker,
    /// Raycast from the reference position to the cursor, writing along
    /// the line.
    Line,
    /// A* from the reference position to the cursor, writing along the
    /// path.
    Path,
    /// Rasterize the active `ShapeType` into the AABB (or, with
    /// [`ModifierMode::PLANE`] set, flood-fill the hit face instead).
    #[default]
    Shape,
}

/// How a single voxel write is resolved against the voxel already stored
/// there. See `vx_modifier::wrapper::ModifierVolumeWrapper`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum WritePolicy {
    /// Write only into air; never overwrites an existing solid voxel.
    #[default]
    Place,
    /// Write air only where a solid voxel already exists.
    Erase,
    /// Overwrite only where a solid voxel already exists; never creates a
    /// voxel out of air.
    Paint,
    /// Write unconditionally (the original's `Place|Erase` combination).
    Override,
}

/// Which analytic shape `ModifierTool::Shape` rasterizes, per `spec.md`
/// §4.G.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ShapeType {
    /// Axis-aligned fill of the AABB.
    #[default]
    Aabb,
    /// A torus ring around the AABB's center.
    Torus,
    /// A solid cylinder.
    Cylinder,
    /// A cone narrowing from base to apex.
    Cone,
    /// A hemispherical dome.
    Dome,
    /// An inscribed ellipsoid.
    Ellipse,
}

bitflags! {
    /// Orthogonal booleans that modify how `ModifierTool::Shape` behaves,
    /// independent of which tool or write policy is active.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ModifierMode: u8 {
        /// Flood-fill the plane coplanar with the hit face instead of
        /// rasterizing an AABB shape.
        const PLANE = 1 << 0;
        /// The AABB state machine never latches; every `aabb_start` is an
        /// immediate one-voxel action.
        const SINGLE = 1 << 1;
    }
}
