// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cursor/AABB state machine and its dispatch to the seven tools.
//!
//! Ground truth: `Modifier.h`/`Modifier.cpp` in `original_source` (only
//! declarations and the `aabbAction` control flow survived extraction;
//! the shape/A*/raycast callee bodies did not — those live in
//! `vx_shapes`, built from `spec.md` §4.G's formulas rather than ported
//! source). The state diagram, `needsSecondAction`/`firstPos` logic, and
//! the mirror AABB arithmetic are reproduced from `spec.md` §4.F directly.

use glam::IVec3;
use vx_geom::{Axis, Region};
use vx_shapes::{
    cone, cube, cylinder, dome, ellipse, extrude_plane, erase_plane, find_path, is_touching_solid,
    paint_plane, torus, walk_line, Face, VoxelSink,
};
use vx_voxel::Voxel;

use crate::command::{Command, CommandEffect};
use crate::mirror::reflect_region;
use crate::selection::Selection;
use crate::tool::{ModifierMode, ModifierTool, ShapeType, WritePolicy};
use crate::wrapper::ModifierVolumeWrapper;

/// Where the cursor/AABB state machine currently sits.
///
/// `spec.md` §4.F's diagram names a fifth state, `Execute`; it isn't
/// represented here as its own variant since it has no duration — reaching
/// it is exactly the condition [`Modifier::is_ready_to_execute`] checks,
/// and `aabb_action` both consumes it and returns to `Idle` in one call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AabbState {
    /// No action in progress.
    #[default]
    Idle,
    /// `aabb_start` has recorded `first_pos`.
    FirstPicked,
    /// `aabb_step` has recorded `second_pos`.
    SecondPicked,
    /// A third click has picked the extrusion extent of a flat rectangle.
    ThirdPicked,
}

/// The interactive modifier engine: cursor, reference position, AABB
/// state, selection, mirror, and the tool/policy/shape/mode selectors.
#[derive(Debug)]
pub struct Modifier {
    tool: ModifierTool,
    write_policy: WritePolicy,
    shape_type: ShapeType,
    mode: ModifierMode,
    grid_resolution: i32,

    cursor_position: IVec3,
    cursor_voxel: Voxel,
    reference_position: IVec3,
    hit_face: Option<Face>,

    selection: Selection,
    mirror_axis: Axis,
    mirror_pos: IVec3,
    center: bool,

    state: AabbState,
    first_pos: IVec3,
    second_pos: IVec3,
    second_pos_valid: bool,
    second_action_direction: Axis,
}

impl Default for Modifier {
    fn default() -> Self {
        Self {
            tool: ModifierTool::default(),
            write_policy: WritePolicy::default(),
            shape_type: ShapeType::default(),
            mode: ModifierMode::empty(),
            grid_resolution: 1,
            cursor_position: IVec3::ZERO,
            cursor_voxel: Voxel::AIR,
            reference_position: IVec3::ZERO,
            hit_face: None,
            selection: Selection::NONE,
            mirror_axis: Axis::None,
            mirror_pos: IVec3::ZERO,
            center: false,
            state: AabbState::Idle,
            first_pos: IVec3::ZERO,
            second_pos: IVec3::ZERO,
            second_pos_valid: false,
            second_action_direction: Axis::None,
        }
    }
}

impl Modifier {
    /// A freshly constructed modifier: `Shape`/`Place`/`Aabb`, no
    /// selection, no mirror, grid resolution 1, idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Plain accessors -------------------------------------------------

    /// The active tool.
    #[must_use]
    pub const fn tool(&self) -> ModifierTool {
        self.tool
    }

    /// The active write policy.
    #[must_use]
    pub const fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }

    /// The active shape type.
    #[must_use]
    pub const fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// The active orthogonal mode flags.
    #[must_use]
    pub const fn mode(&self) -> ModifierMode {
        self.mode
    }

    /// The current AABB state.
    #[must_use]
    pub const fn state(&self) -> AabbState {
        self.state
    }

    /// The active selection, if any.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// The last value read or picked for writing (`cursorVoxel`).
    #[must_use]
    pub const fn cursor_voxel(&self) -> Voxel {
        self.cursor_voxel
    }

    /// Set the voxel that Place/Paint/Override/Line/Path/Shape writes
    /// with (normally populated by the `ColorPicker` tool, but also
    /// settable directly, e.g. from a palette-swatch UI).
    pub fn set_cursor_voxel(&mut self, voxel: Voxel) {
        self.cursor_voxel = voxel;
    }

    /// Set the tool.
    pub fn set_tool(&mut self, tool: ModifierTool) {
        self.tool = tool;
    }

    /// Set the write policy.
    pub fn set_write_policy(&mut self, write_policy: WritePolicy) {
        self.write_policy = write_policy;
    }

    /// Set the shape type (also selects `ModifierTool::Shape`, matching
    /// the original's `shape*` command bindings).
    pub fn set_shape_type(&mut self, shape_type: ShapeType) {
        self.shape_type = shape_type;
        self.tool = ModifierTool::Shape;
    }

    /// Set or clear the `Plane`/`Single` mode flags.
    pub fn set_mode(&mut self, mode: ModifierMode) {
        self.mode = mode;
    }

    /// Grid resolution: the edge length of a unit action and the AABB
    /// snap increment. Must be positive.
    pub fn set_grid_resolution(&mut self, resolution: i32) {
        debug_assert!(resolution > 0, "grid resolution must be positive");
        self.grid_resolution = resolution.max(1);
    }

    /// Move the cursor. Does not by itself affect the AABB state machine;
    /// call `aabb_step` to latch it in.
    pub fn set_cursor_position(&mut self, position: IVec3) {
        self.cursor_position = position;
    }

    /// The cursor's current position.
    #[must_use]
    pub const fn cursor_position(&self) -> IVec3 {
        self.cursor_position
    }

    /// Set the Line/Path reference (start) position.
    pub fn set_reference_position(&mut self, position: IVec3) {
        self.reference_position = position;
    }

    /// Record which face of the cursor voxel was hit, for the Plane tool.
    pub fn set_hit_face(&mut self, face: Face) {
        self.hit_face = Some(face);
    }

    /// Set the mirror axis (`Axis::None` disables mirroring).
    pub fn set_mirror_axis(&mut self, axis: Axis) {
        self.mirror_axis = axis;
    }

    /// Set the mirror pivot position.
    pub fn set_mirror_pos(&mut self, pos: IVec3) {
        self.mirror_pos = pos;
    }

    /// Enable or disable Center mode: the first-picked position becomes
    /// the shape's center rather than one of its corners.
    pub fn set_center_mode(&mut self, center: bool) {
        self.center = center;
    }

    /// Directly replace the selection (bypassing the `Select` tool).
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Apply a parsed [`Command`]'s effect.
    pub fn dispatch_command(&mut self, command: Command) {
        match command.effect() {
            CommandEffect::Tool(tool) => self.tool = tool,
            CommandEffect::WritePolicy(policy) => self.write_policy = policy,
            CommandEffect::Shape(shape) => self.set_shape_type(shape),
            CommandEffect::MirrorAxis(axis) => self.mirror_axis = axis,
        }
    }

    // --- AABB state machine -----------------------------------------------

    /// The corner currently standing in for "where the rectangle ends":
    /// `second_pos` once picked, otherwise the live cursor (a preview).
    fn live_corner(&self) -> IVec3 {
        if self.second_pos_valid {
            self.second_pos
        } else {
            self.cursor_position
        }
    }

    /// `first_pos`, or its Center-mode reflection through the live corner
    /// so the resulting AABB straddles the original pick symmetrically.
    fn anchor(&self) -> IVec3 {
        if self.center {
            self.first_pos * 2 - self.live_corner()
        } else {
            self.first_pos
        }
    }

    /// The AABB the state machine currently describes:
    /// `[min(anchor, corner), max(anchor, corner) + grid_resolution - 1]`.
    #[must_use]
    pub fn aabb(&self) -> Region {
        let anchor = self.anchor();
        let corner = self.live_corner();
        let mins = anchor.min(corner);
        let maxs = anchor.max(corner) + IVec3::splat(self.grid_resolution - 1);
        Region::new(mins, maxs)
    }

    /// `true` iff the current AABB has exactly one axis of length
    /// `grid_resolution` and the other two strictly greater — a flat
    /// rectangle that must be extruded into its third axis before it can
    /// be executed.
    #[must_use]
    pub fn needs_second_action(&self) -> bool {
        let dims = self.aabb().dimensions_in_voxels().to_array();
        let flat = dims.iter().filter(|&&d| d == self.grid_resolution).count();
        let tall = dims.iter().filter(|&&d| d > self.grid_resolution).count();
        flat == 1 && tall == 2
    }

    /// The flat axis `needs_second_action` detected, or `Axis::None` if
    /// the current AABB isn't flat along exactly one axis.
    fn detect_flat_axis(&self) -> Axis {
        let dims = self.aabb().dimensions_in_voxels();
        if !self.needs_second_action() {
            return Axis::None;
        }
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            if dims.to_array()[axis.index()] == self.grid_resolution {
                return axis;
            }
        }
        Axis::None
    }

    /// The cursor projected onto the fixed axes of the rectangle, once a
    /// third axis is being chosen: only `second_action_direction` tracks
    /// the live cursor, the other two axes stay at their already-picked
    /// values.
    #[must_use]
    pub fn aabb_position(&self) -> IVec3 {
        if self.second_action_direction == Axis::None {
            return self.cursor_position;
        }
        let idx = self.second_action_direction.index();
        let mut pos = self.second_pos.to_array();
        pos[idx] = self.cursor_position.to_array()[idx];
        IVec3::from_array(pos)
    }

    /// `true` iff the state machine holds an AABB ready for `aabb_action`.
    ///
    /// `ColorPicker`, `Line`, and `Path` never latch an AABB at all — they
    /// read `cursor_position`/`reference_position` directly in
    /// `execute_color_picker`/`execute_line`/`execute_path` — so a single
    /// `aabb_start` (landing in `FirstPicked`) already carries everything
    /// they need. The `SecondPicked`/`ThirdPicked` progression below exists
    /// for `Select`/`Shape`, which do need a latched AABB.
    #[must_use]
    pub fn is_ready_to_execute(&self) -> bool {
        if matches!(self.tool, ModifierTool::ColorPicker | ModifierTool::Line | ModifierTool::Path) {
            return self.state != AabbState::Idle;
        }
        match self.state {
            AabbState::SecondPicked => !self.needs_second_action(),
            AabbState::ThirdPicked => true,
            AabbState::Idle | AabbState::FirstPicked => false,
        }
    }

    /// Begin (or, in `Single` mode, immediately complete) an AABB pick at
    /// the current cursor position.
    pub fn aabb_start(&mut self) {
        self.first_pos = self.cursor_position;
        self.second_pos_valid = false;
        self.second_action_direction = Axis::None;
        if self.mode.contains(ModifierMode::SINGLE) {
            self.second_pos = self.cursor_position;
            self.second_pos_valid = true;
            self.state = AabbState::ThirdPicked;
        } else {
            self.state = AabbState::FirstPicked;
        }
    }

    /// Latch the current cursor as the next corner of the AABB.
    ///
    /// Returns `false` (a no-op) if called from `Idle`.
    pub fn aabb_step(&mut self) -> bool {
        match self.state {
            AabbState::Idle => false,
            AabbState::FirstPicked => {
                self.second_pos = self.cursor_position;
                self.second_pos_valid = true;
                self.state = AabbState::SecondPicked;
                if self.needs_second_action() {
                    self.second_action_direction = self.detect_flat_axis();
                }
                true
            }
            AabbState::SecondPicked | AabbState::ThirdPicked => {
                self.second_pos = self.aabb_position();
                self.state = AabbState::ThirdPicked;
                true
            }
        }
    }

    /// Abandon the in-progress AABB pick and return to `Idle`.
    pub fn aabb_abort(&mut self) {
        self.state = AabbState::Idle;
        self.second_pos_valid = false;
        self.second_action_direction = Axis::None;
    }

    /// Execute the active tool against `volume`, calling `on_dirty` once
    /// per disjoint region emitted (in emission order) before returning.
    ///
    /// Returns `false` — with no mutation and no `on_dirty` call — if the
    /// state machine isn't ready, or if the tool's preconditions aren't
    /// met (e.g. Path with no reachable route). Always returns to `Idle`
    /// on success; leaves the state machine untouched on failure so the
    /// caller may retry or abort.
    pub fn aabb_action(
        &mut self,
        volume: &mut vx_voxel::RawVolume,
        mut on_dirty: impl FnMut(Region, ModifierTool),
    ) -> bool {
        if !self.is_ready_to_execute() {
            log::debug!("aabb_action called while not ready to execute");
            return false;
        }
        let ok = match self.tool {
            ModifierTool::Select => self.execute_select(volume, &mut on_dirty),
            ModifierTool::ColorPicker => self.execute_color_picker(volume),
            ModifierTool::Line => self.execute_line(volume, &mut on_dirty),
            ModifierTool::Path => self.execute_path(volume, &mut on_dirty),
            ModifierTool::Shape if self.mode.contains(ModifierMode::PLANE) => {
                self.execute_plane(volume, &mut on_dirty)
            }
            ModifierTool::Shape => self.execute_shape(volume, &mut on_dirty),
        };
        self.state = AabbState::Idle;
        self.second_pos_valid = false;
        self.second_action_direction = Axis::None;
        ok
    }

    fn write_material(&self) -> Voxel {
        if self.write_policy == WritePolicy::Erase {
            Voxel::AIR
        } else {
            self.cursor_voxel
        }
    }

    fn execute_select(&mut self, volume: &vx_voxel::RawVolume, on_dirty: &mut impl FnMut(Region, ModifierTool)) -> bool {
        let region = self.aabb().intersection(&volume.region());
        if !region.is_valid() {
            log::debug!("select AABB does not intersect the volume");
            return false;
        }
        self.selection = Selection::new(region);
        on_dirty(region, ModifierTool::Select);
        true
    }

    fn execute_color_picker(&mut self, volume: &vx_voxel::RawVolume) -> bool {
        let p = self.cursor_position;
        self.cursor_voxel = volume.voxel(p.x, p.y, p.z);
        true
    }

    fn execute_line(&mut self, volume: &mut vx_voxel::RawVolume, on_dirty: &mut impl FnMut(Region, ModifierTool)) -> bool {
        let material = self.write_material();
        let mut wrapper = ModifierVolumeWrapper::new(volume, self.write_policy);
        walk_line(self.reference_position, self.cursor_position, |pos| {
            wrapper.set_voxel(pos.x, pos.y, pos.z, material);
            true
        });
        match wrapper.take_dirty_region() {
            Some(dirty) => {
                on_dirty(dirty, ModifierTool::Line);
                true
            }
            None => false,
        }
    }

    fn execute_path(&mut self, volume: &mut vx_voxel::RawVolume, on_dirty: &mut impl FnMut(Region, ModifierTool)) -> bool {
        let material = self.write_material();
        let path = {
            let is_solid = |p: IVec3| volume.voxel(p.x, p.y, p.z).is_blocked();
            let walkable = |p: IVec3| !is_solid(p) && is_touching_solid(p, is_solid);
            find_path(self.reference_position, self.cursor_position, walkable)
        };
        let Some(path) = path else {
            log::debug!("no path found between reference and cursor");
            return false;
        };
        let mut wrapper = ModifierVolumeWrapper::new(volume, self.write_policy);
        for pos in path {
            wrapper.set_voxel(pos.x, pos.y, pos.z, material);
        }
        match wrapper.take_dirty_region() {
            Some(dirty) => {
                on_dirty(dirty, ModifierTool::Path);
                true
            }
            None => false,
        }
    }

    fn execute_plane(&mut self, volume: &mut vx_voxel::RawVolume, on_dirty: &mut impl FnMut(Region, ModifierTool)) -> bool {
        let material = self.write_material();
        let face = self.hit_face.unwrap_or(Face::PosY);
        let mut wrapper = ModifierVolumeWrapper::new(volume, self.write_policy);
        match self.write_policy {
            WritePolicy::Place => extrude_plane(&mut wrapper, self.cursor_position, face, material),
            WritePolicy::Erase => erase_plane(&mut wrapper, self.cursor_position, face),
            WritePolicy::Paint | WritePolicy::Override => {
                paint_plane(&mut wrapper, self.cursor_position, face, material);
            }
        }
        match wrapper.take_dirty_region() {
            Some(dirty) => {
                on_dirty(dirty, ModifierTool::Shape);
                true
            }
            None => false,
        }
    }

    fn execute_shape(&mut self, volume: &mut vx_voxel::RawVolume, on_dirty: &mut impl FnMut(Region, ModifierTool)) -> bool {
        let material = self.write_material();
        let primary = self.selection.clip(self.aabb());
        let axis = self.second_action_direction;

        let mut wrapper = ModifierVolumeWrapper::new(volume, self.write_policy);
        rasterize_shape(&mut wrapper, self.shape_type, primary, axis, material);
        let primary_dirty = wrapper.take_dirty_region();

        if self.mirror_axis == Axis::None {
            return match primary_dirty {
                Some(dirty) => {
                    on_dirty(dirty, ModifierTool::Shape);
                    true
                }
                None => false,
            };
        }

        let mirrored_region = reflect_region(primary, self.mirror_axis, self.mirror_pos);
        rasterize_shape(&mut wrapper, self.shape_type, mirrored_region, axis, material);
        let mirrored_dirty = wrapper.take_dirty_region();

        match (primary_dirty, mirrored_dirty) {
            (None, None) => false,
            (Some(d), None) | (None, Some(d)) => {
                on_dirty(d, ModifierTool::Shape);
                true
            }
            (Some(a), Some(b)) => {
                if primary.intersects(&mirrored_region) {
                    on_dirty(a.union(&b), ModifierTool::Shape);
                } else {
                    on_dirty(a, ModifierTool::Shape);
                    on_dirty(b, ModifierTool::Shape);
                }
                true
            }
        }
    }
}

/// `spec.md` §4.G.1 (`Modifier::executeShapeAction`'s
/// `getSizeAndHeightFromAxisAndDim`): the size of the two dimensions
/// perpendicular to `axis` (defaulting to `Y`), and the height along it.
fn size_and_height(region: Region, axis: Axis) -> (i32, i32) {
    let axis = if axis == Axis::None { Axis::Y } else { axis };
    let dims = region.dimensions_in_voxels().to_array();
    let idx = axis.index();
    let size = (0..3).filter(|&i| i != idx).map(|i| dims[i]).max().unwrap_or(0);
    (size, dims[idx])
}

/// The region's center on the two axes perpendicular to `axis`, and its
/// lower bound along `axis` — the cylinder's `centerBottom`.
fn cylinder_bottom_center(region: Region, axis: Axis) -> IVec3 {
    let axis = if axis == Axis::None { Axis::Y } else { axis };
    let center = region.center().to_array();
    let mins = region.mins().to_array();
    let idx = axis.index();
    let mut out = center;
    out[idx] = mins[idx];
    IVec3::from_array(out)
}

fn rasterize_shape(sink: &mut dyn VoxelSink, shape_type: ShapeType, region: Region, axis: Axis, voxel: Voxel) {
    if !region.is_valid() {
        return;
    }
    match shape_type {
        ShapeType::Aabb => cube(sink, region, voxel),
        ShapeType::Ellipse => ellipse(sink, region, voxel),
        ShapeType::Dome => dome(sink, region, voxel),
        ShapeType::Cone => cone(sink, region, voxel),
        ShapeType::Torus => {
            let center = region.center();
            let (size, _height) = size_and_height(region, axis);
            let minor_radius = f64::from(size) / 5.0;
            let major_radius = f64::from(size) / 2.0 - minor_radius;
            torus(sink, center, minor_radius, major_radius, axis, voxel);
        }
        ShapeType::Cylinder => {
            let (size, height) = size_and_height(region, axis);
            let radius = ((f64::from(size) / 2.0).round()) as i32;
            let center_bottom = cylinder_bottom_center(region, axis);
            cylinder(sink, center_bottom, axis, radius, height, voxel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vx_voxel::{RawVolume, VoxelType};

    fn cube_volume(half: i32) -> RawVolume {
        RawVolume::new(Region::from_coords(-half, -half, -half, half, half, half))
    }

    #[test]
    fn s1_cube_place_fills_twenty_seven_voxels() {
        let mut volume = RawVolume::new(Region::from_coords(0, 0, 0, 7, 7, 7));
        let mut modifier = Modifier::new();
        modifier.set_cursor_voxel(Voxel::new(VoxelType::Generic, 3));
        modifier.set_cursor_position(IVec3::new(1, 1, 1));
        modifier.aabb_start();
        modifier.set_cursor_position(IVec3::new(3, 3, 3));
        modifier.aabb_step();
        assert!(modifier.is_ready_to_execute());

        let mut dirty = None;
        let ok = modifier.aabb_action(&mut volume, |region, tool| {
            dirty = Some((region, tool));
        });
        assert!(ok);
        let (region, tool) = dirty.unwrap();
        assert_eq!(tool, ModifierTool::Shape);
        assert_eq!(region, Region::from_coords(1, 1, 1, 3, 3, 3));

        let mut count = 0;
        for z in 0..8 {
            for y in 0..8 {
                for x in 0..8 {
                    if volume.voxel(x, y, z).is_blocked() {
                        count += 1;
                    }
                }
            }
        }
        assert_eq!(count, 27);
        assert_eq!(modifier.state(), AabbState::Idle);
    }

    #[test]
    fn s2_erase_clipped_by_selection() {
        let mut volume = RawVolume::new(Region::from_coords(0, 0, 0, 7, 7, 7));
        let mut modifier = Modifier::new();
        modifier.set_cursor_voxel(Voxel::new(VoxelType::Generic, 3));
        modifier.set_cursor_position(IVec3::new(1, 1, 1));
        modifier.aabb_start();
        modifier.set_cursor_position(IVec3::new(3, 3, 3));
        modifier.aabb_step();
        modifier.aabb_action(&mut volume, |_, _| {});

        modifier.set_selection(Selection::new(Region::from_coords(2, 2, 2, 3, 3, 3)));
        modifier.set_write_policy(WritePolicy::Erase);
        modifier.set_cursor_position(IVec3::new(0, 0, 0));
        modifier.aabb_start();
        modifier.set_cursor_position(IVec3::new(5, 5, 5));
        modifier.aabb_step();
        let ok = modifier.aabb_action(&mut volume, |_, _| {});
        assert!(ok);
        assert!(volume.voxel(1, 1, 1).is_blocked(), "(1,1,1) is outside the selection");
        assert!(volume.voxel(2, 2, 2).is_air());
        assert!(volume.voxel(3, 3, 3).is_air());
    }

    #[test]
    fn s3_mirror_shape_action() {
        let mut volume = cube_volume(4);
        let mut modifier = Modifier::new();
        modifier.set_cursor_voxel(Voxel::new(VoxelType::Generic, 1));
        modifier.set_mirror_axis(Axis::X);
        modifier.set_mirror_pos(IVec3::ZERO);
        modifier.set_cursor_position(IVec3::new(1, 0, 0));
        modifier.aabb_start();
        modifier.set_cursor_position(IVec3::new(2, 0, 0));
        modifier.aabb_step();
        let ok = modifier.aabb_action(&mut volume, |_, _| {});
        assert!(ok);
        for x in [1, 2, -2, -1] {
            assert!(volume.voxel(x, 0, 0).is_blocked(), "x={x}");
        }
        assert!(volume.voxel(0, 0, 0).is_air());
        assert!(volume.voxel(3, 0, 0).is_air());
    }

    #[test]
    fn s5_path_around_an_obstacle() {
        let mut volume = RawVolume::new(Region::from_coords(-1, 0, -1, 6, 2, 6));
        let floor = Voxel::new(VoxelType::Generic, 2);
        for z in -1..=6 {
            for x in -1..=6 {
                volume.set_voxel(x, 0, z, floor);
            }
        }
        // A wall blocking the direct diagonal shortcut at x=2.
        for z in -1..=6 {
            if z != 0 {
                volume.set_voxel(2, 1, z, floor);
            }
        }
        let path_material = Voxel::new(VoxelType::Generic, 3);
        let mut modifier = Modifier::new();
        modifier.set_tool(ModifierTool::Path);
        modifier.set_cursor_voxel(path_material);
        modifier.set_reference_position(IVec3::new(0, 1, 0));
        modifier.set_cursor_position(IVec3::new(0, 1, 0));
        modifier.aabb_start();
        assert_eq!(modifier.state(), AabbState::FirstPicked);
        modifier.set_cursor_position(IVec3::new(4, 1, 4));
        modifier.aabb_step();
        assert_eq!(modifier.state(), AabbState::SecondPicked);
        assert!(modifier.is_ready_to_execute());

        let mut dirty = None;
        let ok = modifier.aabb_action(&mut volume, |region, tool| dirty = Some((region, tool)));
        assert!(ok, "a path must exist around the wall");
        assert_eq!(modifier.state(), AabbState::Idle);
        let (_, tool) = dirty.unwrap();
        assert_eq!(tool, ModifierTool::Path);

        let mut path_voxels = Vec::new();
        for z in -1..=6 {
            for x in -1..=6 {
                if volume.voxel(x, 1, z) == path_material {
                    path_voxels.push(IVec3::new(x, 1, z));
                }
            }
        }
        assert!(path_voxels.len() > 2, "the path tool must write more than just its two endpoints");
        for p in &path_voxels {
            assert!(volume.voxel(p.x, 0, p.z).is_blocked(), "every path voxel rests on the floor");
            assert!(p.x != 2 || p.z == 0, "the path never cuts through the wall");
        }

        // The 18-connected search lets diagonal steps undercut a strict
        // Manhattan staircase, so rather than pin an exact voxel count,
        // walk the written cells as a chain (each step a legal 18-connected
        // move) and check it makes monotone progress from start to end,
        // the property the staircase was meant to demonstrate.
        let start = IVec3::new(0, 1, 0);
        let end = IVec3::new(4, 1, 4);
        let mut visited = vec![false; path_voxels.len()];
        let mut current = path_voxels.iter().position(|&p| p == start).expect("start is on the path");
        visited[current] = true;
        let mut ordered = vec![path_voxels[current]];
        while let Some(next) = path_voxels.iter().enumerate().position(|(i, &p)| {
            !visited[i] && {
                let d = p - path_voxels[current];
                d != IVec3::ZERO && d.x.abs() <= 1 && d.y.abs() <= 1 && d.z.abs() <= 1
            }
        }) {
            visited[next] = true;
            ordered.push(path_voxels[next]);
            current = next;
        }
        assert_eq!(ordered.len(), path_voxels.len(), "the path voxels form a single connected chain");
        assert_eq!(*ordered.last().unwrap(), end);
        for pair in ordered.windows(2) {
            assert!(pair[1].x >= pair[0].x && pair[1].z >= pair[0].z, "path must not backtrack toward the wall");
        }
    }

    #[test]
    fn s6_color_picker_reads_without_dirtying() {
        let mut volume = RawVolume::new(Region::from_coords(0, 0, 0, 3, 3, 3));
        volume.set_voxel(1, 1, 1, Voxel::new(VoxelType::Generic, 7));
        let mut modifier = Modifier::new();
        modifier.set_tool(ModifierTool::ColorPicker);
        modifier.set_cursor_position(IVec3::new(1, 1, 1));
        modifier.aabb_start();
        let mut called = false;
        let ok = modifier.aabb_action(&mut volume, |_, _| called = true);
        assert!(ok);
        assert!(!called, "color picker emits no dirty region");
        assert_eq!(modifier.cursor_voxel().palette_index(), 7);
    }

    #[test]
    fn single_mode_executes_immediately_without_aabb_step() {
        let mut volume = RawVolume::new(Region::from_coords(0, 0, 0, 3, 3, 3));
        let mut modifier = Modifier::new();
        modifier.set_mode(ModifierMode::SINGLE);
        modifier.set_cursor_voxel(Voxel::new(VoxelType::Generic, 1));
        modifier.set_cursor_position(IVec3::new(2, 2, 2));
        modifier.aabb_start();
        assert!(modifier.is_ready_to_execute());
        let ok = modifier.aabb_action(&mut volume, |_, _| {});
        assert!(ok);
        assert!(volume.voxel(2, 2, 2).is_blocked());
        assert!(volume.voxel(1, 2, 2).is_air());
    }

    #[test]
    fn aabb_abort_returns_to_idle_from_any_state() {
        let mut modifier = Modifier::new();
        modifier.aabb_start();
        assert_eq!(modifier.state(), AabbState::FirstPicked);
        modifier.aabb_abort();
        assert_eq!(modifier.state(), AabbState::Idle);
    }

    #[test]
    fn select_tool_replaces_the_selection_and_writes_nothing() {
        let mut volume = RawVolume::new(Region::from_coords(0, 0, 0, 7, 7, 7));
        let mut modifier = Modifier::new();
        modifier.set_tool(ModifierTool::Select);
        modifier.set_cursor_position(IVec3::new(2, 2, 2));
        modifier.aabb_start();
        modifier.set_cursor_position(IVec3::new(3, 3, 3));
        modifier.aabb_step();
        let ok = modifier.aabb_action(&mut volume, |_, _| {});
        assert!(ok);
        assert_eq!(modifier.selection().region(), Some(Region::from_coords(2, 2, 2, 3, 3, 3)));
        assert!(volume.voxel(2, 2, 2).is_air(), "select writes no voxels");
    }

}
