// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single scene graph node.

use std::cell::RefCell;
use std::rc::Rc;

use vx_palette::Palette;
use vx_voxel::RawVolume;

use crate::transform::KeyFrames;

/// A shared handle to a node's voxel data.
///
/// Ownership is modeled with `Rc<RefCell<_>>` rather than an `owns: bool`
/// flag plus a raw/borrowed pointer: the volume is freed exactly when the
/// last handle referencing it drops, which is what `spec.md` §5's "an
/// owning node destroys its volume; a non-owning node does not" actually
/// wants, and it makes the bug class the REDESIGN FLAG in `spec.md` §9
/// warns about (mismatched `owns` flags) structurally unrepresentable. See
/// DESIGN.md for the full rationale.
pub type VolumeHandle = Rc<RefCell<RawVolume>>;

/// The kind of a scene graph node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneGraphNodeType {
    /// The single node at id 0.
    Root,
    /// A node that may carry a voxel volume.
    Model,
    /// A pure grouping node.
    Group,
    /// A camera node (no volume).
    Camera,
}

/// A named, typed node in a [`SceneGraph`](crate::SceneGraph).
#[derive(Debug)]
pub struct SceneGraphNode {
    id: i32,
    parent: i32,
    node_type: SceneGraphNodeType,
    name: String,
    visible: bool,
    locked: bool,
    properties: Vec<(String, String)>,
    palette: Palette,
    volume: Option<VolumeHandle>,
    key_frames: KeyFrames,
    children: Vec<i32>,
}

impl SceneGraphNode {
    /// Construct a new, detached node of the given type. `id`, `parent`
    /// and `children` are meaningless until the node is inserted into a
    /// [`SceneGraph`](crate::SceneGraph) via `emplace`.
    #[must_use]
    pub fn new(node_type: SceneGraphNodeType, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            parent: 0,
            node_type,
            name: name.into(),
            visible: true,
            locked: false,
            properties: Vec::new(),
            palette: Palette::new(),
            volume: None,
            key_frames: KeyFrames::new(),
            children: Vec::new(),
        }
    }

    /// This node's id. Meaningless (`0`) until inserted.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// This node's parent id. Meaningless until inserted.
    #[must_use]
    pub const fn parent(&self) -> i32 {
        self.parent
    }

    /// This node's type.
    #[must_use]
    pub const fn node_type(&self) -> SceneGraphNodeType {
        self.node_type
    }

    /// This node's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set this node's display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// `true` iff this node should be rendered/considered.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Set visibility.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// `true` iff this node is locked against edits.
    #[must_use]
    pub const fn locked(&self) -> bool {
        self.locked
    }

    /// Set locked state.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// The node's properties in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    /// Get a property's value by key, if set.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Set a property, preserving the original insertion position if the
    /// key already exists.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(existing) = self.properties.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.properties.push((key, value));
        }
    }

    /// Append another node's properties onto this one's, in their order,
    /// overwriting on key collision.
    pub fn add_properties(&mut self, properties: &[(String, String)]) {
        for (k, v) in properties {
            self.set_property(k.clone(), v.clone());
        }
    }

    /// This node's palette. Only meaningful for [`SceneGraphNodeType::Model`].
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace this node's palette (value copy).
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// This node's volume handle, if any. Only [`SceneGraphNodeType::Model`]
    /// nodes may carry one.
    #[must_use]
    pub fn volume(&self) -> Option<&VolumeHandle> {
        self.volume.as_ref()
    }

    /// `true` iff this node is the sole owner of its volume (no other
    /// handle references the same data). Meaningless when there is no
    /// volume.
    #[must_use]
    pub fn owns_volume(&self) -> bool {
        self.volume.as_ref().is_some_and(|v| Rc::strong_count(v) == 1)
    }

    /// Attach a volume handle to this node.
    ///
    /// # Panics
    ///
    /// Panics if this node is not a [`SceneGraphNodeType::Model`] — only
    /// Model nodes may carry a volume.
    pub fn set_volume(&mut self, volume: VolumeHandle) {
        assert!(
            self.node_type == SceneGraphNodeType::Model,
            "only Model nodes may carry a volume"
        );
        self.volume = Some(volume);
    }

    /// Take this node's volume handle, leaving it with none. The returned
    /// handle may still be shared if other nodes hold clones of it.
    pub fn release_ownership(&mut self) -> Option<VolumeHandle> {
        self.volume.take()
    }

    /// This node's keyframe sequence.
    #[must_use]
    pub const fn key_frames(&self) -> &KeyFrames {
        &self.key_frames
    }

    /// Replace this node's keyframe sequence wholesale.
    pub fn set_key_frames(&mut self, key_frames: KeyFrames) {
        self.key_frames = key_frames;
    }

    /// Insert or replace one keyframe.
    pub fn add_key_frame(&mut self, frame: crate::transform::KeyFrame) {
        self.key_frames.insert(frame);
    }

    /// This node's children ids, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[i32] {
        &self.children
    }

    pub(crate) fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub(crate) fn set_parent(&mut self, parent: i32) {
        self.parent = parent;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<i32> {
        &mut self.children
    }
}
