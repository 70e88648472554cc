// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene graph arena.

use glam::Mat4;

use crate::error::SceneGraphError;
use crate::node::{SceneGraphNode, SceneGraphNodeType};

/// Sentinel returned by [`SceneGraph::emplace`] when the requested parent
/// does not exist.
pub const NO_PARENT: i32 = -1;

/// The id of the single root node, always present in a fresh graph.
pub const ROOT_ID: i32 = 0;

/// An arena of [`SceneGraphNode`]s addressed by a stable, never-reused id.
///
/// Unlike the free-list-and-generation arena `understory_box_tree` uses for
/// its tree nodes, ids here are handed out by a monotonically increasing
/// counter and are never recycled, per `spec.md` §3's explicit "ids are
/// never reused during a graph's lifetime" rule: recycling an id after a
/// `remove` would let a stale id alias a newer, unrelated node. A removed
/// slot becomes `None` permanently. See DESIGN.md for the comparison.
#[derive(Debug)]
pub struct SceneGraph {
    nodes: Vec<Option<SceneGraphNode>>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Construct a graph containing only the root node at id `0`.
    #[must_use]
    pub fn new() -> Self {
        let mut root = SceneGraphNode::new(SceneGraphNodeType::Root, "root");
        root.set_id(ROOT_ID);
        root.set_parent(NO_PARENT);
        Self { nodes: vec![Some(root)] }
    }

    /// `true` iff `id` names a live node.
    #[must_use]
    pub fn has_node(&self, id: i32) -> bool {
        self.get(id).is_some()
    }

    /// Borrow the node at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneGraphError::MissingNode`] if `id` does not name a
    /// live node.
    pub fn node(&self, id: i32) -> Result<&SceneGraphNode, SceneGraphError> {
        self.get(id).ok_or(SceneGraphError::MissingNode { id })
    }

    /// Mutably borrow the node at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneGraphError::MissingNode`] if `id` does not name a
    /// live node.
    pub fn node_mut(&mut self, id: i32) -> Result<&mut SceneGraphNode, SceneGraphError> {
        self.get_mut(id).ok_or(SceneGraphError::MissingNode { id })
    }

    /// The always-present root node.
    #[must_use]
    pub fn root(&self) -> &SceneGraphNode {
        self.get(ROOT_ID).expect("root node is never removed")
    }

    /// Insert `node` as a child of `parent`, returning its new id, or
    /// [`NO_PARENT`] if `parent` does not name a live node (the node is not
    /// inserted in that case).
    pub fn emplace(&mut self, mut node: SceneGraphNode, parent: i32) -> i32 {
        if !self.has_node(parent) {
            return NO_PARENT;
        }
        let id = self.nodes.len() as i32;
        node.set_id(id);
        node.set_parent(parent);
        self.nodes.push(Some(node));
        self.get_mut(parent)
            .expect("checked has_node above")
            .children_mut()
            .push(id);
        id
    }

    /// Remove the node at `id` and everything beneath it. No-op if `id`
    /// does not name a live node. `id` (and the ids of anything removed
    /// with it) is never reused.
    pub fn remove_recursive(&mut self, id: i32) {
        let Some(children) = self.get(id).map(|n| n.children().to_vec()) else {
            return;
        };
        for child in children {
            self.remove_recursive(child);
        }
        if let Some(node) = self.get(id) {
            let parent = node.parent();
            if let Some(parent_node) = self.get_mut(parent) {
                parent_node.children_mut().retain(|&c| c != id);
            }
        }
        if let Some(slot) = self.nodes.get_mut(id as usize) {
            *slot = None;
        }
    }

    /// The world matrix of `id` at `frame`: its local transform (sampled
    /// at `frame`, or the identity if it has no keyframes) composed with
    /// every ancestor's, root first.
    ///
    /// `spec.md` §3: "the worldMatrix is derived; the engine recomputes it
    /// from local fields and ancestry" — nothing is cached, so a node
    /// moving does not require invalidating any other node's stored state.
    ///
    /// # Errors
    ///
    /// Returns [`SceneGraphError::MissingNode`] if `id` (or, in principle,
    /// one of its ancestors, though a consistent graph never breaks that
    /// chain) does not name a live node.
    pub fn world_matrix(&self, id: i32, frame: u32) -> Result<Mat4, SceneGraphError> {
        let node = self.node(id)?;
        let local = node.key_frames().sample(frame).map_or(Mat4::IDENTITY, |t| t.local_matrix());
        if node.parent() == NO_PARENT {
            return Ok(local);
        }
        Ok(self.world_matrix(node.parent(), frame)? * local)
    }

    /// Depth-first iteration over every live [`SceneGraphNodeType::Model`]
    /// node, root to leaves, in child-insertion order.
    pub fn model_nodes(&self) -> impl Iterator<Item = &SceneGraphNode> {
        ModelNodeIter { graph: self, stack: vec![ROOT_ID] }
    }

    /// All live node ids, in arena (insertion) order. Not guaranteed to be
    /// contiguous after removals.
    pub fn node_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| n.as_ref().map(|_| i as i32))
    }

    fn get(&self, id: i32) -> Option<&SceneGraphNode> {
        if id < 0 {
            return None;
        }
        self.nodes.get(id as usize).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: i32) -> Option<&mut SceneGraphNode> {
        if id < 0 {
            return None;
        }
        self.nodes.get_mut(id as usize).and_then(Option::as_mut)
    }
}

struct ModelNodeIter<'g> {
    graph: &'g SceneGraph,
    stack: Vec<i32>,
}

impl<'g> Iterator for ModelNodeIter<'g> {
    type Item = &'g SceneGraphNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.stack.pop()?;
            let Some(node) = self.graph.get(id) else { continue };
            for &child in node.children().iter().rev() {
                self.stack.push(child);
            }
            if node.node_type() == SceneGraphNodeType::Model {
                return Some(node);
            }
        }
    }
}

/// Deep-copy `node` (and, if `recurse`, its subtree) out of `source`,
/// producing detached [`SceneGraphNode`]s with no id/parent/children yet
/// assigned, ready for [`SceneGraph::emplace`] into a different graph.
///
/// A copied node's volume handle is *shared* (cloned `Rc`), not
/// deep-cloned: this mirrors `copyNode`'s semantics in
/// `SceneGraphUtil.cpp`, where only the owning node's copy actually becomes
/// the new owner and non-owning copies remain references into the same
/// voxel data.
///
/// Ground truth: `original_source/src/modules/voxelformat/SceneGraphUtil.cpp`.
#[must_use]
pub fn copy_node(source: &SceneGraph, node_id: i32, recurse: bool) -> Vec<SceneGraphNode> {
    let Ok(node) = source.node(node_id) else {
        return Vec::new();
    };
    let mut out = vec![clone_node_detached(node)];
    if recurse {
        for &child in node.children() {
            out.extend(copy_node(source, child, true));
        }
    }
    out
}

fn clone_node_detached(node: &SceneGraphNode) -> SceneGraphNode {
    let mut copy = SceneGraphNode::new(node.node_type(), node.name());
    copy.set_visible(node.visible());
    copy.set_locked(node.locked());
    copy.add_properties(node.properties());
    copy.set_palette(node.palette().clone());
    copy.set_key_frames(node.key_frames().clone());
    if let Some(volume) = node.volume() {
        copy.set_volume(volume.clone());
    }
    copy
}

/// Merge `source`'s forest into `target`, under `target_parent`:
/// `source.root()`'s own properties are appended onto `target_parent`
/// (no node is emplaced for the source root itself), and each of the
/// root's children — together with their subtrees — is re-parented
/// under `target_parent`, sharing (not copying) volume data.
///
/// Unlike `addSceneGraphNodes` in `SceneGraphUtil.cpp`, this does not need
/// `&mut source`: because volumes are reference-counted handles rather than
/// raw owned pointers the original moves out of the source graph, merging
/// only ever clones a handle, leaving `source` completely untouched. See
/// DESIGN.md for the full comparison.
///
/// Returns the number of `Model` nodes added (0 if `target_parent` is not
/// a live node in `target`).
///
/// Ground truth: `original_source/src/modules/voxelformat/SceneGraphUtil.cpp`.
pub fn add_scene_graph_nodes(target: &mut SceneGraph, source: &SceneGraph, target_parent: i32) -> i32 {
    if !target.has_node(target_parent) {
        return 0;
    }
    let root_properties = source.root().properties().to_vec();
    if let Ok(parent_node) = target.node_mut(target_parent) {
        parent_node.add_properties(&root_properties);
    }
    source
        .root()
        .children()
        .iter()
        .map(|&child| add_scene_graph_node_r(target, target_parent, source, child))
        .sum()
}

fn add_scene_graph_node_r(target: &mut SceneGraph, target_parent: i32, source: &SceneGraph, source_id: i32) -> i32 {
    let Ok(node) = source.node(source_id) else {
        return 0;
    };
    let is_model = node.node_type() == SceneGraphNodeType::Model;
    let detached = clone_node_detached(node);
    let new_id = target.emplace(detached, target_parent);
    if new_id == NO_PARENT {
        return 0;
    }
    let mut count = i32::from(is_model);
    for &child in node.children() {
        count += add_scene_graph_node_r(target, new_id, source, child);
    }
    count
}
