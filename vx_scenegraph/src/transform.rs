// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-keyframe local transforms and their derived world matrix.

use glam::{Mat4, Quat, Vec3};

/// A node's transform at one keyframe.
///
/// `world_matrix` is always *derived*, never authored: [`SceneGraph`]
/// recomputes it from `local_position`/`local_orientation`/`local_scale`
/// and the chain of ancestor transforms whenever it is needed.
///
/// [`SceneGraph`]: crate::SceneGraph
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    /// Position relative to the parent's space.
    pub local_position: Vec3,
    /// Orientation relative to the parent's space.
    pub local_orientation: Quat,
    /// Scale relative to the parent's space.
    pub local_scale: Vec3,
    /// Pivot point, normalized to `[0, 1]` within the node's local bounds.
    pub pivot: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            local_position: Vec3::ZERO,
            local_orientation: Quat::IDENTITY,
            local_scale: Vec3::ONE,
            pivot: Vec3::ZERO,
        }
    }
}

impl Transform {
    /// The local transform matrix, ignoring ancestry.
    #[must_use]
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.local_scale, self.local_orientation, self.local_position)
    }
}

/// A single entry in a node's keyframe sequence.
#[derive(Clone, Copy, Debug)]
pub struct KeyFrame {
    /// The frame index this entry applies from.
    pub frame_idx: u32,
    /// The transform to hold from `frame_idx` until the next keyframe.
    pub transform: Transform,
}

/// An ordered sequence of [`KeyFrame`]s, kept sorted by `frame_idx`.
///
/// Lookup is a discrete step function (the non-goal in `spec.md` §1 rules
/// out interpolation): [`KeyFrames::sample`] holds the last keyframe at or
/// before the requested frame.
#[derive(Clone, Debug, Default)]
pub struct KeyFrames(Vec<KeyFrame>);

impl KeyFrames {
    /// An empty keyframe sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace the keyframe at `frame.frame_idx`, keeping the
    /// sequence sorted.
    pub fn insert(&mut self, frame: KeyFrame) {
        match self.0.binary_search_by_key(&frame.frame_idx, |kf| kf.frame_idx) {
            Ok(existing) => self.0[existing] = frame,
            Err(insert_at) => self.0.insert(insert_at, frame),
        }
    }

    /// All keyframes, in ascending `frame_idx` order.
    #[must_use]
    pub fn as_slice(&self) -> &[KeyFrame] {
        &self.0
    }

    /// `true` iff there are no keyframes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The transform active at `frame`: the last keyframe whose
    /// `frame_idx <= frame`, or the first keyframe if `frame` precedes all
    /// of them, or `None` if there are no keyframes at all.
    #[must_use]
    pub fn sample(&self, frame: u32) -> Option<&Transform> {
        match self.0.binary_search_by_key(&frame, |kf| kf.frame_idx) {
            Ok(idx) => Some(&self.0[idx].transform),
            Err(0) => self.0.first().map(|kf| &kf.transform),
            Err(insert_at) => Some(&self.0[insert_at - 1].transform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kf(frame: u32, x: f32) -> KeyFrame {
        KeyFrame {
            frame_idx: frame,
            transform: Transform {
                local_position: Vec3::new(x, 0.0, 0.0),
                ..Default::default()
            },
        }
    }

    #[test]
    fn sample_holds_last_keyframe_at_or_before_the_requested_frame() {
        let mut kfs = KeyFrames::new();
        kfs.insert(kf(0, 0.0));
        kfs.insert(kf(10, 10.0));
        kfs.insert(kf(20, 20.0));

        assert_eq!(kfs.sample(0).unwrap().local_position.x, 0.0);
        assert_eq!(kfs.sample(5).unwrap().local_position.x, 0.0);
        assert_eq!(kfs.sample(10).unwrap().local_position.x, 10.0);
        assert_eq!(kfs.sample(15).unwrap().local_position.x, 10.0);
        assert_eq!(kfs.sample(1000).unwrap().local_position.x, 20.0);
    }

    #[test]
    fn sample_before_first_keyframe_holds_first() {
        let mut kfs = KeyFrames::new();
        kfs.insert(kf(5, 5.0));
        assert_eq!(kfs.sample(0).unwrap().local_position.x, 5.0);
    }

    #[test]
    fn empty_sequence_samples_to_none() {
        assert!(KeyFrames::new().sample(0).is_none());
    }

    #[test]
    fn insert_replaces_existing_frame_index() {
        let mut kfs = KeyFrames::new();
        kfs.insert(kf(5, 1.0));
        kfs.insert(kf(5, 2.0));
        assert_eq!(kfs.as_slice().len(), 1);
        assert_eq!(kfs.sample(5).unwrap().local_position.x, 2.0);
    }
}
