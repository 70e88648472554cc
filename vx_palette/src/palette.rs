// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fixed-capacity, order-preserving color table.

use crate::Rgba;

/// Maximum number of colors a [`Palette`] can hold.
pub const MAX_COLORS: usize = 256;

/// Weights for the HSB distance used by [`Palette::closest_match`].
///
/// Hue differences are circular (wrap at `1.0`) and tend to be visually the
/// most significant, so they carry the largest weight; equal weighting of
/// all three components would make a fully-saturated hue shift compare as
/// "closer" than a subtle brightness shift, which does not match how
/// palette-constrained color quantizers are expected to behave.
const HUE_WEIGHT: f32 = 4.0;
const SATURATION_WEIGHT: f32 = 1.0;
const BRIGHTNESS_WEIGHT: f32 = 2.0;

/// A fixed-capacity, order-preserving color table of at most
/// [`MAX_COLORS`] entries.
///
/// Palettes are value types: assigning one to a [`SceneGraphNode`] copies
/// its contents.
///
/// [`SceneGraphNode`]: ../vx_scenegraph/struct.SceneGraphNode.html
#[derive(Clone, Debug)]
pub struct Palette {
    colors: [Rgba; MAX_COLORS],
    color_count: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// An empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors: [Rgba::BLACK; MAX_COLORS],
            color_count: 0,
        }
    }

    /// Number of colors currently stored, `0..=256`.
    #[must_use]
    pub const fn color_count(&self) -> usize {
        self.color_count
    }

    /// The colors in insertion order.
    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors[..self.color_count]
    }

    /// The color at `index`, or `None` if `index` is out of range.
    #[must_use]
    pub fn color(&self, index: u8) -> Option<Rgba> {
        self.colors.get(index as usize).filter(|_| (index as usize) < self.color_count).copied()
    }

    /// Insert `color`, reusing an exact match's index if one exists.
    ///
    /// If the palette is full and no exact match exists, the index of the
    /// nearest existing color (by [`Palette::closest_match`]) is reused
    /// instead of growing the table.
    pub fn insert(&mut self, color: Rgba) -> u8 {
        if let Some(idx) = self.colors[..self.color_count].iter().position(|&c| c == color) {
            #[allow(clippy::cast_possible_truncation, reason = "idx < color_count <= 256")]
            return idx as u8;
        }
        if self.color_count < MAX_COLORS {
            self.colors[self.color_count] = color;
            #[allow(clippy::cast_possible_truncation, reason = "color_count < MAX_COLORS <= 256")]
            let idx = self.color_count as u8;
            self.color_count += 1;
            return idx;
        }
        let closest = self.closest_match(color);
        debug_assert!(closest >= 0, "a full palette is never empty");
        #[allow(clippy::cast_sign_loss, reason = "closest >= 0 for a non-empty palette")]
        {
            closest as u8
        }
    }

    /// Index of the palette entry perceptually closest to `color` in HSB
    /// space, or `-1` if the palette is empty. Ties are broken by the
    /// lowest index.
    #[must_use]
    pub fn closest_match(&self, color: Rgba) -> i32 {
        if self.color_count == 0 {
            return -1;
        }
        let (hue, sat, bri) = color.to_hsb();
        let mut best_index = 0usize;
        let mut best_distance = f32::MAX;
        for (i, &candidate) in self.colors[..self.color_count].iter().enumerate() {
            let d = hsb_distance(candidate, hue, sat, bri);
            if d < best_distance {
                best_distance = d;
                best_index = i;
            }
        }
        #[allow(clippy::cast_possible_truncation, reason = "best_index < color_count <= 256")]
        {
            best_index as i32
        }
    }
}

fn hsb_distance(candidate: Rgba, hue: f32, saturation: f32, brightness: f32) -> f32 {
    let (ch, cs, cb) = candidate.to_hsb();
    let dh = circular_hue_delta(ch, hue);
    let ds = cs - saturation;
    let db = cb - brightness;
    HUE_WEIGHT * dh * dh + SATURATION_WEIGHT * ds * ds + BRIGHTNESS_WEIGHT * db * db
}

/// Shortest distance between two hues on the circle `[0, 1)`.
fn circular_hue_delta(a: f32, b: f32) -> f32 {
    let d = (a - b).abs();
    d.min(1.0 - d)
}
