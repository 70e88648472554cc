// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `Axis` enum used throughout the scene graph and modifier crates to
//! name one of the three principal directions, or "none".

/// One of the three principal axes, or the absence of one.
///
/// `None` is a first-class value rather than `Option<Axis>` because most
/// call sites (mirror state, second-action direction) need a cheap default
/// that participates directly in comparisons and match arms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// No axis selected.
    #[default]
    None,
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// Index of this axis into a 3-component vector (`x=0, y=1, z=2`).
    ///
    /// Panics if called on [`Axis::None`]; callers are expected to have
    /// already branched on `axis == Axis::None`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
            Self::None => panic!("Axis::None has no vector index"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(Axis::default(), Axis::None);
    }

    #[test]
    fn index_matches_xyz_order() {
        assert_eq!(Axis::X.index(), 0);
        assert_eq!(Axis::Y.index(), 1);
        assert_eq!(Axis::Z.index(), 2);
    }
}
