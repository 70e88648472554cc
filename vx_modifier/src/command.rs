// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The modifier's external command surface (`spec.md` §6), for binding to
//! keys or menu items.
//!
//! Ground truth: `Modifier::construct` (named in `original_source`'s
//! `Modifier.cpp`) registers each of these as a zero-argument closure
//! calling `setModifierType`/`setShapeType`/`setMirrorAxis`, plus two
//! press/release buttons dispatching to `aabbStart`/`aabbAction`/
//! `aabbAbort`. No key-binding I/O or menu system is in scope (`spec.md`
//! §1) — [`Command`] is the pure state transition a binding layer would
//! call.

use vx_geom::Axis;

use crate::tool::{ModifierTool, ShapeType, WritePolicy};

/// One entry of the command surface `spec.md` §6 lists by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// `actionselect`
    ActionSelect,
    /// `colorpicker`
    ColorPicker,
    /// `path`
    Path,
    /// `line`
    Line,
    /// `erase`
    Erase,
    /// `place`
    Place,
    /// `paint`
    Paint,
    /// `override`
    Override,
    /// `shapeaabb`
    ShapeAabb,
    /// `shapetorus`
    ShapeTorus,
    /// `shapecylinder`
    ShapeCylinder,
    /// `shapeellipse`
    ShapeEllipse,
    /// `shapecone`
    ShapeCone,
    /// `shapedome`
    ShapeDome,
    /// `mirroraxisx`
    MirrorAxisX,
    /// `mirroraxisy`
    MirrorAxisY,
    /// `mirroraxisz`
    MirrorAxisZ,
    /// `mirroraxisnone`
    MirrorAxisNone,
}

impl Command {
    /// Parse the lowercase command name `spec.md` §6 lists. Returns
    /// `None` for any other string (`actionexecute`/`actionexecutedelete`
    /// are action buttons, not `Command`s — see
    /// `Modifier::dispatch_command`'s doc comment).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "actionselect" => Self::ActionSelect,
            "colorpicker" => Self::ColorPicker,
            "path" => Self::Path,
            "line" => Self::Line,
            "erase" => Self::Erase,
            "place" => Self::Place,
            "paint" => Self::Paint,
            "override" => Self::Override,
            "shapeaabb" => Self::ShapeAabb,
            "shapetorus" => Self::ShapeTorus,
            "shapecylinder" => Self::ShapeCylinder,
            "shapeellipse" => Self::ShapeEllipse,
            "shapecone" => Self::ShapeCone,
            "shapedome" => Self::ShapeDome,
            "mirroraxisx" => Self::MirrorAxisX,
            "mirroraxisy" => Self::MirrorAxisY,
            "mirroraxisz" => Self::MirrorAxisZ,
            "mirroraxisnone" => Self::MirrorAxisNone,
            _ => return None,
        })
    }
}

/// What a [`Command`] changes: the active tool, write policy, shape, or
/// mirror axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandEffect {
    /// Set the active tool.
    Tool(ModifierTool),
    /// Set the active write policy.
    WritePolicy(WritePolicy),
    /// Set the active shape type (implicitly also selects the `Shape`
    /// tool, mirroring the original binding each `shape*` command to both
    /// `setModifierType(Shape)` and `setShapeType(...)`).
    Shape(ShapeType),
    /// Set the mirror axis (`Axis::None` clears mirroring).
    MirrorAxis(Axis),
}

impl Command {
    /// The effect this command has when invoked.
    #[must_use]
    pub fn effect(self) -> CommandEffect {
        match self {
            Self::ActionSelect => CommandEffect::Tool(ModifierTool::Select),
            Self::ColorPicker => CommandEffect::Tool(ModifierTool::ColorPicker),
            Self::Path => CommandEffect::Tool(ModifierTool::Path),
            Self::Line => CommandEffect::Tool(ModifierTool::Line),
            Self::Erase => CommandEffect::WritePolicy(WritePolicy::Erase),
            Self::Place => CommandEffect::WritePolicy(WritePolicy::Place),
            Self::Paint => CommandEffect::WritePolicy(WritePolicy::Paint),
            Self::Override => CommandEffect::WritePolicy(WritePolicy::Override),
            Self::ShapeAabb => CommandEffect::Shape(ShapeType::Aabb),
            Self::ShapeTorus => CommandEffect::Shape(ShapeType::Torus),
            Self::ShapeCylinder => CommandEffect::Shape(ShapeType::Cylinder),
            Self::ShapeEllipse => CommandEffect::Shape(ShapeType::Ellipse),
            Self::ShapeCone => CommandEffect::Shape(ShapeType::Cone),
            Self::ShapeDome => CommandEffect::Shape(ShapeType::Dome),
            Self::MirrorAxisX => CommandEffect::MirrorAxis(Axis::X),
            Self::MirrorAxisY => CommandEffect::MirrorAxis(Axis::Y),
            Self::MirrorAxisZ => CommandEffect::MirrorAxis(Axis::Z),
            Self::MirrorAxisNone => CommandEffect::MirrorAxis(Axis::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_documented_name() {
        let names = [
            "actionselect", "colorpicker", "path", "line", "erase", "place", "paint", "override",
            "shapeaabb", "shapetorus", "shapecylinder", "shapeellipse", "shapecone", "shapedome",
            "mirroraxisx", "mirroraxisy", "mirroraxisz", "mirroraxisnone",
        ];
        for name in names {
            assert!(Command::parse(name).is_some(), "{name} should parse");
        }
    }

    #[test]
    fn unknown_command_is_none() {
        assert!(Command::parse("actionexecute").is_none());
        assert!(Command::parse("banana").is_none());
    }

    #[test]
    fn shape_commands_select_a_shape_type() {
        assert_eq!(Command::ShapeTorus.effect(), CommandEffect::Shape(ShapeType::Torus));
    }

    #[test]
    fn mirror_none_clears_the_axis() {
        assert_eq!(Command::MirrorAxisNone.effect(), CommandEffect::MirrorAxis(Axis::None));
    }
}
