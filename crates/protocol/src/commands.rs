use serde::{Deserialize, Serialize};

use crate::label::Label;
use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for each view. Renderers consume
/// the list sequentially — each command carries all the data it needs, so
/// the same list can drive the terminal, the canvas, or the SVG writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Wipe the drawing surface before a new frame.
    Clear,

    /// Draw a filled circle with a per-draw opacity in `[0, 1]`.
    /// Carries the starfield: one command per visible star per frame.
    DrawCircle {
        center: Point,
        radius: f64,
        color: ThemeToken,
        opacity: f64,
    },

    /// Draw a filled rectangle, optionally bordered and labeled.
    /// Carries the chips: the label is the chip's visible text.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        label: Option<Label>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: Label,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Begin a logical group. Group ids mirror the page element ids
    /// (`skills`, `year`, `stars`); renderers may use them for layering
    /// or accessibility.
    BeginGroup { id: Label, label: Option<Label> },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_list_roundtrips_as_json() {
        let cmds = vec![
            RenderCommand::BeginGroup {
                id: "stars".into(),
                label: None,
            },
            RenderCommand::Clear,
            RenderCommand::DrawCircle {
                center: Point::new(12.0, 34.0),
                radius: 1.4,
                color: ThemeToken::StarFill,
                opacity: 0.62,
            },
            RenderCommand::EndGroup,
        ];
        let json = serde_json::to_string(&cmds).unwrap();
        let back: Vec<RenderCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 4);
        match &back[2] {
            RenderCommand::DrawCircle {
                radius, opacity, ..
            } => {
                assert!((radius - 1.4).abs() < f64::EPSILON);
                assert!((opacity - 0.62).abs() < f64::EPSILON);
            }
            other => panic!("expected DrawCircle, got {other:?}"),
        }
    }
}
