use starlit_protocol::{Label, Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::model::SkillSet;

const CHIP_HEIGHT: f64 = 22.0;
const CHIP_PAD_X: f64 = 10.0;
const CHIP_GAP: f64 = 8.0;
const ROW_GAP: f64 = 8.0;
const MARGIN: f64 = 8.0;
const FONT_SIZE: f64 = 12.0;
const CHAR_ADVANCE: f64 = 7.0;

/// Lay the chips out as wrapped pill rows, in label order.
///
/// Chip width is estimated from character count. Exact text metrics
/// belong to the renderers; a couple of pixels of slack is invisible at
/// chip scale.
pub fn render_chips(skills: &SkillSet, viewport: &Viewport) -> Vec<RenderCommand> {
    if viewport.is_empty() || skills.is_empty() {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(skills.len() * 2 + 2);
    commands.push(RenderCommand::BeginGroup {
        id: "skills".into(),
        label: Some("Skills".into()),
    });

    let max_x = viewport.width - MARGIN;
    let mut x = MARGIN;
    let mut y = MARGIN;
    for label in skills.labels() {
        let w = chip_width(label);
        // Wrap, unless the chip is alone on its row and outsizes the
        // viewport anyway.
        if x > MARGIN && x + w > max_x {
            x = MARGIN;
            y += CHIP_HEIGHT + ROW_GAP;
        }
        let rect = Rect::new(x, y, w, CHIP_HEIGHT);
        commands.push(RenderCommand::DrawRect {
            rect,
            color: ThemeToken::ChipBackground,
            border_color: Some(ThemeToken::ChipBorder),
            label: Some(label.clone()),
        });
        // Baseline sits a touch below the pill's center.
        commands.push(RenderCommand::DrawText {
            position: Point::new(rect.center_x(), rect.center_y() + FONT_SIZE * 0.35),
            text: label.clone(),
            color: ThemeToken::ChipText,
            font_size: FONT_SIZE,
            align: TextAlign::Center,
        });
        x += w + CHIP_GAP;
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

fn chip_width(label: &Label) -> f64 {
    label.chars().count() as f64 * CHAR_ADVANCE + 2.0 * CHIP_PAD_X
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chip_texts(commands: &[RenderCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn one_pill_and_label_per_skill_in_order() {
        let skills = SkillSet::new(["AWS", "Docker"]);
        let cmds = render_chips(&skills, &Viewport::new(800.0, 600.0));
        let rects = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawRect { .. }))
            .count();
        assert_eq!(rects, 2);
        assert_eq!(chip_texts(&cmds), vec!["AWS", "Docker"]);
    }

    #[test]
    fn full_set_renders_every_label_in_order() {
        let skills = SkillSet::default();
        let cmds = render_chips(&skills, &Viewport::new(800.0, 600.0));
        let texts = chip_texts(&cmds);
        assert_eq!(texts.len(), skills.len());
        for (text, label) in texts.iter().zip(skills.labels()) {
            assert_eq!(text.as_str(), label.as_str());
        }
    }

    #[test]
    fn narrow_viewport_wraps_into_rows() {
        let skills = SkillSet::new(["Terraform", "Kubernetes", "CloudFront"]);
        let cmds = render_chips(&skills, &Viewport::new(120.0, 600.0));
        let mut rows = std::collections::BTreeSet::new();
        for cmd in &cmds {
            if let RenderCommand::DrawRect { rect, .. } = cmd {
                rows.insert(rect.y as i64);
            }
        }
        assert!(rows.len() > 1);
    }

    #[test]
    fn labels_are_anchored_to_their_pills() {
        let skills = SkillSet::new(["AWS", "Docker", "Kubernetes"]);
        let cmds = render_chips(&skills, &Viewport::new(800.0, 600.0));
        let rects: Vec<Rect> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        let positions: Vec<Point> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { position, .. } => Some(*position),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), positions.len());
        for (rect, position) in rects.iter().zip(&positions) {
            assert!((position.x - rect.center_x()).abs() < f64::EPSILON);
            assert!(position.y > rect.center_y());
            assert!(position.y < rect.y + rect.h);
        }
    }

    #[test]
    fn empty_set_is_a_no_op() {
        let skills = SkillSet::new(Vec::<String>::new());
        assert!(render_chips(&skills, &Viewport::new(800.0, 600.0)).is_empty());
    }

    #[test]
    fn absent_surface_is_a_no_op() {
        let skills = SkillSet::default();
        assert!(render_chips(&skills, &Viewport::new(0.0, 600.0)).is_empty());
    }
}
