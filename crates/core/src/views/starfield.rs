use starlit_protocol::{Point, RenderCommand, ThemeToken, Viewport};

use crate::model::Starfield;

/// Draw every star as a filled circle with its current alpha.
///
/// Stars past the viewport edges are culled rather than drawn: a shrink
/// can strand stars beyond the right edge until drift brings them back.
pub fn render_starfield(field: &Starfield, viewport: &Viewport) -> Vec<RenderCommand> {
    if viewport.is_empty() {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(field.len() + 2);
    commands.push(RenderCommand::BeginGroup {
        id: "stars".into(),
        label: None,
    });

    for star in field.stars() {
        if star.x > viewport.width || star.y > viewport.height {
            continue;
        }
        commands.push(RenderCommand::DrawCircle {
            center: Point::new(star.x, star.y),
            radius: star.radius,
            color: ThemeToken::StarFill,
            opacity: star.opacity,
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}
