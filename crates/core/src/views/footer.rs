use starlit_protocol::{Point, RenderCommand, TextAlign, ThemeToken, Viewport};

const FONT_SIZE: f64 = 12.0;
const MARGIN: f64 = 8.0;

/// Stamp the year as a decimal string, centered at the bottom edge.
pub fn render_footer(year: i32, viewport: &Viewport) -> Vec<RenderCommand> {
    if viewport.is_empty() {
        return Vec::new();
    }
    vec![
        RenderCommand::BeginGroup {
            id: "year".into(),
            label: None,
        },
        RenderCommand::DrawText {
            position: Point::new(viewport.width / 2.0, viewport.height - MARGIN),
            text: year.to_string().into(),
            color: ThemeToken::FooterText,
            font_size: FONT_SIZE,
            align: TextAlign::Center,
        },
        RenderCommand::EndGroup,
    ]
}
