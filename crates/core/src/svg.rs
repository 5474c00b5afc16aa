//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use starlit_protocol::{RenderCommand, TextAlign, ThemeToken};

/// Render a command list as an SVG document string.
///
/// `width` and `height` define the viewBox. There is a single palette —
/// the page is a night sky, it only comes in dark.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64) -> String {
    let mut svg = String::with_capacity(commands.len() * 90);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif">"#,
    ));

    for cmd in commands {
        match cmd {
            RenderCommand::Clear => {
                let bg = resolve_color(ThemeToken::Background);
                svg.push_str(&format!(
                    r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#,
                ));
            }
            RenderCommand::DrawCircle {
                center,
                radius,
                color,
                opacity,
            } => {
                let fill = resolve_color(*color);
                svg.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{radius}" fill="{fill}" fill-opacity="{opacity}"/>"#,
                    center.x, center.y,
                ));
            }
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                label,
            } => {
                let fill = resolve_color(*color);
                // Full-height corner radius turns the rect into a pill.
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{fill}""#,
                    rect.x,
                    rect.y,
                    rect.w,
                    rect.h,
                    rect.h / 2.0,
                ));
                if let Some(border) = border_color {
                    svg.push_str(&format!(r#" stroke="{}""#, resolve_color(*border)));
                }
                if let Some(label) = label {
                    svg.push_str(&format!("><title>{}</title></rect>", escape_xml(label)));
                } else {
                    svg.push_str("/>");
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                ));
            }
            RenderCommand::BeginGroup { id, label } => {
                svg.push_str(&format!(r#"<g id="{}""#, escape_xml(id)));
                if let Some(label) = label {
                    svg.push_str(&format!(r#" aria-label="{}""#, escape_xml(label)));
                }
                svg.push('>');
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str("</svg>");
    svg
}

fn resolve_color(token: ThemeToken) -> &'static str {
    match token {
        ThemeToken::Background => "#0b1020",
        ThemeToken::StarFill => "#ffffff",
        ThemeToken::ChipBackground => "#151b2e",
        ThemeToken::ChipBorder => "#2a3350",
        ThemeToken::ChipText => "#dbe2f4",
        ThemeToken::FooterText => "#8891ab",
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlit_protocol::{Point, Rect};

    #[test]
    fn circles_carry_their_opacity() {
        let commands = vec![RenderCommand::DrawCircle {
            center: Point::new(12.0, 34.0),
            radius: 1.4,
            color: ThemeToken::StarFill,
            opacity: 0.62,
        }];
        let svg = render_svg(&commands, 800.0, 600.0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"fill-opacity="0.62""#));
        assert!(svg.contains("#ffffff"));
    }

    #[test]
    fn chips_become_pills_with_titles() {
        let commands = vec![RenderCommand::DrawRect {
            rect: Rect::new(8.0, 8.0, 60.0, 22.0),
            color: ThemeToken::ChipBackground,
            border_color: Some(ThemeToken::ChipBorder),
            label: Some("AWS".into()),
        }];
        let svg = render_svg(&commands, 800.0, 600.0);
        assert!(svg.contains(r#"rx="11""#));
        assert!(svg.contains("<title>AWS</title>"));
        assert!(svg.contains(r##"stroke="#2a3350""##));
    }

    #[test]
    fn groups_become_g_elements() {
        let commands = vec![
            RenderCommand::BeginGroup {
                id: "stars".into(),
                label: None,
            },
            RenderCommand::EndGroup,
        ];
        let svg = render_svg(&commands, 800.0, 600.0);
        assert!(svg.contains(r#"<g id="stars"></g>"#));
    }

    #[test]
    fn escapes_xml_entities() {
        let commands = vec![RenderCommand::DrawText {
            position: Point::new(0.0, 10.0),
            text: "C&D <ops>".into(),
            color: ThemeToken::FooterText,
            font_size: 12.0,
            align: TextAlign::Left,
        }];
        let svg = render_svg(&commands, 400.0, 100.0);
        assert!(svg.contains("C&amp;D &lt;ops&gt;"));
    }
}
