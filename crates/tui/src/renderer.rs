use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use starlit_core::config::SceneConfig;
use starlit_core::model::Scene;
use starlit_core::views::render_scene;
use starlit_protocol::{RenderCommand, TextAlign, ThemeToken, Viewport};

/// One terminal cell stands in for this many logical pixels.
const PX_PER_COL: f64 = 8.0;
const PX_PER_ROW: f64 = 16.0;

/// Frame cadence. Terminals have no refresh callback, so a fixed ~30fps
/// tick plays that role.
const TICK: Duration = Duration::from_millis(33);

fn theme_to_color(token: &ThemeToken) -> Color {
    match token {
        ThemeToken::Background => Color::Black,
        ThemeToken::StarFill => Color::White,
        ThemeToken::ChipBackground => Color::Rgb(21, 27, 46),
        ThemeToken::ChipBorder => Color::Rgb(42, 51, 80),
        ThemeToken::ChipText => Color::Rgb(219, 226, 244),
        ThemeToken::FooterText => Color::Gray,
    }
}

/// Cell glyph for a star, by radius tier.
fn star_glyph(radius: f64) -> char {
    if radius < 0.6 {
        '·'
    } else if radius < 1.2 {
        '*'
    } else {
        '✦'
    }
}

/// Cell color for a star, by opacity tier. Terminals have no alpha, so
/// brightness fakes it.
fn star_color(opacity: f64) -> Color {
    if opacity < 0.4 {
        Color::DarkGray
    } else if opacity < 0.75 {
        Color::Gray
    } else {
        Color::White
    }
}

/// The viewport a `cols × rows` terminal exposes, minus the header row.
fn cell_viewport(cols: u16, rows: u16) -> Viewport {
    Viewport::new(
        f64::from(cols) * PX_PER_COL,
        f64::from(rows.saturating_sub(1)) * PX_PER_ROW,
    )
}

/// Run the animated scene until `q` or `Esc`.
pub fn run(config: &SceneConfig, seed: u64) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut scene = Scene::new(config, cell_viewport(size.width, size.height), seed);

    let mut last_tick = Instant::now();
    loop {
        let viewport = scene.viewport();
        let commands = render_scene(&scene, &viewport);
        terminal.draw(|frame| draw_frame(frame, &scene, &commands))?;

        // The poll timeout doubles as the frame clock.
        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
                Event::Resize(cols, rows) => scene.resize(cell_viewport(cols, rows)),
                _ => {}
            }
        }
        if last_tick.elapsed() >= TICK {
            scene.tick();
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw_frame(frame: &mut Frame, scene: &Scene, commands: &[RenderCommand]) {
    let area = frame.area();

    // Header
    let header_area = Rect::new(0, 0, area.width, 1);
    let header = Block::default()
        .title(format!(
            " starlit — {} stars | {} chips | year {} | q quit ",
            scene.starfield.len(),
            scene.skills.len(),
            scene.year,
        ))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(header, header_area);

    // Night-sky backdrop
    let content = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
    let block = Block::default()
        .borders(Borders::NONE)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, content);

    let buf = frame.buffer_mut();
    for cmd in commands {
        match cmd {
            RenderCommand::DrawCircle {
                center,
                radius,
                opacity,
                ..
            } => {
                let x = content.x + (center.x / PX_PER_COL) as u16;
                let y = content.y + (center.y / PX_PER_ROW) as u16;
                if x >= content.x + content.width || y >= content.y + content.height {
                    continue;
                }
                buf[(x, y)]
                    .set_char(star_glyph(*radius))
                    .set_fg(star_color(*opacity))
                    .set_bg(Color::Black);
            }
            RenderCommand::DrawRect {
                rect, color, label, ..
            } => {
                let col = (rect.x / PX_PER_COL) as u16;
                let row = (rect.y / PX_PER_ROW) as u16;
                let width = ((rect.w / PX_PER_COL) as u16).max(1);
                if row >= content.height || col >= content.width {
                    continue;
                }

                let bg = theme_to_color(color);
                let label_str = label.as_deref().unwrap_or("");
                let display: String = if (width as usize) >= label_str.chars().count() + 2 {
                    format!(" {label_str:^w$} ", w = (width as usize).saturating_sub(2))
                } else {
                    label_str.chars().take(width as usize).collect()
                };

                let clamped = width.min(content.width.saturating_sub(col));
                let y = content.y + row;
                for (i, ch) in display.chars().take(clamped as usize).enumerate() {
                    let x = content.x + col + i as u16;
                    buf[(x, y)]
                        .set_char(ch)
                        .set_fg(theme_to_color(&ThemeToken::ChipText))
                        .set_bg(bg);
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                align,
                ..
            } => {
                let len = text.chars().count() as u16;
                let col = (position.x / PX_PER_COL) as u16;
                let col = match align {
                    TextAlign::Left => col,
                    TextAlign::Center => col.saturating_sub(len / 2),
                    TextAlign::Right => col.saturating_sub(len),
                };
                let row = (position.y / PX_PER_ROW) as u16;
                if row >= content.height {
                    continue;
                }
                let y = content.y + row;
                let fg = theme_to_color(color);
                for (i, ch) in text.chars().enumerate() {
                    let x = content.x + col + i as u16;
                    if x >= content.x + content.width {
                        break;
                    }
                    buf[(x, y)].set_char(ch).set_fg(fg);
                }
            }
            // The backdrop block already cleared; groups carry no pixels.
            RenderCommand::Clear | RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }
}
