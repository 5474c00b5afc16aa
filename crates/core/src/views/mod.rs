pub mod chips;
pub mod footer;
pub mod starfield;

pub use chips::render_chips;
pub use footer::render_footer;
pub use starfield::render_starfield;

use starlit_protocol::{RenderCommand, Viewport};

use crate::model::Scene;

/// Compose one full frame: clear, stars, chips, year stamp.
///
/// Draw order is paint order. The starfield goes down first so chips and
/// the year sit on top of it.
pub fn render_scene(scene: &Scene, viewport: &Viewport) -> Vec<RenderCommand> {
    if viewport.is_empty() {
        return Vec::new();
    }
    let mut commands = vec![RenderCommand::Clear];
    commands.extend(render_starfield(&scene.starfield, viewport));
    commands.extend(render_chips(&scene.skills, viewport));
    commands.extend(render_footer(scene.year, viewport));
    commands
}
