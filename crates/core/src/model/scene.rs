use chrono::{Datelike, Local};
use starlit_protocol::Viewport;

use crate::config::SceneConfig;
use crate::model::{SkillSet, Starfield};

/// Everything on the page, owned by one object.
///
/// A scene is constructed once, advanced by [`Scene::tick`], and read by
/// the views. Renderers hold it by value and drive it from their own
/// frame callbacks, so no state hides at module level.
#[derive(Debug, Clone)]
pub struct Scene {
    pub skills: SkillSet,
    pub year: i32,
    pub starfield: Starfield,
    frames: u64,
}

impl Scene {
    /// Build a scene against the given surface size.
    ///
    /// The year comes from the local clock unless the config pins it.
    pub fn new(config: &SceneConfig, viewport: Viewport, seed: u64) -> Self {
        Self {
            skills: SkillSet::new(config.skills.iter().map(String::as_str)),
            year: config.year.unwrap_or_else(current_year),
            starfield: Starfield::seed(
                config.starfield.clone(),
                viewport.width,
                viewport.height,
                seed,
            ),
            frames: 0,
        }
    }

    /// Advance the simulation by one frame.
    pub fn tick(&mut self) {
        self.starfield.tick();
        self.frames += 1;
    }

    /// Track a surface size change. Star positions are left untouched.
    pub fn resize(&mut self, viewport: Viewport) {
        self.starfield.resize(viewport.width, viewport.height);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The surface size the scene currently simulates against.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.starfield.width(), self.starfield.height())
    }
}

/// The current calendar year, read from the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Millisecond wall-clock value, for hosts that don't pin a seed.
pub fn clock_seed() -> u64 {
    Local::now().timestamp_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_year_beats_the_clock() {
        let config = SceneConfig {
            year: Some(1999),
            ..SceneConfig::default()
        };
        let scene = Scene::new(&config, Viewport::new(800.0, 600.0), 0);
        assert_eq!(scene.year, 1999);
    }

    #[test]
    fn unpinned_year_tracks_the_clock() {
        let scene = Scene::new(&SceneConfig::default(), Viewport::new(800.0, 600.0), 0);
        assert_eq!(scene.year, current_year());
    }

    #[test]
    fn ticks_are_counted() {
        let mut scene = Scene::new(&SceneConfig::default(), Viewport::new(800.0, 600.0), 0);
        assert_eq!(scene.frames(), 0);
        for _ in 0..3 {
            scene.tick();
        }
        assert_eq!(scene.frames(), 3);
    }

    #[test]
    fn resize_updates_the_reported_viewport() {
        let mut scene = Scene::new(&SceneConfig::default(), Viewport::new(800.0, 600.0), 0);
        let count = scene.starfield.len();
        scene.resize(Viewport::new(1024.0, 768.0));
        assert_eq!(scene.viewport(), Viewport::new(1024.0, 768.0));
        assert_eq!(scene.starfield.len(), count);
    }
}
