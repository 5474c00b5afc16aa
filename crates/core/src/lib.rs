//! Scene model and view transforms for the starlit night-sky page.
//!
//! Everything renderer-independent lives here: the scene state (chips,
//! year, starfield), the per-frame simulation, and the views that lower
//! a scene into [`starlit_protocol::RenderCommand`] lists. The terminal
//! and web crates only consume what this one emits.

pub mod config;
pub mod model;
pub mod svg;
pub mod views;

pub use config::{ConfigError, SceneConfig, StarfieldConfig};
pub use model::{Scene, SkillSet, Star, Starfield};
