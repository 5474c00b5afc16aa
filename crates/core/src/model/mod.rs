pub mod scene;
pub mod skills;
pub mod starfield;

pub use scene::{Scene, clock_seed, current_year};
pub use skills::{DEFAULT_SKILLS, SkillSet};
pub use starfield::{Star, Starfield};
