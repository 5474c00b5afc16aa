pub mod commands;
pub mod label;
pub mod theme;
pub mod types;

pub use commands::{RenderCommand, TextAlign};
pub use label::Label;
pub use theme::ThemeToken;
pub use types::{Point, Rect, Viewport};
