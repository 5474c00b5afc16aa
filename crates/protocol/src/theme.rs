use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    /// Night-sky backdrop behind everything.
    Background,
    /// Star fill — white in every palette, per-star alpha applied on draw.
    StarFill,

    ChipBackground,
    ChipBorder,
    ChipText,

    FooterText,
}
