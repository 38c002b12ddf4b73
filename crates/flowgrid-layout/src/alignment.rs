//! Horizontal row alignment.

use crate::Rect;
use serde::{Deserialize, Serialize};

/// Horizontal alignment applied to every row of a flow container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    Leading,
    #[default]
    Center,
    Trailing,
    /// Locale-aware spelling of [`Alignment::Leading`]. Not mirrored.
    Start,
    /// Locale-aware spelling of [`Alignment::Trailing`]. Not mirrored.
    End,
    /// An alignment this layout does not understand. Positioned like
    /// [`Alignment::Leading`].
    #[serde(other)]
    Other,
}

impl Alignment {
    /// Starting x coordinate for a row of `row_width` inside `bounds`.
    pub fn start_x(self, row_width: f32, bounds: &Rect) -> f32 {
        match self {
            Alignment::Trailing | Alignment::End => bounds.max_x() - row_width,
            Alignment::Center => (bounds.min_x() + bounds.max_x() - row_width) / 2.0,
            Alignment::Leading | Alignment::Start | Alignment::Other => bounds.min_x(),
        }
    }
}
