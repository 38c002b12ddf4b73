//! Size oracles used by the integration tests.

use flowgrid_layout::{ProposedSize, Size, SizeOracle};
use std::cell::Cell;

/// Items with fixed sizes, all of the same height.
pub fn uniform_items(widths: &[f32], height: f32) -> Vec<Size> {
    widths.iter().map(|&w| Size::new(w, height)).collect()
}

/// A text-like item: one line at its natural width, more lines when the
/// proposed width is narrower.
#[derive(Debug)]
pub struct TextItem {
    pub natural_width: f32,
    pub line_height: f32,
    queries: Cell<usize>,
}

impl TextItem {
    pub fn new(natural_width: f32, line_height: f32) -> Self {
        Self {
            natural_width,
            line_height,
            queries: Cell::new(0),
        }
    }

    /// Number of times the item has been measured.
    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl SizeOracle for TextItem {
    fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        self.queries.set(self.queries.get() + 1);

        match proposal.width {
            Some(available) if available > 0.0 && available < self.natural_width => {
                let lines = (self.natural_width / available).ceil();
                Size::new(available, self.line_height * lines)
            }
            _ => Size::new(self.natural_width, self.line_height),
        }
    }
}
