//! Packed rows and the container geometry derived from them.
//!
//! A [`Container`] is rebuilt from scratch on every sizing pass. Rows only
//! ever grow while packing, and every derived dimension is recomputed on
//! demand from the stored item sizes.

use crate::Size;

/// A run of consecutive items that share one horizontal line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    /// Gap between adjacent items.
    spacing: f32,

    /// Item sizes, in input order.
    sizes: Vec<Size>,
}

impl Row {
    /// Create an empty row.
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing,
            sizes: Vec::new(),
        }
    }

    /// Append an item to the end of the row.
    pub fn push(&mut self, size: Size) {
        self.sizes.push(size);
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Spacing between the items of this row (one gap fewer than items).
    pub fn total_width_spacing(&self) -> f32 {
        self.spacing * self.sizes.len().saturating_sub(1) as f32
    }

    /// Bounding size of the row: summed widths plus gaps, by the tallest item.
    pub fn size(&self) -> Size {
        if self.sizes.is_empty() {
            return Size::ZERO;
        }

        self.sizes.iter().fold(
            Size::new(self.total_width_spacing(), 0.0),
            |acc, size| Size::new(acc.width + size.width, acc.height.max(size.height)),
        )
    }
}

/// The packed result of a sizing pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    /// Target width the rows were packed against.
    width: f32,

    /// Gap between rows (and between items within a row).
    spacing: f32,

    rows: Vec<Row>,
}

impl Container {
    /// Create a container with no rows.
    ///
    /// `Container::default()` (zero width, zero spacing) is only a
    /// placeholder and is never laid out.
    pub fn new(width: f32, spacing: f32) -> Self {
        Self {
            width,
            spacing,
            rows: Vec::new(),
        }
    }

    /// Append a finished row.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of items across all rows.
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Vertical spacing between rows (none for zero or one row).
    pub fn total_height_spacing(&self) -> f32 {
        self.spacing * self.rows.len().saturating_sub(1) as f32
    }

    pub fn height(&self) -> f32 {
        self.total_height_spacing() + self.rows.iter().map(|row| row.size().height).sum::<f32>()
    }

    /// Reported size: always the target width, never the widest row.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height())
    }
}
