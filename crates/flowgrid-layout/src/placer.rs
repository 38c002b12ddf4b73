//! Placement pass: turn packed rows into absolute item origins.

use crate::alignment::Alignment;
use crate::container::Container;
use crate::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Where a single item ends up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the item in the original input order.
    pub index: usize,

    /// Absolute origin of the item.
    pub origin: Point,

    /// Measured size, proposed back to the item when it is placed.
    pub size: Size,
}

impl Placement {
    /// The item's frame.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Walk `container` row by row and emit one placement per item.
///
/// Rows start at `bounds.min_y()` and stack downward separated by `spacing`;
/// within a row items advance left to right by their width plus `spacing`,
/// starting from the x chosen by `alignment`.
pub fn place_rows<F>(
    container: &Container,
    bounds: &Rect,
    alignment: Alignment,
    spacing: f32,
    mut emit: F,
) where
    F: FnMut(Placement),
{
    if container.rows().is_empty() {
        return;
    }

    trace!(
        origin_x = bounds.x,
        origin_y = bounds.y,
        num_rows = container.rows().len(),
        ?alignment,
        "place_rows: starting"
    );

    let mut cursor = bounds.origin();
    let mut index = 0usize;

    for row in container.rows() {
        let row_size = row.size();
        cursor.x = alignment.start_x(row_size.width, bounds);

        for &size in row.sizes() {
            trace!(
                index,
                x = cursor.x,
                y = cursor.y,
                width = size.width,
                height = size.height,
                "place_rows: positioning item"
            );

            emit(Placement {
                index,
                origin: cursor,
                size,
            });

            cursor.x += size.width + spacing;
            index += 1;
        }

        cursor.y += row_size.height + spacing;
    }
}
