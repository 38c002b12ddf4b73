//! Greedy row packing.
//!
//! Items are taken in order and appended to the current row while the
//! running row width stays below the container width. There is no
//! backtracking; once a row is closed it is never revisited.
//!
//! The running width adds one `spacing` per item, including the last item of
//! the row, so it is always one gap wider than [`Row::size`] reports. A row
//! whose running width lands exactly on the container width wraps. Both are
//! long-standing wrap boundaries that callers rely on.

use crate::container::{Container, Row};
use crate::Size;
use tracing::trace;

/// Pack item sizes into rows no wider than `container_width`.
///
/// An item wider than the container still gets a row to itself; it is
/// neither split nor shrunk.
pub fn pack_rows<I>(sizes: I, container_width: f32, spacing: f32) -> Container
where
    I: IntoIterator<Item = Size>,
{
    let mut container = Container::new(container_width, spacing);
    let mut current_row = Row::new(spacing);
    let mut row_width = 0.0f32;

    for (index, size) in sizes.into_iter().enumerate() {
        row_width += size.width + spacing;

        if row_width < container_width {
            trace!(index, ?row_width, ?container_width, "pack_rows: item fits");
            current_row.push(size);
            continue;
        }

        // Only the first item can arrive at an empty row; don't keep it
        if !current_row.is_empty() {
            container.push(current_row);
        }

        trace!(
            index,
            ?row_width,
            ?container_width,
            rows = container.rows().len(),
            "pack_rows: wrapping to new row"
        );

        current_row = Row::new(spacing);
        current_row.push(size);
        row_width = size.width + spacing;
    }

    if !current_row.is_empty() {
        container.push(current_row);
    }

    container
}
