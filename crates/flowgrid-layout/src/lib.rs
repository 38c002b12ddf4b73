//! # FlowGrid Layout
//!
//! Flow-wrapping layout for FlowGrid containers.
//! Items are laid out left-to-right and wrap onto a new row once the
//! current row would reach the container width.
//!
//! ## Passes
//!
//! 1. **Sizing**: query every item at the parent's proposed width, greedily
//!    pack the results into rows and report the container's bounding size
//! 2. **Placement**: walk the packed rows top-to-bottom and emit an absolute
//!    origin for every item, shifting each row by the configured alignment
//!
//! The host drives both passes through [`FlowGrid`]. How an item works out
//! its own size is left to the host through the [`SizeOracle`] trait.

pub mod alignment;
pub mod cache;
pub mod config;
pub mod container;
pub mod flow_grid;
pub mod packer;
pub mod placer;

pub use alignment::Alignment;
pub use cache::{CacheStats, ContainerCache};
pub use config::{FlowGridConfig, DEFAULT_SPACING};
pub use container::{Container, Row};
pub use flow_grid::{FlowGrid, FnOracle, SizeOracle};
pub use packer::pack_rows;
pub use placer::{place_rows, Placement};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while configuring a layout.
///
/// The layout passes themselves never fail; bad input degrades to an empty
/// or zero-sized result instead.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid spacing: {0} (must be finite and non-negative)")]
    InvalidSpacing(f32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        LayoutError::InvalidConfig(err.to_string())
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A position in the host's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// The size a parent proposes to a child.
///
/// `None` on an axis means the parent left that axis unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProposedSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl ProposedSize {
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }

    /// A proposal with neither axis specified.
    pub fn unspecified() -> Self {
        Self::default()
    }

    /// A proposal that only constrains the width.
    pub fn width(width: f32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// The proposed width, if it is specified and bounded.
    ///
    /// Infinite and NaN widths are treated the same as an unspecified one;
    /// wrapping needs a real width to compare against.
    pub fn bounded_width(&self) -> Option<f32> {
        self.width.filter(|w| w.is_finite())
    }
}

impl From<Size> for ProposedSize {
    fn from(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
        }
    }
}
