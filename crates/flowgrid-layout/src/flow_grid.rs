//! The flow layout instance driven by the host.
//!
//! The host calls [`FlowGrid::measure`] with its proposal, then
//! [`FlowGrid::arrange`] (or [`FlowGrid::arrange_with`]) once the bounds are
//! fixed. Both passes are synchronous and deterministic.

use crate::alignment::Alignment;
use crate::cache::{CacheStats, ContainerCache};
use crate::config::FlowGridConfig;
use crate::container::Container;
use crate::packer::pack_rows;
use crate::placer::{place_rows, Placement};
use crate::{LayoutError, ProposedSize, Rect, Size};
use tracing::{debug, warn};

/// Reports an item's natural size under a proposal.
///
/// Always called with the parent's proposal. Text-like items need the width
/// constraint to wrap, so an unspecified proposal would report the wrong
/// width.
pub trait SizeOracle {
    fn size_that_fits(&self, proposal: ProposedSize) -> Size;
}

/// A fixed size ignores the proposal.
impl SizeOracle for Size {
    fn size_that_fits(&self, _proposal: ProposedSize) -> Size {
        *self
    }
}

impl<T: SizeOracle + ?Sized> SizeOracle for &T {
    fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        (**self).size_that_fits(proposal)
    }
}

impl<T: SizeOracle + ?Sized> SizeOracle for Box<T> {
    fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        (**self).size_that_fits(proposal)
    }
}

/// Adapts a closure into a [`SizeOracle`].
///
/// ```ignore
/// let label = FnOracle(|proposal: ProposedSize| measure_label(proposal.width));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnOracle<F>(pub F);

impl<F> SizeOracle for FnOracle<F>
where
    F: Fn(ProposedSize) -> Size,
{
    fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        (self.0)(proposal)
    }
}

/// Flow-wrapping layout: items left to right, wrapping into rows.
#[derive(Debug, Default)]
pub struct FlowGrid {
    config: FlowGridConfig,
    cache: ContainerCache,
}

impl FlowGrid {
    /// Create a flow layout with default spacing and center alignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flow layout from a configuration, rejecting invalid values.
    pub fn with_config(config: FlowGridConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            config,
            cache: ContainerCache::new(),
        })
    }

    /// Set the gap between items and between rows.
    ///
    /// Negative or non-finite values are replaced with zero.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.config.spacing = if spacing.is_finite() && spacing >= 0.0 {
            spacing
        } else {
            warn!(?spacing, "invalid flow spacing, using 0");
            0.0
        };
        self
    }

    /// Set the horizontal alignment of every row.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.config.alignment = alignment;
        self
    }

    pub fn config(&self) -> &FlowGridConfig {
        &self.config
    }

    /// Sizing pass.
    ///
    /// Queries every item at the proposed width, packs the rows and returns
    /// the container size. Returns [`Size::ZERO`] when there are no items or
    /// the proposal has no bounded width; wrapping needs a width to wrap
    /// against.
    pub fn measure<T: SizeOracle>(&mut self, proposal: ProposedSize, items: &[T]) -> Size {
        if items.is_empty() {
            debug!("FlowGrid measure: no items");
            return Size::ZERO;
        }

        let Some(width) = proposal.bounded_width() else {
            debug!(?proposal, "FlowGrid measure: width unavailable");
            return Size::ZERO;
        };

        let container = build_container(self.config.spacing, width, proposal, items);
        let size = container.size();

        debug!(
            "FlowGrid measure: width {}, {} items in {} rows, height {}",
            width,
            items.len(),
            container.rows().len(),
            size.height
        );

        self.cache.store(width, items_id(items), items.len(), container);
        size
    }

    /// Placement pass, collecting the placements.
    pub fn arrange<T: SizeOracle>(&mut self, bounds: Rect, items: &[T]) -> Vec<Placement> {
        let mut placements = Vec::with_capacity(items.len());
        self.arrange_with(bounds, items, |placement| placements.push(placement));
        placements
    }

    /// Placement pass, handing each placement to `emit` in input order.
    ///
    /// Reuses the container from the last sizing pass when it was built for
    /// the same width over the same item slice; otherwise the items are
    /// measured again at `bounds.width`.
    pub fn arrange_with<T, F>(&mut self, bounds: Rect, items: &[T], emit: F)
    where
        T: SizeOracle,
        F: FnMut(Placement),
    {
        if items.is_empty() {
            return;
        }

        if !bounds.width.is_finite() {
            debug!(?bounds, "FlowGrid arrange: unbounded width, skipping");
            return;
        }

        let FlowGridConfig { spacing, alignment } = self.config;
        let container = self
            .cache
            .get_or_insert_with(bounds.width, items_id(items), items.len(), || {
                let container =
                    build_container(spacing, bounds.width, ProposedSize::width(bounds.width), items);
                debug!(
                    "FlowGrid arrange: repacked {} items into {} rows at width {}",
                    items.len(),
                    container.rows().len(),
                    bounds.width
                );
                container
            });

        place_rows(container, &bounds, alignment, spacing, emit);
    }

    /// Mark the cached container stale.
    ///
    /// Call when items were edited in place in a way that can change their
    /// sizes; a different item slice is detected on its own.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// The most recently packed container, if any pass has run.
    pub fn container(&self) -> Option<&Container> {
        self.cache.last()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

/// Identity of an item slice for cache keying.
fn items_id<T>(items: &[T]) -> usize {
    items.as_ptr() as usize
}

fn build_container<T: SizeOracle>(
    spacing: f32,
    width: f32,
    proposal: ProposedSize,
    items: &[T],
) -> Container {
    let sizes = items.iter().map(|item| item.size_that_fits(proposal));
    pack_rows(sizes, width, spacing)
}
