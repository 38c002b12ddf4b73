//! Last-container memo shared between the sizing and placement passes.
//!
//! A flow layout is measured and then placed, usually at the same width and
//! over the same items. The sizing pass stores the container it built and the
//! placement pass reuses it when nothing relevant changed.
//!
//! # Design
//!
//! The cache holds at most one entry, owned by the layout instance. An entry
//! is keyed by:
//! - Target width (exact match)
//! - Item slice identity (address of the first item)
//! - Item count
//! - Generation (bumped by [`ContainerCache::invalidate`] whenever the host
//!   reports that item content changed)
//!
//! Bumping the generation makes the stored entry stale without touching it,
//! the same way a new layout epoch retires every older entry. The slice
//! identity catches a different item set of the same length; edits made in
//! place still need a generation bump.

use crate::container::Container;
use tracing::trace;

/// Cache statistics for debugging and profiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub lookups: usize,
    pub hits: usize,
    pub stores: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheKey {
    width: f32,
    items_id: usize,
    item_count: usize,
    generation: u64,
}

/// Single-entry cache of the most recently packed [`Container`].
#[derive(Debug, Default)]
pub struct ContainerCache {
    entry: Option<(CacheKey, Container)>,
    generation: u64,
    stats: CacheStats,
}

impl ContainerCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Look up the container packed for `width` over the item slice
    /// identified by `items_id` and `item_count`.
    ///
    /// # Returns
    /// The cached container if one exists for the current generation, or
    /// `None` if nothing usable is cached. Non-finite widths never hit.
    pub fn lookup(&mut self, width: f32, items_id: usize, item_count: usize) -> Option<&Container> {
        self.stats.lookups += 1;

        if !width.is_finite() {
            return None;
        }

        let key = CacheKey {
            width,
            items_id,
            item_count,
            generation: self.generation,
        };

        match &self.entry {
            Some((stored, container)) if *stored == key => {
                self.stats.hits += 1;
                trace!(?width, item_count, "container cache hit");
                Some(container)
            }
            _ => {
                trace!(?width, item_count, "container cache miss");
                None
            }
        }
    }

    /// Store a freshly packed container, replacing any previous entry.
    pub fn store(
        &mut self,
        width: f32,
        items_id: usize,
        item_count: usize,
        container: Container,
    ) -> &Container {
        let key = CacheKey {
            width,
            items_id,
            item_count,
            generation: self.generation,
        };
        self.stats.stores += 1;
        &self.entry.insert((key, container)).1
    }

    /// Return the current container for this key, packing and storing a new
    /// one with `build` on a miss.
    pub fn get_or_insert_with<F>(
        &mut self,
        width: f32,
        items_id: usize,
        item_count: usize,
        build: F,
    ) -> &Container
    where
        F: FnOnce() -> Container,
    {
        if self.lookup(width, items_id, item_count).is_none() {
            self.entry = None;
            self.stats.stores += 1;
        }

        let key = CacheKey {
            width,
            items_id,
            item_count,
            generation: self.generation,
        };
        &self.entry.get_or_insert_with(|| (key, build())).1
    }

    /// The stored container, whether or not it is still current.
    pub fn last(&self) -> Option<&Container> {
        self.entry.as_ref().map(|(_, container)| container)
    }

    /// Retire the stored entry by moving to a new generation.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Drop the stored entry.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }
}
