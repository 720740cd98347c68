//! The arena: a chain of regions plus a cursor into it.
//!
//! Regions are held in a `Vec` in chain order and the active region is an
//! index into it. Allocation walks forward from the active region, so space
//! in regions emptied by [`Arena::reset`] is reused before the chain grows.

use std::fmt;

use crate::backend::{HeapBackend, RegionBackend};
use crate::region::Region;
use crate::{units_for, REGION_DEFAULT_CAPACITY, UNIT_SIZE};

/// Handle to an arena allocation.
///
/// Valid until the arena is reset, rewound past it, or freed. Resolving a
/// stale handle does not fault, it just observes whatever now occupies
/// those bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArenaPtr {
    region: usize,
    offset: usize,
    len: usize,
}

impl ArenaPtr {
    /// Index of the region holding the allocation, in chain order.
    #[inline]
    pub fn region(self) -> usize {
        self.region
    }

    /// Byte offset of the allocation inside its region.
    #[inline]
    pub fn offset(self) -> usize {
        self.offset
    }

    /// Requested size in bytes (before rounding to whole units).
    #[inline]
    pub fn len(self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// The first `len` bytes of this allocation.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the allocation's length.
    #[must_use]
    pub fn prefix(self, len: usize) -> Self {
        assert!(
            len <= self.len,
            "prefix of {len} bytes exceeds allocation of {} bytes",
            self.len
        );
        Self { len, ..self }
    }
}

/// Saved allocation position, restored with [`Arena::rewind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaSnapshot {
    region: Option<usize>,
    count: usize,
}

/// Counters describing how the chain has been used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Regions obtained from the backend.
    pub regions_created: usize,
    /// Regions stepped over because they lacked room for a request.
    pub regions_skipped: usize,
    /// Requests larger than the arena's default region capacity.
    pub oversized_allocations: usize,
}

/// Region-chained bump allocator.
///
/// # Invariant
///
/// `current` is `None` exactly when `regions` is empty.
pub struct Arena<B: RegionBackend = HeapBackend> {
    regions: Vec<Region>,
    current: Option<usize>,
    region_capacity: usize,
    backend: B,
    stats: ArenaStats,
}

impl Arena<HeapBackend> {
    /// Create an empty heap-backed arena with the default region capacity.
    pub fn new() -> Self {
        Self::with_backend(HeapBackend)
    }

    /// Create an empty heap-backed arena whose regions hold at least
    /// `units` units.
    ///
    /// # Panics
    /// Panics if `units` is 0.
    pub fn with_region_capacity(units: usize) -> Self {
        Self::with_backend_and_capacity(HeapBackend, units)
    }
}

impl Default for Arena<HeapBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RegionBackend> Arena<B> {
    /// Create an empty arena over `backend` with the default region capacity.
    pub fn with_backend(backend: B) -> Self {
        Self::with_backend_and_capacity(backend, REGION_DEFAULT_CAPACITY)
    }

    /// Create an empty arena over `backend` whose regions hold at least
    /// `units` units.
    ///
    /// # Panics
    /// Panics if `units` is 0.
    pub fn with_backend_and_capacity(backend: B, units: usize) -> Self {
        assert!(units > 0, "region capacity must be > 0");
        Self {
            regions: Vec::new(),
            current: None,
            region_capacity: units,
            backend,
            stats: ArenaStats::default(),
        }
    }

    /// Allocate `size_bytes` bytes, rounded up to whole units.
    ///
    /// The contents of the returned block are unspecified: a fresh heap
    /// region is zeroed, but reused space keeps whatever was written there
    /// before the last reset.
    pub fn allocate(&mut self, size_bytes: usize) -> ArenaPtr {
        let units = units_for(size_bytes);
        if units > self.region_capacity {
            self.stats.oversized_allocations += 1;
        }

        let mut current = match self.current {
            Some(index) => index,
            None => {
                debug_assert!(self.regions.is_empty(), "arena lost its current region");
                self.push_region(units)
            }
        };

        // Reclaim regions left behind by a reset before growing the chain.
        while !self.regions[current].fits(units) && current + 1 < self.regions.len() {
            tracing::trace!(region = current, units, "skipping region without room");
            self.stats.regions_skipped += 1;
            current += 1;
        }

        if !self.regions[current].fits(units) {
            debug_assert_eq!(current + 1, self.regions.len());
            current = self.push_region(units);
        }

        self.current = Some(current);
        let offset = self.regions[current].bump(units);
        ArenaPtr {
            region: current,
            offset,
            len: size_bytes,
        }
    }

    /// Grow an allocation to `new_size` bytes.
    ///
    /// Shrinking is not supported: if `new_size <= old_size` the handle is
    /// returned unchanged. Otherwise a new block is allocated and the first
    /// `old_size` bytes are copied over. The old block is not reclaimed.
    pub fn reallocate(&mut self, old: ArenaPtr, old_size: usize, new_size: usize) -> ArenaPtr {
        if new_size <= old_size {
            return old;
        }
        debug_assert!(
            old_size <= old.len,
            "reallocate old_size {old_size} exceeds allocation length {}",
            old.len
        );

        let new = self.allocate(new_size);
        self.copy_bytes(old, new, old_size);
        new
    }

    /// Copy `bytes` into a fresh allocation.
    pub fn alloc_bytes(&mut self, bytes: &[u8]) -> ArenaPtr {
        let ptr = self.allocate(bytes.len());
        self.bytes_mut(ptr).copy_from_slice(bytes);
        ptr
    }

    /// Reclaim every allocation while keeping all regions for reuse.
    pub fn reset(&mut self) {
        for region in &mut self.regions {
            region.rewind_to(0);
        }
        self.current = if self.regions.is_empty() { None } else { Some(0) };
        tracing::debug!(regions = self.regions.len(), "arena reset");
    }

    /// Release every region to the backend and return to the empty state.
    pub fn free(&mut self) {
        let released = self.regions.len();
        for region in self.regions.drain(..) {
            self.backend.release(region.into_data());
        }
        self.current = None;
        self.stats = ArenaStats::default();
        tracing::debug!(regions = released, "arena freed");
    }

    /// Remember the current allocation position.
    pub fn snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot {
            region: self.current,
            count: self.current.map_or(0, |index| self.regions[index].count()),
        }
    }

    /// Return to a position captured by [`snapshot`](Self::snapshot).
    ///
    /// Everything allocated after the snapshot is reclaimed. Regions appended
    /// since then are kept (emptied) for reuse.
    ///
    /// # Panics
    /// Panics if the snapshot refers to a region that no longer exists,
    /// which happens when the arena was freed after the snapshot was taken.
    pub fn rewind(&mut self, snapshot: ArenaSnapshot) {
        let Some(index) = snapshot.region else {
            self.reset();
            return;
        };
        assert!(
            index < self.regions.len(),
            "snapshot refers to region {index} but the arena holds {}",
            self.regions.len()
        );

        self.regions[index].rewind_to(snapshot.count);
        for region in &mut self.regions[index + 1..] {
            region.rewind_to(0);
        }
        self.current = Some(index);
        tracing::trace!(region = index, count = snapshot.count, "arena rewound");
    }

    /// Resolve a handle to its bytes.
    pub fn bytes(&self, ptr: ArenaPtr) -> &[u8] {
        &self.region(ptr.region).data()[ptr.offset..ptr.offset + ptr.len]
    }

    /// Resolve a handle to its bytes, mutably.
    pub fn bytes_mut(&mut self, ptr: ArenaPtr) -> &mut [u8] {
        self.check_region(ptr.region);
        &mut self.regions[ptr.region].data_mut()[ptr.offset..ptr.offset + ptr.len]
    }

    /// The region chain, in order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Index of the region allocation currently bumps, if any.
    pub fn current_region(&self) -> Option<usize> {
        self.current
    }

    /// Returns `true` if the arena owns no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Total bytes reserved across all regions.
    pub fn bytes_reserved(&self) -> usize {
        self.regions.iter().map(|r| r.capacity() * UNIT_SIZE).sum()
    }

    /// Total bytes occupied across all regions, including rounding.
    pub fn bytes_used(&self) -> usize {
        self.regions.iter().map(|r| r.count() * UNIT_SIZE).sum()
    }

    pub fn stats(&self) -> ArenaStats {
        self.stats
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // --- internal helpers ---

    /// Append a region big enough for `units` and return its index.
    fn push_region(&mut self, units: usize) -> usize {
        let capacity = self.region_capacity.max(units);
        let Some(size_bytes) = capacity.checked_mul(UNIT_SIZE) else {
            panic!("arena region of {capacity} units overflows the address space");
        };
        let region = Region::new(self.backend.acquire(size_bytes));
        debug_assert!(region.capacity() >= capacity, "backend returned a short block");

        self.regions.push(region);
        self.stats.regions_created += 1;
        let index = self.regions.len() - 1;
        tracing::trace!(region = index, capacity, "new arena region");
        index
    }

    fn region(&self, index: usize) -> &Region {
        self.check_region(index);
        &self.regions[index]
    }

    fn check_region(&self, index: usize) {
        assert!(
            index < self.regions.len(),
            "arena handle refers to region {index} but the arena holds {}",
            self.regions.len()
        );
    }

    /// Copy `len` bytes from the start of `from` to the start of `to`.
    fn copy_bytes(&mut self, from: ArenaPtr, to: ArenaPtr, len: usize) {
        self.check_region(from.region);
        let src = from.offset..from.offset + len;

        if from.region == to.region {
            self.regions[to.region]
                .data_mut()
                .copy_within(src, to.offset);
            return;
        }

        let (src_region, dst_region) = if from.region < to.region {
            let (head, tail) = self.regions.split_at_mut(to.region);
            (&head[from.region], &mut tail[0])
        } else {
            let (head, tail) = self.regions.split_at_mut(from.region);
            (&tail[0], &mut head[to.region])
        };
        dst_region.data_mut()[to.offset..to.offset + len].copy_from_slice(&src_region.data()[src]);
    }
}

impl<B: RegionBackend> fmt::Debug for Arena<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("regions", &self.region_count())
            .field("current", &self.current)
            .field("bytes_used", &self.bytes_used())
            .field("bytes_reserved", &self.bytes_reserved())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
