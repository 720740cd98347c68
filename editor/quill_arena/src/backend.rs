//! Backing-memory strategies for arena regions.
//!
//! The arena's chaining logic never touches the global allocator directly;
//! every region's storage is obtained from and returned to a
//! [`RegionBackend`]. Swapping the backend changes where region memory comes
//! from without changing how regions are chained, bumped, or reset.

/// Source of raw region storage.
///
/// # Contract
///
/// `acquire(size_bytes)` must return a block of at least `size_bytes` bytes.
/// The arena derives the region's capacity from the block's actual length,
/// so a backend may hand out larger blocks than requested. Exhaustion of the
/// underlying memory is fatal: implementations abort or panic, they never
/// return a short block.
pub trait RegionBackend {
    /// Obtain a block of at least `size_bytes` bytes.
    fn acquire(&mut self, size_bytes: usize) -> Box<[u8]>;

    /// Take back a block previously returned by [`acquire`](Self::acquire).
    fn release(&mut self, block: Box<[u8]>);
}

/// Global-heap backend. Every region is a fresh zero-filled heap block and
/// released blocks are dropped immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapBackend;

impl RegionBackend for HeapBackend {
    fn acquire(&mut self, size_bytes: usize) -> Box<[u8]> {
        // Allocation failure goes through `handle_alloc_error`, which aborts.
        vec![0u8; size_bytes].into_boxed_slice()
    }

    fn release(&mut self, block: Box<[u8]>) {
        drop(block);
    }
}

/// Backend that keeps released blocks on a free list and hands them out
/// again when a later request fits.
///
/// This models a page-mapping strategy where address space is reserved once
/// and recycled across arena lifetimes. Recycled blocks keep whatever bytes
/// the previous owner left in them.
#[derive(Debug, Default)]
pub struct PooledBackend {
    free_list: Vec<Box<[u8]>>,
    fresh: usize,
    recycled: usize,
}

impl PooledBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks currently parked on the free list.
    pub fn pooled(&self) -> usize {
        self.free_list.len()
    }

    /// Number of blocks obtained from the global heap so far.
    pub fn fresh_blocks(&self) -> usize {
        self.fresh
    }

    /// Number of requests satisfied from the free list so far.
    pub fn recycled_blocks(&self) -> usize {
        self.recycled
    }
}

impl RegionBackend for PooledBackend {
    fn acquire(&mut self, size_bytes: usize) -> Box<[u8]> {
        // Smallest parked block that fits, to avoid burning a large block on
        // a small request.
        let best = self
            .free_list
            .iter()
            .enumerate()
            .filter(|(_, block)| block.len() >= size_bytes)
            .min_by_key(|(_, block)| block.len())
            .map(|(index, _)| index);

        if let Some(index) = best {
            self.recycled += 1;
            tracing::trace!(size_bytes, "recycling pooled block");
            return self.free_list.swap_remove(index);
        }

        self.fresh += 1;
        vec![0u8; size_bytes].into_boxed_slice()
    }

    fn release(&mut self, block: Box<[u8]>) {
        self.free_list.push(block);
    }
}
