//! Region-chained bump allocator for transient editor buffers.
//!
//! An [`Arena`] serves allocations by bumping an offset inside the current
//! [`Region`]. When a region runs out of room the arena either walks forward
//! to a region left behind by [`Arena::reset`] or appends a fresh one, so
//! growth is unbounded and allocation never fails for lack of space.
//!
//! Individual allocations are never freed. Memory is reclaimed en masse:
//! [`Arena::reset`] keeps every region for reuse, [`Arena::free`] hands
//! every region back to the [`RegionBackend`].
//!
//! # Handles
//!
//! Allocations are addressed by [`ArenaPtr`] handles (region index, byte
//! offset, length) rather than raw pointers. A handle is resolved with
//! [`Arena::bytes`] / [`Arena::bytes_mut`].
//!
//! # Threading
//!
//! The arena has no internal locking. Use one arena per thread or serialize
//! access externally.

mod arena;
mod backend;
mod region;

pub use arena::{Arena, ArenaPtr, ArenaSnapshot, ArenaStats};
pub use backend::{HeapBackend, PooledBackend, RegionBackend};
pub use region::Region;

/// Size in bytes of the arena's alignment unit (one machine word).
///
/// Every allocation is rounded up to a whole number of units, and region
/// capacities are measured in units.
pub const UNIT_SIZE: usize = std::mem::size_of::<usize>();

/// Capacity, in units, of a region created for a request that fits the default.
pub const REGION_DEFAULT_CAPACITY: usize = 8 * 1024;

/// Number of units needed to hold `size_bytes` bytes.
#[inline]
pub const fn units_for(size_bytes: usize) -> usize {
    size_bytes.div_ceil(UNIT_SIZE)
}
