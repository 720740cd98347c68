use pretty_assertions::assert_eq;

use super::*;
use crate::PooledBackend;

// === Allocation ===

#[test]
fn first_allocation_creates_default_region() {
    let mut arena = Arena::new();
    assert!(arena.is_empty());
    assert_eq!(arena.current_region(), None);

    let ptr = arena.allocate(10);
    assert_eq!(arena.region_count(), 1);
    assert_eq!(arena.regions()[0].capacity(), REGION_DEFAULT_CAPACITY);
    assert_eq!(ptr.region(), 0);
    assert_eq!(ptr.offset(), 0);
    assert_eq!(ptr.len(), 10);
}

#[test]
fn sizes_round_up_to_whole_units() {
    let mut arena = Arena::new();
    let a = arena.allocate(1);
    let b = arena.allocate(UNIT_SIZE + 1);
    let c = arena.allocate(0);

    assert_eq!(a.offset(), 0);
    assert_eq!(b.offset(), UNIT_SIZE);
    assert_eq!(c.offset(), 3 * UNIT_SIZE);
    assert_eq!(arena.regions()[0].count(), 3);
    assert!(c.is_empty());
}

#[test]
fn oversized_request_gets_its_own_region() {
    let mut arena = Arena::new();
    arena.allocate(100 * UNIT_SIZE);
    arena.allocate(9000 * UNIT_SIZE);

    assert_eq!(arena.region_count(), 2);
    assert!(arena.regions()[1].capacity() >= 9000);
    assert_eq!(arena.stats().oversized_allocations, 1);
}

#[test]
fn oversized_first_request_sizes_first_region() {
    let mut arena = Arena::with_region_capacity(4);
    let ptr = arena.allocate(10 * UNIT_SIZE);
    assert_eq!(arena.region_count(), 1);
    assert_eq!(arena.regions()[0].capacity(), 10);
    assert_eq!(ptr.region(), 0);
}

#[test]
fn full_region_grows_chain() {
    let mut arena = Arena::with_region_capacity(4);
    let a = arena.allocate(3 * UNIT_SIZE);
    let b = arena.allocate(2 * UNIT_SIZE);

    assert_eq!(a.region(), 0);
    assert_eq!(b.region(), 1);
    assert_eq!(arena.current_region(), Some(1));
    assert_eq!(arena.stats().regions_created, 2);
}

#[test]
fn exact_fit_does_not_grow() {
    let mut arena = Arena::with_region_capacity(4);
    arena.allocate(2 * UNIT_SIZE);
    arena.allocate(2 * UNIT_SIZE);
    assert_eq!(arena.region_count(), 1);
    assert!(!arena.regions()[0].fits(1));
}

#[test]
fn allocations_do_not_overlap() {
    let mut arena = Arena::with_region_capacity(8);
    let ptrs: Vec<ArenaPtr> = (0u8..20).map(|i| arena.alloc_bytes(&[i; 5])).collect();
    for (i, ptr) in ptrs.iter().enumerate() {
        let expected = [u8::try_from(i).unwrap(); 5];
        assert_eq!(arena.bytes(*ptr), &expected);
    }
}

// === Reallocation ===

#[test]
fn reallocate_shrink_returns_same_handle() {
    let mut arena = Arena::new();
    let p = arena.allocate(10);
    let q = arena.reallocate(p, 10, 5);
    assert_eq!(p, q);
    assert_eq!(arena.regions()[0].count(), units_for(10));
}

#[test]
fn reallocate_equal_size_returns_same_handle() {
    let mut arena = Arena::new();
    let p = arena.allocate(16);
    assert_eq!(arena.reallocate(p, 16, 16), p);
}

#[test]
fn reallocate_grow_copies_prefix() {
    let mut arena = Arena::new();
    let p = arena.alloc_bytes(b"hello");
    let q = arena.reallocate(p, 5, 10);

    assert_ne!(p, q);
    assert_eq!(q.len(), 10);
    assert_eq!(&arena.bytes(q)[..5], b"hello");
    // The old block is not reclaimed.
    assert_eq!(arena.bytes(p), b"hello");
}

#[test]
fn reallocate_across_regions_copies_prefix() {
    let mut arena = Arena::with_region_capacity(2);
    let p = arena.alloc_bytes(b"0123456789");
    let q = arena.reallocate(p, 10, 40);

    assert_ne!(p.region(), q.region());
    assert_eq!(&arena.bytes(q)[..10], b"0123456789");
}

#[test]
fn reallocate_into_earlier_region_after_reset() {
    let mut arena = Arena::with_region_capacity(4);
    arena.allocate(4 * UNIT_SIZE);
    let p = arena.alloc_bytes(b"abc");
    assert_eq!(p.region(), 1);

    // Rewind to region 0 and move the bytes backwards along the chain.
    arena.reset();
    let q = arena.reallocate(p, 3, 8);
    assert_eq!(q.region(), 0);
    assert_eq!(&arena.bytes(q)[..3], b"abc");
}

// === Reset ===

#[test]
fn reset_reuses_existing_regions() {
    let mut arena = Arena::new();
    arena.allocate(100 * UNIT_SIZE);
    arena.allocate(9000 * UNIT_SIZE);
    let regions_before = arena.region_count();

    arena.reset();
    assert_eq!(arena.current_region(), Some(0));
    assert_eq!(arena.bytes_used(), 0);

    let p = arena.allocate(100 * UNIT_SIZE);
    let q = arena.allocate(9000 * UNIT_SIZE);
    assert_eq!(arena.region_count(), regions_before);
    assert_eq!(p.region(), 0);
    assert_eq!(q.region(), 1);
    assert_eq!(arena.stats().regions_skipped, 1);
}

#[test]
fn reset_on_empty_arena_stays_empty() {
    let mut arena = Arena::new();
    arena.reset();
    assert!(arena.is_empty());
    assert_eq!(arena.current_region(), None);
}

#[test]
fn reset_keeps_reserved_bytes() {
    let mut arena = Arena::with_region_capacity(4);
    for _ in 0..5 {
        arena.allocate(4 * UNIT_SIZE);
    }
    let reserved = arena.bytes_reserved();
    arena.reset();
    assert_eq!(arena.bytes_reserved(), reserved);
}

// === Free ===

#[test]
fn free_returns_to_empty_state() {
    let mut arena = Arena::new();
    arena.allocate(64);
    arena.allocate(9000 * UNIT_SIZE);
    arena.free();

    assert!(arena.is_empty());
    assert_eq!(arena.current_region(), None);
    assert_eq!(arena.bytes_reserved(), 0);
    assert_eq!(arena.stats(), ArenaStats::default());

    let p = arena.allocate(8);
    assert_eq!(p.region(), 0);
    assert_eq!(arena.region_count(), 1);
}

#[test]
fn free_hands_regions_back_to_backend() {
    let mut arena = Arena::with_backend_and_capacity(PooledBackend::new(), 4);
    arena.allocate(4 * UNIT_SIZE);
    arena.allocate(4 * UNIT_SIZE);
    arena.free();
    assert_eq!(arena.backend().pooled(), 2);

    arena.allocate(UNIT_SIZE);
    assert_eq!(arena.backend().recycled_blocks(), 1);
    assert_eq!(arena.backend().fresh_blocks(), 2);
}

// === Snapshot / rewind ===

#[test]
fn rewind_reclaims_later_allocations() {
    let mut arena = Arena::with_region_capacity(4);
    let kept = arena.alloc_bytes(b"keep");
    let snap = arena.snapshot();

    arena.allocate(3 * UNIT_SIZE);
    arena.allocate(4 * UNIT_SIZE);
    arena.allocate(4 * UNIT_SIZE);
    assert_eq!(arena.region_count(), 3);

    arena.rewind(snap);
    assert_eq!(arena.current_region(), Some(0));
    assert_eq!(arena.regions()[0].count(), 1);
    assert_eq!(arena.regions()[1].count(), 0);
    assert_eq!(arena.regions()[2].count(), 0);
    assert_eq!(arena.bytes(kept), b"keep");

    let next = arena.allocate(UNIT_SIZE);
    assert_eq!(next.region(), 0);
    assert_eq!(next.offset(), UNIT_SIZE);
}

#[test]
fn rewind_to_empty_snapshot_resets() {
    let mut arena = Arena::new();
    let snap = arena.snapshot();
    arena.allocate(32);
    arena.rewind(snap);
    assert_eq!(arena.bytes_used(), 0);
    assert_eq!(arena.current_region(), Some(0));
}

#[test]
#[should_panic(expected = "snapshot refers to region")]
fn rewind_after_free_panics() {
    let mut arena = Arena::new();
    arena.allocate(8);
    let snap = arena.snapshot();
    arena.free();
    arena.rewind(snap);
}

// === Handles ===

#[test]
#[should_panic(expected = "arena handle refers to region")]
fn resolving_handle_after_free_panics() {
    let mut arena = Arena::new();
    let p = arena.allocate(8);
    arena.free();
    let _ = arena.bytes(p);
}

#[test]
fn prefix_narrows_resolved_bytes() {
    let mut arena = Arena::new();
    let p = arena.alloc_bytes(b"hello world");
    let head = p.prefix(5);
    assert_eq!(head.region(), p.region());
    assert_eq!(head.offset(), p.offset());
    assert_eq!(arena.bytes(head), b"hello");
}

#[test]
#[should_panic(expected = "exceeds allocation")]
fn prefix_longer_than_allocation_panics() {
    let mut arena = Arena::new();
    let p = arena.allocate(4);
    let _ = p.prefix(5);
}

#[test]
fn debug_output_summarizes_chain() {
    let mut arena = Arena::new();
    arena.allocate(8);
    let text = format!("{arena:?}");
    assert!(text.contains("regions: 1"), "{text}");
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_arena {
    use super::super::Arena;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn written_bytes_survive_later_allocations(
            chunks in proptest::collection::vec(
                proptest::collection::vec(any::<u8>(), 0..200),
                1..40,
            ),
            capacity in 1usize..64,
        ) {
            let mut arena = Arena::with_region_capacity(capacity);
            let ptrs: Vec<_> = chunks.iter().map(|c| arena.alloc_bytes(c)).collect();
            for (ptr, chunk) in ptrs.iter().zip(&chunks) {
                prop_assert_eq!(arena.bytes(*ptr), chunk.as_slice());
            }
        }

        #[test]
        fn reset_never_grows_chain_for_same_workload(
            sizes in proptest::collection::vec(0usize..2048, 1..40),
            capacity in 1usize..128,
        ) {
            let mut arena = Arena::with_region_capacity(capacity);
            for &size in &sizes {
                arena.allocate(size);
            }
            let regions = arena.region_count();
            arena.reset();
            for &size in &sizes {
                arena.allocate(size);
            }
            prop_assert_eq!(arena.region_count(), regions);
        }

        #[test]
        fn used_count_never_exceeds_capacity(
            sizes in proptest::collection::vec(0usize..4096, 1..60),
            capacity in 1usize..64,
        ) {
            let mut arena = Arena::with_region_capacity(capacity);
            for &size in &sizes {
                arena.allocate(size);
                for region in arena.regions() {
                    prop_assert!(region.count() <= region.capacity());
                }
            }
        }
    }
}
