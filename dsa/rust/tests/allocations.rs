//! The in-place solutions must not allocate. Kept in its own test binary
//! since dhat needs to be the global allocator.

use dsa_study::lc::{can_place_flowers, move_zeroes};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[test]
fn in_place_solutions_do_not_allocate() {
    // Warm up so lazily registered tracing callsites are not counted
    can_place_flowers::Solution::can_place_flowers(&mut [0, 0, 0], 1);
    move_zeroes::Solution::move_zeroes(&mut [0, 1]);

    let _profiler = dhat::Profiler::builder().testing().build();

    let mut nums = vec![0, 1, 0, 3, 12, 0, 0, 7];
    let mut flowerbed = vec![1, 0, 0, 0, 0, 0, 1, 0, 0];

    let before = dhat::HeapStats::get();

    move_zeroes::Solution::move_zeroes(&mut nums);
    let placed = can_place_flowers::Solution::can_place_flowers(&mut flowerbed, 2);

    let after = dhat::HeapStats::get();

    dhat::assert_eq!(after.total_blocks, before.total_blocks);
    dhat::assert_eq!(nums, vec![1, 3, 12, 7, 0, 0, 0, 0]);
    dhat::assert!(placed);
    dhat::assert_eq!(flowerbed, vec![1, 0, 1, 0, 1, 0, 1, 0, 0]);
}
