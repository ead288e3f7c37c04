//! Solutions to array and string exercises from the LeetCode catalog.
//!
//! Every solution lives in its own module under [`lc`] as an associated function
//! on a unit `Solution` struct. Solutions are independent of each other and keep no
//! state between calls. The two that mutate their input
//! ([`lc::move_zeroes`] and [`lc::can_place_flowers`]) take `&mut [i32]`.
//!
//! ```
//! use dsa_study::lc::container_with_most_water::Solution;
//!
//! assert_eq!(Solution::max_area(vec![1, 8, 6, 2, 5, 4, 8, 3, 7]), 49);
//! ```

pub mod lc;
