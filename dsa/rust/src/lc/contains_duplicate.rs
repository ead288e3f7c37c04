pub struct Solution;

impl Solution {
    pub fn contains_duplicate(nums: Vec<i32>) -> bool {
        use std::collections::HashSet;

        let mut seen = HashSet::with_capacity(nums.len());

        for n in nums {
            if !seen.insert(n) {
                return true;
            }
        }

        false
    }
}
