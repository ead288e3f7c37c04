use tracing::trace;

pub struct Solution;

impl Solution {
    /// Returns the `k` most frequent values, most frequent first.
    /// Values with equal counts come out in order of first occurrence.
    pub fn top_k_frequent(nums: Vec<i32>, k: i32) -> Vec<i32> {
        use std::cmp::Reverse;
        use std::collections::BinaryHeap;
        use std::collections::HashMap;

        if nums.len() == 1 {
            return nums;
        }

        // num -> (count, index of first occurrence)
        let mut count_by_num: HashMap<i32, (usize, usize)> = HashMap::with_capacity(nums.len());

        for (i, &n) in nums.iter().enumerate() {
            let entry = count_by_num.entry(n).or_insert((0, i));
            entry.0 += 1;
        }

        let k = usize::try_from(k).unwrap_or(0).min(count_by_num.len());

        let mut heap: BinaryHeap<(usize, Reverse<usize>, i32)> = count_by_num
            .into_iter()
            .map(|(n, (count, first))| (count, Reverse(first), n))
            .collect();

        let result: Vec<i32> = std::iter::from_fn(|| heap.pop())
            .take(k)
            .map(|(_, _, n)| n)
            .collect();

        trace!(k, ?result, "selected most frequent");
        result
    }
}
