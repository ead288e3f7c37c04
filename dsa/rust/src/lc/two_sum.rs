use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TwoSumError {
    #[error("No two numbers add up to {target}")]
    NoSolution { target: i32 },
}

type Error = TwoSumError;
type Result<T> = std::result::Result<T, Error>;

pub struct Solution;

impl Solution {
    /// Returns the indices of the two numbers adding up to `target`,
    /// ordered as `[current, previously_seen]`.
    ///
    /// Callers are expected to pass input with exactly one valid pair,
    /// anything else is reported as `TwoSumError::NoSolution`.
    /// Two element inputs are trusted to be that pair and are not checked.
    pub fn two_sum(nums: Vec<i32>, target: i32) -> Result<Vec<i32>> {
        use std::collections::HashMap;

        if nums.len() == 2 {
            return Ok(vec![0, 1]);
        }

        let mut index_by_num: HashMap<i32, i32> = HashMap::with_capacity(nums.len());

        for (i, &n) in nums.iter().enumerate() {
            // No i32 complement exists when the subtraction overflows
            let found = target.checked_sub(n).and_then(|diff| index_by_num.get(&diff));

            if let Some(&idx) = found {
                trace!(current = i, previous = idx, "found pair");
                return Ok(vec![i as i32, idx]);
            }

            index_by_num.insert(n, i as i32);
        }

        Err(Error::NoSolution { target })
    }
}
