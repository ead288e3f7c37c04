pub struct Solution;

impl Solution {
    /// Moves every zero to the end of `nums` in place, keeping the relative
    /// order of the non-zero values.
    pub fn move_zeroes(nums: &mut [i32]) {
        // Everything before `insert` is non-zero and in original order
        let mut insert = 0;

        for scan in 0..nums.len() {
            if nums[scan] != 0 {
                nums.swap(insert, scan);
                insert += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_1() {
        let mut nums = vec![0, 1, 0, 3, 12];
        Solution::move_zeroes(&mut nums);
        assert_eq!(nums, vec![1, 3, 12, 0, 0]);
    }

    #[test]
    fn test_case_2() {
        let mut nums = vec![0];
        Solution::move_zeroes(&mut nums);
        assert_eq!(nums, vec![0]);
    }

    #[test]
    fn test_case_3() {
        let mut nums = vec![4, 2, 0, 0, -1];
        Solution::move_zeroes(&mut nums);
        assert_eq!(nums, vec![4, 2, -1, 0, 0]);
    }

    #[test]
    fn fixed_point() {
        let mut nums = vec![0, 0, 7, 0, 5];
        Solution::move_zeroes(&mut nums);
        let once = nums.clone();
        Solution::move_zeroes(&mut nums);
        assert_eq!(nums, once);
    }

    #[test]
    fn empty() {
        let mut nums: Vec<i32> = vec![];
        Solution::move_zeroes(&mut nums);
        assert!(nums.is_empty());
    }
}
