pub struct Solution;

impl Solution {
    /// Areas are computed in `i64`, a result beyond `i32::MAX` saturates to it.
    pub fn max_area(height: Vec<i32>) -> i32 {
        if height.len() < 2 {
            return 0;
        }

        let mut l = 0;
        let mut r = height.len() - 1;

        let mut max_area: i64 = 0;
        while l < r {
            let lowest = height[l].min(height[r]);
            let area = (r - l) as i64 * lowest as i64;

            max_area = area.max(max_area);

            // Moving the taller wall in can only shrink the area
            if height[l] == lowest {
                l += 1;
            } else {
                r -= 1;
            }
        }

        max_area.min(i32::MAX as i64) as i32
    }
}
