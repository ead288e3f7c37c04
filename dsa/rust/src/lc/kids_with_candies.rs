pub struct Solution;

impl Solution {
    pub fn kids_with_candies(candies: Vec<i32>, extra_candies: i32) -> Vec<bool> {
        let Some(&max) = candies.iter().max() else {
            return Vec::new();
        };

        candies
            .iter()
            .map(|&c| c.saturating_add(extra_candies) >= max)
            .collect()
    }
}
