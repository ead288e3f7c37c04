use tracing::trace;

pub struct Solution;

impl Solution {
    pub fn is_subsequence(s: String, t: String) -> bool {
        if s.is_empty() {
            return true;
        }
        if t.is_empty() {
            return false;
        }

        // Both cursors only move forward, each char of `s` is searched for
        // strictly after the previous match in `t`
        let mut t_chars = t.chars();

        for (i, c) in s.chars().enumerate() {
            if !t_chars.any(|tc| tc == c) {
                trace!(index = i, missing = %c, "no match left in source");
                return false;
            }
        }

        true
    }
}
