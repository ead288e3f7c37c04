pub struct Solution;

impl Solution {
    pub fn is_anagram(s: String, t: String) -> bool {
        use std::collections::HashMap;

        if s.len() != t.len() {
            return false;
        }

        let mut count_by_char: HashMap<char, usize> = HashMap::with_capacity(s.len());
        for c in s.chars() {
            *count_by_char.entry(c).or_insert(0) += 1;
        }

        for c in t.chars() {
            let Some(count) = count_by_char.get_mut(&c) else {
                return false;
            };

            *count -= 1;
            if *count == 0 {
                count_by_char.remove(&c);
            }
        }

        count_by_char.is_empty()
    }
}
