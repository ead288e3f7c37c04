pub struct Solution;

impl Solution {
    pub fn merge_alternately(word1: String, word2: String) -> String {
        let mut result = String::with_capacity(word1.len() + word2.len());

        let mut a = word1.chars();
        let mut b = word2.chars();

        loop {
            match (a.next(), b.next()) {
                (Some(ca), Some(cb)) => {
                    result.push(ca);
                    result.push(cb);
                }
                (Some(ca), None) => {
                    result.push(ca);
                    result.extend(a);
                    break;
                }
                (None, Some(cb)) => {
                    result.push(cb);
                    result.extend(b);
                    break;
                }
                (None, None) => break,
            }
        }

        result
    }
}
