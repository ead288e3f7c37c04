pub struct Solution;

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
}

impl Solution {
    /// Reverses the order of the vowels in `s`. Swapped vowels keep their own case.
    pub fn reverse_vowels(s: String) -> String {
        let mut chars: Vec<char> = s.chars().collect();
        if chars.len() < 2 {
            return s;
        }

        let mut start = 0;
        let mut end = chars.len() - 1;

        while start < end {
            if !is_vowel(chars[start]) {
                start += 1;
            } else if !is_vowel(chars[end]) {
                end -= 1;
            } else {
                chars.swap(start, end);
                start += 1;
                end -= 1;
            }
        }

        chars.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_1() {
        let input = "leetcode".to_string();
        let expected = "leotcede".to_string();
        assert_eq!(Solution::reverse_vowels(input), expected);
    }

    #[test]
    fn test_case_2() {
        let input = "IceCreAm".to_string();
        let expected = "AceCreIm".to_string();
        assert_eq!(Solution::reverse_vowels(input), expected);
    }

    #[test]
    fn test_case_3() {
        let input = "hello".to_string();
        let expected = "holle".to_string();
        assert_eq!(Solution::reverse_vowels(input), expected);
    }

    #[test]
    fn no_vowels() {
        let input = "rhythm".to_string();
        let expected = "rhythm".to_string();
        assert_eq!(Solution::reverse_vowels(input), expected);
    }

    #[test]
    fn short_inputs() {
        assert_eq!(Solution::reverse_vowels("".to_string()), "");
        assert_eq!(Solution::reverse_vowels("a".to_string()), "a");
        assert_eq!(Solution::reverse_vowels("aE".to_string()), "Ea");
    }
}
