use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dsa_study::lc::*;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let indices = two_sum::Solution::two_sum(vec![2, 7, 11, 15], 9)?;
    info!(?indices, "two_sum");

    let anagram = valid_anagram::Solution::is_anagram("anagram".into(), "nagaram".into());
    info!(anagram, "is_anagram");

    let top = top_k_frequent_elements::Solution::top_k_frequent(vec![1, 1, 1, 2, 2, 3], 2);
    info!(?top, "top_k_frequent");

    let strs = ["eat", "tea", "tan", "ate", "nat", "bat"].map(String::from).to_vec();
    let groups = group_anagrams::Solution::group_anagrams(strs);
    info!(?groups, "group_anagrams");

    let duplicate = contains_duplicate::Solution::contains_duplicate(vec![1, 2, 3, 1]);
    info!(duplicate, "contains_duplicate");

    let mut flowerbed = vec![1, 0, 0, 0, 1];
    let placed = can_place_flowers::Solution::can_place_flowers(&mut flowerbed, 1);
    info!(placed, ?flowerbed, "can_place_flowers");

    let mut nums = vec![0, 1, 0, 3, 12];
    move_zeroes::Solution::move_zeroes(&mut nums);
    info!(?nums, "move_zeroes");

    let subsequence = is_subsequence::Solution::is_subsequence("abc".into(), "ahbgdc".into());
    info!(subsequence, "is_subsequence");

    let area = container_with_most_water::Solution::max_area(vec![1, 8, 6, 2, 5, 4, 8, 3, 7]);
    info!(area, "max_area");

    let vowels = reverse_vowels::Solution::reverse_vowels("leetcode".into());
    info!(%vowels, "reverse_vowels");

    let words = reverse_words::Solution::reverse_words("  the sky is  blue ".into());
    info!(%words, "reverse_words");

    let merged = merge_strings_alternately::Solution::merge_alternately("abc".into(), "pqr".into());
    info!(%merged, "merge_alternately");

    let kids = kids_with_candies::Solution::kids_with_candies(vec![2, 3, 5, 1, 3], 3);
    info!(?kids, "kids_with_candies");

    Ok(())
}
