// Hashing / frequency maps
pub mod contains_duplicate;
pub mod group_anagrams;
pub mod top_k_frequent_elements;
pub mod two_sum;
pub mod valid_anagram;

// Two pointers
pub mod container_with_most_water;
pub mod is_subsequence;
pub mod move_zeroes;
pub mod reverse_vowels;
pub mod reverse_words;

// Greedy, single pass
pub mod can_place_flowers;
pub mod kids_with_candies;
pub mod merge_strings_alternately;
