pub struct Solution;

impl Solution {
    /// Groups anagrams together. Groups are ordered by the first occurrence
    /// of their key and members keep their input order.
    pub fn group_anagrams(strs: Vec<String>) -> Vec<Vec<String>> {
        use std::collections::hash_map::Entry;
        use std::collections::HashMap;

        let mut group_by_key: HashMap<Vec<char>, usize> = HashMap::with_capacity(strs.len());
        let mut groups: Vec<Vec<String>> = Vec::new();

        for s in strs {
            match group_by_key.entry(canonical_key(&s)) {
                Entry::Occupied(entry) => groups[*entry.get()].push(s),
                Entry::Vacant(entry) => {
                    entry.insert(groups.len());
                    groups.push(vec![s]);
                }
            }
        }

        groups
    }
}

fn canonical_key(s: &str) -> Vec<char> {
    let mut key: Vec<char> = s.chars().collect();
    key.sort_unstable();
    key
}
