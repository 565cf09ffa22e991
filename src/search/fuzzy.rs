use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::storage::EmojiTable;

/// How many names to offer when a direct lookup misses.
pub const MAX_SUGGESTIONS: usize = 3;

/// Canonical names that fuzzily resemble `pattern`, best first.
pub fn suggest(table: &EmojiTable, pattern: &str, limit: usize) -> Vec<String> {
    if pattern.is_empty() || limit == 0 {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();

    // Score and sort matches, ties stay in table order
    let mut matches: Vec<(i64, &str)> = table
        .iter()
        .filter_map(|entry| {
            matcher
                .fuzzy_match(entry.name(), pattern)
                .map(|score| (score, entry.name()))
        })
        .collect();

    matches.sort_by(|a, b| b.0.cmp(&a.0));

    matches
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}
