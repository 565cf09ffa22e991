use crate::storage::{EmojiEntry, EmojiTable};

/// All entries where every token is a substring of at least one keyword,
/// in table order.
///
/// Panics if `tokens` is empty; callers decide what an empty query means.
pub fn find_all<'a>(table: &'a EmojiTable, tokens: &[String]) -> Vec<&'a EmojiEntry> {
    assert!(!tokens.is_empty(), "at least one search term required");

    table
        .iter()
        .filter(|entry| {
            tokens.iter().all(|token| {
                entry
                    .keywords()
                    .iter()
                    .any(|keyword| keyword.contains(token.as_str()))
            })
        })
        .collect()
}

/// First match whose canonical name is exactly one of the tokens.
pub fn exact_match<'a>(table: &'a EmojiTable, tokens: &[String]) -> Option<&'a EmojiEntry> {
    find_all(table, tokens)
        .into_iter()
        .find(|entry| tokens.iter().any(|token| entry.name() == token))
}
