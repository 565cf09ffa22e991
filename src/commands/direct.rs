use crate::clipboard::ClipboardWriter;
use crate::commands::copy_and_report;
use crate::error::{EmError, Result};
use crate::search::fuzzy::{suggest, MAX_SUGGESTIONS};
use crate::search::{exact_match, Query};
use crate::storage::EmojiTable;

/// Hint shown when a plain lookup misses.
pub const SEARCH_HINT: &str = "-s";

/// Resolves the query to the emoji whose canonical name it spells out.
pub fn direct<C>(query: &Query, table: &EmojiTable, clipboard: &mut C) -> Result<String>
where
    C: ClipboardWriter + ?Sized,
{
    match exact_match(table, query.tokens()) {
        Some(entry) => Ok(copy_and_report(entry, clipboard)),
        None => {
            let suggestions = suggest(table, &query.tokens().join("_"), MAX_SUGGESTIONS);
            tracing::debug!(?suggestions, "no exact match");
            Err(EmError::EmojiNotFound {
                query: query.joined(),
                hint: Some(SEARCH_HINT.to_string()),
                suggestions,
            })
        }
    }
}
