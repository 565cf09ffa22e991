use rand::seq::SliceRandom;
use rand::Rng;

use crate::clipboard::ClipboardWriter;
use crate::commands::{copy_and_report, copy_status, format_line};
use crate::error::{EmError, Result};
use crate::search::{find_all, Query};
use crate::storage::EmojiTable;

/// Lists every match. A lone match is copied unless `no_copy` is set.
pub fn search<C>(
    query: &Query,
    table: &EmojiTable,
    clipboard: &mut C,
    no_copy: bool,
) -> Result<String>
where
    C: ClipboardWriter + ?Sized,
{
    let found = find_all(table, query.tokens());
    tracing::debug!(matches = found.len(), "search finished");

    match found.as_slice() {
        [] => Err(EmError::not_found(query.joined())),
        [entry] if !no_copy => {
            let line = format_line(entry);
            // Only a successful copy is worth mentioning here
            if clipboard.try_copy(entry.glyph()) {
                Ok(format!("{}\n{}", line, copy_status(entry.glyph(), true)))
            } else {
                Ok(line)
            }
        }
        entries => Ok(entries
            .iter()
            .map(|entry| format_line(entry))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Picks one of the search matches at random and copies it.
pub fn random_from_search<C, R>(
    query: &Query,
    table: &EmojiTable,
    clipboard: &mut C,
    rng: &mut R,
) -> Result<String>
where
    C: ClipboardWriter + ?Sized,
    R: Rng + ?Sized,
{
    let found = find_all(table, query.tokens());
    tracing::debug!(matches = found.len(), "search finished, picking one");

    let entry = found
        .choose(rng)
        .ok_or_else(|| EmError::not_found(query.joined()))?;

    Ok(copy_and_report(entry, clipboard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{sample_table, FakeClipboard};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lists_all_matches_without_copying() {
        let mut clipboard = FakeClipboard::working();
        let out = search(&Query::new(["sky"]), &sample_table(), &mut clipboard, false).unwrap();
        assert_eq!(
            out,
            "🥃 tumbler_glass\n🏙️ cityscape\n🌆 cityscape_at_dusk\n☁️ cloud"
        );
        assert!(clipboard.copied.is_empty());
    }

    #[test]
    fn single_match_is_copied() {
        let mut clipboard = FakeClipboard::working();
        let out = search(&Query::new(["whisky"]), &sample_table(), &mut clipboard, false).unwrap();
        assert_eq!(out, "🥃 tumbler_glass\nEmoji 🥃 copied!");
        assert_eq!(clipboard.copied, vec!["🥃".to_string()]);
    }

    #[test]
    fn single_match_copy_failure_has_no_suffix() {
        let mut clipboard = FakeClipboard::broken();
        let out = search(&Query::new(["whisky"]), &sample_table(), &mut clipboard, false).unwrap();
        assert_eq!(out, "🥃 tumbler_glass");
    }

    #[test]
    fn no_copy_skips_the_clipboard() {
        let mut clipboard = FakeClipboard::working();
        let out = search(&Query::new(["Flower"]), &sample_table(), &mut clipboard, true).unwrap();
        assert_eq!(out, "🌸 cherry_blossom");
        assert!(clipboard.copied.is_empty());
    }

    #[test]
    fn no_match_reports_joined_query() {
        let mut clipboard = FakeClipboard::working();
        let err = search(
            &Query::new(["gawf", "gsah"]),
            &sample_table(),
            &mut clipboard,
            false,
        )
        .unwrap_err();
        assert_eq!(err, EmError::not_found("gawf gsah"));
    }

    #[test]
    fn random_pick_is_a_match_and_gets_copied() {
        let table = sample_table();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mut clipboard = FakeClipboard::working();
            let out = random_from_search(&Query::new(["city"]), &table, &mut clipboard, &mut rng)
                .unwrap();
            assert!(
                out == "🏙️ cityscape\nEmoji 🏙️ copied!"
                    || out == "🌆 cityscape_at_dusk\nEmoji 🌆 copied!",
                "unexpected {:?}",
                out
            );
            assert_eq!(clipboard.copied.len(), 1);
        }
    }

    #[test]
    fn random_pick_without_matches_is_not_found() {
        let mut clipboard = FakeClipboard::working();
        let mut rng = StdRng::seed_from_u64(1);
        let err = random_from_search(
            &Query::new(["nothing_here"]),
            &sample_table(),
            &mut clipboard,
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, EmError::not_found("nothing_here"));
        assert!(clipboard.copied.is_empty());
    }
}
