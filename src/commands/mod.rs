pub mod direct;
pub mod random;
pub mod search;

use rand::Rng;

use crate::clipboard::ClipboardWriter;
use crate::error::{EmError, Result};
use crate::search::Query;
use crate::storage::{EmojiEntry, EmojiTable};

/// What the user asked for, after argument parsing.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub query: Query,
    pub search: bool,
    pub random: bool,
    pub no_copy: bool,
}

impl Request {
    pub fn new(names: Vec<String>, search: bool, random: bool, no_copy: bool) -> Self {
        Self {
            query: Query::new(names),
            search,
            random,
            no_copy,
        }
    }
}

/// Picks the mode from the flags and produces the text to show the user.
///
/// The clipboard is touched at most once.
pub fn resolve<C, R>(
    request: &Request,
    table: &EmojiTable,
    clipboard: &mut C,
    rng: &mut R,
) -> Result<String>
where
    C: ClipboardWriter + ?Sized,
    R: Rng + ?Sized,
{
    // Random alone is the only mode that works without a query
    if request.query.is_empty() && (!request.random || request.search) {
        return Err(EmError::MissingQuery);
    }

    match (request.search, request.random) {
        (true, true) => {
            tracing::debug!(mode = "search+random", "resolving");
            search::random_from_search(&request.query, table, clipboard, rng)
        }
        (true, false) => {
            tracing::debug!(mode = "search", "resolving");
            search::search(&request.query, table, clipboard, request.no_copy)
        }
        (false, true) => {
            tracing::debug!(mode = "random", "resolving");
            random::random(table, clipboard, rng)
        }
        (false, false) => {
            tracing::debug!(mode = "direct", "resolving");
            direct::direct(&request.query, table, clipboard)
        }
    }
}

/// `"<glyph> <name>"`
pub(crate) fn format_line(entry: &EmojiEntry) -> String {
    format!("{} {}", entry.glyph(), entry.name())
}

pub(crate) fn copy_status(glyph: &str, copied: bool) -> String {
    if copied {
        format!("Emoji {} copied!", glyph)
    } else {
        "Emoji found but not copied".to_string()
    }
}

/// Copies the entry's glyph and reports the line plus the copy status.
pub(crate) fn copy_and_report<C>(entry: &EmojiEntry, clipboard: &mut C) -> String
where
    C: ClipboardWriter + ?Sized,
{
    let copied = clipboard.try_copy(entry.glyph());
    tracing::debug!(glyph = entry.glyph(), copied, "clipboard copy attempted");
    format!("{}\n{}", format_line(entry), copy_status(entry.glyph(), copied))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::clipboard::ClipboardWriter;
    use crate::storage::{parse_emojis, EmojiTable};

    /// Records what was copied and answers with a fixed outcome.
    #[derive(Debug, Default)]
    pub struct FakeClipboard {
        pub works: bool,
        pub copied: Vec<String>,
    }

    impl FakeClipboard {
        pub fn working() -> Self {
            Self {
                works: true,
                copied: Vec::new(),
            }
        }

        pub fn broken() -> Self {
            Self::default()
        }
    }

    impl ClipboardWriter for FakeClipboard {
        fn try_copy(&mut self, text: &str) -> bool {
            self.copied.push(text.to_string());
            self.works
        }
    }

    pub fn sample_table() -> EmojiTable {
        parse_emojis(
            r#"{
                "🥃": ["tumbler_glass", "drink", "whisky"],
                "🏙️": ["cityscape", "city", "skyline"],
                "🌆": ["cityscape_at_dusk", "city", "evening", "skyline"],
                "☁️": ["cloud", "weather", "sky"],
                "🌸": ["cherry_blossom", "spring", "flower"]
            }"#,
        )
        .unwrap()
    }
}
