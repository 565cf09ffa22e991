use anyhow::{Context, Result};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

use crate::config::Config;
use crate::storage::table::{EmojiEntry, EmojiTable};

/// The emoji table shipped with the binary.
pub const BUNDLED_EMOJIS: &str = include_str!("../../data/emojis.json");

/// JSON object of glyph -> keywords, kept in document order.
struct RawTable(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawTableVisitor;

        impl<'de> Visitor<'de> for RawTableVisitor {
            type Value = RawTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping emoji to a list of keywords")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawTable, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((glyph, keywords)) = map.next_entry::<String, Vec<String>>()? {
                    pairs.push((glyph, keywords));
                }
                Ok(RawTable(pairs))
            }
        }

        deserializer.deserialize_map(RawTableVisitor)
    }
}

/// Parses one emoji data document.
pub fn parse_emojis(json: &str) -> Result<EmojiTable> {
    let RawTable(pairs) = serde_json::from_str(json).context("Failed to parse emoji data")?;

    let mut table = EmojiTable::new();
    for (glyph, keywords) in pairs {
        table.insert(EmojiEntry::new(glyph, keywords)?);
    }
    Ok(table)
}

pub fn load_bundled() -> Result<EmojiTable> {
    parse_emojis(BUNDLED_EMOJIS).context("Bundled emoji data is corrupt")
}

/// Bundled table first, then the user's overlay if one exists.
pub fn load_table(config: &Config) -> Result<EmojiTable> {
    let mut table = load_bundled()?;
    tracing::debug!(entries = table.len(), "loaded bundled emoji table");

    if let Some(contents) = config.read_custom_file()? {
        let custom = parse_emojis(&contents).with_context(|| {
            format!("Failed to load custom emoji file: {:?}", config.custom_path)
        })?;
        tracing::debug!(entries = custom.len(), "merging custom emoji table");
        table.merge(custom);
    }

    Ok(table)
}
