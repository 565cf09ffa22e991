use anyhow::Result;
use std::collections::HashMap;

/// One glyph and its keywords. The first keyword is the canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiEntry {
    glyph: String,
    keywords: Vec<String>,
}

impl EmojiEntry {
    pub fn new(glyph: impl Into<String>, keywords: Vec<String>) -> Result<Self> {
        let glyph = glyph.into();
        if keywords.is_empty() {
            anyhow::bail!("Emoji {} has no keywords", glyph);
        }
        Ok(Self { glyph, keywords })
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn name(&self) -> &str {
        &self.keywords[0]
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Glyph-keyed emoji table that remembers insertion order.
///
/// Re-inserting a glyph replaces its keyword list but keeps the position
/// of the first insertion, so iteration is deterministic across merges.
#[derive(Debug, Clone, Default)]
pub struct EmojiTable {
    entries: Vec<EmojiEntry>,
    index: HashMap<String, usize>,
}

impl EmojiTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: EmojiEntry) {
        match self.index.get(entry.glyph()) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(entry.glyph.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Overlays `other` on top of this table, last write wins.
    pub fn merge(&mut self, other: EmojiTable) {
        for entry in other.entries {
            self.insert(entry);
        }
    }

    pub fn get(&self, glyph: &str) -> Option<&EmojiEntry> {
        self.index.get(glyph).map(|&position| &self.entries[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmojiEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<EmojiEntry> for EmojiTable {
    fn from_iter<I: IntoIterator<Item = EmojiEntry>>(iter: I) -> Self {
        let mut table = EmojiTable::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

impl<'a> IntoIterator for &'a EmojiTable {
    type Item = &'a EmojiEntry;
    type IntoIter = std::slice::Iter<'a, EmojiEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(glyph: &str, keywords: &[&str]) -> EmojiEntry {
        EmojiEntry::new(glyph, keywords.iter().map(|k| k.to_string()).collect()).unwrap()
    }

    #[test]
    fn empty_keywords_are_rejected() {
        assert!(EmojiEntry::new("🙂", Vec::new()).is_err());
    }

    #[test]
    fn canonical_name_is_first_keyword() {
        let e = entry("☁️", &["cloud", "weather", "sky"]);
        assert_eq!(e.name(), "cloud");
        assert_eq!(e.glyph(), "☁️");
        assert_eq!(e.keywords().len(), 3);
    }

    #[test]
    fn merge_replaces_in_place_and_appends_new() {
        let mut table: EmojiTable = vec![
            entry("😀", &["grinning_face", "smile"]),
            entry("☁️", &["cloud", "sky"]),
            entry("🌈", &["rainbow"]),
        ]
        .into_iter()
        .collect();

        let overlay: EmojiTable = vec![
            entry("🦀", &["crab", "rust"]),
            entry("☁️", &["nimbus"]),
        ]
        .into_iter()
        .collect();

        table.merge(overlay);

        let names: Vec<&str> = table.iter().map(EmojiEntry::name).collect();
        assert_eq!(names, vec!["grinning_face", "nimbus", "rainbow", "crab"]);
        // Replaced entirely, not merged
        assert_eq!(table.get("☁️").unwrap().keywords(), &["nimbus".to_string()]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn empty_table() {
        let table = EmojiTable::new();
        assert!(table.is_empty());
        assert!(table.get("🙂").is_none());
    }
}
