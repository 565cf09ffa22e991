use std::fmt;

/// User-facing failures of the lookup modes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmError {
    #[error("the 'name' argument is required")]
    MissingQuery,

    #[error("Emoji not found for \"{query}\"{}{}", HintSuffix(.hint), Suggestions(.suggestions))]
    EmojiNotFound {
        query: String,
        hint: Option<String>,
        suggestions: Vec<String>,
    },
}

impl EmError {
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::EmojiNotFound {
            query: query.into(),
            hint: None,
            suggestions: Vec::new(),
        }
    }
}

struct HintSuffix<'a>(&'a Option<String>);

impl fmt::Display for HintSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(hint) => write!(f, ", try {}", hint),
            None => Ok(()),
        }
    }
}

struct Suggestions<'a>(&'a [String]);

impl fmt::Display for Suggestions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        write!(f, "\nDid you mean: {}?", self.0.join(", "))
    }
}

pub type Result<T> = std::result::Result<T, EmError>;
