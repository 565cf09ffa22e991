pub mod fuzzy;
pub mod matcher;
pub mod normalize;

pub use matcher::{exact_match, find_all};
pub use normalize::normalize;

/// The user's positional arguments, alongside their normalized tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    raw: Vec<String>,
    tokens: Vec<String>,
}

impl Query {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<String> = names.into_iter().map(Into::into).collect();
        let tokens = raw.iter().map(|name| normalize(name)).collect();
        Self { raw, tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The query as the user typed it, for messages.
    pub fn joined(&self) -> String {
        self.raw.join(" ")
    }
}
