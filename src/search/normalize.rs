/// Turns a user-supplied name into a search token.
///
/// `:shortcode:` wrapping is removed, dashes and spaces become
/// underscores, and the result is lowercased.
pub fn normalize(token: &str) -> String {
    let mut name = token;
    while let Some(inner) = name.strip_prefix(':').and_then(|rest| rest.strip_suffix(':')) {
        name = inner;
    }

    name.replace(['-', ' '], "_").to_lowercase()
}
