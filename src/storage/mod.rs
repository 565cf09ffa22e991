pub mod loader;
pub mod table;

pub use loader::{load_table, parse_emojis};
pub use table::{EmojiEntry, EmojiTable};
