//! Keyword to emoji lookup with search, random picks and clipboard copy.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod search;
pub mod storage;

use rand::Rng;

pub use clipboard::{ClipboardWriter, NoClipboard, SystemClipboard};
pub use commands::{resolve, Request};
pub use config::Config;
pub use error::EmError;

/// Loads the emoji table for `config` and resolves `request` against it.
pub fn run<C, R>(
    request: &Request,
    config: &Config,
    clipboard: &mut C,
    rng: &mut R,
) -> anyhow::Result<String>
where
    C: ClipboardWriter + ?Sized,
    R: Rng + ?Sized,
{
    let table = storage::load_table(config)?;
    let message = resolve(request, &table, clipboard, rng)?;
    Ok(message)
}
