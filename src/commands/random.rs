use rand::seq::SliceRandom;
use rand::Rng;

use crate::clipboard::ClipboardWriter;
use crate::commands::copy_and_report;
use crate::error::{EmError, Result};
use crate::storage::EmojiTable;

/// Any emoji from the whole table, regardless of the query.
pub fn random<C, R>(table: &EmojiTable, clipboard: &mut C, rng: &mut R) -> Result<String>
where
    C: ClipboardWriter + ?Sized,
    R: Rng + ?Sized,
{
    let entry = table
        .entries()
        .choose(rng)
        .ok_or_else(|| EmError::not_found(""))?;

    Ok(copy_and_report(entry, clipboard))
}
