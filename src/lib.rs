//! Māorihanga: Māori text rendered as Hangul Jamo syllable blocks.
//!
//! Pipeline: [`normalize()`] lowercases and splits macron vowels into base
//! vowel + `·`, [`syllables`] scans the result into `(C?)(V)(L?)(V2?)(L2?)`
//! units, and [`render_block`] maps each unit through the [`GlyphTable`]
//! into a parenthesized block. [`translate`] runs the whole pipeline.

pub mod block;
pub mod explain;
pub mod glyph;
pub mod grapheme;
pub mod normalize;
pub mod syllable;
pub mod trace_init;

pub use block::{render_block, Block, Layout};
pub use glyph::{GlyphTable, GlyphTableError, LookupError};
pub use grapheme::{Consonant, Grapheme, Vowel};
pub use normalize::{normalize, LONG_MARKER};
pub use syllable::{syllables, Syllable};

use tracing::{debug, debug_span};

/// Transliterate `text` with the process-wide glyph table.
///
/// Blocks are joined by single spaces. Text with no recognizable syllable
/// yields an empty string.
pub fn translate(text: &str) -> Result<String, LookupError> {
    translate_with(GlyphTable::global(), text)
}

/// Transliterate `text` with an explicit glyph table.
pub fn translate_with(table: &GlyphTable, text: &str) -> Result<String, LookupError> {
    let _span = debug_span!("translate", len = text.len()).entered();

    let normalized = normalize(text);
    let blocks = syllables(&normalized)
        .map(|s| render_block(table, &s).map(|b| b.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(blocks = blocks.len(), "translated");
    Ok(blocks.join(" "))
}

#[cfg(test)]
mod tests;
