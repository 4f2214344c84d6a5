//! Block assembly: glyph lookup and layout for one syllable.

use std::fmt;

use serde::Serialize;

use crate::glyph::{GlyphTable, LookupError};
use crate::grapheme::Vowel;
use crate::syllable::Syllable;

/// How the onset and vowel glyphs are arranged inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Onset above the vowel glyphs, three lines.
    Stacked,
    /// Onset and vowel glyphs on one line.
    SideBySide,
}

impl Layout {
    /// Layout is decided by the first vowel alone.
    pub fn for_vowel(vowel: Vowel) -> Self {
        match vowel {
            Vowel::O | Vowel::U => Layout::Stacked,
            Vowel::A | Vowel::E | Vowel::I => Layout::SideBySide,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub onset: String,
    /// Vowel glyph(s), long marks included.
    pub nucleus: String,
    pub layout: Layout,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layout {
            Layout::Stacked => write!(f, "(\n{}\n{}\n)", self.onset, self.nucleus),
            Layout::SideBySide => write!(f, "({}{})", self.onset, self.nucleus),
        }
    }
}

fn vowel_glyph(
    table: &GlyphTable,
    vowel: Vowel,
    long: bool,
    out: &mut String,
) -> Result<(), LookupError> {
    out.push_str(table.lookup(vowel.key())?);
    if long {
        out.push_str(table.long_mark());
    }
    Ok(())
}

/// Look up the glyphs for `syllable` and pick its layout.
pub fn render_block(table: &GlyphTable, syllable: &Syllable) -> Result<Block, LookupError> {
    let onset = match syllable.consonant {
        Some(c) => table.lookup(c.key())?,
        None => table.placeholder()?,
    };

    let mut nucleus = String::new();
    vowel_glyph(table, syllable.vowel1, syllable.long1, &mut nucleus)?;
    if let Some(v2) = syllable.vowel2 {
        vowel_glyph(table, v2, syllable.long2, &mut nucleus)?;
    }

    Ok(Block {
        onset: onset.to_string(),
        nucleus,
        layout: Layout::for_vowel(syllable.vowel1),
    })
}
