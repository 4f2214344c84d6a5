mod scenarios;

use crate::{GlyphTable, Vowel};

/// Glyph for a vowel in the default table.
fn vowel(v: Vowel) -> &'static str {
    GlyphTable::global().lookup(v.key()).unwrap()
}
