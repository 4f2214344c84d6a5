//! Grapheme-to-glyph table.
//!
//! The default table is embedded TOML (`default_glyphs.toml`). A custom
//! table can replace it once, before the first `GlyphTable::global()` call.

mod config;
mod table;

pub use config::{parse_glyph_toml, GlyphTableError, ParsedGlyphs, PLACEHOLDER_KEY};
pub use table::{default_toml, GlyphTable, LookupError};
