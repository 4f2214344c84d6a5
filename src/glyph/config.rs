use std::collections::BTreeMap;

use serde::Deserialize;

use crate::grapheme::Grapheme;

/// Table key for the onset glyph of vowel-initial syllables.
pub const PLACEHOLDER_KEY: &str = "silent";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GlyphConfig {
    glyphs: BTreeMap<String, String>,
    marks: MarksConfig,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MarksConfig {
    long: String,
}

/// A validated glyph table document.
#[derive(Debug, Clone)]
pub struct ParsedGlyphs {
    pub glyphs: BTreeMap<String, String>,
    pub long_mark: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GlyphTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("missing glyph for key: {0}")]
    MissingKey(String),
    #[error("unknown glyph key: {0}")]
    UnknownKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("glyph table already initialized")]
    AlreadyInitialized,
}

fn is_known_key(key: &str) -> bool {
    key == PLACEHOLDER_KEY || Grapheme::all().any(|g| g.key() == key)
}

/// Parse and validate a glyph table TOML document.
///
/// Every grapheme key plus `silent` must be present with a non-empty glyph,
/// and no other keys are accepted.
pub fn parse_glyph_toml(toml_str: &str) -> Result<ParsedGlyphs, GlyphTableError> {
    let config: GlyphConfig =
        toml::from_str(toml_str).map_err(|e| GlyphTableError::Parse(e.to_string()))?;

    for (key, value) in &config.glyphs {
        if !is_known_key(key) {
            return Err(GlyphTableError::UnknownKey(key.clone()));
        }
        if value.is_empty() {
            return Err(GlyphTableError::EmptyValue(key.clone()));
        }
    }

    let required = Grapheme::all()
        .map(Grapheme::key)
        .chain(std::iter::once(PLACEHOLDER_KEY));
    for key in required {
        if !config.glyphs.contains_key(key) {
            return Err(GlyphTableError::MissingKey(key.to_string()));
        }
    }

    if config.marks.long.is_empty() {
        return Err(GlyphTableError::EmptyValue("marks.long".to_string()));
    }

    Ok(ParsedGlyphs {
        glyphs: config.glyphs,
        long_mark: config.marks.long,
    })
}
