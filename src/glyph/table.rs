use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_glyph_toml, GlyphTableError, PLACEHOLDER_KEY};
use crate::grapheme::Grapheme;

pub(super) const DEFAULT_TOML: &str = include_str!("default_glyphs.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<GlyphTable> = OnceLock::new();

/// Returns the embedded default glyph table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// A grapheme had no glyph. The scanner only produces graphemes the table
/// is validated to contain, so this signals an internal inconsistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("internal inconsistency: no glyph for grapheme {0:?}")]
    MissingGlyph(String),
}

#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: BTreeMap<String, String>,
    long_mark: String,
}

impl GlyphTable {
    /// Set custom TOML before first `global()` call.
    ///
    /// Fails with `AlreadyInitialized` once the global table has been built.
    pub fn init_custom(toml_content: String) -> Result<(), GlyphTableError> {
        // Validate eagerly
        parse_glyph_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(GlyphTableError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| GlyphTableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static GlyphTable {
        INSTANCE.get_or_init(|| {
            let custom = CUSTOM_TOML.get();
            debug!(custom = custom.is_some(), "initializing glyph table");
            let toml_str = custom.map(|s| s.as_str()).unwrap_or(DEFAULT_TOML);
            GlyphTable::from_toml(toml_str).expect("glyph table TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, GlyphTableError> {
        let parsed = parse_glyph_toml(toml_str)?;
        Ok(GlyphTable {
            glyphs: parsed.glyphs,
            long_mark: parsed.long_mark,
        })
    }

    pub fn lookup(&self, key: &str) -> Result<&str, LookupError> {
        self.glyphs
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| LookupError::MissingGlyph(key.to_string()))
    }

    /// Onset glyph for syllables with no consonant.
    pub fn placeholder(&self) -> Result<&str, LookupError> {
        self.lookup(PLACEHOLDER_KEY)
    }

    /// Suffix appended to a vowel glyph when the vowel is long.
    pub fn long_mark(&self) -> &str {
        &self.long_mark
    }

    /// All entries in display order: consonants, vowels, then the placeholder.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        Grapheme::all()
            .map(Grapheme::key)
            .chain(std::iter::once(PLACEHOLDER_KEY))
            .filter_map(|key| self.glyphs.get(key).map(|g| (key, g.as_str())))
            .collect()
    }
}
