//! Per-syllable breakdown of a transliteration.
//!
//! Used by `maorihanga explain` to show how input text was normalized,
//! where syllable boundaries fell, and which glyphs each block received.

use serde::Serialize;

use crate::block::{render_block, Layout};
use crate::glyph::{GlyphTable, LookupError};
use crate::normalize::normalize;
use crate::syllable::syllables;

/// One matched syllable with its rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainSyllable {
    /// Byte offsets into the normalized text.
    pub start: usize,
    pub end: usize,
    pub source: String,
    pub consonant: Option<&'static str>,
    pub vowel1: &'static str,
    pub long1: bool,
    pub vowel2: Option<&'static str>,
    pub long2: bool,
    pub layout: Layout,
    pub onset: String,
    pub nucleus: String,
    pub block: String,
}

impl ExplainSyllable {
    /// Grapheme keys joined with `+`, long vowels marked with `·`.
    pub fn keys(&self) -> String {
        let mut out = String::new();
        if let Some(c) = self.consonant {
            out.push_str(c);
            out.push('+');
        }
        out.push_str(self.vowel1);
        if self.long1 {
            out.push('·');
        }
        if let Some(v2) = self.vowel2 {
            out.push('+');
            out.push_str(v2);
            if self.long2 {
                out.push('·');
            }
        }
        out
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub input: String,
    pub normalized: String,
    pub syllables: Vec<ExplainSyllable>,
    /// Characters of the normalized text outside every syllable.
    pub unmatched_chars: usize,
    pub output: String,
}

pub fn explain(table: &GlyphTable, text: &str) -> Result<Explanation, LookupError> {
    let normalized = normalize(text);
    let mut explained = Vec::new();
    let mut matched_chars = 0;

    for s in syllables(&normalized) {
        let block = render_block(table, &s)?;
        let source = normalized[s.span.clone()].to_string();
        matched_chars += source.chars().count();
        explained.push(ExplainSyllable {
            start: s.span.start,
            end: s.span.end,
            source,
            consonant: s.consonant.map(|c| c.key()),
            vowel1: s.vowel1.key(),
            long1: s.long1,
            vowel2: s.vowel2.map(|v| v.key()),
            long2: s.long2,
            layout: block.layout,
            block: block.to_string(),
            onset: block.onset,
            nucleus: block.nucleus,
        });
    }

    let output = explained
        .iter()
        .map(|s| s.block.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(Explanation {
        input: text.to_string(),
        unmatched_chars: normalized.chars().count() - matched_chars,
        normalized,
        syllables: explained,
        output,
    })
}

fn pad(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    let display_width = UnicodeWidthStr::width(s);
    if display_width < width {
        format!("{}{}", s, " ".repeat(width - display_width))
    } else {
        s.to_string()
    }
}

/// Format an Explanation as human-readable text.
pub fn format_text(explanation: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== \"{}\" -> \"{}\" ({} syllables, {} unmatched chars) ===\n",
        explanation.input,
        explanation.normalized,
        explanation.syllables.len(),
        explanation.unmatched_chars,
    ));

    if explanation.syllables.is_empty() {
        out.push_str("\nNo syllables found.\n");
        return out;
    }

    for (i, s) in explanation.syllables.iter().enumerate() {
        let layout = match s.layout {
            Layout::Stacked => "stacked",
            Layout::SideBySide => "side-by-side",
        };
        out.push_str(&format!(
            "  #{:<2} [{},{}] {} {} {} onset={} nucleus={}\n",
            i + 1,
            s.start,
            s.end,
            pad(&s.source, 6),
            pad(&s.keys(), 10),
            pad(layout, 12),
            pad(&s.onset, 4),
            s.nucleus,
        ));
    }

    out.push_str("\n=== Output ===\n");
    out.push_str(&explanation.output);
    out.push('\n');
    out
}
