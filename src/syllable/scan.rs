use std::ops::Range;

use tracing::debug;

use super::trie::GraphemeTrie;
use crate::grapheme::{Consonant, Grapheme, Vowel};
use crate::normalize::LONG_MARKER;

/// One matched `(C?)(V)(L?)(V2?)(L2?)` unit of normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// Byte range in the normalized text.
    pub span: Range<usize>,
    pub consonant: Option<Consonant>,
    pub vowel1: Vowel,
    pub long1: bool,
    pub vowel2: Option<Vowel>,
    /// Always false when `vowel2` is `None`.
    pub long2: bool,
}

/// Left-to-right, non-overlapping syllable scanner over normalized text.
///
/// Characters that cannot start a syllable are skipped one at a time and
/// never reported.
pub struct Syllables<'a> {
    text: &'a str,
    pos: usize,
    trie: &'static GraphemeTrie,
}

/// Scan `normalized` (the output of [`crate::normalize()`]) for syllables.
pub fn syllables(normalized: &str) -> Syllables<'_> {
    Syllables {
        text: normalized,
        pos: 0,
        trie: GraphemeTrie::global(),
    }
}

impl Syllables<'_> {
    fn vowel_at(&self, pos: usize) -> Option<(Vowel, usize)> {
        match self.trie.longest_match(&self.text[pos..]) {
            Some((Grapheme::Vowel(v), len)) => Some((v, pos + len)),
            _ => None,
        }
    }

    fn marker_at(&self, pos: usize) -> Option<usize> {
        self.text[pos..]
            .starts_with(LONG_MARKER)
            .then(|| pos + LONG_MARKER.len_utf8())
    }

    /// Vowel plus optional long marker; returns the vowel, its length flag
    /// and the position after it.
    fn nucleus_at(&self, pos: usize) -> Option<(Vowel, bool, usize)> {
        let (vowel, end) = self.vowel_at(pos)?;
        match self.marker_at(end) {
            Some(end) => Some((vowel, true, end)),
            None => Some((vowel, false, end)),
        }
    }

    fn match_at(&self, start: usize) -> Option<Syllable> {
        let (consonant, cursor) = match self.trie.longest_match(&self.text[start..]) {
            Some((Grapheme::Consonant(c), len)) => (Some(c), start + len),
            _ => (None, start),
        };

        let (vowel1, long1, cursor) = self.nucleus_at(cursor)?;
        let (vowel2, long2, end) = match self.nucleus_at(cursor) {
            Some((v, long, end)) => (Some(v), long, end),
            None => (None, false, cursor),
        };

        Some(Syllable {
            span: start..end,
            consonant,
            vowel1,
            long1,
            vowel2,
            long2,
        })
    }
}

impl Iterator for Syllables<'_> {
    type Item = Syllable;

    fn next(&mut self) -> Option<Syllable> {
        while let Some(skipped) = self.text[self.pos..].chars().next() {
            if let Some(syllable) = self.match_at(self.pos) {
                self.pos = syllable.span.end;
                return Some(syllable);
            }
            debug!(pos = self.pos, ch = %skipped, "no syllable at position");
            self.pos += skipped.len_utf8();
        }
        None
    }
}
