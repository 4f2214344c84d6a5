//! Input normalization: lowercase and macron decomposition.

use crate::grapheme::Vowel;

/// Marks a long vowel in normalized text. Always directly follows the
/// base vowel it lengthens.
pub const LONG_MARKER: char = '·';

const COMBINING_MACRON: char = '\u{0304}';

/// Base vowel of a precomposed lowercase macron vowel.
fn macron_base(c: char) -> Option<char> {
    match c {
        'ā' => Some('a'),
        'ē' => Some('e'),
        'ī' => Some('i'),
        'ō' => Some('o'),
        'ū' => Some('u'),
        _ => None,
    }
}

/// Lowercase `text` and rewrite every macron vowel as base vowel + `LONG_MARKER`.
///
/// A combining macron directly after a base vowel counts as a macron vowel.
/// All other characters pass through unchanged.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len() + 8);
    let mut after_base_vowel = false;

    for c in lowered.chars() {
        if let Some(base) = macron_base(c) {
            out.push(base);
            out.push(LONG_MARKER);
            after_base_vowel = false;
        } else if c == COMBINING_MACRON && after_base_vowel {
            out.push(LONG_MARKER);
            after_base_vowel = false;
        } else {
            out.push(c);
            after_base_vowel = Vowel::from_char(c).is_some();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        assert_eq!(normalize("KIA ORA"), "kia ora");
    }

    #[test]
    fn test_macrons() {
        assert_eq!(normalize("āēīōū"), "a·e·i·o·u·");
        assert_eq!(normalize("Mā te rā ka mōhio"), "ma· te ra· ka mo·hio");
    }

    #[test]
    fn test_uppercase_macron() {
        assert_eq!(normalize("Ā"), "a·");
        assert_eq!(normalize("MĀORI"), "ma·ori");
    }

    #[test]
    fn test_combining_macron() {
        assert_eq!(normalize("ma\u{304}"), "ma·");
        assert_eq!(normalize("MA\u{304}ORI"), "ma·ori");
    }

    #[test]
    fn test_stray_combining_macron_kept() {
        assert_eq!(normalize("k\u{304}"), "k\u{304}");
        assert_eq!(normalize("ā\u{304}"), "a·\u{304}");
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(normalize("kia ora, 123!"), "kia ora, 123!");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        for s in ["Mā te rā", "a\u{304}", "ā\u{304}", "Whānau", "x·y"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
