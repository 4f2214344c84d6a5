//! Syllable scanning.
//!
//! A single left-to-right pass over normalized text, matching
//! `(C?)(V)(L?)(V2?)(L2?)` greedily with maximal-munch consonants.

mod scan;
mod trie;

pub use scan::{syllables, Syllable, Syllables};
pub use trie::GraphemeTrie;
