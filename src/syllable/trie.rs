use std::collections::HashMap;
use std::sync::OnceLock;

use crate::grapheme::Grapheme;

struct Node {
    children: HashMap<char, Node>,
    grapheme: Option<Grapheme>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            grapheme: None,
        }
    }
}

/// Character trie over grapheme keys, used for maximal-munch matching.
pub struct GraphemeTrie {
    root: Node,
}

impl GraphemeTrie {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static GraphemeTrie {
        static INSTANCE: OnceLock<GraphemeTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut trie = GraphemeTrie { root: Node::new() };
            for g in Grapheme::all() {
                trie.insert(g.key(), g);
            }
            trie
        })
    }

    /// Longest grapheme at the start of `text`, with its length in bytes.
    pub fn longest_match(&self, text: &str) -> Option<(Grapheme, usize)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in text.char_indices() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(g) = node.grapheme {
                best = Some((g, i + c.len_utf8()));
            }
        }
        best
    }

    fn insert(&mut self, key: &str, grapheme: Grapheme) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        node.grapheme = Some(grapheme);
    }
}
