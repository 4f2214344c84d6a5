//! Māori graphemes recognized by the syllable scanner.
//!
//! Each grapheme has a stable lowercase key (`"ng"`, `"a"`, ...) that is
//! shared by the glyph table and the grapheme trie.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consonant {
    Ng,
    Wh,
    M,
    P,
    N,
    T,
    R,
    K,
    H,
    W,
}

impl Consonant {
    pub const ALL: [Consonant; 10] = [
        Consonant::Ng,
        Consonant::Wh,
        Consonant::M,
        Consonant::P,
        Consonant::N,
        Consonant::T,
        Consonant::R,
        Consonant::K,
        Consonant::H,
        Consonant::W,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Consonant::Ng => "ng",
            Consonant::Wh => "wh",
            Consonant::M => "m",
            Consonant::P => "p",
            Consonant::N => "n",
            Consonant::T => "t",
            Consonant::R => "r",
            Consonant::K => "k",
            Consonant::H => "h",
            Consonant::W => "w",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    E,
    I,
    O,
    U,
}

impl Vowel {
    pub const ALL: [Vowel; 5] = [Vowel::A, Vowel::E, Vowel::I, Vowel::O, Vowel::U];

    pub fn key(self) -> &'static str {
        match self {
            Vowel::A => "a",
            Vowel::E => "e",
            Vowel::I => "i",
            Vowel::O => "o",
            Vowel::U => "u",
        }
    }

    /// Map a lowercase base vowel character to its `Vowel`.
    pub fn from_char(c: char) -> Option<Vowel> {
        match c {
            'a' => Some(Vowel::A),
            'e' => Some(Vowel::E),
            'i' => Some(Vowel::I),
            'o' => Some(Vowel::O),
            'u' => Some(Vowel::U),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Vowel::A => 'a',
            Vowel::E => 'e',
            Vowel::I => 'i',
            Vowel::O => 'o',
            Vowel::U => 'u',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grapheme {
    Consonant(Consonant),
    Vowel(Vowel),
}

impl Grapheme {
    pub fn key(self) -> &'static str {
        match self {
            Grapheme::Consonant(c) => c.key(),
            Grapheme::Vowel(v) => v.key(),
        }
    }

    /// Every grapheme, consonants first.
    pub fn all() -> impl Iterator<Item = Grapheme> {
        Consonant::ALL
            .into_iter()
            .map(Grapheme::Consonant)
            .chain(Vowel::ALL.into_iter().map(Grapheme::Vowel))
    }
}
