//! End-to-end transliteration scenarios.

use super::vowel;
use crate::{translate, translate_with, Consonant, GlyphTable, Vowel};

fn onset(c: Consonant) -> &'static str {
    GlyphTable::global().lookup(c.key()).unwrap()
}

#[test]
fn empty_input() {
    assert_eq!(translate("").unwrap(), "");
}

#[test]
fn no_recognized_syllables() {
    assert_eq!(translate("123 !?, xyz").unwrap(), "");
    assert_eq!(translate("   ").unwrap(), "");
    assert_eq!(translate("ng").unwrap(), "");
}

#[test]
fn every_consonant_short_vowel_pair() {
    for c in Consonant::ALL {
        for v in Vowel::ALL {
            let input = format!("{}{}", c.key(), v.key());
            let out = translate(&input).unwrap();
            match v {
                Vowel::A | Vowel::E | Vowel::I => {
                    let expected = format!("({}{})", onset(c), vowel(v));
                    assert_eq!(out, expected, "input={input}");
                    assert!(!out.contains('\n'));
                }
                Vowel::O | Vowel::U => {
                    let expected = format!("(\n{}\n{}\n)", onset(c), vowel(v));
                    assert_eq!(out, expected, "input={input}");
                    assert_eq!(out.lines().count(), 4);
                }
            }
        }
    }
}

#[test]
fn long_vowel_appends_mark_once() {
    let short = translate("ma").unwrap();
    let long = translate("mā").unwrap();
    assert_eq!(short, "(ㅁ\u{307}ㅏ)");
    assert_eq!(long, "(ㅁ\u{307}ㅏ·)");
    assert_eq!(long.matches('·').count(), 1);
}

#[test]
fn uppercase_macron() {
    assert_eq!(translate("MĀ").unwrap(), translate("mā").unwrap());
}

#[test]
fn diphthong_tau_side_by_side() {
    let out = translate("tau").unwrap();
    assert_eq!(out, format!("(ㄴ{}{})", vowel(Vowel::A), vowel(Vowel::U)));
}

#[test]
fn aotearoa() {
    assert_eq!(translate("Aotearoa").unwrap(), "(ㅇㅏㅗ) (ㄴㅓㅏ) (\nㄹ\nㅗㅏ\n)");
}

#[test]
fn maximal_munch_nga() {
    assert_eq!(translate("nga").unwrap(), "(ㄱ\u{307}ㅏ)");
    assert_eq!(translate("whānau").unwrap(), "(ㅍㅏ·) (ㄴ\u{307}ㅏㅡ)");
}

#[test]
fn sentence_six_blocks() {
    let out = translate("Mā te rā ka mōhio").unwrap();
    assert_eq!(
        out,
        "(ㅁ\u{307}ㅏ·) (ㄴㅓ) (ㄹㅏ·) (ㄱㅏ) (\nㅁ\u{307}\nㅗ·\n) (ㅎㅣㅗ)"
    );
    assert!(!out.ends_with(' '));
}

#[test]
fn demo_sample() {
    let out = translate("Aotearoa, tau, wai, koe, rua").unwrap();
    assert_eq!(
        out,
        "(ㅇㅏㅗ) (ㄴㅓㅏ) (\nㄹ\nㅗㅏ\n) (ㄴㅏㅡ) (ㅁㅏㅣ) (\nㄱ\nㅗㅓ\n) (\nㄹ\nㅡㅏ\n)"
    );
}

#[test]
fn punctuation_dropped() {
    assert_eq!(translate("...kia!").unwrap(), translate("kia").unwrap());
}

#[test]
fn custom_table() {
    let toml = crate::glyph::default_toml()
        .replace("k = \"ㄱ\"", "k = \"K\"")
        .replace("long = \"·\"", "long = \":\"");
    let table = GlyphTable::from_toml(&toml).unwrap();
    assert_eq!(translate_with(&table, "kā").unwrap(), "(Kㅏ:)");
}
