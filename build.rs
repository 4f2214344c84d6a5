fn main() {
    // Validate the embedded glyph table at compile time.
    validate_toml(
        "src/glyph/default_glyphs.toml",
        include_str!("src/glyph/default_glyphs.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
