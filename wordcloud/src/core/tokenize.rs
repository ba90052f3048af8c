// src/core/tokenize.rs

/// Splits raw text into normalized word tokens.
///
/// Words are delimited by single or repeated whitespace. Each candidate is
/// lowercased and ASCII punctuation is stripped from anywhere in it
/// (`"don't"` becomes `"dont"`); whatever remains must be purely alphabetic
/// or the whole token is dropped. Tokenizing the same input twice yields
/// the same sequence.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().filter_map(normalize).collect()
}

fn normalize(raw: &str) -> Option<String> {
    let word: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }

    Some(word)
}
