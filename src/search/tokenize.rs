//! Tokenization and stemming
//!
//! Splits text into lowercase alphabetic tokens and trims a fixed list of
//! English and Russian suffixes. The stemmer is deliberately crude: one
//! ordered suffix list, first match wins, short words left alone.

/// Suffixes stripped during stemming, checked in order
const ENDINGS: [&str; 29] = [
    "ing", "ed", "es", "ly", "s", "ться", "ами", "ями", "ого", "его", "ому",
    "ему", "ыми", "ими", "ие", "ые", "ов", "ев", "ий", "ия", "ью", "ом",
    "ем", "а", "у", "е", "и", "ы", "й",
];

/// Splits text into lowercase tokens
///
/// A token is a maximal run of alphabetic characters; every other
/// character acts as a separator. Case folding is per-character, so
/// non-ASCII letters fold correctly.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_alphabetic() {
            for lower in ch.to_lowercase() {
                current.push(lower);
            }
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Reduces a word to its stem
///
/// Words of three characters or fewer pass through unchanged. Otherwise
/// the first suffix from the list that matches and leaves a stem of at
/// least three characters is stripped. Lengths are counted in characters,
/// not bytes, so Cyrillic suffixes behave the same as ASCII ones.
pub fn stem(word: &str) -> String {
    let word_len = word.chars().count();
    if word_len <= 3 {
        return word.to_string();
    }

    for ending in ENDINGS {
        let ending_len = ending.chars().count();
        if word_len > ending_len + 2 && word.ends_with(ending) {
            return word.chars().take(word_len - ending_len).collect();
        }
    }

    word.to_string()
}
