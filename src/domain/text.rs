//! Word-capitalisation helpers for cosmetic formatting of carrier labels.
//!
//! The carrier reports city names, country names and postal categories in
//! inconsistent casing; display strings are normalised to one word-capitalised
//! form. Purely cosmetic, so these helpers stay crate-private.

/// Capitalise every space-separated word: first character upper-cased, the
/// remainder lower-cased. Original spacing is preserved.
pub(crate) fn capitalize_words(value: &str) -> String {
    value
        .split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
