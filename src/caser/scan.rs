// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Character-level helpers shared by the casing passes.
//!
//! Every pass works on a `Vec<char>` of its input and uses the ASCII notion
//! of a word: letters, digits and the underscore.  Accented letters and other
//! non-ASCII characters therefore sit *between* words as far as boundaries
//! are concerned, which is what the non-ASCII pass relies on.

/// Check if a character counts as a word character for boundary detection.
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Check if there is a word boundary right before `chars[pos]`.
///
/// `pos` may equal `chars.len()`, meaning the end of the text.
pub(crate) fn is_boundary(chars: &[char], pos: usize) -> bool {
    let before = pos > 0 && chars.get(pos - 1).is_some_and(|&c| is_word_char(c));
    let after = chars.get(pos).is_some_and(|&c| is_word_char(c));
    before != after
}

/// Check if a character is ASCII punctuation (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
pub(crate) fn is_punct(ch: char) -> bool {
    ch.is_ascii_punctuation()
}

/// Check if a character terminates a line, which `.` in a word pattern never
/// matches.
pub(crate) fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Capitalize the first letter of a word and lowercase the rest.
pub(crate) fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result = first.to_uppercase().to_string();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
    }
}

/// Collect a slice of characters back into a string.
pub(crate) fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Compare a slice of characters with an ASCII pattern, ignoring ASCII case.
pub(crate) fn eq_ignore_case(chars: &[char], pattern: &str) -> bool {
    chars.len() == pattern.len()
        && chars
            .iter()
            .zip(pattern.chars())
            .all(|(a, b)| a.eq_ignore_ascii_case(&b))
}
