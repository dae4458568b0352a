// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Per-clause casing passes.
//!
//! The passes run in a fixed order and each one sees the output of the
//! previous one; later passes deliberately override earlier decisions.

use super::scan::{capitalize_first, collect, is_boundary, is_punct, is_word_char};
use super::words::{match_small_word, small_words};
use crate::Style;

/// Apply every per-clause pass to a single clause.
pub(crate) fn case_clause(clause: &str, style: Style) -> String {
    let cased = capitalize_words(clause);
    let cased = capitalize_non_ascii_words(&cased);
    let cased = case_small_words(&cased, style);
    let cased = capitalize_leading_small_word(&cased);
    let cased = capitalize_trailing_small_word(&cased);
    log::trace!("clause {:?} -> {:?}", clause, cased);
    cased
}

/// Characters that may continue a plain word after its first letter.
fn is_word_tail(ch: char) -> bool {
    ch.is_ascii_lowercase() || matches!(ch, '.' | '\'' | '"')
}

/// Find the end of a plain word starting at `start`: an ASCII letter followed
/// by lowercase letters, periods and quotes, ending on a word boundary.
///
/// The longest run that ends on a boundary wins.
fn plain_word_end(chars: &[char], start: usize) -> Option<usize> {
    if !chars[start].is_ascii_alphabetic() || !is_boundary(chars, start) {
        return None;
    }
    let mut end = start + 1;
    while end < chars.len() && is_word_tail(chars[end]) {
        end += 1;
    }
    (start + 1..=end).rev().find(|&pos| is_boundary(chars, pos))
}

/// Check for a letter, period, letter sequence such as in `i.e` or `a.b`.
fn has_inner_abbreviation(word: &[char]) -> bool {
    word.windows(3).any(|w| {
        w[0].is_ascii_alphabetic() && w[1] == '.' && w[2].is_ascii_alphabetic()
    })
}

/// Capitalize every plain word, leaving abbreviations like `a.b` alone.
///
/// Words with inner capitals (`iPhone`, `HTML`) never match a plain word and
/// keep their casing.
pub(crate) fn capitalize_words(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match plain_word_end(&chars, i) {
            Some(end) => {
                let word = &chars[i..end];
                if has_inner_abbreviation(word) {
                    result.push_str(&collect(word));
                } else {
                    result.push_str(&capitalize_first(&collect(word)));
                }
                i = end;
            }
            None => {
                result.push(chars[i]);
                i += 1;
            }
        }
    }

    result
}

/// Find the end of a word that contains non-ASCII characters: ASCII letters,
/// one or more non-ASCII characters, then ASCII letters, bounded by word
/// boundaries on both sides.
fn non_ascii_word_end(chars: &[char], start: usize) -> Option<usize> {
    if !is_boundary(chars, start) {
        return None;
    }
    let mut pos = start;
    while pos < chars.len() && chars[pos].is_ascii_alphabetic() {
        pos += 1;
    }
    let non_ascii_start = pos;
    while pos < chars.len() && !chars[pos].is_ascii() {
        pos += 1;
    }
    if pos == non_ascii_start {
        return None;
    }
    while pos < chars.len() && chars[pos].is_ascii_alphabetic() {
        pos += 1;
    }
    (non_ascii_start + 1..=pos)
        .rev()
        .find(|&end| is_boundary(chars, end))
}

/// Capitalize words containing non-ASCII characters as a whole, so that
/// `NaïVe` (split by the plain-word pass) becomes `Naïve`.
pub(crate) fn capitalize_non_ascii_words(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match non_ascii_word_end(&chars, i) {
            Some(end) => {
                result.push_str(&capitalize_first(&collect(&chars[i..end])));
                i = end;
            }
            None => {
                result.push(chars[i]);
                i += 1;
            }
        }
    }

    result
}

/// Case a small word according to the style's length threshold.
fn case_by_style(word: &str, style: Style) -> String {
    match style.small_word_threshold() {
        Some(threshold) if word.chars().count() >= threshold => capitalize_first(word),
        _ => word.to_lowercase(),
    }
}

/// Lowercase (or, for long enough words under the AP styles, capitalize)
/// every small word that stands on its own.
pub(crate) fn case_small_words(text: &str, style: Style) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let matched = if is_boundary(&chars, i) {
            match_small_word(&chars, i)
        } else {
            None
        };
        match matched {
            Some(end) => {
                result.push_str(&case_by_style(&collect(&chars[i..end]), style));
                i = end;
            }
            None => {
                result.push(chars[i]);
                i += 1;
            }
        }
    }

    result
}

/// Capitalize a small word that opens the clause, possibly after leading
/// punctuation such as `(` or `"`.
pub(crate) fn capitalize_leading_small_word(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let start = chars.iter().take_while(|&&c| is_punct(c)).count();

    match match_small_word(&chars, start) {
        Some(end) => {
            let mut result = collect(&chars[..start]);
            result.push_str(&capitalize_first(&collect(&chars[start..end])));
            result.push_str(&collect(&chars[end..]));
            result
        }
        None => text.to_string(),
    }
}

/// Capitalize a small word that closes the clause, possibly before trailing
/// punctuation such as `?` or `)`.
///
/// No boundary is required after the word, so `to_` counts as `to` followed
/// by punctuation.
pub(crate) fn capitalize_trailing_small_word(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();

    for start in 0..chars.len() {
        if !is_boundary(&chars, start) || !is_word_char(chars[start]) {
            continue;
        }
        let closes_clause = small_words()
            .flat_map(|word| word.ends(&chars, start))
            .any(|end| chars[end..].iter().all(|&c| is_punct(c)));
        if closes_clause {
            let mut result = collect(&chars[..start]);
            result.push_str(&capitalize_first(&collect(&chars[start..])));
            return result;
        }
    }

    text.to_string()
}
