// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! The closed list of "small words" that title case may lowercase.

use super::scan::{eq_ignore_case, is_boundary, is_line_terminator};

/// Prepositions.
pub const PREPOSITIONS: &[&str] = &[
    "about",
    "above",
    "across",
    "after",
    "against",
    "along",
    "among",
    "around",
    "at",
    "before",
    "behind",
    "below",
    "beneath",
    "beside",
    "between",
    "beyond",
    "but",
    "by",
    "despite",
    "down",
    "during",
    "except",
    "for",
    "from",
    "in",
    "inside",
    "into",
    "like",
    "near",
    "of",
    "off",
    "on",
    "onto",
    "out",
    "outside",
    "over",
    "past",
    "per",
    "since",
    "through",
    "throughout",
    "till",
    "to",
    "toward",
    "under",
    "underneath",
    "until",
    "up",
    "upon",
    "via",
    "with",
    "within",
    "without",
];

/// Articles.
pub const ARTICLES: &[&str] = &["a", "an", "the"];

/// Coordinating conjunctions.
pub const CONJUNCTIONS: &[&str] = &["and", "but", "or", "nor", "for", "yet", "so"];

/// Other small tokens, including the two versus abbreviations.
pub const OTHER: &[SmallWord] = &[
    SmallWord::Word("if"),
    SmallWord::Word("en"),
    SmallWord::Word("as"),
    SmallWord::Versus,
    SmallWord::V,
];

/// One entry of the small-word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallWord {
    /// A plain word, matched case-insensitively.
    Word(&'static str),
    /// `vs` followed by any single character on the same line (`vs.`, but
    /// also `vsx`).
    Versus,
    /// `v` optionally followed by a period, the period tried first.
    V,
}

impl SmallWord {
    /// Candidate end positions for a match starting at `start`, in the order
    /// they are tried.
    pub(crate) fn ends(self, chars: &[char], start: usize) -> Vec<usize> {
        let rest = &chars[start.min(chars.len())..];
        match self {
            SmallWord::Word(word) => {
                let len = word.len();
                if rest.len() >= len && eq_ignore_case(&rest[..len], word) {
                    vec![start + len]
                } else {
                    Vec::new()
                }
            }
            SmallWord::Versus => {
                if rest.len() >= 3 && eq_ignore_case(&rest[..2], "vs") && !is_line_terminator(rest[2])
                {
                    vec![start + 3]
                } else {
                    Vec::new()
                }
            }
            SmallWord::V => {
                if rest.first().is_some_and(|c| c.eq_ignore_ascii_case(&'v')) {
                    if rest.get(1) == Some(&'.') {
                        vec![start + 2, start + 1]
                    } else {
                        vec![start + 1]
                    }
                } else {
                    Vec::new()
                }
            }
        }
    }
}

/// Iterate over every small word in matching order: prepositions, articles,
/// conjunctions, then the other tokens.
pub fn small_words() -> impl Iterator<Item = SmallWord> {
    PREPOSITIONS
        .iter()
        .chain(ARTICLES)
        .chain(CONJUNCTIONS)
        .map(|&word| SmallWord::Word(word))
        .chain(OTHER.iter().copied())
}

/// Find the small word starting at `start` whose end falls on a word
/// boundary.  Returns the end position of the first entry that fits.
///
/// The start itself is not checked; callers decide whether a boundary is
/// required there.
pub(crate) fn match_small_word(chars: &[char], start: usize) -> Option<usize> {
    small_words()
        .flat_map(|word| word.ends(chars, start))
        .find(|&end| is_boundary(chars, end))
}

/// Check if the whole of `word` is a small word.
///
/// # Examples
///
/// ```
/// use titlecaps::is_small_word;
///
/// assert!(is_small_word("The"));
/// assert!(is_small_word("v."));
/// assert!(!is_small_word("cat"));
/// ```
pub fn is_small_word(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    small_words().any(|small| small.ends(&chars, 0).contains(&chars.len()))
}
