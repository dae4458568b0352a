// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Title case conversion.
//!
//! A title is split into clauses ([`Segmenter`]), each clause goes through
//! the casing passes in `rules`, the clauses are joined back with their
//! original separators, and a few corrections for known exceptions run over
//! the whole title.

mod clause;
mod postprocess;
mod rules;
mod scan;
mod words;


pub use clause::{Segment, Segmenter, Segments};
pub use words::{ARTICLES, CONJUNCTIONS, OTHER, PREPOSITIONS, SmallWord, is_small_word, small_words};

use crate::Style;

/// Convert `text` to title case in the given style.
///
/// This is a pure function.  [`Style::Literal`] has nothing to remember here,
/// so it returns `text` unchanged; use [`TitleCaser`] or [`transform`] for
/// the remembering behavior.
///
/// # Examples
///
/// ```
/// use titlecaps::{title_case, Style};
///
/// assert_eq!(title_case("a tale of two cities", Style::ChicagoManual), "A Tale of Two Cities");
/// assert_eq!(title_case("life with father", Style::AssociatedPress4), "Life With Father");
/// ```
pub fn title_case(text: &str, style: Style) -> String {
    if style == Style::Literal {
        return text.to_string();
    }

    let mut title = String::with_capacity(text.len());
    for segment in Segmenter::new(text) {
        title.push_str(&rules::case_clause(segment.clause, style));
        title.push_str(segment.separator);
    }
    postprocess::apply(&title)
}

/// Convert `text` to title case, consulting an explicitly owned memo of the
/// first text ever submitted.
///
/// The memo is filled with `text` when it is empty, whatever the style.  In
/// [`Style::Literal`] the memo is returned instead of the converted text.
///
/// # Examples
///
/// ```
/// use titlecaps::{transform, Style};
///
/// let mut original = None;
/// assert_eq!(transform("first draft", Style::ChicagoManual, &mut original), "First Draft");
/// assert_eq!(transform("second draft", Style::Literal, &mut original), "first draft");
/// ```
pub fn transform(text: &str, style: Style, original: &mut Option<String>) -> String {
    if original.as_deref().is_none_or(str::is_empty) {
        log::debug!("remembering original text {:?}", text);
        *original = Some(text.to_string());
    }

    match (style, original.as_deref()) {
        (Style::Literal, Some(first)) => first.to_string(),
        _ => title_case(text, style),
    }
}

/// A title caser with a selected style and a memo of the first text it saw.
///
/// The memo is the only state that survives between calls and backs
/// [`Style::Literal`]: once any text has been transformed, Literal returns
/// that first text no matter what is passed in later.  Changing the style
/// does not clear it; call [`TitleCaser::clear_original`] for that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleCaser {
    style: Style,
    original: Option<String>,
}

impl TitleCaser {
    /// Create a caser using `style`.
    pub fn new(style: Style) -> Self {
        Self {
            style,
            original: None,
        }
    }

    /// Convert `text` in the current style.
    pub fn transform(&mut self, text: &str) -> String {
        transform(text, self.style, &mut self.original)
    }

    /// The current style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Switch to another style.  The memo is kept.
    pub fn set_style(&mut self, style: Style) {
        log::debug!("style {} -> {}", self.style, style);
        self.style = style;
    }

    /// The first text this caser saw, if any.
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    /// Forget the remembered first text.
    pub fn clear_original(&mut self) {
        self.original = None;
    }
}
