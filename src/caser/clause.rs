// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Clause segmentation.
//!
//! A title is cased clause by clause.  A clause ends at one of `: `, `. `,
//! `; `, `? `, `! `, or right before an opening quotation mark that follows a
//! space or starts the title.  The separator text (including the space and
//! the quotation mark) is kept verbatim so the title can be rebuilt exactly.

/// Punctuation that ends a clause when followed by a space.
const CLAUSE_PUNCTUATION: &[char] = &[':', '.', ';', '?', '!'];

/// Quotation marks that open a new clause.
const OPENING_QUOTES: &[char] = &['"', '\u{201C}'];

/// A clause together with the separator that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The clause text, to be cased.
    pub clause: &'a str,
    /// The separator after the clause; empty for the last segment.
    pub separator: &'a str,
}

/// Splits a title into [`Segment`]s.
///
/// The segmenter itself holds no scanning state, so [`Segmenter::segments`]
/// can be called any number of times.
///
/// # Examples
///
/// ```
/// use titlecaps::Segmenter;
///
/// let segmenter = Segmenter::new("star wars: a new hope");
/// let clauses: Vec<&str> = segmenter.segments().map(|s| s.clause).collect();
/// assert_eq!(clauses, ["star wars", "a new hope"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    text: &'a str,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter over `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Iterate over the segments of the title.
    pub fn segments(&self) -> Segments<'a> {
        Segments {
            text: self.text,
            pos: 0,
            done: false,
        }
    }
}

impl<'a> IntoIterator for Segmenter<'a> {
    type Item = Segment<'a>;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}

/// Lazy iterator over the segments of a title.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Segments<'a> {
    /// Find the next separator at or after `self.pos`, as a byte range.
    fn find_separator(&self) -> Option<(usize, usize)> {
        let mut chars = self.text[self.pos..].char_indices().peekable();
        while let Some((offset, ch)) = chars.next() {
            let start = self.pos + offset;
            let next = chars.peek().map(|&(_, c)| c);

            if CLAUSE_PUNCTUATION.contains(&ch) && next == Some(' ') {
                return Some((start, start + ch.len_utf8() + 1));
            }
            if ch == ' '
                && let Some(quote) = next.filter(|c| OPENING_QUOTES.contains(c))
            {
                return Some((start, start + 1 + quote.len_utf8()));
            }
            if start == 0 && OPENING_QUOTES.contains(&ch) {
                return Some((0, ch.len_utf8()));
            }
        }
        None
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.find_separator() {
            Some((start, end)) => {
                let segment = Segment {
                    clause: &self.text[self.pos..start],
                    separator: &self.text[start..end],
                };
                self.pos = end;
                Some(segment)
            }
            None => {
                self.done = true;
                Some(Segment {
                    clause: &self.text[self.pos..],
                    separator: "",
                })
            }
        }
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<(&str, &str)> {
        Segmenter::new(text)
            .segments()
            .map(|s| (s.clause, s.separator))
            .collect()
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(split("hello world"), vec![("hello world", "")]);
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(split(""), vec![("", "")]);
    }

    #[test]
    fn test_all_punctuation_separators() {
        assert_eq!(
            split("a: b. c; d? e! f"),
            vec![
                ("a", ": "),
                ("b", ". "),
                ("c", "; "),
                ("d", "? "),
                ("e", "! "),
                ("f", ""),
            ]
        );
    }

    #[test]
    fn test_punctuation_without_space_does_not_split() {
        assert_eq!(split("e.g. this"), vec![("e.g", ". "), ("this", "")]);
        assert_eq!(split("end."), vec![("end.", "")]);
        assert_eq!(split("3:15 train"), vec![("3:15 train", "")]);
    }

    #[test]
    fn test_quote_after_space() {
        assert_eq!(
            split("he said \"the end\""),
            vec![("he said", " \""), ("the end\"", "")]
        );
    }

    #[test]
    fn test_quote_at_start() {
        assert_eq!(split("\"quoted\" title"), vec![("", "\""), ("quoted\" title", "")]);
    }

    #[test]
    fn test_curly_opening_quote() {
        assert_eq!(
            split("a \u{201C}b\u{201D}"),
            vec![("a", " \u{201C}"), ("b\u{201D}", "")]
        );
    }

    #[test]
    fn test_colon_before_quote_is_one_separator() {
        // The space is consumed by ": ", so the quote does not split again.
        assert_eq!(
            split("note: \"the end\""),
            vec![("note", ": "), ("\"the end\"", "")]
        );
    }

    #[test]
    fn test_segments_rebuild_input() {
        let text = "one: two. \"three\" four? five! ";
        let rebuilt: String = Segmenter::new(text)
            .segments()
            .map(|s| format!("{}{}", s.clause, s.separator))
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_segments_restartable() {
        let segmenter = Segmenter::new("a. b");
        let first: Vec<_> = segmenter.segments().collect();
        let second: Vec<_> = segmenter.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_trailing_separator_leaves_empty_clause() {
        assert_eq!(split("wait! "), vec![("wait", "! "), ("", "")]);
    }
}
