// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Corrections applied to the reassembled title.

use super::scan::{collect, eq_ignore_case, is_boundary};

/// Abbreviations that are always written in capitals.
const UPPERCASE_EXCEPTIONS: &[&str] = &["AT&T", "Q&A"];

/// Apply every correction in order.
pub(crate) fn apply(title: &str) -> String {
    let title = lowercase_versus(title);
    let title = lowercase_possessives(&title);
    uppercase_exceptions(&title)
}

/// Rewrite ` V. ` and ` Vs. ` as ` v. ` and ` vs. `.
///
/// Only the `v` is lowered; the `s` keeps whatever case it has.  The trailing
/// space belongs to the match, so `" v. v. "` only rewrites the first one.
pub(crate) fn lowercase_versus(title: &str) -> String {
    let chars: Vec<char> = title.chars().collect();
    let mut result = String::with_capacity(title.len());
    let mut i = 0;

    while i < chars.len() {
        let rest = &chars[i..];
        let is_v = rest.len() >= 4 && rest[0] == ' ' && rest[1].eq_ignore_ascii_case(&'v');
        let s = rest.get(2).copied().filter(|c| c.eq_ignore_ascii_case(&'s'));

        if is_v && s.is_some() && rest.get(3) == Some(&'.') && rest.get(4) == Some(&' ') {
            result.push_str(" v");
            result.extend(s);
            result.push_str(". ");
            i += 5;
        } else if is_v && rest[2] == '.' && rest[3] == ' ' {
            result.push_str(" v. ");
            i += 4;
        } else {
            result.push(chars[i]);
            i += 1;
        }
    }

    result
}

/// Lower an `S` that directly follows a quote and ends a word (`Cat'S` ->
/// `Cat's`).
pub(crate) fn lowercase_possessives(title: &str) -> String {
    let chars: Vec<char> = title.chars().collect();
    let mut result = String::with_capacity(title.len());
    let mut i = 0;

    while i < chars.len() {
        let quote = chars[i];
        if matches!(quote, '\'' | '"')
            && chars.get(i + 1).is_some_and(|c| c.eq_ignore_ascii_case(&'s'))
            && is_boundary(&chars, i + 2)
        {
            result.push(quote);
            result.push('s');
            i += 2;
        } else {
            result.push(quote);
            i += 1;
        }
    }

    result
}

/// Uppercase `AT&T` and `Q&A` whatever case they arrive in.
pub(crate) fn uppercase_exceptions(title: &str) -> String {
    let chars: Vec<char> = title.chars().collect();
    let mut result = String::with_capacity(title.len());
    let mut i = 0;

    'scan: while i < chars.len() {
        if is_boundary(&chars, i) {
            for exception in UPPERCASE_EXCEPTIONS {
                let end = i + exception.len();
                if end <= chars.len()
                    && eq_ignore_case(&chars[i..end], exception)
                    && is_boundary(&chars, end)
                {
                    result.push_str(&collect(&chars[i..end]).to_uppercase());
                    i = end;
                    continue 'scan;
                }
            }
        }
        result.push(chars[i]);
        i += 1;
    }

    result
}
