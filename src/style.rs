// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Capitalization styles.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// A capitalization style for titles.
///
/// Each style has a numeric mode (see [`Style::mode`]); numbers outside
/// `1..=4` fall back to [`Style::ChicagoManual`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "StyleSetting")]
pub enum Style {
    /// Keep the first text ever seen, unchanged.
    Literal,
    /// Associated Press: small words of four letters or more are capitalized.
    AssociatedPress4,
    /// Associated Press: small words of five letters or more are capitalized.
    AssociatedPress5,
    /// Chicago Manual of Style: small words are always lowercase.
    #[default]
    ChicagoManual,
}

impl Style {
    /// Every style, in mode order.
    pub const ALL: [Style; 4] = [
        Style::Literal,
        Style::AssociatedPress4,
        Style::AssociatedPress5,
        Style::ChicagoManual,
    ];

    /// Convert a numeric mode into a style.
    ///
    /// `1` is [`Literal`](Style::Literal), `2` and `3` are the Associated
    /// Press variants, `4` is [`ChicagoManual`](Style::ChicagoManual).  Any
    /// other number is Chicago as well.
    pub fn from_mode(mode: i64) -> Self {
        match mode {
            1 => Style::Literal,
            2 => Style::AssociatedPress4,
            3 => Style::AssociatedPress5,
            _ => Style::ChicagoManual,
        }
    }

    /// Convert a mode given as text, the way a form field would pass it.
    ///
    /// Leading whitespace is skipped and the longest decimal integer prefix
    /// (with an optional sign) is used, so `"2"`, `" 3px"` and `"1.5"` are all
    /// accepted.  Text without such a prefix means Chicago.
    ///
    /// # Examples
    ///
    /// ```
    /// use titlecaps::Style;
    ///
    /// assert_eq!(Style::parse_mode(" 3px"), Style::AssociatedPress5);
    /// assert_eq!(Style::parse_mode("nonsense"), Style::ChicagoManual);
    /// ```
    pub fn parse_mode(value: &str) -> Self {
        parse_integer_prefix(value).map_or(Style::ChicagoManual, Style::from_mode)
    }

    /// The numeric mode of this style.
    pub fn mode(self) -> u8 {
        match self {
            Style::Literal => 1,
            Style::AssociatedPress4 => 2,
            Style::AssociatedPress5 => 3,
            Style::ChicagoManual => 4,
        }
    }

    /// The short name of this style, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Style::Literal => "literal",
            Style::AssociatedPress4 => "ap4",
            Style::AssociatedPress5 => "ap5",
            Style::ChicagoManual => "chicago",
        }
    }

    /// Minimum length at which a small word is capitalized, if any.
    pub fn small_word_threshold(self) -> Option<usize> {
        match self {
            Style::AssociatedPress4 => Some(4),
            Style::AssociatedPress5 => Some(5),
            Style::Literal | Style::ChicagoManual => None,
        }
    }
}

/// Read an optionally signed decimal integer at the start of `value`.
fn parse_integer_prefix(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    // Numbers too large for i64 are out of range anyway.
    let magnitude = digits[..len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    /// Parse a style name (`literal`, `ap4`, `ap5`, `chicago`, case
    /// insensitive, with a few long aliases) or a numeric mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "literal" | "original" => Ok(Style::Literal),
            "ap4" | "associated-press-4" => Ok(Style::AssociatedPress4),
            "ap5" | "associated-press-5" => Ok(Style::AssociatedPress5),
            "chicago" | "chicago-manual" => Ok(Style::ChicagoManual),
            _ if parse_integer_prefix(&name).is_some() => Ok(Style::parse_mode(&name)),
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}

/// Style as written in a configuration file: a name or a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum StyleSetting {
    Mode(i64),
    Name(String),
}

impl TryFrom<StyleSetting> for Style {
    type Error = ParseStyleError;

    fn try_from(setting: StyleSetting) -> Result<Self, Self::Error> {
        match setting {
            StyleSetting::Mode(mode) => Ok(Style::from_mode(mode)),
            StyleSetting::Name(name) => name.parse(),
        }
    }
}

/// Error returned when a style name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleError(String);

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown style {:?} (expected literal, ap4, ap5, chicago, or 1-4)",
            self.0
        )
    }
}

impl std::error::Error for ParseStyleError {}
