//! Titlecaps converts English text to title case in the Associated Press or
//! Chicago Manual styles.
//!
//! # Example
//!
//! ```
//! use titlecaps::{title_case, Style};
//!
//! let title = title_case("war of the worlds", Style::AssociatedPress4);
//! assert_eq!(title, "War of the Worlds");
//! ```

pub mod caser;
pub mod config;
mod style;
#[cfg(feature = "wasm")]
mod wasm;

pub use caser::{Segment, Segmenter, TitleCaser, is_small_word, title_case, transform};
pub use style::{ParseStyleError, Style};

/// Converts every line of `input` to title case, treating each line as a
/// separate title.
///
/// Line endings (`\n` or `\r\n`) are kept as they are.
///
/// # Arguments
///
/// * `input` - The text to convert, one title per line.
/// * `style` - The capitalization style.
///
/// # Returns
///
/// The converted text.  [`Style::Literal`] returns `input` unchanged.
pub fn title_case_lines(input: &str, style: Style) -> String {
    let mut output = String::with_capacity(input.len());
    for line in input.split_inclusive('\n') {
        let content = line
            .strip_suffix("\r\n")
            .or_else(|| line.strip_suffix('\n'))
            .unwrap_or(line);
        output.push_str(&title_case(content, style));
        output.push_str(&line[content.len()..]);
    }
    output
}
