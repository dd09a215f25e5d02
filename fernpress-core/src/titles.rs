//! Slug to human-readable title conversion.

use unicode_segmentation::UnicodeSegmentation;

/// Convert a filename slug into a display title
///
/// Splits on hyphens and underscores, uppercases the first grapheme of
/// each word, and joins with spaces.
///
/// # Examples
///
/// ```
/// use fernpress_core::format_title;
///
/// assert_eq!(format_title("my-first-post"), "My First Post");
/// assert_eq!(format_title("getting_started"), "Getting Started");
/// ```
pub fn format_title(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => first.to_uppercase() + graphemes.as_str(),
        None => String::new(),
    }
}
