//! Lyric-text chunking.
//!
//! A verse is a segment of the stored lyric blob delimited by a blank
//! line. Verses are 0-indexed internally and addressed 1-indexed from
//! the outside via the page number.

use crate::page::PageParams;

/// Blank-line boundary between verses.
pub const VERSE_SEPARATOR: &str = "\n\n";

/// Split a lyric blob into its ordered verses.
///
/// Empty leading/trailing segments are preserved exactly as the split
/// returns them; joining the result with [`VERSE_SEPARATOR`]
/// reconstructs the original text.
#[must_use]
pub fn split_verses(text: &str) -> Vec<&str> {
    text.split(VERSE_SEPARATOR).collect()
}

/// Return the verse slice for the requested page.
///
/// Out-of-range pages yield an empty sequence, never an error; a page
/// that straddles the end of the text is clamped.
#[must_use]
pub fn paginate_verses(text: &str, pages: &PageParams) -> Vec<String> {
    let verses = split_verses(text);

    let start = usize::try_from(pages.offset()).unwrap_or(usize::MAX);
    if start >= verses.len() {
        return Vec::new();
    }

    let limit = usize::try_from(pages.limit()).unwrap_or(usize::MAX);
    let end = start.saturating_add(limit).min(verses.len());

    verses[start..end].iter().map(|v| (*v).to_string()).collect()
}
