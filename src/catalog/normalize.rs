//! Text Normalization Module
//!
//! Case- and accent-insensitive comparison support for catalog search.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizes text for search comparison.
///
/// Lower-cases, decomposes (NFD) and strips combining marks, so accented
/// and unaccented spellings of the same word compare equal. Applied
/// identically to item names and to the search query.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
