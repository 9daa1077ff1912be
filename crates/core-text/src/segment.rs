//! Grapheme segmentation adapter.
//!
//! Contract:
//! - Input: any `&str` (already validated UTF-8), including the empty string.
//! - Output: extended grapheme clusters in order; concatenated they equal the
//!   input exactly. Empty input yields no clusters.
//! - No normalization happens here: `e` + U+0301 stays a two-scalar cluster and
//!   is never folded into the precomposed `é`.

use unicode_segmentation::UnicodeSegmentation;

/// Iterate extended grapheme clusters.
pub fn graphemes(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true)
}

/// Number of extended grapheme clusters.
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Number of UTF-16 code units needed to encode `text`. Scalars outside the
/// BMP take a surrogate pair and count as 2.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Returns the scalar value when the cluster is made of exactly one.
pub fn single_scalar(grapheme: &str) -> Option<char> {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
