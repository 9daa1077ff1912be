//! Bit and segment arithmetic.
//!
//! Pipeline (one pass per call, no state between calls):
//! 1. Optional smart-encoding normalization.
//! 2. Grapheme segmentation.
//! 3. Narrow classification over the graphemes.
//! 4. Narrow: `graphemes * 7` bits. Wide: `utf16 units * 16` bits.
//! 5. Segments: `ceil(bits / 1120)`.
//!
//! The narrow path counts graphemes while the wide path counts UTF-16 code
//! units. Escaped GSM characters still cost 7 bits here; the real septet
//! count is reported separately in [`SegmentReport::septets`].

use std::borrow::Cow;

use core_gsm::{is_message_narrow_encodable, septet_len};
use core_text::{normalize, utf16_len};
use serde::Serialize;
use tracing::trace;

/// Usable payload bits of one concatenated segment, shared by both encodings.
pub const SEGMENT_BITS: usize = 1120;
/// Cost of one narrow-encodable grapheme.
pub const GSM7_BITS_PER_CHAR: usize = 7;
/// Cost of one UTF-16 code unit on the wide path.
pub const UCS2_BITS_PER_UNIT: usize = 16;

/// Encoding a message ends up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    Gsm7,
    Ucs2,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Gsm7 => "GSM-7",
            Encoding::Ucs2 => "UCS-2",
        }
    }
}

/// Everything learned about one message in a single calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentReport {
    pub encoding: Encoding,
    pub smart_encoding: bool,
    /// Grapheme clusters after optional normalization.
    pub graphemes: usize,
    /// UTF-16 code units after optional normalization.
    pub utf16_units: usize,
    /// GSM code units including escapes; `None` on the wide path.
    pub septets: Option<usize>,
    pub bits: usize,
    pub segments: usize,
}

/// Run the whole pipeline once and report every intermediate count.
pub fn analyze(message: &str, smart_encoding: bool) -> SegmentReport {
    let text = if smart_encoding {
        normalize(message)
    } else {
        Cow::Borrowed(message)
    };
    let graphemes: Vec<&str> = core_text::graphemes(&text).collect();
    let utf16_units = utf16_len(&text);

    let (encoding, bits, septets) = if is_message_narrow_encodable(graphemes.iter().copied()) {
        (
            Encoding::Gsm7,
            graphemes.len() * GSM7_BITS_PER_CHAR,
            septet_len(graphemes.iter().copied()),
        )
    } else {
        (Encoding::Ucs2, utf16_units * UCS2_BITS_PER_UNIT, None)
    };
    let segments = segments_for_bits(bits);

    trace!(
        target: "segments",
        size_bytes = message.len(),
        normalized_bytes = text.len(),
        smart_encoding,
        encoding = encoding.as_str(),
        graphemes = graphemes.len(),
        utf16_units,
        bits,
        segments,
        "message_analyzed"
    );

    SegmentReport {
        encoding,
        smart_encoding,
        graphemes: graphemes.len(),
        utf16_units,
        septets,
        bits,
        segments,
    }
}

/// Encoding bits the message consumes.
pub fn bits_count(message: &str, smart_encoding: bool) -> usize {
    analyze(message, smart_encoding).bits
}

/// Segments the message occupies: `ceil(bits_count / SEGMENT_BITS)`.
pub fn segments_count(message: &str, smart_encoding: bool) -> usize {
    segments_for_bits(bits_count(message, smart_encoding))
}

#[inline]
pub fn segments_for_bits(bits: usize) -> usize {
    bits.div_ceil(SEGMENT_BITS)
}
