//! SMS segment calculator.
//!
//! Decides whether a message fits the GSM 7-bit alphabet or needs UCS-2, and
//! how many bits and concatenated segments it consumes. All functions are
//! pure and safe to call concurrently; the only shared data are the static
//! lookup tables in `core-gsm` and `core-text`.
//!
//! ```
//! use core_segments::{bits_count, segments_count};
//!
//! assert_eq!(bits_count("hello", false), 35);
//! assert_eq!(segments_count("hello", false), 1);
//! // curly quotes force UCS-2 unless smart encoding folds them to ASCII
//! assert_eq!(bits_count("\u{201C}hi\u{201D}", false), 64);
//! assert_eq!(bits_count("\u{201C}hi\u{201D}", true), 28);
//! ```

pub mod calculator;
pub mod error;

pub use calculator::{
    Encoding, GSM7_BITS_PER_CHAR, SEGMENT_BITS, SegmentReport, UCS2_BITS_PER_UNIT, analyze,
    bits_count, segments_count, segments_for_bits,
};
pub use error::MessageError;

/// Validate raw bytes as UTF-8 before they reach the calculator.
pub fn decode_message(bytes: &[u8]) -> Result<&str, MessageError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text)
}
