//! Text primitives shared by the segment calculator.
//!
//! - [`segment`]: extended grapheme cluster iteration and UTF-16 code-unit
//!   counting.
//! - [`smart`]: the "smart encoding" look-alike table and the single-pass
//!   normalizer that applies it.
//!
//! Everything here is a pure function over `&str`; the only long-lived data
//! is the static replacement table.

pub mod segment;
pub mod smart;

pub use segment::{grapheme_count, graphemes, single_scalar, utf16_len};
pub use smart::normalize;
