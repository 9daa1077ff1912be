//! Narrow (GSM 7-bit) encodability classifier.
//!
//! A grapheme is narrow-encodable only when it is exactly one scalar value and
//! that scalar appears in [`GSM7_ALPHABET`]. Any multi-scalar cluster (combining
//! sequence, emoji ZWJ sequence, flag, even `"\r\n"`) is wide, regardless of
//! whether its base scalar would map on its own. One wide grapheme makes the
//! whole message wide.

pub mod alphabet;

pub use alphabet::{ESCAPE, GSM7_ALPHABET, gsm7_units, is_extension, is_gsm7};

use core_text::single_scalar;

/// Whether a single grapheme cluster fits the narrow alphabet.
pub fn is_narrow_encodable(grapheme: &str) -> bool {
    single_scalar(grapheme).is_some_and(is_gsm7)
}

/// True iff every grapheme is narrow-encodable. Stops at the first failure.
/// An empty sequence is narrow.
pub fn is_message_narrow_encodable<'a, I>(graphemes: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    graphemes.into_iter().all(is_narrow_encodable)
}

/// GSM code units the message would occupy on the wire, escapes counted
/// twice. `None` when any grapheme is not narrow-encodable.
pub fn septet_len<'a, I>(graphemes: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    graphemes.into_iter().try_fold(0usize, |acc, g| {
        let units = gsm7_units(single_scalar(g)?)?;
        Some(acc + units.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::graphemes;

    #[test]
    fn single_scalar_lookup() {
        assert!(is_narrow_encodable("a"));
        assert!(is_narrow_encodable("\u{20AC}"));
        assert!(is_narrow_encodable("\n"));
        assert!(is_narrow_encodable("\r"));
        assert!(!is_narrow_encodable("\u{201C}"));
        assert!(!is_narrow_encodable("\u{1F600}"));
        assert!(!is_narrow_encodable(""));
    }

    #[test]
    fn multi_scalar_clusters_are_wide() {
        // 'e' alone maps, 'e' + combining acute does not
        assert!(is_narrow_encodable("e"));
        assert!(!is_narrow_encodable("e\u{0301}"));
        assert!(!is_narrow_encodable("\r\n"));
        assert!(!is_narrow_encodable("\u{1F1FA}\u{1F1F8}"));
    }

    #[test]
    fn message_classification() {
        assert!(is_message_narrow_encodable(graphemes("Hello {world} \u{20AC}!")));
        assert!(!is_message_narrow_encodable(graphemes("Hello \u{1F980} World")));
        assert!(!is_message_narrow_encodable(graphemes("line\r\nbreak")));
        assert!(is_message_narrow_encodable(graphemes("")));
    }

    #[test]
    fn classification_short_circuits() {
        let mut seen = 0;
        let iter = ["\u{1F600}", "a", "b"].into_iter().inspect(|_| seen += 1);
        assert!(!is_message_narrow_encodable(iter));
        assert_eq!(seen, 1);
    }

    #[test]
    fn septets_count_escapes_twice() {
        assert_eq!(septet_len(graphemes("abc")), Some(3));
        assert_eq!(septet_len(graphemes("[x]")), Some(5));
        assert_eq!(septet_len(graphemes("10\u{20AC}")), Some(4));
        assert_eq!(septet_len(graphemes("")), Some(0));
        assert_eq!(septet_len(graphemes("caf\u{00E9}\u{0301}")), None);
        assert_eq!(septet_len(graphemes("\u{201C}hi\u{201D}")), None);
    }

    mod properties {
        use super::super::*;
        use core_text::graphemes;
        use proptest::prelude::*;

        // CR is excluded: CR followed by LF forms one two-scalar cluster.
        fn narrow_char() -> impl Strategy<Value = char> {
            proptest::sample::select(
                GSM7_ALPHABET
                    .iter()
                    .map(|(c, _)| *c)
                    .filter(|c| *c != '\r')
                    .collect::<Vec<_>>(),
            )
        }

        proptest! {
            #[test]
            fn alphabet_strings_are_narrow(chars in proptest::collection::vec(narrow_char(), 0..200)) {
                let s: String = chars.iter().collect();
                prop_assert!(is_message_narrow_encodable(graphemes(&s)));
                let expected: usize = chars.iter().map(|c| if is_extension(*c) { 2 } else { 1 }).sum();
                prop_assert_eq!(septet_len(graphemes(&s)), Some(expected));
            }
        }
    }
}
