//! GSM 03.38 default alphabet lookup.
//!
//! Unicode scalar -> GSM 7-bit code unit(s). A two-unit value is an escape
//! sequence (`0x1B` + extension code) into the extension table; such a
//! character still counts as one character for bit accounting.

/// Escape prefix that selects the extension table.
pub const ESCAPE: u8 = 0x1B;

/// Sorted by scalar value, keys unique (checked by `alphabet_sorted_and_unique`).
pub static GSM7_ALPHABET: &[(char, &[u8])] = &[
    ('\u{000A}', &[0x0A]),
    ('\u{000C}', &[0x1B, 0x0A]),
    ('\u{000D}', &[0x0D]),
    ('\u{0020}', &[0x20]),
    ('\u{0021}', &[0x21]),
    ('\u{0022}', &[0x22]),
    ('\u{0023}', &[0x23]),
    ('\u{0024}', &[0x02]),
    ('\u{0025}', &[0x25]),
    ('\u{0026}', &[0x26]),
    ('\u{0027}', &[0x27]),
    ('\u{0028}', &[0x28]),
    ('\u{0029}', &[0x29]),
    ('\u{002A}', &[0x2A]),
    ('\u{002B}', &[0x2B]),
    ('\u{002C}', &[0x2C]),
    ('\u{002D}', &[0x2D]),
    ('\u{002E}', &[0x2E]),
    ('\u{002F}', &[0x2F]),
    ('\u{0030}', &[0x30]),
    ('\u{0031}', &[0x31]),
    ('\u{0032}', &[0x32]),
    ('\u{0033}', &[0x33]),
    ('\u{0034}', &[0x34]),
    ('\u{0035}', &[0x35]),
    ('\u{0036}', &[0x36]),
    ('\u{0037}', &[0x37]),
    ('\u{0038}', &[0x38]),
    ('\u{0039}', &[0x39]),
    ('\u{003A}', &[0x3A]),
    ('\u{003B}', &[0x3B]),
    ('\u{003C}', &[0x3C]),
    ('\u{003D}', &[0x3D]),
    ('\u{003E}', &[0x3E]),
    ('\u{003F}', &[0x3F]),
    ('\u{0040}', &[0x00]),
    ('\u{0041}', &[0x41]),
    ('\u{0042}', &[0x42]),
    ('\u{0043}', &[0x43]),
    ('\u{0044}', &[0x44]),
    ('\u{0045}', &[0x45]),
    ('\u{0046}', &[0x46]),
    ('\u{0047}', &[0x47]),
    ('\u{0048}', &[0x48]),
    ('\u{0049}', &[0x49]),
    ('\u{004A}', &[0x4A]),
    ('\u{004B}', &[0x4B]),
    ('\u{004C}', &[0x4C]),
    ('\u{004D}', &[0x4D]),
    ('\u{004E}', &[0x4E]),
    ('\u{004F}', &[0x4F]),
    ('\u{0050}', &[0x50]),
    ('\u{0051}', &[0x51]),
    ('\u{0052}', &[0x52]),
    ('\u{0053}', &[0x53]),
    ('\u{0054}', &[0x54]),
    ('\u{0055}', &[0x55]),
    ('\u{0056}', &[0x56]),
    ('\u{0057}', &[0x57]),
    ('\u{0058}', &[0x58]),
    ('\u{0059}', &[0x59]),
    ('\u{005A}', &[0x5A]),
    ('\u{005B}', &[0x1B, 0x3C]),
    ('\u{005C}', &[0x1B, 0x2F]),
    ('\u{005D}', &[0x1B, 0x3E]),
    ('\u{005E}', &[0x1B, 0x14]),
    ('\u{005F}', &[0x11]),
    ('\u{0061}', &[0x61]),
    ('\u{0062}', &[0x62]),
    ('\u{0063}', &[0x63]),
    ('\u{0064}', &[0x64]),
    ('\u{0065}', &[0x65]),
    ('\u{0066}', &[0x66]),
    ('\u{0067}', &[0x67]),
    ('\u{0068}', &[0x68]),
    ('\u{0069}', &[0x69]),
    ('\u{006A}', &[0x6A]),
    ('\u{006B}', &[0x6B]),
    ('\u{006C}', &[0x6C]),
    ('\u{006D}', &[0x6D]),
    ('\u{006E}', &[0x6E]),
    ('\u{006F}', &[0x6F]),
    ('\u{0070}', &[0x70]),
    ('\u{0071}', &[0x71]),
    ('\u{0072}', &[0x72]),
    ('\u{0073}', &[0x73]),
    ('\u{0074}', &[0x74]),
    ('\u{0075}', &[0x75]),
    ('\u{0076}', &[0x76]),
    ('\u{0077}', &[0x77]),
    ('\u{0078}', &[0x78]),
    ('\u{0079}', &[0x79]),
    ('\u{007A}', &[0x7A]),
    ('\u{007B}', &[0x1B, 0x28]),
    ('\u{007C}', &[0x1B, 0x40]),
    ('\u{007D}', &[0x1B, 0x29]),
    ('\u{007E}', &[0x1B, 0x3D]),
    ('\u{00A1}', &[0x40]),
    ('\u{00A3}', &[0x01]),
    ('\u{00A4}', &[0x24]),
    ('\u{00A5}', &[0x03]),
    ('\u{00A7}', &[0x5F]),
    ('\u{00BF}', &[0x60]),
    ('\u{00C4}', &[0x5B]),
    ('\u{00C5}', &[0x0E]),
    ('\u{00C6}', &[0x1C]),
    ('\u{00C7}', &[0x09]),
    ('\u{00C9}', &[0x1F]),
    ('\u{00D1}', &[0x5D]),
    ('\u{00D6}', &[0x5C]),
    ('\u{00D8}', &[0x0B]),
    ('\u{00DC}', &[0x5E]),
    ('\u{00DF}', &[0x1E]),
    ('\u{00E0}', &[0x7F]),
    ('\u{00E4}', &[0x7B]),
    ('\u{00E5}', &[0x0F]),
    ('\u{00E6}', &[0x1D]),
    ('\u{00E8}', &[0x04]),
    ('\u{00E9}', &[0x05]),
    ('\u{00EC}', &[0x07]),
    ('\u{00F1}', &[0x7D]),
    ('\u{00F2}', &[0x08]),
    ('\u{00F6}', &[0x7C]),
    ('\u{00F8}', &[0x0C]),
    ('\u{00F9}', &[0x06]),
    ('\u{00FC}', &[0x7E]),
    ('\u{0393}', &[0x13]),
    ('\u{0394}', &[0x10]),
    ('\u{0398}', &[0x19]),
    ('\u{039B}', &[0x14]),
    ('\u{039E}', &[0x1A]),
    ('\u{03A0}', &[0x16]),
    ('\u{03A3}', &[0x18]),
    ('\u{03A6}', &[0x12]),
    ('\u{03A8}', &[0x17]),
    ('\u{03A9}', &[0x15]),
    ('\u{20AC}', &[0x1B, 0x65]),
];

/// GSM code unit(s) for `c`, or `None` when the scalar has no mapping.
pub fn gsm7_units(c: char) -> Option<&'static [u8]> {
    GSM7_ALPHABET
        .binary_search_by(|(key, _)| key.cmp(&c))
        .ok()
        .map(|idx| GSM7_ALPHABET[idx].1)
}

/// True when `c` is representable in the narrow alphabet.
#[inline]
pub fn is_gsm7(c: char) -> bool {
    gsm7_units(c).is_some()
}

/// True when `c` needs the escape prefix (costs two code units on the wire).
pub fn is_extension(c: char) -> bool {
    matches!(gsm7_units(c), Some([ESCAPE, _]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sorted_and_unique() {
        assert_eq!(GSM7_ALPHABET.len(), 137);
        for pair in GSM7_ALPHABET.windows(2) {
            assert!(pair[0].0 < pair[1].0, "out of order at {:?}", pair[1].0);
        }
    }

    #[test]
    fn values_are_one_unit_or_escaped() {
        for (c, units) in GSM7_ALPHABET {
            match units {
                [u] => assert!(*u < 0x80, "{:?} maps outside 7 bits", c),
                [ESCAPE, u] => assert!(*u < 0x80, "{:?} escapes outside 7 bits", c),
                _ => panic!("unexpected encoding for {:?}: {:?}", c, units),
            }
        }
    }

    #[test]
    fn basic_mappings() {
        assert_eq!(gsm7_units('A'), Some(&[0x41][..]));
        assert_eq!(gsm7_units('@'), Some(&[0x00][..]));
        assert_eq!(gsm7_units('$'), Some(&[0x02][..]));
        assert_eq!(gsm7_units('_'), Some(&[0x11][..]));
        assert_eq!(gsm7_units('\u{00C7}'), Some(&[0x09][..]));
        assert_eq!(gsm7_units('\u{03A9}'), Some(&[0x15][..]));
    }

    #[test]
    fn extension_characters() {
        for c in ['\u{000C}', '[', '\\', ']', '^', '{', '|', '}', '~', '\u{20AC}'] {
            assert!(is_extension(c), "{:?} should be escaped", c);
        }
        assert_eq!(gsm7_units('\u{20AC}'), Some(&[ESCAPE, 0x65][..]));
        assert!(!is_extension('a'));
        assert!(!is_extension('\u{1F600}'));
    }

    #[test]
    fn unmapped_characters() {
        for c in ['`', '\t', '\u{00A0}', '\u{201C}', '\u{00E7}', '\u{4E16}', '\u{1F600}'] {
            assert!(!is_gsm7(c), "{:?} should not be narrow", c);
        }
    }
}
