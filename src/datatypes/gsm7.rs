// ABOUTME: GSM 03.38 default alphabet: septet unpacking and character mapping
// ABOUTME: Handles the 0x1B escape table; unmapped values and pairs fall back to Latin-1 code points

use crate::codec::{ByteCursor, DecodeResult};
use bytes::Buf;

/// Escape to the extension table
pub const ESCAPE: u8 = 0x1B;

/// Septets carried by one 7-octet chunk
const SEPTETS_PER_CHUNK: usize = 8;
const CHUNK_LEN: usize = 7;

/// Reads a septet count followed by the packed septets and maps them to text
pub fn decode_packed<B: Buf>(cursor: &mut ByteCursor<B>) -> DecodeResult<String> {
    let septet_count = usize::from(cursor.read_one()?);
    let packed = cursor.read((septet_count * 7).div_ceil(8))?;
    Ok(map_septets(&unpack_septets(&packed, septet_count)))
}

/// Unpacks little-endian 7-bit septets, keeping the first `count`.
///
/// Each chunk of up to seven octets unpacks to eight septets, so the last
/// chunk may produce padding septets beyond `count`.
pub fn unpack_septets(packed: &[u8], count: usize) -> Vec<u8> {
    let mut septets = Vec::with_capacity(packed.len().div_ceil(CHUNK_LEN) * SEPTETS_PER_CHUNK);
    for chunk in packed.chunks(CHUNK_LEN) {
        let mut value = chunk
            .iter()
            .rev()
            .fold(0u64, |acc, &octet| (acc << 8) | u64::from(octet));
        for _ in 0..SEPTETS_PER_CHUNK {
            septets.push((value & 0x7F) as u8);
            value >>= 7;
        }
    }
    septets.truncate(count);
    septets
}

/// Maps default-alphabet values to characters, resolving escape pairs
pub fn map_septets(septets: &[u8]) -> String {
    let mut text = String::with_capacity(septets.len());
    let mut iter = septets.iter().copied();

    while let Some(value) = iter.next() {
        if value == ESCAPE {
            match iter.next() {
                Some(next) => match extension_char(next) {
                    Some(ch) => text.push(ch),
                    // unmapped pair: both values pass through as Latin-1
                    None => {
                        text.push(char::from(ESCAPE));
                        text.push(char::from(next));
                    }
                },
                None => text.push(char::from(ESCAPE)),
            }
            continue;
        }
        text.push(default_char(value));
    }

    text
}

/// Default alphabet positions that differ from Latin-1
fn default_char(value: u8) -> char {
    match value {
        0x00 => '@',
        0x01 => '£',
        0x02 => '$',
        0x03 => '¥',
        0x04 => 'è',
        0x05 => 'é',
        0x06 => 'ù',
        0x07 => 'ì',
        0x08 => 'ò',
        0x09 => 'Ç',
        0x0B => 'Ø',
        0x0C => 'ø',
        0x0E => 'Å',
        0x0F => 'å',
        0x10 => 'Δ',
        0x11 => '_',
        0x12 => 'Φ',
        0x13 => 'Γ',
        0x14 => 'Λ',
        0x15 => 'Ω',
        0x16 => 'Π',
        0x17 => 'Ψ',
        0x18 => 'Σ',
        0x19 => 'Θ',
        0x1A => 'Ξ',
        0x1C => 'Æ',
        0x1D => 'æ',
        0x1E => 'ß',
        0x1F => 'É',
        0x24 => '¤',
        0x40 => '¡',
        0x5B => 'Ä',
        0x5C => 'Ö',
        0x5D => 'Ñ',
        0x5E => 'Ü',
        0x5F => '§',
        0x60 => '¿',
        0x7B => 'ä',
        0x7C => 'ö',
        0x7D => 'ñ',
        0x7E => 'ü',
        0x7F => 'à',
        _ => char::from(value),
    }
}

/// Extension table reached through [`ESCAPE`]
fn extension_char(value: u8) -> Option<char> {
    let ch = match value {
        0x0A => '\u{000C}',
        0x14 => '^',
        0x28 => '{',
        0x29 => '}',
        0x2F => '\\',
        0x3C => '[',
        0x3D => '~',
        0x3E => ']',
        0x40 => '|',
        0x65 => '€',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_over(data: &[u8]) -> ByteCursor<&[u8]> {
        ByteCursor::new(data)
    }

    fn decode(data: &[u8]) -> String {
        decode_packed(&mut cursor_over(data)).unwrap()
    }

    #[test]
    fn test_hellohello() {
        let data = [0x0A, 0xE8, 0x32, 0x9B, 0xFD, 0x46, 0x97, 0xD9, 0xEC, 0x37];
        assert_eq!(decode(&data), "hellohello");
    }

    #[test]
    fn test_zero_septets_is_empty() {
        let mut cursor = cursor_over(&[0x00, 0xAB]);
        assert_eq!(decode_packed(&mut cursor).unwrap(), "");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_euro_escape() {
        assert_eq!(decode(&[0x02, 0x9B, 0x32]), "€");
    }

    #[test]
    fn test_full_chunk_truncates_padding_septet() {
        // seven septets fill seven octets with one padding septet left over
        let packed = [0xC8, 0x34, 0x00, 0x00, 0x00, 0x00, 0x00];
        let septets = unpack_septets(&packed, 7);
        assert_eq!(septets.len(), 7);
        assert_eq!(&septets[..2], b"Hi");
    }

    #[test]
    fn test_eight_septets_fill_one_chunk() {
        let data = [0x08, 0x1B, 0x5E, 0x70, 0x13, 0x04, 0x08, 0x36];
        assert_eq!(decode(&data), "[A\u{1b}A@$\u{1b}");
    }

    #[test]
    fn test_unmapped_values_pass_through_as_latin1() {
        assert_eq!(map_septets(b"Hello, World!"), "Hello, World!");
        assert_eq!(map_septets(&[0x0A, 0x0D, 0x20]), "\n\r ");
        assert_eq!(map_septets(&[0x24, 0x40]), "¤¡");
    }

    #[test]
    fn test_default_alphabet_specials() {
        assert_eq!(map_septets(&[0x00, 0x01, 0x02, 0x10, 0x7F]), "@£$Δà");
    }

    #[test]
    fn test_extension_table() {
        let escaped: Vec<u8> = [0x0A, 0x14, 0x28, 0x29, 0x2F, 0x3C, 0x3D, 0x3E, 0x40, 0x65]
            .iter()
            .flat_map(|&value| [ESCAPE, value])
            .collect();
        assert_eq!(map_septets(&escaped), "\u{000C}^{}\\[~]|€");
    }

    #[test]
    fn test_unmapped_escape_pair() {
        assert_eq!(map_septets(&[ESCAPE, 0x41]), "\u{1b}A");
        assert_eq!(map_septets(&[ESCAPE, 0x00]), "\u{1b}\0");
        assert_eq!(map_septets(&[ESCAPE, 0x00, 0x00]), "\u{1b}\0@");
    }

    #[test]
    fn test_escape_pair_consumes_following_escape() {
        assert_eq!(map_septets(&[ESCAPE, ESCAPE, 0x65]), "\u{1b}\u{1b}e");
        assert_eq!(map_septets(&[ESCAPE, ESCAPE, ESCAPE, 0x65]), "\u{1b}\u{1b}€");
    }

    #[test]
    fn test_trailing_escape() {
        assert_eq!(map_septets(&[0x41, ESCAPE]), "A\u{1b}");
    }

    #[test]
    fn test_truncated_user_data() {
        let mut cursor = cursor_over(&[0x0A, 0xE8, 0x32]);
        assert!(decode_packed(&mut cursor).is_err());
    }
}
