// Hex text helpers for PDUs captured from modems and logs

use crate::codec::{DecodeError, DecodeResult};
use std::fmt;

/// Decodes a hex string into bytes.
///
/// Digits may be upper or lower case and ASCII whitespace between them is
/// ignored. The error position is the byte offset into `input` of the
/// offending character, or of the unpaired final digit.
pub fn decode_hex(input: &str) -> DecodeResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(input.len() / 2);
    let mut high: Option<(usize, u8)> = None;

    for (position, ch) in input.char_indices() {
        if ch.is_ascii_whitespace() {
            continue;
        }
        let nibble = ch
            .to_digit(16)
            .ok_or(DecodeError::InvalidHex { position })? as u8;
        match high.take() {
            Some((_, value)) => bytes.push((value << 4) | nibble),
            None => high = Some((position, nibble)),
        }
    }

    match high {
        Some((position, _)) => Err(DecodeError::InvalidHex { position }),
        None => Ok(bytes),
    }
}

/// Renders bytes as uppercase hex
#[derive(Debug)]
pub struct HexData<'a>(pub &'a [u8]);

impl fmt::Display for HexData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}
