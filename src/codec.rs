// SMS PDU codec primitives
//
// This module holds what every field decoder shares: the single-pass byte
// cursor, the decode error type and the trait implemented by the message
// classes. Field decoders live next to their types in `datatypes`.

use crate::datatypes::{FirstOctet, MessageType};
use crate::decoder::DecodeOptions;
use bytes::{Buf, Bytes};
use thiserror::Error;

/// A specialized `Result` type for PDU decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Decode errors with enough context to locate the faulty field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Truncated PDU at offset {position}: need {needed} bytes, {available} available")]
    TruncatedInput {
        position: usize,
        needed: usize,
        available: usize,
    },

    #[error("Invalid address type: {0:#04x}")]
    InvalidAddressType(u8),

    /// Not produced by the bundled decoders: a zero-length address decodes
    /// as absent and longer addresses are read as given.
    #[error("Invalid address length: {0}")]
    InvalidAddressLength(u8),

    #[error("Unsupported data coding scheme: {0:#04x}")]
    UnsupportedCodingScheme(u8),

    #[error("Unsupported message type in first octet {0:#04x}")]
    UnsupportedMessageType(u8),

    /// A class decoder was called directly with the other class's first
    /// octet. `SmsUnit::decode` picks the class from that octet and never
    /// returns this.
    #[error("Unexpected message type: expected {expected:?}, got {actual:?}")]
    UnexpectedMessageType {
        expected: MessageType,
        actual: MessageType,
    },

    #[error("Field '{field}' validation failed: {reason}")]
    FieldValidation { field: &'static str, reason: String },

    #[error("Invalid hex input at offset {position}")]
    InvalidHex { position: usize },
}

/// Sequential reader over a PDU byte source.
///
/// The cursor never seeks: every read consumes bytes, and a failed read
/// leaves the cursor in a state that must not be reused.
#[derive(Debug)]
pub struct ByteCursor<B> {
    buf: B,
    position: usize,
}

impl<B: Buf> ByteCursor<B> {
    pub fn new(buf: B) -> Self {
        Self { buf, position: 0 }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Read exactly `n` bytes
    pub fn read(&mut self, n: usize) -> DecodeResult<Bytes> {
        self.ensure(n)?;
        self.position += n;
        Ok(self.buf.copy_to_bytes(n))
    }

    /// Read a single byte
    pub fn read_one(&mut self) -> DecodeResult<u8> {
        self.ensure(1)?;
        self.position += 1;
        Ok(self.buf.get_u8())
    }

    /// Read exactly `N` bytes into a fixed-size array
    pub fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        self.buf.copy_to_slice(&mut out);
        self.position += N;
        Ok(out)
    }

    /// Consume and discard `n` bytes
    pub fn skip(&mut self, n: usize) -> DecodeResult<()> {
        self.ensure(n)?;
        self.buf.advance(n);
        self.position += n;
        Ok(())
    }

    pub fn into_inner(self) -> B {
        self.buf
    }

    fn ensure(&self, needed: usize) -> DecodeResult<()> {
        let available = self.buf.remaining();
        if available < needed {
            return Err(DecodeError::TruncatedInput {
                position: self.position,
                needed,
                available,
            });
        }
        Ok(())
    }
}

/// Trait for message classes that can be decoded after the first octet
pub trait Decodable: Sized {
    /// Decode the message body that follows `header`
    fn decode<B: Buf>(
        header: FirstOctet,
        cursor: &mut ByteCursor<B>,
        options: &DecodeOptions,
    ) -> DecodeResult<Self>;

    /// Return the message type this class is selected by
    fn message_type() -> MessageType;

    /// Validate the first octet is appropriate for this message class.
    ///
    /// Only fails when `decode` is called directly with a mismatched header.
    fn validate_header(header: &FirstOctet) -> DecodeResult<()> {
        if header.message_type() != Self::message_type() {
            return Err(DecodeError::UnexpectedMessageType {
                expected: Self::message_type(),
                actual: header.message_type(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_exact_bytes() {
        let data: [u8; 4] = [0x01, 0x02, 0x03, 0x04];
        let mut cursor = ByteCursor::new(&data[..]);

        assert_eq!(cursor.read_one().unwrap(), 0x01);
        assert_eq!(&cursor.read(2).unwrap()[..], &[0x02, 0x03]);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn read_past_end_is_truncated() {
        let data: [u8; 2] = [0xAA, 0xBB];
        let mut cursor = ByteCursor::new(&data[..]);
        cursor.read_one().unwrap();

        let err = cursor.read(4).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedInput {
                position: 1,
                needed: 4,
                available: 1,
            }
        );
    }

    #[test]
    fn read_one_on_empty_input() {
        let mut cursor = ByteCursor::new(&[0u8; 0][..]);
        assert!(matches!(
            cursor.read_one(),
            Err(DecodeError::TruncatedInput { needed: 1, available: 0, .. })
        ));
    }

    #[test]
    fn read_array_and_skip() {
        let data: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut cursor = ByteCursor::new(Bytes::copy_from_slice(&data));

        cursor.skip(2).unwrap();
        let array: [u8; 7] = cursor.read_array().unwrap();
        assert_eq!(array, [3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(cursor.position(), 9);
        assert!(cursor.skip(1).is_err());
    }

    #[test]
    fn zero_length_read_is_empty() {
        let mut cursor = ByteCursor::new(&[0u8; 0][..]);
        assert!(cursor.read(0).unwrap().is_empty());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            DecodeError::InvalidAddressType(0x50).to_string(),
            "Invalid address type: 0x50"
        );
        assert_eq!(
            DecodeError::UnsupportedCodingScheme(0x0C).to_string(),
            "Unsupported data coding scheme: 0x0c"
        );
    }
}
