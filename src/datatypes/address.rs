// ABOUTME: Semi-octet phone number decoding for the originating/destination address fields
// ABOUTME: Validates the type-of-number octet and strips the trailing filler nibble

use crate::codec::{ByteCursor, DecodeError, DecodeResult};
use crate::datatypes::TypeOfNumber;
use bytes::Buf;
use std::fmt;

const SEMI_OCTET_DIGITS: &[u8; 16] = b"0123456789abcdef";

const FILLER: char = 'f';

/// Unit of the length octet that starts an address field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressLength {
    /// Length counts semi-octet digits; the type octet is not included.
    /// This is how TP-OA and TP-DA are encoded.
    Digits,
    /// Length counts octets, type octet included. The service centre
    /// address that modems prepend to a PDU is counted this way; callers
    /// stripping it before decoding can read it with this unit.
    Octets,
}

/// A decoded phone number and its type-of-number
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    type_of_number: TypeOfNumber,
    digits: String,
}

impl PhoneNumber {
    /// Decodes a length-prefixed address field.
    ///
    /// A zero length means "no address" and yields `None`. With
    /// [`AddressLength::Digits`] the type octet still follows an empty
    /// address; it is read and validated so the cursor stays aligned.
    pub fn decode<B: Buf>(
        cursor: &mut ByteCursor<B>,
        length_unit: AddressLength,
    ) -> DecodeResult<Option<Self>> {
        let length = usize::from(cursor.read_one()?);
        if length == 0 {
            if length_unit == AddressLength::Digits {
                let type_octet = cursor.read_one()?;
                parse_type_of_number(type_octet)?;
            }
            return Ok(None);
        }

        let octets = match length_unit {
            AddressLength::Digits => 1 + length.div_ceil(2),
            AddressLength::Octets => length,
        };

        let type_octet = cursor.read_one()?;
        let payload = cursor.read(octets - 1)?;
        Self::from_semi_octets(type_octet, &payload).map(Some)
    }

    /// Builds a number from its type octet and semi-octet payload.
    ///
    /// Each payload octet yields two digits, low nibble first.
    pub fn from_semi_octets(type_octet: u8, payload: &[u8]) -> DecodeResult<Self> {
        let type_of_number = parse_type_of_number(type_octet)?;

        let mut digits = String::with_capacity(payload.len() * 2);
        for &octet in payload {
            digits.push(char::from(SEMI_OCTET_DIGITS[usize::from(octet & 0x0F)]));
            digits.push(char::from(SEMI_OCTET_DIGITS[usize::from(octet >> 4)]));
        }
        let trimmed = digits.trim_end_matches(FILLER).len();
        digits.truncate(trimmed);

        Ok(Self {
            type_of_number,
            digits,
        })
    }

    pub fn type_of_number(&self) -> TypeOfNumber {
        self.type_of_number
    }

    /// Returns the digits as a string slice
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

fn parse_type_of_number(type_octet: u8) -> DecodeResult<TypeOfNumber> {
    TypeOfNumber::try_from(type_octet).map_err(|_| DecodeError::InvalidAddressType(type_octet))
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<tel:{}>", self.digits)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_over(data: &[u8]) -> ByteCursor<&[u8]> {
        ByteCursor::new(data)
    }

    fn decode(data: &[u8], unit: AddressLength) -> DecodeResult<Option<PhoneNumber>> {
        PhoneNumber::decode(&mut cursor_over(data), unit)
    }

    #[test]
    fn test_digit_counted_address_strips_filler() {
        // 3 digits "123" -> 0x21 0xF3
        let number = decode(&[0x03, 0x91, 0x21, 0xF3], AddressLength::Digits)
            .unwrap()
            .unwrap();
        assert_eq!(number.digits(), "123");
        assert_eq!(number.type_of_number(), TypeOfNumber::National);
        assert_eq!(number.len(), 3);
    }

    #[test]
    fn test_even_digit_count_has_no_filler() {
        let number = decode(
            &[0x0A, 0x81, 0x21, 0x43, 0x65, 0x87, 0x09],
            AddressLength::Digits,
        )
        .unwrap()
        .unwrap();
        assert_eq!(number.digits(), "1234567890");
        assert_eq!(number.type_of_number(), TypeOfNumber::International);
    }

    #[test]
    fn test_octet_counted_address() {
        // length 3 = type octet + 2 payload octets
        let mut cursor = cursor_over(&[0x03, 0x00, 0x21, 0xF3, 0xEE]);
        let number = PhoneNumber::decode(&mut cursor, AddressLength::Octets)
            .unwrap()
            .unwrap();
        assert_eq!(number.digits(), "123");
        assert_eq!(number.type_of_number(), TypeOfNumber::Unknown);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_consumes_exactly_the_address() {
        let mut cursor = cursor_over(&[0x05, 0x91, 0x21, 0x43, 0xF5, 0x7F]);
        PhoneNumber::decode(&mut cursor, AddressLength::Digits).unwrap();
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.read_one().unwrap(), 0x7F);
    }

    #[test]
    fn test_zero_length_is_absent() {
        let mut cursor = cursor_over(&[0x00, 0x91, 0x42]);
        assert_eq!(
            PhoneNumber::decode(&mut cursor, AddressLength::Digits).unwrap(),
            None
        );
        assert_eq!(cursor.position(), 2);

        let mut cursor = cursor_over(&[0x00, 0x42]);
        assert_eq!(
            PhoneNumber::decode(&mut cursor, AddressLength::Octets).unwrap(),
            None
        );
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_invalid_type_of_number() {
        let result = decode(&[0x03, 0x50, 0x21, 0xF3], AddressLength::Digits);
        assert_eq!(result, Err(DecodeError::InvalidAddressType(0x50)));
    }

    #[test]
    fn test_long_addresses_are_not_capped() {
        let mut data = vec![0x16, 0x91];
        data.extend([0x21; 11]);
        let number = decode(&data, AddressLength::Digits).unwrap().unwrap();
        assert_eq!(number.digits(), "1212121212121212121212");

        let mut data = vec![0x0D, 0x81];
        data.extend([0x21; 12]);
        let number = decode(&data, AddressLength::Octets).unwrap().unwrap();
        assert_eq!(number.len(), 24);
    }

    #[test]
    fn test_empty_address_type_is_validated() {
        assert_eq!(
            decode(&[0x00, 0x50], AddressLength::Digits),
            Err(DecodeError::InvalidAddressType(0x50))
        );
        assert!(matches!(
            decode(&[0x00], AddressLength::Digits),
            Err(DecodeError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_truncated_payload() {
        let result = decode(&[0x0B, 0x91, 0x13, 0x46], AddressLength::Digits);
        assert!(matches!(result, Err(DecodeError::TruncatedInput { .. })));
    }

    #[test]
    fn test_non_decimal_nibbles_render_as_hex() {
        let number = PhoneNumber::from_semi_octets(0x81, &[0xA1, 0xFB]).unwrap();
        assert_eq!(number.digits(), "1ab");
    }

    #[test]
    fn test_display() {
        let number = PhoneNumber::from_semi_octets(0x91, &[0x21, 0xF3]).unwrap();
        assert_eq!(number.to_string(), "<tel:123>");
    }
}
