// ABOUTME: Bitfield view of the PDU first octet (message type indicator and header flags)
// ABOUTME: Message type is validated on construction; class-specific bits are exposed as accessors

use crate::codec::{DecodeError, DecodeResult};
use crate::datatypes::ValidityPeriodFormat;
use num_enum::TryFromPrimitive;
use std::fmt;

const MESSAGE_TYPE_MASK: u8 = 0b0000_0011;
const CLASS_SPECIFIC_FLAG: u8 = 0b0000_0100;
const VALIDITY_PERIOD_FORMAT_SHIFT: u8 = 3;
const STATUS_REPORT_REQUESTED: u8 = 0b0010_0000;
const USER_DATA_HEADER_INDICATOR: u8 = 0b0100_0000;
const REPLY_PATH: u8 = 0b1000_0000;

/// Message class selected by bits 1-0 of the first octet
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageType {
    Submit = 0b00,
    Deliver = 0b01,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::Submit => write!(f, "SUBMIT"),
            MessageType::Deliver => write!(f, "DELIVER"),
        }
    }
}

/// Flags shared by both message classes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HeaderFlags {
    pub have_reply_path: bool,
    pub have_udhi: bool,
    pub status_report_requested: bool,
}

/// The first octet of a PDU
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FirstOctet {
    raw: u8,
    message_type: MessageType,
}

impl FirstOctet {
    /// Creates a first octet from its raw value, rejecting message types
    /// other than SUBMIT and DELIVER
    pub fn from_byte(value: u8) -> DecodeResult<Self> {
        let message_type = MessageType::try_from(value & MESSAGE_TYPE_MASK)
            .map_err(|_| DecodeError::UnsupportedMessageType(value))?;
        Ok(Self {
            raw: value,
            message_type,
        })
    }

    pub fn raw(&self) -> u8 {
        self.raw
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn flags(&self) -> HeaderFlags {
        HeaderFlags {
            have_reply_path: self.raw & REPLY_PATH != 0,
            have_udhi: self.raw & USER_DATA_HEADER_INDICATOR != 0,
            status_report_requested: self.raw & STATUS_REPORT_REQUESTED != 0,
        }
    }

    /// Bit 2 for SUBMIT
    pub fn more_messages_to_send(&self) -> bool {
        self.raw & CLASS_SPECIFIC_FLAG != 0
    }

    /// Bit 2 for DELIVER
    pub fn reject_duplicates(&self) -> bool {
        self.raw & CLASS_SPECIFIC_FLAG != 0
    }

    /// Bits 4-3 for DELIVER
    pub fn validity_period_format(&self) -> ValidityPeriodFormat {
        ValidityPeriodFormat::from_bits(self.raw >> VALIDITY_PERIOD_FORMAT_SHIFT)
    }
}

impl TryFrom<u8> for FirstOctet {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value)
    }
}

impl From<FirstOctet> for u8 {
    fn from(octet: FirstOctet) -> Self {
        octet.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_dispatch() {
        assert_eq!(
            FirstOctet::from_byte(0x04).unwrap().message_type(),
            MessageType::Submit
        );
        assert_eq!(
            FirstOctet::from_byte(0x11).unwrap().message_type(),
            MessageType::Deliver
        );
    }

    #[test]
    fn test_unsupported_message_types() {
        assert_eq!(
            FirstOctet::from_byte(0x02),
            Err(DecodeError::UnsupportedMessageType(0x02))
        );
        assert_eq!(
            FirstOctet::try_from(0xFFu8),
            Err(DecodeError::UnsupportedMessageType(0xFF))
        );
    }

    #[test]
    fn test_common_flags() {
        let octet = FirstOctet::from_byte(0b1110_0000).unwrap();
        assert_eq!(
            octet.flags(),
            HeaderFlags {
                have_reply_path: true,
                have_udhi: true,
                status_report_requested: true,
            }
        );

        let octet = FirstOctet::from_byte(0b0100_0001).unwrap();
        let flags = octet.flags();
        assert!(!flags.have_reply_path);
        assert!(flags.have_udhi);
        assert!(!flags.status_report_requested);
    }

    #[test]
    fn test_class_specific_bits() {
        let octet = FirstOctet::from_byte(0b0000_0100).unwrap();
        assert!(octet.more_messages_to_send());

        let octet = FirstOctet::from_byte(0b0001_0101).unwrap();
        assert!(octet.reject_duplicates());
        assert_eq!(octet.validity_period_format(), ValidityPeriodFormat::Relative);

        let octet = FirstOctet::from_byte(0b0001_1001).unwrap();
        assert!(!octet.reject_duplicates());
        assert_eq!(octet.validity_period_format(), ValidityPeriodFormat::Absolute);
    }

    #[test]
    fn test_raw_roundtrip() {
        let octet = FirstOctet::from_byte(0x31).unwrap();
        assert_eq!(u8::from(octet), 0x31);
        assert_eq!(octet.raw(), 0x31);
    }
}
