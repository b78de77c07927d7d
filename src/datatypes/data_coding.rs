// ABOUTME: TP-DCS data coding scheme selection and user data text decoding
// ABOUTME: Dispatches to the GSM 7-bit, 8-bit (Latin-1) or 16-bit (UTF-16BE) decoder

use crate::codec::{ByteCursor, DecodeError, DecodeResult};
use crate::datatypes::gsm7;
use bytes::Buf;
use num_enum::TryFromPrimitive;
use std::fmt;

const RESERVED_GROUP_MASK: u8 = 0b1110_0000;
const MESSAGE_CLASS_PRESENT: u8 = 0b0001_0000;
const ALPHABET_SHIFT: u8 = 2;
const TWO_BIT_MASK: u8 = 0b11;

/// Character set selected by bits 3-2 of the coding scheme octet
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// GSM 7-bit default alphabet, septet packed
    Gsm7 = 0,
    /// One octet per character, read as Latin-1
    EightBit = 1,
    /// Big-endian 16-bit code units
    Ucs2 = 2,
}

impl Alphabet {
    /// Returns the character set name for this alphabet
    pub fn charset_name(&self) -> &'static str {
        match self {
            Alphabet::Gsm7 => "GSM 7-bit Default",
            Alphabet::EightBit => "ISO-8859-1",
            Alphabet::Ucs2 => "UTF-16BE",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.charset_name())
    }
}

/// Message class for SMS delivery
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MessageClass {
    /// Class 0: displayed immediately, not stored
    Flash,
    /// Class 1: mobile equipment specific
    MobileEquipment,
    /// Class 2: stored on the SIM
    SimSpecific,
    /// Class 3: terminal equipment specific
    TerminalEquipment,
}

impl MessageClass {
    fn from_bits(bits: u8) -> Self {
        match bits & TWO_BIT_MASK {
            0 => MessageClass::Flash,
            1 => MessageClass::MobileEquipment,
            2 => MessageClass::SimSpecific,
            _ => MessageClass::TerminalEquipment,
        }
    }

    /// Returns a human-readable description of the message class
    pub fn description(&self) -> &'static str {
        match self {
            MessageClass::Flash => "Flash SMS (immediate display)",
            MessageClass::MobileEquipment => "Mobile Equipment specific",
            MessageClass::SimSpecific => "SIM card storage",
            MessageClass::TerminalEquipment => "Terminal Equipment specific",
        }
    }
}

/// A validated coding scheme octet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DataCodingScheme {
    raw: u8,
    alphabet: Alphabet,
}

impl DataCodingScheme {
    /// Validates a raw coding scheme octet.
    ///
    /// Only the general data coding group without compression is supported:
    /// any of bits 7-5 set, or the reserved alphabet value, is rejected.
    pub fn from_byte(value: u8) -> DecodeResult<Self> {
        if value & RESERVED_GROUP_MASK != 0 {
            return Err(DecodeError::UnsupportedCodingScheme(value));
        }
        let alphabet = Alphabet::try_from((value >> ALPHABET_SHIFT) & TWO_BIT_MASK)
            .map_err(|_| DecodeError::UnsupportedCodingScheme(value))?;
        Ok(Self {
            raw: value,
            alphabet,
        })
    }

    pub fn decode<B: Buf>(cursor: &mut ByteCursor<B>) -> DecodeResult<Self> {
        Self::from_byte(cursor.read_one()?)
    }

    pub fn raw(&self) -> u8 {
        self.raw
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the message class if bit 4 says one is present
    pub fn message_class(&self) -> Option<MessageClass> {
        (self.raw & MESSAGE_CLASS_PRESENT != 0).then(|| MessageClass::from_bits(self.raw))
    }

    /// Reads the user data length and user data, decoding it with this
    /// scheme's alphabet
    pub fn decode_text<B: Buf>(&self, cursor: &mut ByteCursor<B>) -> DecodeResult<TextPayload> {
        let text = match self.alphabet {
            Alphabet::Gsm7 => gsm7::decode_packed(cursor)?,
            Alphabet::EightBit => decode_latin1(cursor)?,
            Alphabet::Ucs2 => decode_ucs2(cursor)?,
        };
        Ok(TextPayload {
            text,
            alphabet: self.alphabet,
        })
    }
}

impl TryFrom<u8> for DataCodingScheme {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value)
    }
}

impl fmt::Display for DataCodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alphabet)?;
        if let Some(class) = self.message_class() {
            write!(f, " ({})", class.description())?;
        }
        Ok(())
    }
}

/// Decoded message body, tagged with the alphabet that produced it
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextPayload {
    pub text: String,
    pub alphabet: Alphabet,
}

impl TextPayload {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for TextPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn decode_latin1<B: Buf>(cursor: &mut ByteCursor<B>) -> DecodeResult<String> {
    let length = usize::from(cursor.read_one()?);
    let data = cursor.read(length)?;
    Ok(data.iter().copied().map(char::from).collect())
}

fn decode_ucs2<B: Buf>(cursor: &mut ByteCursor<B>) -> DecodeResult<String> {
    let length = usize::from(cursor.read_one()?);
    if length % 2 != 0 {
        return Err(DecodeError::FieldValidation {
            field: "user_data",
            reason: format!("16-bit user data length {length} is odd"),
        });
    }
    let data = cursor.read(length)?;
    let units = data
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| DecodeError::FieldValidation {
            field: "user_data",
            reason: format!("unpaired surrogate {:#06x}", e.unpaired_surrogate()),
        })
}
