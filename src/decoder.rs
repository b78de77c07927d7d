// Top-level decode entry points
//
// A `Decoder` owns the options that tune field interpretation and turns a
// byte source into one `SmsUnit`. Each call builds its own cursor, so a
// decoder can be shared freely and reused across PDUs.

use crate::codec::{ByteCursor, DecodeResult};
use crate::hex::{self, HexData};
use crate::pdu::SmsUnit;
use bytes::Buf;
use tracing::{debug, trace};

/// How the sign bit of the timestamp timezone octet is treated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimezoneSign {
    /// Bit 3 of the raw timezone octet marks a negative offset
    #[default]
    Apply,
    /// Treat the timezone octet as an unsigned quarter-hour count, as some
    /// older decoders do. Negative offsets come out positive.
    Ignore,
}

/// Options controlling how fields are interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub timezone_sign: TimezoneSign,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how the timezone sign bit is treated
    pub fn timezone_sign(mut self, timezone_sign: TimezoneSign) -> Self {
        self.timezone_sign = timezone_sign;
        self
    }
}

/// Decodes SMS-SUBMIT and SMS-DELIVER units with a fixed set of options
///
/// # Examples
///
/// ```rust
/// use sms_pdu::{Decoder, SmsUnit};
///
/// let unit = Decoder::default()
///     .decode_hex("11000B916407281553F80000AA0AE8329BFD4697D9EC37")
///     .unwrap();
///
/// match unit {
///     SmsUnit::Deliver(deliver) => assert_eq!(deliver.message.text, "hellohello"),
///     SmsUnit::Submit(_) => unreachable!(),
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode one unit from the start of `buf`.
    ///
    /// Bytes left over after the message body are ignored.
    pub fn decode<B: Buf>(&self, buf: B) -> DecodeResult<SmsUnit> {
        let mut cursor = ByteCursor::new(buf);
        let unit = self.decode_cursor(&mut cursor)?;
        if cursor.remaining() > 0 {
            debug!(
                "Ignoring {} trailing bytes after {} PDU",
                cursor.remaining(),
                unit.message_type()
            );
        }
        Ok(unit)
    }

    /// Decode one unit from a caller-owned cursor.
    ///
    /// On success the cursor is left just past the message body. On error
    /// its position is unspecified and it must not be reused.
    pub fn decode_cursor<B: Buf>(&self, cursor: &mut ByteCursor<B>) -> DecodeResult<SmsUnit> {
        SmsUnit::decode(cursor, &self.options)
    }

    /// Decode one unit from a hex string
    pub fn decode_hex(&self, input: &str) -> DecodeResult<SmsUnit> {
        let bytes = hex::decode_hex(input)?;
        trace!("PDU bytes: {}", HexData(&bytes));
        self.decode(&bytes[..])
    }
}

/// Decode one unit with the default options
pub fn decode_unit<B: Buf>(buf: B) -> DecodeResult<SmsUnit> {
    Decoder::default().decode(buf)
}

/// Decode one unit from a hex string with the default options
pub fn decode_unit_hex(input: &str) -> DecodeResult<SmsUnit> {
    Decoder::default().decode_hex(input)
}
