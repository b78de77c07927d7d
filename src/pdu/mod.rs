// Message classes carried by a PDU
//
// The first octet selects the class; `SmsUnit::decode` reads it and hands
// the cursor to the matching `Decodable` implementation.

mod deliver;
mod submit;

pub use deliver::SmsDeliver;
pub use submit::SmsSubmit;

use crate::codec::{ByteCursor, Decodable, DecodeResult};
use crate::datatypes::{FirstOctet, HeaderFlags, MessageType, TextPayload};
use crate::decoder::DecodeOptions;
use bytes::Buf;
use tracing::debug;

/// One decoded short message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SmsUnit {
    Submit(SmsSubmit),
    Deliver(SmsDeliver),
}

impl SmsUnit {
    /// Reads the first octet and decodes the class it selects
    pub fn decode<B: Buf>(
        cursor: &mut ByteCursor<B>,
        options: &DecodeOptions,
    ) -> DecodeResult<Self> {
        let header = FirstOctet::from_byte(cursor.read_one()?)?;
        debug!(
            "Decoding {} PDU (first octet {:#04x})",
            header.message_type(),
            header.raw()
        );

        let unit = match header.message_type() {
            MessageType::Submit => SmsUnit::Submit(SmsSubmit::decode(header, cursor, options)?),
            MessageType::Deliver => {
                SmsUnit::Deliver(SmsDeliver::decode(header, cursor, options)?)
            }
        };

        debug!(
            "Decoded {} PDU in {} bytes",
            unit.message_type(),
            cursor.position()
        );
        Ok(unit)
    }

    pub fn message_type(&self) -> MessageType {
        match self {
            SmsUnit::Submit(_) => MessageType::Submit,
            SmsUnit::Deliver(_) => MessageType::Deliver,
        }
    }

    pub fn flags(&self) -> HeaderFlags {
        match self {
            SmsUnit::Submit(submit) => submit.flags,
            SmsUnit::Deliver(deliver) => deliver.flags,
        }
    }

    pub fn message(&self) -> &TextPayload {
        match self {
            SmsUnit::Submit(submit) => &submit.message,
            SmsUnit::Deliver(deliver) => &deliver.message,
        }
    }

    /// Returns the decoded message text
    pub fn text(&self) -> &str {
        self.message().as_str()
    }

    pub fn as_submit(&self) -> Option<&SmsSubmit> {
        match self {
            SmsUnit::Submit(submit) => Some(submit),
            SmsUnit::Deliver(_) => None,
        }
    }

    pub fn as_deliver(&self) -> Option<&SmsDeliver> {
        match self {
            SmsUnit::Deliver(deliver) => Some(deliver),
            SmsUnit::Submit(_) => None,
        }
    }
}

impl From<SmsSubmit> for SmsUnit {
    fn from(submit: SmsSubmit) -> Self {
        SmsUnit::Submit(submit)
    }
}

impl From<SmsDeliver> for SmsUnit {
    fn from(deliver: SmsDeliver) -> Self {
        SmsUnit::Deliver(deliver)
    }
}
