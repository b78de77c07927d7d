// ABOUTME: SMS-SUBMIT message class: sender, service centre timestamp and body
// ABOUTME: Decoded in fixed field order after the first octet selects this class

use crate::codec::{ByteCursor, Decodable, DecodeResult};
use crate::datatypes::{
    AddressLength, DataCodingScheme, FirstOctet, HeaderFlags, MessageType, PhoneNumber,
    TextPayload, Timestamp,
};
use crate::decoder::DecodeOptions;
use bytes::Buf;
use tracing::trace;

/// A decoded SUBMIT unit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmsSubmit {
    pub flags: HeaderFlags,
    pub have_more_messages_to_send: bool,
    /// `None` when the address length octet is zero
    pub sender: Option<PhoneNumber>,
    pub protocol_identifier: u8,
    pub data_coding: DataCodingScheme,
    /// `None` when all seven timestamp octets are zero
    pub service_centre_timestamp: Option<Timestamp>,
    pub message: TextPayload,
}

impl Decodable for SmsSubmit {
    fn message_type() -> MessageType {
        MessageType::Submit
    }

    fn decode<B: Buf>(
        header: FirstOctet,
        cursor: &mut ByteCursor<B>,
        options: &DecodeOptions,
    ) -> DecodeResult<Self> {
        Self::validate_header(&header)?;

        let sender = PhoneNumber::decode(cursor, AddressLength::Digits)?;
        trace!("sender: {:?}", sender);

        let protocol_identifier = cursor.read_one()?;
        trace!("protocol_identifier: {:#04x}", protocol_identifier);

        let data_coding = DataCodingScheme::decode(cursor)?;
        trace!("data_coding: {}", data_coding);

        let service_centre_timestamp = Timestamp::decode(cursor, options.timezone_sign)?;
        trace!("service_centre_timestamp: {:?}", service_centre_timestamp);

        let message = data_coding.decode_text(cursor)?;
        trace!("message: {} characters", message.text.chars().count());

        Ok(SmsSubmit {
            flags: header.flags(),
            have_more_messages_to_send: header.more_messages_to_send(),
            sender,
            protocol_identifier,
            data_coding,
            service_centre_timestamp,
            message,
        })
    }
}
