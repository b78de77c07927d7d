// ABOUTME: SMS-DELIVER message class: reference, recipient, validity period and body
// ABOUTME: The validity period format comes from bits 4-3 of the first octet

use crate::codec::{ByteCursor, Decodable, DecodeResult};
use crate::datatypes::{
    AddressLength, DataCodingScheme, FirstOctet, HeaderFlags, MessageType, PhoneNumber,
    TextPayload, ValidityPeriod,
};
use crate::decoder::DecodeOptions;
use bytes::Buf;
use tracing::trace;

/// A decoded DELIVER unit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmsDeliver {
    pub flags: HeaderFlags,
    pub reject_duplicates: bool,
    pub message_reference: u8,
    /// `None` when the address length octet is zero
    pub recipient: Option<PhoneNumber>,
    pub protocol_identifier: u8,
    pub data_coding: DataCodingScheme,
    pub validity_period: ValidityPeriod,
    pub message: TextPayload,
}

impl Decodable for SmsDeliver {
    fn message_type() -> MessageType {
        MessageType::Deliver
    }

    fn decode<B: Buf>(
        header: FirstOctet,
        cursor: &mut ByteCursor<B>,
        _options: &DecodeOptions,
    ) -> DecodeResult<Self> {
        Self::validate_header(&header)?;

        let message_reference = cursor.read_one()?;
        trace!("message_reference: {}", message_reference);

        let recipient = PhoneNumber::decode(cursor, AddressLength::Digits)?;
        trace!("recipient: {:?}", recipient);

        let protocol_identifier = cursor.read_one()?;
        trace!("protocol_identifier: {:#04x}", protocol_identifier);

        let data_coding = DataCodingScheme::decode(cursor)?;
        trace!("data_coding: {}", data_coding);

        let validity_period = ValidityPeriod::decode(header.validity_period_format(), cursor)?;
        trace!("validity_period: {}", validity_period);

        let message = data_coding.decode_text(cursor)?;
        trace!("message: {} characters", message.text.chars().count());

        Ok(SmsDeliver {
            flags: header.flags(),
            reject_duplicates: header.reject_duplicates(),
            message_reference,
            recipient,
            protocol_identifier,
            data_coding,
            validity_period,
            message,
        })
    }
}
