mod address;
mod data_coding;
mod first_octet;
pub mod gsm7;
mod timestamp;
mod type_of_number;
mod validity_period;

pub use address::{AddressLength, PhoneNumber};
pub use data_coding::{Alphabet, DataCodingScheme, MessageClass, TextPayload};
pub use first_octet::{FirstOctet, HeaderFlags, MessageType};
pub use timestamp::{TIMESTAMP_LEN, Timestamp};
pub use type_of_number::TypeOfNumber;
pub use validity_period::{UNSUPPORTED_VALIDITY_LEN, ValidityPeriod, ValidityPeriodFormat};
