//! Decoder for GSM 03.40 / 3GPP TS 23.040 short message PDUs.
//!
//! Input starts at the PDU first octet; a service centre address prefix, if
//! the source has one, must be stripped by the caller. The first octet
//! selects an [`SmsSubmit`] or [`SmsDeliver`] unit, and the remaining fields
//! are read in their fixed order from a single-pass [`ByteCursor`].
//!
//! # Examples
//!
//! ```rust
//! use sms_pdu::{decode_unit_hex, SmsUnit};
//!
//! let unit = decode_unit_hex("040B911346610089F60000993092516195800AE8329BFD4697D9EC37")?;
//!
//! if let SmsUnit::Submit(submit) = &unit {
//!     assert_eq!(submit.sender.as_ref().map(|s| s.digits()), Some("31641600986"));
//!     assert_eq!(unit.text(), "hellohello");
//! }
//! # Ok::<(), sms_pdu::DecodeError>(())
//! ```
//!
//! Decoding options are set on a [`Decoder`]:
//!
//! ```rust
//! use sms_pdu::{DecodeOptions, Decoder, TimezoneSign};
//!
//! let decoder = Decoder::new(DecodeOptions::new().timezone_sign(TimezoneSign::Ignore));
//! let unit = decoder.decode_hex("11000B916407281553F80000AA0AE8329BFD4697D9EC37")?;
//! assert_eq!(unit.text(), "hellohello");
//! # Ok::<(), sms_pdu::DecodeError>(())
//! ```

pub mod codec;
pub mod datatypes;
pub mod decoder;
pub mod hex;
pub mod pdu;


pub use codec::{ByteCursor, Decodable, DecodeError, DecodeResult};
pub use decoder::{DecodeOptions, Decoder, TimezoneSign, decode_unit, decode_unit_hex};
pub use pdu::{SmsDeliver, SmsSubmit, SmsUnit};
