// ABOUTME: Semi-octet service centre timestamp (TP-SCTS) decoding
// ABOUTME: Seven swapped-nibble BCD octets with a quarter-hour timezone, or absent when all zero

use crate::codec::{ByteCursor, DecodeResult};
use crate::decoder::TimezoneSign;
use bytes::Buf;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use std::fmt;

/// Encoded width of a timestamp field
pub const TIMESTAMP_LEN: usize = 7;

/// Two-digit years below this belong to the 2000s
const YEAR_PIVOT: u16 = 80;

/// Bit 3 of the raw timezone octet marks a negative offset
const TIMEZONE_SIGN_BIT: u8 = 0x08;

/// A calendar timestamp with a fixed UTC offset
///
/// Fields are stored as decoded, without calendar validation;
/// use [`Timestamp::to_datetime`] for a checked `chrono` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub utc_offset_minutes: i16,
}

impl Timestamp {
    /// Reads a 7-octet timestamp. An all-zero encoding means "no timestamp"
    /// and yields `None`.
    pub fn decode<B: Buf>(
        cursor: &mut ByteCursor<B>,
        timezone_sign: TimezoneSign,
    ) -> DecodeResult<Option<Self>> {
        let raw: [u8; TIMESTAMP_LEN] = cursor.read_array()?;
        Ok(Self::from_semi_octets(raw, timezone_sign))
    }

    /// Interprets already-read timestamp octets
    pub fn from_semi_octets(raw: [u8; TIMESTAMP_LEN], timezone_sign: TimezoneSign) -> Option<Self> {
        if raw.iter().all(|&octet| octet == 0) {
            return None;
        }

        let [year, month, day, hour, minute, second, timezone] = raw;

        let year = u16::from(swap_nibbles(year));
        let year = if year < YEAR_PIVOT { year + 2000 } else { year + 1900 };

        let quarters = match timezone_sign {
            TimezoneSign::Apply => {
                let magnitude = i16::from(swap_nibbles(timezone & !TIMEZONE_SIGN_BIT));
                if timezone & TIMEZONE_SIGN_BIT != 0 {
                    -magnitude
                } else {
                    magnitude
                }
            }
            TimezoneSign::Ignore => i16::from(swap_nibbles(timezone)),
        };

        Some(Self {
            year,
            month: swap_nibbles(month),
            day: swap_nibbles(day),
            hour: swap_nibbles(hour),
            minute: swap_nibbles(minute),
            second: swap_nibbles(second),
            utc_offset_minutes: quarters * 15,
        })
    }

    /// Returns the timestamp as a `chrono` value, or `None` if the decoded
    /// fields do not form a valid date, time or offset
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(i32::from(self.utc_offset_minutes) * 60)?;
        let naive = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )?
        .and_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )?;
        offset.from_local_datetime(&naive).single()
    }
}

/// Semi-octet to decimal: the low nibble is the tens digit
fn swap_nibbles(octet: u8) -> u8 {
    (octet & 0x0F) * 10 + (octet >> 4)
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.utc_offset_minutes < 0 { '-' } else { '+' };
        let offset = self.utc_offset_minutes.unsigned_abs();
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} {}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            sign,
            offset / 60,
            offset % 60
        )
    }
}
