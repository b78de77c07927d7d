// ABOUTME: TP-VP validity period decoding for the four formats selected by the first octet
// ABOUTME: Relative periods become durations; enhanced and absolute periods are skipped unparsed

use crate::codec::{ByteCursor, DecodeResult};
use bytes::Buf;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Encoded width of the enhanced and absolute formats
pub const UNSUPPORTED_VALIDITY_LEN: usize = 7;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// Validity period format carried in bits 4-3 of a DELIVER first octet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidityPeriodFormat {
    NotPresent,
    Enhanced,
    Relative,
    Absolute,
}

impl ValidityPeriodFormat {
    /// Maps the two low bits of `bits`; every value is a known format
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => ValidityPeriodFormat::NotPresent,
            1 => ValidityPeriodFormat::Enhanced,
            2 => ValidityPeriodFormat::Relative,
            _ => ValidityPeriodFormat::Absolute,
        }
    }

    /// Number of octets the field occupies
    pub fn encoded_len(&self) -> usize {
        match self {
            ValidityPeriodFormat::NotPresent => 0,
            ValidityPeriodFormat::Relative => 1,
            ValidityPeriodFormat::Enhanced | ValidityPeriodFormat::Absolute => {
                UNSUPPORTED_VALIDITY_LEN
            }
        }
    }
}

/// How long the service centre should keep trying to deliver the message
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidityPeriod {
    #[default]
    NotPresent,
    Relative(Duration),
    /// Enhanced format present; its octets are not interpreted
    EnhancedUnsupported,
    /// Absolute format present; its octets are not interpreted
    AbsoluteUnsupported,
}

impl ValidityPeriod {
    pub fn decode<B: Buf>(
        format: ValidityPeriodFormat,
        cursor: &mut ByteCursor<B>,
    ) -> DecodeResult<Self> {
        match format {
            ValidityPeriodFormat::NotPresent => Ok(ValidityPeriod::NotPresent),
            ValidityPeriodFormat::Relative => {
                let value = cursor.read_one()?;
                Ok(ValidityPeriod::Relative(Self::relative_duration(value)))
            }
            ValidityPeriodFormat::Enhanced => {
                debug!("Skipping enhanced validity period, format not decoded");
                cursor.skip(UNSUPPORTED_VALIDITY_LEN)?;
                Ok(ValidityPeriod::EnhancedUnsupported)
            }
            ValidityPeriodFormat::Absolute => {
                debug!("Skipping absolute validity period, format not decoded");
                cursor.skip(UNSUPPORTED_VALIDITY_LEN)?;
                Ok(ValidityPeriod::AbsoluteUnsupported)
            }
        }
    }

    /// Converts a relative TP-VP octet into a duration
    pub fn relative_duration(value: u8) -> Duration {
        let value = u64::from(value);
        let seconds = match value {
            0..=143 => (value + 1) * 5 * MINUTE,
            144..=167 => 12 * HOUR + (value - 143) * 30 * MINUTE,
            168..=196 => (value - 166) * DAY,
            _ => (value - 192) * WEEK,
        };
        Duration::from_secs(seconds)
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, ValidityPeriod::NotPresent)
    }

    /// Returns the duration for a relative period
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            ValidityPeriod::Relative(duration) => Some(*duration),
            _ => None,
        }
    }
}

impl fmt::Display for ValidityPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidityPeriod::NotPresent => write!(f, "not present"),
            ValidityPeriod::EnhancedUnsupported => write!(f, "enhanced (not decoded)"),
            ValidityPeriod::AbsoluteUnsupported => write!(f, "absolute (not decoded)"),
            ValidityPeriod::Relative(duration) => {
                let seconds = duration.as_secs();
                if seconds % WEEK == 0 {
                    write!(f, "{} weeks", seconds / WEEK)
                } else if seconds % DAY == 0 {
                    write!(f, "{} days", seconds / DAY)
                } else {
                    write!(f, "{}h{:02}m", seconds / HOUR, (seconds % HOUR) / MINUTE)
                }
            }
        }
    }
}
