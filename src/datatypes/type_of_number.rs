use num_enum::TryFromPrimitive;

/// Type-of-number octet that precedes the digits of an address.
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeOfNumber {
    Unknown = 0x00,
    International = 0x81,
    National = 0x91,
}
