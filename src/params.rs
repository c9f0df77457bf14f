//! Strongly typed parameter enumerations for the ADXL34x driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Each enum
//! covers every value its register field can hold, so decoding a field read back
//! from the device never fails.
//!
//! # Examples
//!
//! ```rust
//! use adxl34x::params::{DataRate, Range};
//!
//! let rate = DataRate::Hz100;
//! let range = Range::G8;
//! assert_eq!(u8::from(rate), 0b1010);
//! assert_eq!(range.g(), 8);
//! ```

use modular_bitfield::prelude::Specifier;

/// Raw value that does not fit the targeted register field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidCode(pub u8);

/// Output data rate codes encoded in `BW_RATE[3:0]`.
///
/// The output bandwidth is half of the listed rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 4]
pub enum DataRate {
    /// 0.10 Hz output data rate.
    Hz0_10 = 0b0000,
    /// 0.20 Hz output data rate.
    Hz0_20 = 0b0001,
    /// 0.39 Hz output data rate.
    Hz0_39 = 0b0010,
    /// 0.78 Hz output data rate.
    Hz0_78 = 0b0011,
    /// 1.56 Hz output data rate.
    Hz1_56 = 0b0100,
    /// 3.13 Hz output data rate.
    Hz3_13 = 0b0101,
    /// 6.25 Hz output data rate.
    Hz6_25 = 0b0110,
    /// 12.5 Hz output data rate.
    Hz12_5 = 0b0111,
    /// 25 Hz output data rate.
    Hz25 = 0b1000,
    /// 50 Hz output data rate.
    Hz50 = 0b1001,
    /// 100 Hz output data rate (power-on default).
    Hz100 = 0b1010,
    /// 200 Hz output data rate.
    Hz200 = 0b1011,
    /// 400 Hz output data rate.
    Hz400 = 0b1100,
    /// 800 Hz output data rate.
    Hz800 = 0b1101,
    /// 1600 Hz output data rate.
    Hz1600 = 0b1110,
    /// 3200 Hz output data rate.
    Hz3200 = 0b1111,
}

impl DataRate {
    /// Every data rate code, slowest first.
    pub const ALL: [DataRate; 16] = [
        Self::Hz0_10,
        Self::Hz0_20,
        Self::Hz0_39,
        Self::Hz0_78,
        Self::Hz1_56,
        Self::Hz3_13,
        Self::Hz6_25,
        Self::Hz12_5,
        Self::Hz25,
        Self::Hz50,
        Self::Hz100,
        Self::Hz200,
        Self::Hz400,
        Self::Hz800,
        Self::Hz1600,
        Self::Hz3200,
    ];

    /// Returns the nominal output data rate in millihertz.
    pub const fn millihertz(self) -> u32 {
        match self {
            Self::Hz0_10 => 100,
            Self::Hz0_20 => 200,
            Self::Hz0_39 => 390,
            Self::Hz0_78 => 780,
            Self::Hz1_56 => 1_560,
            Self::Hz3_13 => 3_130,
            Self::Hz6_25 => 6_250,
            Self::Hz12_5 => 12_500,
            Self::Hz25 => 25_000,
            Self::Hz50 => 50_000,
            Self::Hz100 => 100_000,
            Self::Hz200 => 200_000,
            Self::Hz400 => 400_000,
            Self::Hz800 => 800_000,
            Self::Hz1600 => 1_600_000,
            Self::Hz3200 => 3_200_000,
        }
    }

    /// Decodes the low nibble of a `BW_RATE` value; upper bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0x0F) as usize]
    }
}

impl From<DataRate> for u8 {
    fn from(rate: DataRate) -> Self {
        rate as u8
    }
}

impl TryFrom<u8> for DataRate {
    type Error = InvalidCode;

    fn try_from(code: u8) -> core::result::Result<Self, Self::Error> {
        if code > 0x0F {
            return Err(InvalidCode(code));
        }
        Ok(Self::from_bits(code))
    }
}

/// Measurement range codes encoded in `DATA_FORMAT[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Range {
    /// ±2 g (power-on default).
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

impl Range {
    /// Every range code, narrowest first.
    pub const ALL: [Range; 4] = [Self::G2, Self::G4, Self::G8, Self::G16];

    /// Returns the full-scale magnitude in g.
    pub const fn g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Decodes the low two bits of a `DATA_FORMAT` value; upper bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0x03) as usize]
    }
}

impl From<Range> for u8 {
    fn from(range: Range) -> Self {
        range as u8
    }
}

impl TryFrom<u8> for Range {
    type Error = InvalidCode;

    fn try_from(code: u8) -> core::result::Result<Self, Self::Error> {
        if code > 0x03 {
            return Err(InvalidCode(code));
        }
        Ok(Self::from_bits(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_rate_table_is_indexed_by_code() {
        for (code, rate) in DataRate::ALL.iter().enumerate() {
            assert_eq!(u8::from(*rate), code as u8);
        }
        assert_eq!(u8::from(DataRate::Hz3200), 0b1111);
        assert_eq!(u8::from(DataRate::Hz0_10), 0b0000);
    }

    #[test]
    fn data_rate_is_monotonic_in_code() {
        for pair in DataRate::ALL.windows(2) {
            assert!(pair[0].millihertz() < pair[1].millihertz());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn data_rate_from_bits_masks_upper_nibble() {
        assert_eq!(DataRate::from_bits(0x1A), DataRate::Hz100);
        assert_eq!(DataRate::from_bits(0xFF), DataRate::Hz3200);
    }

    #[test]
    fn data_rate_try_from_rejects_wide_values() {
        assert_eq!(DataRate::try_from(0x0D), Ok(DataRate::Hz800));
        assert_eq!(DataRate::try_from(0x10), Err(InvalidCode(0x10)));
    }

    #[test]
    fn range_codes_match_datasheet() {
        assert_eq!(u8::from(Range::G2), 0b00);
        assert_eq!(u8::from(Range::G4), 0b01);
        assert_eq!(u8::from(Range::G8), 0b10);
        assert_eq!(u8::from(Range::G16), 0b11);
        assert_eq!(Range::from_bits(0xAA), Range::G8);
        assert_eq!(Range::try_from(4), Err(InvalidCode(4)));
        assert_eq!(Range::G16.g(), 16);
    }
}
