//! Chip families and their address-space / capacity profiles.
//!
//! Both supported chips put the same kind of address table at the start of
//! the external ROM; they only differ in how far the table extends and how
//! much sample data the ROM can hold behind it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, ExtractResult};

/// First byte of the address table. Bytes before it are a reserved header.
pub const ADDRESS_SECTION_START: usize = 0x8;

/// Size of one address table record in bytes.
pub const RECORD_STRIDE: usize = 8;

const MSM6295_ADDRESS_SECTION_END: usize = 0x3FF;
const MSM6295_MAX_SAMPLE_SECTION_SIZE: usize = 256 * 1024;

const TT6297_ADDRESS_SECTION_END: usize = 0xFFF;
const TT6297_MAX_SAMPLE_SECTION_SIZE: usize = 16 * 1024 * 1024;

/// Supported sound chip families.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChipType {
    /// OKI MSM6295: small address table, 0.25 MiB of samples.
    Msm6295,
    /// TT6297: larger address table, 16 MiB of samples.
    Tt6297,
}

impl ChipType {
    /// Map the numeric command-line selector to a chip.
    pub fn from_selector(selector: u32) -> ExtractResult<Self> {
        match selector {
            1 => Ok(ChipType::Msm6295),
            2 => Ok(ChipType::Tt6297),
            other => Err(ExtractError::UnknownChipType(other.to_string())),
        }
    }

    /// Numeric selector used on the command line.
    pub fn selector(self) -> u32 {
        match self {
            ChipType::Msm6295 => 1,
            ChipType::Tt6297 => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChipType::Msm6295 => "MSM6295",
            ChipType::Tt6297 => "TT6297",
        }
    }

    pub fn profile(self) -> ChipProfile {
        match self {
            ChipType::Msm6295 => ChipProfile {
                chip: self,
                address_section_start: ADDRESS_SECTION_START,
                address_section_end: MSM6295_ADDRESS_SECTION_END,
                max_sample_section_size: MSM6295_MAX_SAMPLE_SECTION_SIZE,
            },
            ChipType::Tt6297 => ChipProfile {
                chip: self,
                address_section_start: ADDRESS_SECTION_START,
                address_section_end: TT6297_ADDRESS_SECTION_END,
                max_sample_section_size: TT6297_MAX_SAMPLE_SECTION_SIZE,
            },
        }
    }
}

impl fmt::Display for ChipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the numeric selector (`1`, `2`) or the chip name in any case.
impl FromStr for ChipType {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(selector) = trimmed.parse::<u32>() {
            return ChipType::from_selector(selector);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "msm6295" => Ok(ChipType::Msm6295),
            "tt6297" => Ok(ChipType::Tt6297),
            _ => Err(ExtractError::UnknownChipType(trimmed.to_string())),
        }
    }
}

/// Physical limits of one chip family's external ROM.
///
/// Resolved once per run and passed explicitly through the pipeline.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ChipProfile {
    pub chip: ChipType,
    /// Offset of the first table record.
    pub address_section_start: usize,
    /// Exclusive upper bound of the table region.
    pub address_section_end: usize,
    /// Largest sample section (and largest single sound) the chip can address.
    pub max_sample_section_size: usize,
}

impl ChipProfile {
    /// Resolve a command-line selector (`"1"`, `"2"`, or a chip name).
    pub fn resolve(selector: &str) -> ExtractResult<Self> {
        selector.parse::<ChipType>().map(ChipType::profile)
    }

    /// Largest image size that can still belong to this chip.
    pub fn max_image_len(&self) -> usize {
        self.address_section_end + self.max_sample_section_size
    }

    pub fn name(&self) -> &'static str {
        self.chip.as_str()
    }
}
