//! Numeric signal-constraint ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::raw::{self, parse_decimal};

/// One of the five signal-constraint ranges.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum RangeKey {
    VruRange,
    Azimuth,
    Velocity,
    Rcs,
    Snr,
}

impl RangeKey {
    pub const ALL: [Self; 5] = [
        Self::VruRange,
        Self::Azimuth,
        Self::Velocity,
        Self::Rcs,
        Self::Snr,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::VruRange => "vruRange",
            Self::Azimuth => "azimuth",
            Self::Velocity => "velocity",
            Self::Rcs => "rcs",
            Self::Snr => "snr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VruRange => "VRU Range",
            Self::Azimuth => "VRU Azimuth Angle",
            Self::Velocity => "VRU Constituent Point Velocity",
            Self::Rcs => "VRU Constituent Point RCS",
            Self::Snr => "VRU Constituent Point SNR",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::VruRange => "m",
            Self::Azimuth => "deg",
            Self::Velocity => "m/s",
            Self::Rcs => "dBsm",
            Self::Snr => "dB",
        }
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which end of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    Min,
    Max,
}

impl Bound {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// A `{min, max}` pair as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeInput {
    #[serde(deserialize_with = "raw::deserialize")]
    pub min: String,
    #[serde(deserialize_with = "raw::deserialize")]
    pub max: String,
}

impl RangeInput {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn bound(&self, bound: Bound) -> &str {
        match bound {
            Bound::Min => &self.min,
            Bound::Max => &self.max,
        }
    }

    /// Parsed bounds, when both ends are finite numbers.
    ///
    /// Ordering is not checked here.
    pub fn parse_bounds(&self) -> Option<RangeBounds> {
        Some(RangeBounds {
            min: parse_decimal(&self.min)?,
            max: parse_decimal(&self.max)?,
        })
    }

    /// Both ends numeric and `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.parse_bounds().is_some_and(|bounds| bounds.is_ordered())
    }
}

impl fmt::Display for RangeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

impl FromStr for RangeInput {
    type Err = ParseError;

    /// Parse `MIN..MAX`. The ends are kept as raw text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once("..")
            .ok_or_else(|| ParseError::MalformedRange(s.to_string()))?;
        Ok(Self::new(min.trim(), max.trim()))
    }
}

/// Parsed numeric range, as sent in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    pub min: f64,
    pub max: f64,
}

impl RangeBounds {
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// The five signal-constraint ranges of a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Ranges {
    pub vru_range: RangeInput,
    pub azimuth: RangeInput,
    pub velocity: RangeInput,
    pub rcs: RangeInput,
    pub snr: RangeInput,
}

impl Default for Ranges {
    fn default() -> Self {
        Self {
            vru_range: RangeInput::new("0", "50"),
            azimuth: RangeInput::new("-45", "40"),
            velocity: RangeInput::new("0", "8"),
            rcs: RangeInput::new("-25", "-5"),
            snr: RangeInput::new("5", "30"),
        }
    }
}

impl Ranges {
    pub fn get(&self, key: RangeKey) -> &RangeInput {
        match key {
            RangeKey::VruRange => &self.vru_range,
            RangeKey::Azimuth => &self.azimuth,
            RangeKey::Velocity => &self.velocity,
            RangeKey::Rcs => &self.rcs,
            RangeKey::Snr => &self.snr,
        }
    }

    pub fn get_mut(&mut self, key: RangeKey) -> &mut RangeInput {
        match key {
            RangeKey::VruRange => &mut self.vru_range,
            RangeKey::Azimuth => &mut self.azimuth,
            RangeKey::Velocity => &mut self.velocity,
            RangeKey::Rcs => &mut self.rcs,
            RangeKey::Snr => &mut self.snr,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RangeKey, &RangeInput)> + '_ {
        RangeKey::ALL.iter().map(|key| (*key, self.get(*key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let ranges = Ranges::default();
        assert!(ranges.iter().all(|(_, range)| range.is_valid()));
    }

    #[test]
    fn test_inverted_and_non_numeric() {
        assert!(!RangeInput::new("50", "10").is_valid());
        assert!(!RangeInput::new("", "10").is_valid());
        assert!(!RangeInput::new("abc", "10").is_valid());
        assert!(!RangeInput::new("1", "inf").is_valid());
        assert!(RangeInput::new("10", "10").is_valid());
        assert!(RangeInput::new(" -5.5 ", "0").is_valid());
    }

    #[test]
    fn test_parse_range_text() {
        let range: RangeInput = "-45..40".parse().unwrap();
        assert_eq!(range, RangeInput::new("-45", "40"));
        let range: RangeInput = "0.5..1.25".parse().unwrap();
        assert_eq!(range, RangeInput::new("0.5", "1.25"));
        assert!("10".parse::<RangeInput>().is_err());
    }
}
