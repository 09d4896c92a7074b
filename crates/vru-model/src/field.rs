//! Field identifiers, values and typed edits.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::enums::{Environment, GaitType, PathType, RadarMotion, Slope, TurnOption};
use crate::error::ParseError;
use crate::range::{RangeInput, RangeKey};

/// Unique key of a configurable field.
///
/// Serialized as its form key (`numVRUs`, `azimuth`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    RadarMotion,
    Environment,
    NumVrus,
    PathType,
    Slope,
    Turn,
    Gait,
    MinInterval,
    MinTrajLen,
    Range(RangeKey),
}

impl FieldKey {
    /// Every field in form order (scenario card first, then signal constraints).
    pub const ALL: [Self; 14] = [
        Self::RadarMotion,
        Self::Environment,
        Self::NumVrus,
        Self::PathType,
        Self::Slope,
        Self::Turn,
        Self::Gait,
        Self::MinInterval,
        Self::MinTrajLen,
        Self::Range(RangeKey::VruRange),
        Self::Range(RangeKey::Azimuth),
        Self::Range(RangeKey::Velocity),
        Self::Range(RangeKey::Rcs),
        Self::Range(RangeKey::Snr),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::RadarMotion => "radarMotion",
            Self::Environment => "environment",
            Self::NumVrus => "numVRUs",
            Self::PathType => "pathType",
            Self::Slope => "slope",
            Self::Turn => "turn",
            Self::Gait => "gait",
            Self::MinInterval => "minInterval",
            Self::MinTrajLen => "minTrajLen",
            Self::Range(range) => range.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RadarMotion => "Radar Motion Type",
            Self::Environment => "Data Collection Environment",
            Self::NumVrus => "Number of VRUs",
            Self::PathType => "Trajectory Path Type",
            Self::Slope => "Trajectory Path Slope",
            Self::Turn => "Trajectory Turn Options",
            Self::Gait => "Pedestrian Gait Type",
            Self::MinInterval => "Minimum Time Interval",
            Self::MinTrajLen => "Minimum Trajectory Length",
            Self::Range(range) => range.label(),
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Self::Slope => Some("deg"),
            Self::MinInterval => Some("s"),
            Self::MinTrajLen => Some("m"),
            Self::Range(range) => Some(range.unit()),
            _ => None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::RadarMotion
            | Self::Environment
            | Self::PathType
            | Self::Slope
            | Self::Turn
            | Self::Gait => FieldKind::Choice,
            Self::NumVrus => FieldKind::Count,
            Self::MinInterval | Self::MinTrajLen => FieldKind::Decimal,
            Self::Range(_) => FieldKind::Range,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldKey {
    type Err = ParseError;

    /// Parse a field key (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownField(s.to_string()))
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for FieldKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Declared input kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single choice from a fixed list.
    Choice,
    /// Optional positive integer; empty means no constraint.
    Count,
    /// Non-negative decimal.
    Decimal,
    /// `{min, max}` numeric pair.
    Range,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Choice => "choice",
            Self::Count => "count",
            Self::Decimal => "decimal",
            Self::Range => "range",
        }
    }
}

/// Stored value of one field, read back from a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Label of the selected option.
    Choice(&'static str),
    /// Raw numeric text.
    Text(String),
    Range(RangeInput),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choice(label) => f.write_str(label),
            Self::Text(text) if text.is_empty() => f.write_str("(empty)"),
            Self::Text(text) => f.write_str(text),
            Self::Range(range) => write!(f, "{range}"),
        }
    }
}

/// Replacement of one field's value.
///
/// One variant per field, so a value can only ever land in a field of the
/// matching type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    RadarMotion(RadarMotion),
    Environment(Environment),
    NumVrus(String),
    PathType(PathType),
    Slope(Slope),
    Turn(TurnOption),
    Gait(GaitType),
    MinInterval(String),
    MinTrajLen(String),
    Range(RangeKey, RangeInput),
}

impl FieldEdit {
    /// Key of the field this edit replaces.
    pub fn key(&self) -> FieldKey {
        match self {
            Self::RadarMotion(_) => FieldKey::RadarMotion,
            Self::Environment(_) => FieldKey::Environment,
            Self::NumVrus(_) => FieldKey::NumVrus,
            Self::PathType(_) => FieldKey::PathType,
            Self::Slope(_) => FieldKey::Slope,
            Self::Turn(_) => FieldKey::Turn,
            Self::Gait(_) => FieldKey::Gait,
            Self::MinInterval(_) => FieldKey::MinInterval,
            Self::MinTrajLen(_) => FieldKey::MinTrajLen,
            Self::Range(range, _) => FieldKey::Range(*range),
        }
    }

    /// Build an edit from a field key and its textual value.
    ///
    /// Choice fields accept a label or short code; ranges are written
    /// `MIN..MAX`; numeric fields keep the raw text.
    pub fn parse(key: &str, raw: &str) -> Result<Self, ParseError> {
        let edit = match key.parse::<FieldKey>()? {
            FieldKey::RadarMotion => Self::RadarMotion(raw.parse()?),
            FieldKey::Environment => Self::Environment(raw.parse()?),
            FieldKey::NumVrus => Self::NumVrus(raw.trim().to_string()),
            FieldKey::PathType => Self::PathType(raw.parse()?),
            FieldKey::Slope => Self::Slope(raw.parse()?),
            FieldKey::Turn => Self::Turn(raw.parse()?),
            FieldKey::Gait => Self::Gait(raw.parse()?),
            FieldKey::MinInterval => Self::MinInterval(raw.trim().to_string()),
            FieldKey::MinTrajLen => Self::MinTrajLen(raw.trim().to_string()),
            FieldKey::Range(range) => Self::Range(range, raw.parse()?),
        };
        Ok(edit)
    }
}

impl FromStr for FieldEdit {
    type Err = ParseError;

    /// Parse `KEY=VALUE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| ParseError::MalformedEdit(s.to_string()))?;
        Self::parse(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_key_roundtrip() {
        for key in FieldKey::ALL {
            assert_eq!(key.key().parse::<FieldKey>().unwrap(), key);
        }
        assert_eq!("numvrus".parse::<FieldKey>().unwrap(), FieldKey::NumVrus);
        assert!("speed".parse::<FieldKey>().is_err());
    }

    #[test]
    fn test_parse_edits() {
        assert_eq!(
            "environment=Naturalistic".parse::<FieldEdit>().unwrap(),
            FieldEdit::Environment(Environment::Naturalistic)
        );
        assert_eq!(
            "numVRUs= 3 ".parse::<FieldEdit>().unwrap(),
            FieldEdit::NumVrus("3".to_string())
        );
        assert_eq!(
            "azimuth=50..10".parse::<FieldEdit>().unwrap(),
            FieldEdit::Range(RangeKey::Azimuth, RangeInput::new("50", "10"))
        );
        assert_eq!(
            "turn=right-45".parse::<FieldEdit>().unwrap(),
            FieldEdit::Turn(TurnOption::Right45)
        );
    }

    #[test]
    fn test_parse_edit_errors() {
        assert_eq!(
            "environment".parse::<FieldEdit>().unwrap_err(),
            ParseError::MalformedEdit("environment".to_string())
        );
        assert_eq!(
            "colour=red".parse::<FieldEdit>().unwrap_err(),
            ParseError::UnknownField("colour".to_string())
        );
        assert!(matches!(
            "slope=12".parse::<FieldEdit>().unwrap_err(),
            ParseError::InvalidChoice { field: "slope", .. }
        ));
        assert_eq!(
            "snr=5".parse::<FieldEdit>().unwrap_err(),
            ParseError::MalformedRange("5".to_string())
        );
    }

    #[test]
    fn test_edit_key_matches_kind() {
        let edit = FieldEdit::MinTrajLen("1.5".to_string());
        assert_eq!(edit.key(), FieldKey::MinTrajLen);
        assert_eq!(edit.key().kind(), FieldKind::Decimal);
        assert_eq!(FieldKey::Range(RangeKey::Rcs).unit(), Some("dBsm"));
    }
}
