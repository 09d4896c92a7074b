//! Single-choice scenario parameters.
//!
//! Each enum mirrors one select control of the filter form. The display
//! label (`as_str`) is also the serialized form, so payloads carry the same
//! strings the form shows. Slope is the exception: it serializes as integer
//! degrees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A closed set of values for one select-style field.
pub trait Choice: Copy + Eq + 'static {
    /// Field key the choice belongs to, used in error messages.
    const FIELD: &'static str;
    /// Every value in display order.
    const ALL: &'static [Self];

    /// Display label as it appears in the form.
    fn as_str(&self) -> &'static str;

    /// Short code accepted on the command line.
    fn code(&self) -> &'static str {
        self.as_str()
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse a choice from its label or short code (case-insensitive).
pub fn parse_choice<T: Choice>(s: &str) -> Result<T, ParseError> {
    let wanted = normalize(s);
    T::ALL
        .iter()
        .copied()
        .find(|value| normalize(value.as_str()) == wanted || normalize(value.code()) == wanted)
        .ok_or_else(|| ParseError::InvalidChoice {
            field: T::FIELD,
            value: s.to_string(),
            expected: T::ALL
                .iter()
                .map(Choice::code)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

// =============================================================================
// RADAR MOTION
// =============================================================================

/// Whether the radar platform was stationary or moving during capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RadarMotion {
    #[default]
    Stationary,
    Moving,
}

impl Choice for RadarMotion {
    const FIELD: &'static str = "radarMotion";
    const ALL: &'static [Self] = &[Self::Stationary, Self::Moving];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Stationary => "Stationary",
            Self::Moving => "Moving",
        }
    }
}

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Data collection environment.
///
/// Trajectory options (path type, slope, turn, minimum length) only apply to
/// controlled sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Environment {
    #[default]
    Controlled,
    Naturalistic,
}

impl Environment {
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled)
    }
}

impl Choice for Environment {
    const FIELD: &'static str = "environment";
    const ALL: &'static [Self] = &[Self::Controlled, Self::Naturalistic];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Controlled => "Controlled",
            Self::Naturalistic => "Naturalistic",
        }
    }
}

// =============================================================================
// TRAJECTORY
// =============================================================================

/// Shape of the VRU trajectory in a controlled session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PathType {
    #[default]
    Straight,
    Curved,
}

impl Choice for PathType {
    const FIELD: &'static str = "pathType";
    const ALL: &'static [Self] = &[Self::Straight, Self::Curved];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Straight => "Straight",
            Self::Curved => "Curved",
        }
    }
}

/// Heading of a straight trajectory, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Slope {
    DegNeg45,
    #[default]
    Deg0,
    Deg45,
    Deg90,
    Deg135,
    Deg180,
    Deg225,
    Deg270,
}

impl Slope {
    /// Angle in degrees.
    pub fn degrees(&self) -> i32 {
        match self {
            Self::DegNeg45 => -45,
            Self::Deg0 => 0,
            Self::Deg45 => 45,
            Self::Deg90 => 90,
            Self::Deg135 => 135,
            Self::Deg180 => 180,
            Self::Deg225 => 225,
            Self::Deg270 => 270,
        }
    }
}

impl Choice for Slope {
    const FIELD: &'static str = "slope";
    const ALL: &'static [Self] = &[
        Self::DegNeg45,
        Self::Deg0,
        Self::Deg45,
        Self::Deg90,
        Self::Deg135,
        Self::Deg180,
        Self::Deg225,
        Self::Deg270,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::DegNeg45 => "-45",
            Self::Deg0 => "0",
            Self::Deg45 => "45",
            Self::Deg90 => "90",
            Self::Deg135 => "135",
            Self::Deg180 => "180",
            Self::Deg225 => "225",
            Self::Deg270 => "270",
        }
    }
}

impl TryFrom<i32> for Slope {
    type Error = ParseError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|slope| slope.degrees() == degrees)
            .ok_or_else(|| ParseError::InvalidChoice {
                field: Self::FIELD,
                value: degrees.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(Choice::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl From<Slope> for i32 {
    fn from(slope: Slope) -> Self {
        slope.degrees()
    }
}

/// Turn performed on a curved trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnOption {
    #[default]
    #[serde(rename = "Right Turn by 90 Degrees")]
    Right90,
    #[serde(rename = "Right Turn by 45 Degrees")]
    Right45,
}

impl Choice for TurnOption {
    const FIELD: &'static str = "turn";
    const ALL: &'static [Self] = &[Self::Right90, Self::Right45];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Right90 => "Right Turn by 90 Degrees",
            Self::Right45 => "Right Turn by 45 Degrees",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Right90 => "right-90",
            Self::Right45 => "right-45",
        }
    }
}

// =============================================================================
// GAIT
// =============================================================================

/// Pedestrian gait, only relevant when a pedestrian kind is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GaitType {
    #[default]
    #[serde(rename = "Paced Walking")]
    Paced,
    #[serde(rename = "Natural Walking")]
    Natural,
    Jogging,
    #[serde(rename = "Irregular Walking")]
    Irregular,
}

impl Choice for GaitType {
    const FIELD: &'static str = "gait";
    const ALL: &'static [Self] = &[Self::Paced, Self::Natural, Self::Jogging, Self::Irregular];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Paced => "Paced Walking",
            Self::Natural => "Natural Walking",
            Self::Jogging => "Jogging",
            Self::Irregular => "Irregular Walking",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Paced => "paced",
            Self::Natural => "natural",
            Self::Jogging => "jogging",
            Self::Irregular => "irregular",
        }
    }
}

macro_rules! choice_impls {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = ParseError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_choice(s)
                }
            }
        )*
    };
}

choice_impls!(RadarMotion, Environment, PathType, Slope, TurnOption, GaitType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_label_and_code() {
        assert_eq!("moving".parse::<RadarMotion>().unwrap(), RadarMotion::Moving);
        assert_eq!(
            "Right Turn by 45 Degrees".parse::<TurnOption>().unwrap(),
            TurnOption::Right45
        );
        assert_eq!("right-90".parse::<TurnOption>().unwrap(), TurnOption::Right90);
        assert_eq!("natural".parse::<GaitType>().unwrap(), GaitType::Natural);
        assert_eq!("-45".parse::<Slope>().unwrap(), Slope::DegNeg45);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Sideways".parse::<PathType>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidChoice {
                field: "pathType",
                value: "Sideways".to_string(),
                expected: "Straight, Curved".to_string(),
            }
        );
        assert!("30".parse::<Slope>().is_err());
    }

    #[test]
    fn test_slope_serializes_as_degrees() {
        assert_eq!(serde_json::to_string(&Slope::Deg225).unwrap(), "225");
        assert_eq!(serde_json::from_str::<Slope>("-45").unwrap(), Slope::DegNeg45);
        assert!(serde_json::from_str::<Slope>("10").is_err());
    }

    #[test]
    fn test_labels_are_serialized_form() {
        assert_eq!(
            serde_json::to_string(&TurnOption::Right90).unwrap(),
            "\"Right Turn by 90 Degrees\""
        );
        assert_eq!(serde_json::to_string(&GaitType::Jogging).unwrap(), "\"Jogging\"");
    }
}
