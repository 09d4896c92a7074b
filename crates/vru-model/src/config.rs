//! The filter configuration: current value of every field.

use serde::{Deserialize, Serialize};

use crate::enums::{Choice, Environment, GaitType, PathType, RadarMotion, Slope, TurnOption};
use crate::field::{FieldEdit, FieldKey, FieldValue};
use crate::range::Ranges;
use crate::raw;

/// Values of every scenario field and signal-constraint range.
///
/// `Default` is the baseline configuration. Values of fields that are
/// currently hidden are kept, so they re-appear when their dependency flips
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FilterConfiguration {
    pub radar_motion: RadarMotion,
    pub environment: Environment,
    /// Raw count text; empty means no constraint.
    #[serde(rename = "numVRUs", deserialize_with = "raw::deserialize")]
    pub num_vrus: String,
    pub path_type: PathType,
    pub slope: Slope,
    pub turn: TurnOption,
    pub gait: GaitType,
    /// Raw decimal text, seconds.
    #[serde(deserialize_with = "raw::deserialize")]
    pub min_interval: String,
    /// Raw decimal text, metres.
    #[serde(deserialize_with = "raw::deserialize")]
    pub min_traj_len: String,
    pub ranges: Ranges,
}

impl Default for FilterConfiguration {
    fn default() -> Self {
        Self {
            radar_motion: RadarMotion::Stationary,
            environment: Environment::Controlled,
            num_vrus: String::new(),
            path_type: PathType::Straight,
            slope: Slope::Deg0,
            turn: TurnOption::Right90,
            gait: GaitType::Paced,
            min_interval: "0.00".to_string(),
            min_traj_len: "0.00".to_string(),
            ranges: Ranges::default(),
        }
    }
}

impl FilterConfiguration {
    /// Replace one field's value. No other field is touched.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::RadarMotion(value) => self.radar_motion = value,
            FieldEdit::Environment(value) => self.environment = value,
            FieldEdit::NumVrus(value) => self.num_vrus = value,
            FieldEdit::PathType(value) => self.path_type = value,
            FieldEdit::Slope(value) => self.slope = value,
            FieldEdit::Turn(value) => self.turn = value,
            FieldEdit::Gait(value) => self.gait = value,
            FieldEdit::MinInterval(value) => self.min_interval = value,
            FieldEdit::MinTrajLen(value) => self.min_traj_len = value,
            FieldEdit::Range(key, value) => *self.ranges.get_mut(key) = value,
        }
    }

    /// Stored value of one field, regardless of visibility.
    pub fn value(&self, key: FieldKey) -> FieldValue {
        match key {
            FieldKey::RadarMotion => FieldValue::Choice(self.radar_motion.as_str()),
            FieldKey::Environment => FieldValue::Choice(self.environment.as_str()),
            FieldKey::NumVrus => FieldValue::Text(self.num_vrus.clone()),
            FieldKey::PathType => FieldValue::Choice(self.path_type.as_str()),
            FieldKey::Slope => FieldValue::Choice(self.slope.as_str()),
            FieldKey::Turn => FieldValue::Choice(self.turn.as_str()),
            FieldKey::Gait => FieldValue::Choice(self.gait.as_str()),
            FieldKey::MinInterval => FieldValue::Text(self.min_interval.clone()),
            FieldKey::MinTrajLen => FieldValue::Text(self.min_traj_len.clone()),
            FieldKey::Range(range) => FieldValue::Range(self.ranges.get(range).clone()),
        }
    }

    /// Keys whose value differs from `other`, in form order.
    ///
    /// Decimal fields and ranges compare by number when both sides parse,
    /// so `0` and `0.00` are the same value. Anything else compares as text.
    pub fn differences(&self, other: &Self) -> Vec<FieldKey> {
        FieldKey::ALL
            .iter()
            .copied()
            .filter(|key| !self.same_value(other, *key))
            .collect()
    }

    fn same_value(&self, other: &Self, key: FieldKey) -> bool {
        match key {
            FieldKey::MinInterval => same_decimal(&self.min_interval, &other.min_interval),
            FieldKey::MinTrajLen => same_decimal(&self.min_traj_len, &other.min_traj_len),
            FieldKey::Range(range) => {
                let (ours, theirs) = (self.ranges.get(range), other.ranges.get(range));
                match (ours.parse_bounds(), theirs.parse_bounds()) {
                    (Some(a), Some(b)) => a == b,
                    _ => ours == theirs,
                }
            }
            _ => self.value(key) == other.value(key),
        }
    }
}

fn same_decimal(a: &str, b: &str) -> bool {
    match (raw::parse_decimal(a), raw::parse_decimal(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{RangeInput, RangeKey};

    #[test]
    fn test_apply_touches_one_field() {
        let baseline = FilterConfiguration::default();
        let mut config = baseline.clone();
        config.apply(FieldEdit::Range(
            RangeKey::Snr,
            RangeInput::new("10", "20"),
        ));
        assert_eq!(
            config.differences(&baseline),
            vec![FieldKey::Range(RangeKey::Snr)]
        );
        assert_eq!(config.ranges.azimuth, baseline.ranges.azimuth);
    }

    #[test]
    fn test_value_reads_hidden_fields() {
        let mut config = FilterConfiguration::default();
        config.apply(FieldEdit::Environment(Environment::Naturalistic));
        assert_eq!(config.value(FieldKey::PathType), FieldValue::Choice("Straight"));
        assert_eq!(config.value(FieldKey::Slope), FieldValue::Choice("0"));
    }

    #[test]
    fn test_numeric_text_compares_by_value() {
        let baseline = FilterConfiguration::default();
        let mut config = baseline.clone();
        config.apply(FieldEdit::MinInterval("0".to_string()));
        config.apply(FieldEdit::MinTrajLen(" 0.0 ".to_string()));
        config.apply(FieldEdit::Range(
            RangeKey::Velocity,
            RangeInput::new("0.0", "8.00"),
        ));
        assert!(config.differences(&baseline).is_empty());

        config.apply(FieldEdit::MinInterval("abc".to_string()));
        config.apply(FieldEdit::MinTrajLen("0.5".to_string()));
        assert_eq!(
            config.differences(&baseline),
            vec![FieldKey::MinInterval, FieldKey::MinTrajLen]
        );
    }
}
