//! Field validity rules.
//!
//! A failing field produces an [`Issue`]; issues are user-correctable input
//! states that block Apply and nothing else.

use serde::Serialize;

use vru_model::{
    Bound, FieldKey, FilterConfiguration, RangeInput, RangeKey, VruPreferenceSet, parse_decimal,
};

use crate::schema::Visibility;

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Issue {
    /// VRU count is neither empty nor a positive integer.
    InvalidCount { raw: String },
    /// Decimal field does not parse as a finite number.
    InvalidDecimal { field: FieldKey, raw: String },
    /// Decimal field is below zero.
    NegativeDecimal { field: FieldKey, value: f64 },
    /// Range end does not parse as a finite number.
    InvalidBound {
        range: RangeKey,
        bound: Bound,
        raw: String,
    },
    /// Range minimum exceeds its maximum.
    InvertedRange { range: RangeKey, min: f64, max: f64 },
}

impl Issue {
    /// Field the issue belongs to.
    pub fn field(&self) -> FieldKey {
        match self {
            Issue::InvalidCount { .. } => FieldKey::NumVrus,
            Issue::InvalidDecimal { field, .. } | Issue::NegativeDecimal { field, .. } => *field,
            Issue::InvalidBound { range, .. } | Issue::InvertedRange { range, .. } => {
                FieldKey::Range(*range)
            }
        }
    }

    /// Inline guidance shown next to the field.
    pub fn message(&self) -> String {
        match self {
            Issue::InvalidCount { raw } => {
                format!("Number of VRUs must be a whole number above 0 (got {raw:?})")
            }
            Issue::InvalidDecimal { field, raw } => {
                format!("{} must be a number (got {raw:?})", field.label())
            }
            Issue::NegativeDecimal { field, value } => {
                format!("{} must not be negative (got {value})", field.label())
            }
            Issue::InvalidBound { range, bound, raw } => format!(
                "{} {} must be a number (got {raw:?})",
                range.label(),
                bound.as_str()
            ),
            Issue::InvertedRange { range, min, max } => format!(
                "{} min ({min}) must not exceed max ({max})",
                range.label()
            ),
        }
    }
}

/// Issues found in one configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// No visible field fails its rule.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues attached to one field.
    pub fn for_field(&self, key: FieldKey) -> impl Iterator<Item = &Issue> + '_ {
        self.issues.iter().filter(move |issue| issue.field() == key)
    }
}

// =============================================================================
// RULES
// =============================================================================

/// Check one field's own value, regardless of visibility.
///
/// Choice fields are valid by construction and never produce issues.
pub fn check_field(key: FieldKey, config: &FilterConfiguration) -> Vec<Issue> {
    match key {
        FieldKey::NumVrus => check_count(&config.num_vrus).into_iter().collect(),
        FieldKey::MinInterval => check_decimal(key, &config.min_interval).into_iter().collect(),
        FieldKey::MinTrajLen => check_decimal(key, &config.min_traj_len).into_iter().collect(),
        FieldKey::Range(range) => check_range(range, config.ranges.get(range)),
        FieldKey::RadarMotion
        | FieldKey::Environment
        | FieldKey::PathType
        | FieldKey::Slope
        | FieldKey::Turn
        | FieldKey::Gait => Vec::new(),
    }
}

/// Validate every currently visible field.
///
/// Hidden fields never contribute issues, even if their stored value is bad.
pub fn validate(config: &FilterConfiguration, preferences: &VruPreferenceSet) -> ValidationReport {
    let issues = Visibility::derive(config, preferences)
        .fields()
        .into_iter()
        .flat_map(|key| check_field(key, config))
        .collect();
    ValidationReport { issues }
}

/// Parsed VRU count: `Ok(None)` for empty input.
pub(crate) fn parse_count(raw: &str) -> Result<Option<u64>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u64>() {
        Ok(count) if count > 0 => Ok(Some(count)),
        _ => Err(()),
    }
}

fn check_count(raw: &str) -> Option<Issue> {
    parse_count(raw).err().map(|()| Issue::InvalidCount {
        raw: raw.to_string(),
    })
}

fn check_decimal(field: FieldKey, raw: &str) -> Option<Issue> {
    match parse_decimal(raw) {
        None => Some(Issue::InvalidDecimal {
            field,
            raw: raw.to_string(),
        }),
        Some(value) if value < 0.0 => Some(Issue::NegativeDecimal { field, value }),
        Some(_) => None,
    }
}

fn check_range(range: RangeKey, input: &RangeInput) -> Vec<Issue> {
    let bounds = [Bound::Min, Bound::Max].map(|bound| {
        let raw = input.bound(bound);
        parse_decimal(raw).ok_or_else(|| Issue::InvalidBound {
            range,
            bound,
            raw: raw.to_string(),
        })
    });
    match bounds {
        [Ok(min), Ok(max)] if min > max => vec![Issue::InvertedRange { range, min, max }],
        [Ok(_), Ok(_)] => Vec::new(),
        [min, max] => [min.err(), max.err()].into_iter().flatten().collect(),
    }
}
