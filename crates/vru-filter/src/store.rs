//! Filter state store.
//!
//! Holds the live configuration and VRU preferences. Visibility, validity
//! and dirtiness are derived on demand from those two values and the
//! baseline; nothing derived is stored.
//!
//! Apply and Clear are gated: calling them while their condition is false
//! is a silent no-op, since the caller is expected to have disabled the
//! control.

use tracing::{debug, info};

use vru_model::{
    FieldEdit, FieldKey, FilterConfiguration, FilterPayload, Preference, VruKind,
    VruPreferenceSet, parse_decimal,
};

use crate::schema::{Baseline, Visibility};
use crate::validate::{self, ValidationReport, parse_count};

/// Fields and VRU kinds that differ from the baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes {
    pub fields: Vec<FieldKey>,
    pub vru_kinds: Vec<VruKind>,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.vru_kinds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len() + self.vru_kinds.len()
    }
}

/// Live filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterStore {
    config: FilterConfiguration,
    preferences: VruPreferenceSet,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterStore {
    /// Create a store holding the baseline values.
    pub fn new() -> Self {
        let baseline = Baseline::get();
        Self {
            config: baseline.config.clone(),
            preferences: baseline.preferences,
        }
    }

    /// Create a store from an existing state (e.g. a loaded preset).
    pub fn from_parts(config: FilterConfiguration, preferences: VruPreferenceSet) -> Self {
        Self {
            config,
            preferences,
        }
    }

    pub fn config(&self) -> &FilterConfiguration {
        &self.config
    }

    pub fn preferences(&self) -> &VruPreferenceSet {
        &self.preferences
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Replace one field's value.
    pub fn set_field(&mut self, edit: FieldEdit) {
        debug!(field = %edit.key(), "set field");
        self.config.apply(edit);
    }

    /// Toggle one VRU preference and return the resulting state.
    pub fn set_vru_preference(&mut self, kind: VruKind, requested: Preference) -> Preference {
        let next = self.preferences.toggle(kind, requested);
        debug!(kind = %kind, requested = %requested, state = %next, "set VRU preference");
        next
    }

    /// Replace the whole preference set (commit of a staged edit).
    pub fn replace_preferences(&mut self, preferences: VruPreferenceSet) {
        self.preferences = preferences;
    }

    /// Overwrite everything with the baseline. Always permitted.
    pub fn reset(&mut self) {
        let baseline = Baseline::get();
        self.config = baseline.config.clone();
        self.preferences = baseline.preferences;
    }

    // =========================================================================
    // DERIVED STATE
    // =========================================================================

    pub fn visibility(&self) -> Visibility {
        Visibility::derive(&self.config, &self.preferences)
    }

    pub fn is_visible(&self, key: FieldKey) -> bool {
        self.visibility().shows(key)
    }

    /// Visible keys in form order.
    pub fn visible_fields(&self) -> Vec<FieldKey> {
        self.visibility().fields()
    }

    pub fn validate(&self) -> ValidationReport {
        validate::validate(&self.config, &self.preferences)
    }

    /// Every visible field satisfies its rule.
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Any field or preference differs from the baseline.
    ///
    /// Numeric text is compared by value, so `0` restates `0.00`.
    pub fn is_dirty(&self) -> bool {
        !self.changes().is_empty()
    }

    /// What differs from the baseline, in form order.
    pub fn changes(&self) -> Changes {
        let baseline = Baseline::get();
        Changes {
            fields: self.config.differences(&baseline.config),
            vru_kinds: self.preferences.differences(&baseline.preferences),
        }
    }

    /// Enablement condition of the Apply action.
    pub fn can_apply(&self) -> bool {
        self.is_dirty() && self.is_valid()
    }

    /// Enablement condition of the Clear action.
    pub fn can_clear(&self) -> bool {
        self.is_dirty()
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Snapshot for the query collaborator, with hidden fields nulled.
    ///
    /// Returns `None` unless [`can_apply`](Self::can_apply) holds.
    pub fn build_payload(&self) -> Option<FilterPayload> {
        if !self.can_apply() {
            return None;
        }
        Some(build(&self.config, &self.preferences, self.visibility()))
    }

    /// The Apply action: build the payload and log it.
    pub fn apply(&self) -> Option<FilterPayload> {
        let Some(payload) = self.build_payload() else {
            debug!(
                dirty = self.is_dirty(),
                valid = self.is_valid(),
                "apply ignored"
            );
            return None;
        };
        match serde_json::to_string(&payload) {
            Ok(json) => info!(payload = %json, "apply filters"),
            Err(error) => info!(?payload, %error, "apply filters"),
        }
        Some(payload)
    }

    /// The Clear action: reset when dirty. Returns whether anything happened.
    pub fn clear(&mut self) -> bool {
        if !self.can_clear() {
            debug!("clear ignored");
            return false;
        }
        self.reset();
        info!("filters cleared");
        true
    }
}

fn build(
    config: &FilterConfiguration,
    preferences: &VruPreferenceSet,
    visible: Visibility,
) -> FilterPayload {
    FilterPayload {
        radar_motion: config.radar_motion,
        environment: config.environment,
        num_vrus: parse_count(&config.num_vrus).ok().flatten(),
        path_type: visible.controlled.then_some(config.path_type),
        slope: visible.straight.then_some(config.slope),
        turn: visible.curved.then_some(config.turn),
        vru_preferences: *preferences,
        gait: visible.gait.then_some(config.gait),
        min_interval: parse_decimal(&config.min_interval).unwrap_or_default(),
        min_trajectory_length: if visible.controlled {
            parse_decimal(&config.min_traj_len)
        } else {
            None
        },
        ranges: config
            .ranges
            .iter()
            .filter_map(|(key, range)| range.parse_bounds().map(|bounds| (key, bounds)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vru_model::{Environment, PathType, RangeInput, RangeKey, Slope};

    #[test]
    fn test_new_store_is_clean() {
        let store = FilterStore::new();
        assert!(!store.is_dirty());
        assert!(store.is_valid());
        assert!(!store.can_apply());
        assert!(!store.can_clear());
        assert!(store.changes().is_empty());
    }

    #[test]
    fn test_build_payload_requires_dirty() {
        let store = FilterStore::new();
        assert_eq!(store.build_payload(), None);
        assert_eq!(store.apply(), None);
    }

    #[test]
    fn test_build_payload_requires_valid() {
        let mut store = FilterStore::new();
        store.set_field(FieldEdit::NumVrus("0".to_string()));
        assert!(store.is_dirty());
        assert!(!store.is_valid());
        assert_eq!(store.build_payload(), None);
    }

    #[test]
    fn test_payload_nulls_hidden_fields() {
        let mut store = FilterStore::new();
        store.set_field(FieldEdit::Environment(Environment::Naturalistic));
        let payload = store.build_payload().unwrap();
        assert_eq!(payload.path_type, None);
        assert_eq!(payload.slope, None);
        assert_eq!(payload.turn, None);
        assert_eq!(payload.min_trajectory_length, None);
        assert_eq!(payload.gait, None);
        assert_eq!(payload.num_vrus, None);
        assert_eq!(payload.min_interval, 0.0);
        assert_eq!(payload.ranges.len(), 5);
        // stored values survive
        assert_eq!(store.config().path_type, PathType::Straight);
    }

    #[test]
    fn test_stale_slope_reappears() {
        let mut store = FilterStore::new();
        store.set_field(FieldEdit::Slope(Slope::Deg135));
        store.set_field(FieldEdit::PathType(PathType::Curved));
        assert_eq!(store.build_payload().unwrap().slope, None);
        store.set_field(FieldEdit::PathType(PathType::Straight));
        assert_eq!(store.build_payload().unwrap().slope, Some(Slope::Deg135));
    }

    #[test]
    fn test_clear_is_gated() {
        let mut store = FilterStore::new();
        assert!(!store.clear());
        store.set_field(FieldEdit::Range(
            RangeKey::Rcs,
            RangeInput::new("-30", "0"),
        ));
        assert!(store.clear());
        assert!(!store.is_dirty());
        assert_eq!(store, FilterStore::new());
    }

    #[test]
    fn test_changes_lists_fields_and_kinds() {
        let mut store = FilterStore::new();
        store.set_field(FieldEdit::NumVrus("2".to_string()));
        store.set_vru_preference(VruKind::Wheelchair, Preference::MustNot);
        let changes = store.changes();
        assert_eq!(changes.fields, vec![FieldKey::NumVrus]);
        assert_eq!(changes.vru_kinds, vec![VruKind::Wheelchair]);
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn test_editing_back_to_default_is_clean() {
        let mut store = FilterStore::new();
        store.set_field(FieldEdit::NumVrus("4".to_string()));
        store.set_field(FieldEdit::NumVrus(String::new()));
        assert!(!store.is_dirty());
        store.set_vru_preference(VruKind::EScooter, Preference::Must);
        store.set_vru_preference(VruKind::EScooter, Preference::Must);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_restated_decimal_is_clean() {
        let mut store = FilterStore::new();
        store.set_field(FieldEdit::MinInterval("0".to_string()));
        store.set_field(FieldEdit::Range(RangeKey::Snr, RangeInput::new("5.0", "30")));
        assert!(!store.is_dirty());
        assert!(!store.can_clear());
        store.set_field(FieldEdit::MinInterval("0.01".to_string()));
        assert!(store.is_dirty());
    }
}
