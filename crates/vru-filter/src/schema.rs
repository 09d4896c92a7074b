//! Field schema: defaults and visibility rules.
//!
//! Everything here is a pure function of a configuration and a preference
//! set, so the same rules serve the live state and any draft copy.

use std::sync::LazyLock;

use vru_model::{FieldKey, FieldValue, FilterConfiguration, PathType, VruPreferenceSet};

// =============================================================================
// BASELINE
// =============================================================================

/// Canonical default state, used only for dirty comparison and reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    pub config: FilterConfiguration,
    pub preferences: VruPreferenceSet,
}

static BASELINE: LazyLock<Baseline> = LazyLock::new(|| Baseline {
    config: FilterConfiguration::default(),
    preferences: VruPreferenceSet::default(),
});

impl Baseline {
    /// The shared, immutable baseline.
    pub fn get() -> &'static Baseline {
        &BASELINE
    }
}

/// Default value of a field.
pub fn default_value(key: FieldKey) -> FieldValue {
    Baseline::get().config.value(key)
}

// =============================================================================
// VISIBILITY
// =============================================================================

/// Derived visibility flags for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Environment is Controlled: path type and minimum trajectory length.
    pub controlled: bool,
    /// Controlled and Straight: slope.
    pub straight: bool,
    /// Controlled and Curved: turn option.
    pub curved: bool,
    /// A pedestrian kind is required: gait.
    pub gait: bool,
}

impl Visibility {
    pub fn derive(config: &FilterConfiguration, preferences: &VruPreferenceSet) -> Self {
        let controlled = config.environment.is_controlled();
        Self {
            controlled,
            straight: controlled && config.path_type == PathType::Straight,
            curved: controlled && config.path_type == PathType::Curved,
            gait: preferences.requires_pedestrian(),
        }
    }

    pub fn shows(&self, key: FieldKey) -> bool {
        match key {
            FieldKey::PathType | FieldKey::MinTrajLen => self.controlled,
            FieldKey::Slope => self.straight,
            FieldKey::Turn => self.curved,
            FieldKey::Gait => self.gait,
            FieldKey::RadarMotion
            | FieldKey::Environment
            | FieldKey::NumVrus
            | FieldKey::MinInterval
            | FieldKey::Range(_) => true,
        }
    }

    /// Visible keys in form order.
    pub fn fields(&self) -> Vec<FieldKey> {
        FieldKey::ALL
            .iter()
            .copied()
            .filter(|key| self.shows(*key))
            .collect()
    }
}

/// Whether `key` is shown for the given state.
pub fn is_visible(
    key: FieldKey,
    config: &FilterConfiguration,
    preferences: &VruPreferenceSet,
) -> bool {
    Visibility::derive(config, preferences).shows(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vru_model::{Environment, FieldEdit, Preference, RangeKey, VruKind};

    #[test]
    fn test_default_visibility() {
        let baseline = Baseline::get();
        let visible = Visibility::derive(&baseline.config, &baseline.preferences);
        assert!(visible.shows(FieldKey::PathType));
        assert!(visible.shows(FieldKey::Slope));
        assert!(!visible.shows(FieldKey::Turn));
        assert!(!visible.shows(FieldKey::Gait));
        assert!(visible.shows(FieldKey::MinTrajLen));
        assert_eq!(visible.fields().len(), 12);
    }

    #[test]
    fn test_naturalistic_hides_trajectory_fields() {
        let mut config = FilterConfiguration::default();
        config.apply(FieldEdit::Environment(Environment::Naturalistic));
        let prefs = VruPreferenceSet::new();
        for key in [
            FieldKey::PathType,
            FieldKey::Slope,
            FieldKey::Turn,
            FieldKey::MinTrajLen,
        ] {
            assert!(!is_visible(key, &config, &prefs), "{key} should be hidden");
        }
        assert!(is_visible(FieldKey::Range(RangeKey::Snr), &config, &prefs));
        assert!(is_visible(FieldKey::NumVrus, &config, &prefs));
    }

    #[test]
    fn test_curved_shows_turn_only() {
        let mut config = FilterConfiguration::default();
        config.apply(FieldEdit::PathType(PathType::Curved));
        let visible = Visibility::derive(&config, &VruPreferenceSet::new());
        assert!(visible.shows(FieldKey::Turn));
        assert!(!visible.shows(FieldKey::Slope));
    }

    #[test]
    fn test_gait_follows_pedestrian_must() {
        let config = FilterConfiguration::default();
        let mut prefs = VruPreferenceSet::new();
        prefs.set(VruKind::BicyclistPedaling, Preference::Must);
        assert!(!is_visible(FieldKey::Gait, &config, &prefs));
        prefs.set(VruKind::PedestrianArmSwing, Preference::Must);
        assert!(is_visible(FieldKey::Gait, &config, &prefs));
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_value(FieldKey::RadarMotion), FieldValue::Choice("Stationary"));
        assert_eq!(default_value(FieldKey::NumVrus), FieldValue::Text(String::new()));
        assert_eq!(
            default_value(FieldKey::Turn),
            FieldValue::Choice("Right Turn by 90 Degrees")
        );
    }
}
