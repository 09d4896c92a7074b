//! VRU kinds and tri-state presence preferences.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Vulnerable road user category that a scenario can require or exclude.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum VruKind {
    #[serde(rename = "ped_arm")]
    PedestrianArmSwing,
    #[serde(rename = "ped_no_arm")]
    PedestrianNoArmSwing,
    #[serde(rename = "bike_pedal")]
    BicyclistPedaling,
    #[serde(rename = "bike_no_pedal")]
    BicyclistNotPedaling,
    #[serde(rename = "escooter")]
    EScooter,
    #[serde(rename = "wheelchair")]
    Wheelchair,
    #[serde(rename = "bird_escooter")]
    BirdEScooter,
    #[serde(rename = "lime_escooter")]
    LimeEScooter,
}

impl VruKind {
    pub const COUNT: usize = 8;

    /// All kinds in form order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::PedestrianArmSwing,
        Self::PedestrianNoArmSwing,
        Self::BicyclistPedaling,
        Self::BicyclistNotPedaling,
        Self::EScooter,
        Self::Wheelchair,
        Self::BirdEScooter,
        Self::LimeEScooter,
    ];

    /// Stable key used in payloads and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Self::PedestrianArmSwing => "ped_arm",
            Self::PedestrianNoArmSwing => "ped_no_arm",
            Self::BicyclistPedaling => "bike_pedal",
            Self::BicyclistNotPedaling => "bike_no_pedal",
            Self::EScooter => "escooter",
            Self::Wheelchair => "wheelchair",
            Self::BirdEScooter => "bird_escooter",
            Self::LimeEScooter => "lime_escooter",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PedestrianArmSwing => "Pedestrian with Arm Swing",
            Self::PedestrianNoArmSwing => "Pedestrian Without Arm Swing",
            Self::BicyclistPedaling => "Bicyclist With Pedaling",
            Self::BicyclistNotPedaling => "Bicyclist Without Pedaling",
            Self::EScooter => "E-Scooter",
            Self::Wheelchair => "Wheelchair",
            Self::BirdEScooter => "Bird E-Scooter",
            Self::LimeEScooter => "Lime E-Scooter",
        }
    }

    /// Returns true for the pedestrian category (the kinds that make gait relevant).
    pub fn is_pedestrian(&self) -> bool {
        matches!(self, Self::PedestrianArmSwing | Self::PedestrianNoArmSwing)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for VruKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for VruKind {
    type Err = ParseError;

    /// Parse a kind key; dashes and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == normalized)
            .ok_or_else(|| ParseError::UnknownVruKind(s.to_string()))
    }
}

/// Presence preference for one VRU kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preference {
    /// No preference.
    #[default]
    Ignore,
    /// The kind must be present in the scenario.
    Must,
    /// The kind must be absent from the scenario.
    MustNot,
}

impl Preference {
    pub const ALL: [Self; 3] = [Self::Ignore, Self::Must, Self::MustNot];

    /// Transition for a click on the `requested` toggle.
    ///
    /// Requesting the state already held switches it off.
    #[must_use]
    pub fn toggle(self, requested: Preference) -> Preference {
        if self == requested {
            Preference::Ignore
        } else {
            requested
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Must => "must",
            Self::MustNot => "mustNot",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ignore => "No preference",
            Self::Must => "Must contain",
            Self::MustNot => "Must not contain",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "ignore" | "none" => Ok(Self::Ignore),
            "must" => Ok(Self::Must),
            "mustnot" => Ok(Self::MustNot),
            _ => Err(ParseError::UnknownPreference(s.to_string())),
        }
    }
}

/// Preference for every VRU kind.
///
/// Every kind always holds exactly one state. Serialized as a map keyed by
/// [`VruKind::key`]; kinds missing from a deserialized map are `ignore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<VruKind, Preference>",
    into = "BTreeMap<VruKind, Preference>"
)]
pub struct VruPreferenceSet {
    states: [Preference; VruKind::COUNT],
}

impl VruPreferenceSet {
    /// A set with every kind at `ignore`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: VruKind) -> Preference {
        self.states[kind.index()]
    }

    /// Overwrite the state of one kind.
    pub fn set(&mut self, kind: VruKind, preference: Preference) {
        self.states[kind.index()] = preference;
    }

    /// Apply toggle-off-on-repeat semantics and return the new state.
    pub fn toggle(&mut self, kind: VruKind, requested: Preference) -> Preference {
        let next = self.get(kind).toggle(requested);
        self.set(kind, next);
        next
    }

    /// Reset every kind to `ignore`.
    pub fn clear_all(&mut self) {
        self.states = [Preference::Ignore; VruKind::COUNT];
    }

    pub fn iter(&self) -> impl Iterator<Item = (VruKind, Preference)> + '_ {
        VruKind::ALL.iter().map(|kind| (*kind, self.get(*kind)))
    }

    /// Returns true when no kind carries a preference.
    pub fn is_unconstrained(&self) -> bool {
        self.states.iter().all(|state| *state == Preference::Ignore)
    }

    /// Returns true when at least one pedestrian kind is `must`.
    pub fn requires_pedestrian(&self) -> bool {
        self.iter()
            .any(|(kind, state)| kind.is_pedestrian() && state == Preference::Must)
    }

    /// Kinds whose state differs from `other`, in form order.
    pub fn differences(&self, other: &Self) -> Vec<VruKind> {
        VruKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.get(*kind) != other.get(*kind))
            .collect()
    }
}

impl From<BTreeMap<VruKind, Preference>> for VruPreferenceSet {
    fn from(map: BTreeMap<VruKind, Preference>) -> Self {
        let mut set = Self::default();
        for (kind, preference) in map {
            set.set(kind, preference);
        }
        set
    }
}

impl From<VruPreferenceSet> for BTreeMap<VruKind, Preference> {
    fn from(set: VruPreferenceSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_transition_table() {
        use Preference::{Ignore, Must, MustNot};
        assert_eq!(Ignore.toggle(Must), Must);
        assert_eq!(Must.toggle(Must), Ignore);
        assert_eq!(Must.toggle(MustNot), MustNot);
        assert_eq!(MustNot.toggle(MustNot), Ignore);
        assert_eq!(MustNot.toggle(Must), Must);
        assert_eq!(Ignore.toggle(Ignore), Ignore);
    }

    #[test]
    fn test_kind_keys_roundtrip() {
        for kind in VruKind::ALL {
            assert_eq!(kind.key().parse::<VruKind>().unwrap(), kind);
        }
        assert_eq!(
            "Ped-No-Arm".parse::<VruKind>().unwrap(),
            VruKind::PedestrianNoArmSwing
        );
        assert!("skateboard".parse::<VruKind>().is_err());
    }

    #[test]
    fn test_preference_parse() {
        assert_eq!("mustNot".parse::<Preference>().unwrap(), Preference::MustNot);
        assert_eq!("must-not".parse::<Preference>().unwrap(), Preference::MustNot);
        assert_eq!("MUST".parse::<Preference>().unwrap(), Preference::Must);
        assert!("maybe".parse::<Preference>().is_err());
    }

    #[test]
    fn test_requires_pedestrian() {
        let mut set = VruPreferenceSet::new();
        assert!(!set.requires_pedestrian());
        set.set(VruKind::Wheelchair, Preference::Must);
        assert!(!set.requires_pedestrian());
        set.set(VruKind::PedestrianNoArmSwing, Preference::MustNot);
        assert!(!set.requires_pedestrian());
        set.set(VruKind::PedestrianNoArmSwing, Preference::Must);
        assert!(set.requires_pedestrian());
    }

    #[test]
    fn test_partial_map_fills_ignore() {
        let set: VruPreferenceSet =
            serde_json::from_str(r#"{"wheelchair":"mustNot"}"#).unwrap();
        assert_eq!(set.get(VruKind::Wheelchair), Preference::MustNot);
        assert_eq!(set.get(VruKind::EScooter), Preference::Ignore);
        assert_eq!(set.differences(&VruPreferenceSet::new()), vec![VruKind::Wheelchair]);
    }

    #[test]
    fn test_serializes_every_kind() {
        let value = serde_json::to_value(VruPreferenceSet::new()).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), VruKind::COUNT);
        assert_eq!(map["ped_arm"], "ignore");
        assert_eq!(map["lime_escooter"], "ignore");
    }
}
