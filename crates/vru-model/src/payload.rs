//! Query payload produced by the Apply action.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::{Environment, GaitType, PathType, RadarMotion, Slope, TurnOption};
use crate::range::{RangeBounds, RangeKey};
use crate::vru::VruPreferenceSet;

/// Structured query handed to the downstream search collaborator.
///
/// Fields hidden by the visibility rules at build time are `None` and
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPayload {
    pub radar_motion: RadarMotion,
    pub environment: Environment,
    #[serde(rename = "numVRUs")]
    pub num_vrus: Option<u64>,
    pub path_type: Option<PathType>,
    pub slope: Option<Slope>,
    pub turn: Option<TurnOption>,
    pub vru_preferences: VruPreferenceSet,
    pub gait: Option<GaitType>,
    pub min_interval: f64,
    pub min_trajectory_length: Option<f64>,
    pub ranges: BTreeMap<RangeKey, RangeBounds>,
}

impl FilterPayload {
    /// Short scenario caption, e.g. `Stationary • Controlled`.
    pub fn scenario_caption(&self) -> String {
        format!("{} • {}", self.radar_motion, self.environment)
    }
}
