//! CLI library components for the VRU scenario filter.

pub mod logging;
pub mod preset;

pub use preset::{Preset, PresetError};
