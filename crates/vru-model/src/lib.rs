//! Data model for the VRU radar scenario filter.
//!
//! - [`enums`] - single-choice scenario parameters
//! - [`vru`] - VRU kinds and tri-state presence preferences
//! - [`range`] - signal-constraint ranges
//! - [`field`] - field keys, stored values and typed edits
//! - [`config`] - the full filter configuration
//! - [`payload`] - the query payload built on Apply

pub mod config;
pub mod enums;
pub mod error;
pub mod field;
pub mod payload;
pub mod range;
mod raw;
pub mod vru;

pub use config::FilterConfiguration;
pub use enums::{
    Choice, Environment, GaitType, PathType, RadarMotion, Slope, TurnOption, parse_choice,
};
pub use error::{ParseError, Result};
pub use field::{FieldEdit, FieldKey, FieldKind, FieldValue};
pub use payload::FilterPayload;
pub use range::{Bound, RangeBounds, RangeInput, RangeKey, Ranges};
pub use raw::parse_decimal;
pub use vru::{Preference, VruKind, VruPreferenceSet};
