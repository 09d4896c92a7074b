//! Scenario filter configuration engine.
//!
//! Owns the live filter state for the VRU radar dataset page and derives
//! everything the form needs from it:
//!
//! - [`schema`]: baseline values and field visibility rules
//! - [`validate`]: per-field validity and the [`ValidationReport`]
//! - [`store`]: the [`FilterStore`] with dirty tracking and gated Apply/Clear
//! - [`staged`]: the [`PreferenceEditor`] modal draft for VRU preferences
//! - [`session`]: message dispatch over store and editor
//! - [`route`]: the navigation gate in front of the filter page
//!
//! The engine never fails: bad input shows up as validation issues and
//! gated actions are no-ops.

pub mod route;
pub mod schema;
pub mod session;
pub mod staged;
pub mod store;
pub mod validate;

pub use route::{Arrival, Navigation, Route, resolve};
pub use schema::{Baseline, Visibility, default_value, is_visible};
pub use session::{FilterMessage, FilterSession, Outcome};
pub use staged::{EditorState, PreferenceEditor};
pub use store::{Changes, FilterStore};
pub use validate::{Issue, ValidationReport, check_field, validate};
