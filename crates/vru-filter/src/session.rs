//! Message-driven filter session.
//!
//! A [`FilterSession`] is what a presentation layer talks to: every discrete
//! user input becomes one [`FilterMessage`], and [`FilterSession::update`]
//! routes it to the store or the preference modal.
//!
//! # Message Flow
//!
//! - **Field edits and direct toggles**: applied to the live store
//! - **Modal messages**: touch only the draft until `PreferencesConfirmed`
//! - **Apply / Clear**: gated on the store; ignored when disabled

use tracing::debug;

use vru_model::{FieldEdit, FilterPayload, Preference, VruKind};

use crate::staged::PreferenceEditor;
use crate::store::FilterStore;

/// One user input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMessage {
    /// A form control changed.
    FieldChanged(FieldEdit),
    /// A toggle on the live preference grid was clicked.
    VruToggled(VruKind, Preference),
    /// The preference modal was opened.
    PreferencesOpened,
    /// A toggle inside the modal was clicked.
    DraftToggled(VruKind, Preference),
    /// "Clear all" inside the modal.
    DraftCleared,
    /// Modal confirm button.
    PreferencesConfirmed,
    /// Modal cancel button.
    PreferencesCancelled,
    /// Escape key while the modal has focus.
    EscapePressed,
    ApplyPressed,
    ClearPressed,
}

impl FilterMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FieldChanged(_) => "field_changed",
            Self::VruToggled(..) => "vru_toggled",
            Self::PreferencesOpened => "preferences_opened",
            Self::DraftToggled(..) => "draft_toggled",
            Self::DraftCleared => "draft_cleared",
            Self::PreferencesConfirmed => "preferences_confirmed",
            Self::PreferencesCancelled => "preferences_cancelled",
            Self::EscapePressed => "escape_pressed",
            Self::ApplyPressed => "apply_pressed",
            Self::ClearPressed => "clear_pressed",
        }
    }
}

/// Result of handling one message.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// State changed; re-render.
    Updated,
    /// Apply went through and produced a payload.
    Applied(FilterPayload),
    /// Clear reset the form to the baseline.
    Cleared,
    /// The message was not applicable in the current state.
    Ignored,
}

/// Live store plus preference modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSession {
    store: FilterStore,
    editor: PreferenceEditor,
}

impl FilterSession {
    /// Session at the baseline with the modal closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session starting from an existing store.
    pub fn with_store(store: FilterStore) -> Self {
        Self {
            store,
            editor: PreferenceEditor::new(),
        }
    }

    pub fn store(&self) -> &FilterStore {
        &self.store
    }

    pub fn editor(&self) -> &PreferenceEditor {
        &self.editor
    }

    pub fn into_store(self) -> FilterStore {
        self.store
    }

    /// Handle one message.
    pub fn update(&mut self, message: FilterMessage) -> Outcome {
        debug!(message = message.name(), "handle filter message");
        match message {
            // =================================================================
            // LIVE FORM
            // =================================================================
            FilterMessage::FieldChanged(edit) => {
                self.store.set_field(edit);
                Outcome::Updated
            }

            FilterMessage::VruToggled(kind, requested) => {
                self.store.set_vru_preference(kind, requested);
                Outcome::Updated
            }

            // =================================================================
            // PREFERENCE MODAL
            // =================================================================
            FilterMessage::PreferencesOpened => {
                self.editor.open(&self.store);
                Outcome::Updated
            }

            FilterMessage::DraftToggled(kind, requested) => {
                updated_if(self.editor.set_draft_preference(kind, requested).is_some())
            }

            FilterMessage::DraftCleared => updated_if(self.editor.clear_all_draft()),

            FilterMessage::PreferencesConfirmed => {
                updated_if(self.editor.confirm(&mut self.store))
            }

            FilterMessage::PreferencesCancelled => updated_if(self.editor.cancel()),

            FilterMessage::EscapePressed => updated_if(self.editor.escape()),

            // =================================================================
            // ACTIONS
            // =================================================================
            FilterMessage::ApplyPressed => match self.store.apply() {
                Some(payload) => Outcome::Applied(payload),
                None => Outcome::Ignored,
            },

            FilterMessage::ClearPressed => {
                if self.store.clear() {
                    Outcome::Cleared
                } else {
                    Outcome::Ignored
                }
            }
        }
    }
}

fn updated_if(changed: bool) -> Outcome {
    if changed {
        Outcome::Updated
    } else {
        Outcome::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vru_model::{FieldKey, PathType};

    #[test]
    fn test_modal_messages_while_closed_are_ignored() {
        let mut session = FilterSession::new();
        for message in [
            FilterMessage::DraftToggled(VruKind::Wheelchair, Preference::Must),
            FilterMessage::DraftCleared,
            FilterMessage::PreferencesConfirmed,
            FilterMessage::PreferencesCancelled,
            FilterMessage::EscapePressed,
        ] {
            assert_eq!(session.update(message), Outcome::Ignored);
        }
        assert_eq!(session, FilterSession::new());
    }

    #[test]
    fn test_apply_and_clear_gating() {
        let mut session = FilterSession::new();
        assert_eq!(session.update(FilterMessage::ApplyPressed), Outcome::Ignored);
        assert_eq!(session.update(FilterMessage::ClearPressed), Outcome::Ignored);

        session.update(FilterMessage::FieldChanged(FieldEdit::PathType(
            PathType::Curved,
        )));
        let Outcome::Applied(payload) = session.update(FilterMessage::ApplyPressed) else {
            panic!("apply should produce a payload");
        };
        assert_eq!(payload.path_type, Some(PathType::Curved));
        assert!(payload.turn.is_some());

        assert_eq!(session.update(FilterMessage::ClearPressed), Outcome::Cleared);
        assert!(!session.store().is_dirty());
    }

    #[test]
    fn test_direct_toggle_changes_live_state() {
        let mut session = FilterSession::new();
        session.update(FilterMessage::VruToggled(
            VruKind::PedestrianNoArmSwing,
            Preference::Must,
        ));
        assert!(session.store().is_visible(FieldKey::Gait));
        assert!(!session.editor().is_open());
    }

    #[test]
    fn test_message_names_are_unique() {
        let names = [
            FilterMessage::PreferencesOpened.name(),
            FilterMessage::DraftCleared.name(),
            FilterMessage::PreferencesConfirmed.name(),
            FilterMessage::PreferencesCancelled.name(),
            FilterMessage::EscapePressed.name(),
            FilterMessage::ApplyPressed.name(),
            FilterMessage::ClearPressed.name(),
        ];
        let unique: std::collections::BTreeSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }
}
