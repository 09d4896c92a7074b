//! Staged editor for the VRU preference group.
//!
//! The eight tri-state toggles are edited in bulk inside a modal. Opening
//! copies the live set into an owned draft; edits touch only the draft;
//! confirm replaces the live set with the draft and cancel drops it. The
//! draft never outlives a close, so every open re-seeds from live state.

use tracing::debug;

use vru_model::{Preference, VruKind, VruPreferenceSet};

use crate::store::FilterStore;

/// Open/closed state of the preference modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Closed,
    Open,
}

/// Draft holder for the preference modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceEditor {
    /// Present only while the modal is open.
    draft: Option<VruPreferenceSet>,
}

impl PreferenceEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditorState {
        if self.draft.is_some() {
            EditorState::Open
        } else {
            EditorState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Current draft, while open.
    pub fn draft(&self) -> Option<&VruPreferenceSet> {
        self.draft.as_ref()
    }

    /// Open the modal, seeding the draft from the live preferences.
    ///
    /// Opening while already open re-seeds and drops pending draft edits.
    pub fn open(&mut self, store: &FilterStore) {
        debug!(reopened = self.is_open(), "open VRU preferences");
        self.draft = Some(*store.preferences());
    }

    /// Toggle one kind in the draft. Returns the new draft state, or `None`
    /// when the modal is closed.
    pub fn set_draft_preference(
        &mut self,
        kind: VruKind,
        requested: Preference,
    ) -> Option<Preference> {
        let draft = self.draft.as_mut()?;
        Some(draft.toggle(kind, requested))
    }

    /// Reset every kind in the draft to `ignore`. Returns false when closed.
    pub fn clear_all_draft(&mut self) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.clear_all();
                true
            }
            None => false,
        }
    }

    /// Gait visibility as it would be after confirming the current draft.
    pub fn draft_shows_gait(&self) -> bool {
        self.draft
            .as_ref()
            .is_some_and(VruPreferenceSet::requires_pedestrian)
    }

    /// Commit the draft into the live preferences and close.
    ///
    /// Returns false (and changes nothing) when the modal is closed.
    pub fn confirm(&mut self, store: &mut FilterStore) -> bool {
        let Some(draft) = self.draft.take() else {
            return false;
        };
        debug!(changed = draft.differences(store.preferences()).len(), "confirm VRU preferences");
        store.replace_preferences(draft);
        true
    }

    /// Drop the draft and close, leaving live preferences untouched.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.draft.take().is_some();
        if was_open {
            debug!("cancel VRU preferences");
        }
        was_open
    }

    /// Escape key: same as cancel.
    pub fn escape(&mut self) -> bool {
        self.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_editor_ignores_edits() {
        let mut editor = PreferenceEditor::new();
        assert_eq!(editor.state(), EditorState::Closed);
        assert_eq!(
            editor.set_draft_preference(VruKind::Wheelchair, Preference::Must),
            None
        );
        assert!(!editor.clear_all_draft());
        assert!(!editor.cancel());
        let mut store = FilterStore::new();
        assert!(!editor.confirm(&mut store));
        assert_eq!(store, FilterStore::new());
    }

    #[test]
    fn test_draft_is_isolated_until_confirm() {
        let mut store = FilterStore::new();
        let mut editor = PreferenceEditor::new();
        editor.open(&store);
        editor.set_draft_preference(VruKind::PedestrianArmSwing, Preference::Must);
        assert!(editor.draft_shows_gait());
        assert_eq!(
            store.preferences().get(VruKind::PedestrianArmSwing),
            Preference::Ignore
        );
        assert!(editor.confirm(&mut store));
        assert_eq!(editor.state(), EditorState::Closed);
        assert_eq!(
            store.preferences().get(VruKind::PedestrianArmSwing),
            Preference::Must
        );
    }

    #[test]
    fn test_clear_all_then_cancel() {
        let mut store = FilterStore::new();
        store.set_vru_preference(VruKind::BirdEScooter, Preference::MustNot);
        let before = *store.preferences();
        let mut editor = PreferenceEditor::new();
        editor.open(&store);
        assert!(editor.clear_all_draft());
        assert!(editor.draft().unwrap().is_unconstrained());
        assert!(editor.escape());
        assert_eq!(*store.preferences(), before);
    }

    #[test]
    fn test_reopen_reseeds() {
        let mut store = FilterStore::new();
        let mut editor = PreferenceEditor::new();
        editor.open(&store);
        editor.set_draft_preference(VruKind::EScooter, Preference::Must);
        editor.open(&store);
        assert_eq!(editor.draft(), Some(store.preferences()));
        editor.cancel();
        store.set_vru_preference(VruKind::EScooter, Preference::MustNot);
        editor.open(&store);
        assert_eq!(
            editor.draft().map(|draft| draft.get(VruKind::EScooter)),
            Some(Preference::MustNot)
        );
    }
}
