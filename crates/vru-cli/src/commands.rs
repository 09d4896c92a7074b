use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info_span, warn};

use vru_cli::preset::Preset;
use vru_filter::{Changes, FilterMessage, FilterSession, FilterStore, Outcome, ValidationReport};
use vru_model::{FilterPayload, Preference, VruKind};

use crate::cli::{EditArgs, FieldsArgs};
use crate::summary::apply_table_style;

/// State of the filters after presets and edits, as reported by `check`.
pub struct CheckResult {
    pub store: FilterStore,
    pub report: ValidationReport,
    pub changes: Changes,
}

impl CheckResult {
    pub fn can_apply(&self) -> bool {
        self.store.can_apply()
    }
}

/// Result of `apply`.
pub enum ApplyResult {
    Applied(FilterPayload),
    Blocked(CheckResult),
}

pub fn run_kinds() {
    let mut table = Table::new();
    table.set_header(vec!["Key", "VRU kind", "Pedestrian"]);
    apply_table_style(&mut table);
    for kind in VruKind::ALL {
        let pedestrian = if kind.is_pedestrian() { "yes" } else { "" };
        table.add_row(vec![kind.key(), kind.label(), pedestrian]);
    }
    println!("{table}");
}

pub fn run_fields(args: &FieldsArgs) -> Result<FilterStore> {
    let preset = Preset::load_or_baseline(args.preset.as_deref()).context("load preset")?;
    Ok(preset.into_store())
}

pub fn run_check(args: &EditArgs) -> Result<CheckResult> {
    let session = prepare_session(args)?;
    let store = session.into_store();
    Ok(CheckResult {
        report: store.validate(),
        changes: store.changes(),
        store,
    })
}

pub fn run_apply(args: &EditArgs) -> Result<ApplyResult> {
    let mut session = prepare_session(args)?;
    match session.update(FilterMessage::ApplyPressed) {
        Outcome::Applied(payload) => Ok(ApplyResult::Applied(payload)),
        _ => {
            let store = session.into_store();
            warn!(
                dirty = store.is_dirty(),
                issues = store.validate().len(),
                "filters cannot be applied"
            );
            Ok(ApplyResult::Blocked(CheckResult {
                report: store.validate(),
                changes: store.changes(),
                store,
            }))
        }
    }
}

/// Load the preset and replay the command-line edits as filter messages.
///
/// VRU preferences go through the preference modal, the same way a user
/// would set them, and are committed in one confirm.
fn prepare_session(args: &EditArgs) -> Result<FilterSession> {
    let span = info_span!("prepare", preset = ?args.preset);
    let _guard = span.enter();

    let preset = Preset::load_or_baseline(args.preset.as_deref()).context("load preset")?;
    let mut session = FilterSession::with_store(preset.into_store());

    for edit in &args.set {
        session.update(FilterMessage::FieldChanged(edit.clone()));
    }

    let requests = args
        .must
        .iter()
        .map(|kind| (*kind, Preference::Must))
        .chain(args.must_not.iter().map(|kind| (*kind, Preference::MustNot)));
    let mut requests = requests.peekable();
    if requests.peek().is_some() {
        session.update(FilterMessage::PreferencesOpened);
        for (kind, requested) in requests {
            let current = session.editor().draft().map(|draft| draft.get(kind));
            // a repeated request would toggle the kind back off
            if current != Some(requested) {
                session.update(FilterMessage::DraftToggled(kind, requested));
            }
        }
        session.update(FilterMessage::PreferencesConfirmed);
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vru_model::{Environment, FieldEdit};

    fn edits(set: Vec<FieldEdit>, must: Vec<VruKind>, must_not: Vec<VruKind>) -> EditArgs {
        EditArgs {
            preset: None,
            set,
            must,
            must_not,
        }
    }

    #[test]
    fn test_no_edits_cannot_apply() {
        let result = run_check(&edits(Vec::new(), Vec::new(), Vec::new())).unwrap();
        assert!(!result.can_apply());
        assert!(result.changes.is_empty());
        assert!(matches!(
            run_apply(&edits(Vec::new(), Vec::new(), Vec::new())).unwrap(),
            ApplyResult::Blocked(_)
        ));
    }

    #[test]
    fn test_repeated_must_stays_must() {
        let args = edits(
            Vec::new(),
            vec![VruKind::PedestrianArmSwing, VruKind::PedestrianArmSwing],
            vec![VruKind::Wheelchair],
        );
        let result = run_check(&args).unwrap();
        let preferences = result.store.preferences();
        assert_eq!(preferences.get(VruKind::PedestrianArmSwing), Preference::Must);
        assert_eq!(preferences.get(VruKind::Wheelchair), Preference::MustNot);
        assert_eq!(result.changes.vru_kinds.len(), 2);
    }

    #[test]
    fn test_apply_returns_payload() {
        let args = edits(
            vec![FieldEdit::Environment(Environment::Naturalistic)],
            Vec::new(),
            Vec::new(),
        );
        let ApplyResult::Applied(payload) = run_apply(&args).unwrap() else {
            panic!("expected payload");
        };
        assert_eq!(payload.environment, Environment::Naturalistic);
        assert_eq!(payload.path_type, None);
    }
}
