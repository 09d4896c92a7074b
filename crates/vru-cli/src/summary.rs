use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vru_filter::{FilterStore, Issue, ValidationReport};
use vru_model::{FieldKey, FilterPayload, Preference};

use crate::commands::CheckResult;

/// Every field with its kind, current value and visibility.
pub fn print_fields(store: &FilterStore) {
    let visibility = store.visibility();
    let report = store.validate();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Value"),
        header_cell("Unit"),
        header_cell("Shown"),
        header_cell("Valid"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Center);
    for key in FieldKey::ALL {
        let shown = visibility.shows(key);
        let value = store.config().value(key).to_string();
        let valid = if !shown {
            dim_cell("-")
        } else if report.for_field(key).next().is_some() {
            Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            Cell::new("✓").fg(Color::Green)
        };
        table.add_row(vec![
            key_cell(key.key(), shown),
            Cell::new(key.label()),
            dim_cell(key.kind().label()),
            if shown { Cell::new(value) } else { dim_cell(value) },
            dim_cell(key.unit().unwrap_or("-")),
            flag_cell(shown),
            valid,
        ]);
    }
    println!("{table}");
    print_preferences(store);
}

/// Validation issues, changes from the defaults and action availability.
pub fn print_check(result: &CheckResult) {
    print_issue_table(&result.report);
    if result.changes.is_empty() {
        println!("No changes from the default filters.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Changed"),
            header_cell("Default"),
            header_cell("Current"),
        ]);
        apply_table_style(&mut table);
        let config = result.store.config();
        let baseline = vru_filter::Baseline::get();
        for key in &result.changes.fields {
            table.add_row(vec![
                key_cell(key.key(), result.store.is_visible(*key)),
                dim_cell(baseline.config.value(*key)),
                Cell::new(config.value(*key)),
            ]);
        }
        for kind in &result.changes.vru_kinds {
            table.add_row(vec![
                key_cell(kind.key(), true),
                dim_cell(baseline.preferences.get(*kind).label()),
                preference_cell(result.store.preferences().get(*kind)),
            ]);
        }
        println!("{table}");
    }
    println!(
        "Apply: {}    Clear: {}",
        enabled(result.store.can_apply()),
        enabled(result.store.can_clear())
    );
}

/// The applied payload as pretty JSON on stdout.
pub fn print_payload(payload: &FilterPayload) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    eprintln!("Scenario: {}", payload.scenario_caption());
    Ok(())
}

/// Why `apply` produced nothing.
pub fn print_blocked(result: &CheckResult) {
    if !result.store.is_dirty() {
        eprintln!("Nothing to apply: the filters match the defaults.");
    }
    print_issue_table(&result.report);
}

fn print_preferences(store: &FilterStore) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("VRU kind"), header_cell("Preference")]);
    apply_table_style(&mut table);
    for (kind, preference) in store.preferences().iter() {
        table.add_row(vec![Cell::new(kind.label()), preference_cell(preference)]);
    }
    println!();
    println!("VRU preferences:");
    println!("{table}");
}

fn print_issue_table(report: &ValidationReport) {
    if report.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Issue")]);
    apply_table_style(&mut table);
    for issue in &report.issues {
        table.add_row(vec![issue_field_cell(issue), Cell::new(issue.message())]);
    }
    println!("Issues:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn key_cell(key: &str, shown: bool) -> Cell {
    if shown {
        Cell::new(key)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(key).fg(Color::DarkGrey)
    }
}

fn issue_field_cell(issue: &Issue) -> Cell {
    Cell::new(issue.field().key())
        .fg(Color::Red)
        .add_attribute(Attribute::Bold)
}

fn preference_cell(preference: Preference) -> Cell {
    match preference {
        Preference::Ignore => dim_cell(preference.label()),
        Preference::Must => Cell::new(preference.label()).fg(Color::Green),
        Preference::MustNot => Cell::new(preference.label()).fg(Color::Yellow),
    }
}

fn flag_cell(on: bool) -> Cell {
    if on {
        Cell::new("✓").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn enabled(on: bool) -> &'static str {
    if on { "enabled" } else { "disabled" }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
