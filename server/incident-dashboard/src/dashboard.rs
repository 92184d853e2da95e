//! Core state container: owns the store and view state, applies commands.

use serde::Deserialize;

use crate::expand::ExpandedSet;
use crate::store::IncidentStore;
use crate::types::{
  FormSnapshot, IncidentRow, InboundDraft, Severity, SeverityFilter, SortOrder, ViewSnapshot,
};
use crate::validate;
use crate::view;

/// One discrete user action against the dashboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
  SetFilter { filter: SeverityFilter },
  SetSort { sort: SortOrder },
  ToggleDetails { id: u64 },
  ToggleForm,
  Submit(InboundDraft),
}

/// Report-form state, retained across failed submits.
#[derive(Debug, Clone, Default)]
struct FormState {
  visible: bool,
  title: String,
  description: String,
  severity: Severity,
  errors: crate::error::FieldErrors,
}

impl FormState {
  /// Back to a hidden, clean form with the default severity.
  fn reset(&mut self) {
    *self = Self::default();
  }
}

/// The dashboard. Holds the incident store and all ephemeral view state.
///
/// Every mutation re-derives the full projection; nothing is cached between
/// commands. All operations run synchronously to completion.
pub struct Dashboard {
  store: IncidentStore,
  filter: SeverityFilter,
  sort: SortOrder,
  expanded: ExpandedSet,
  form: FormState,
}

impl Dashboard {
  /// An empty dashboard with default selections.
  pub fn new() -> Self {
    Self::with_store(IncidentStore::new())
  }

  /// A dashboard over the seeded example incidents, as at process start.
  pub fn seeded() -> Self {
    Self::with_store(IncidentStore::seed())
  }

  pub fn with_store(store: IncidentStore) -> Self {
    Self {
      store,
      filter: SeverityFilter::default(),
      sort: SortOrder::default(),
      expanded: ExpandedSet::new(),
      form: FormState::default(),
    }
  }

  pub fn store(&self) -> &IncidentStore {
    &self.store
  }

  pub fn is_expanded(&self, id: u64) -> bool {
    self.expanded.is_expanded(id)
  }

  /// Apply one command and return the re-derived view.
  ///
  /// Infallible: the only failure mode in the system is form validation, and
  /// that surfaces as inline per-field messages in the snapshot's form state
  /// rather than as an error.
  pub fn apply(&mut self, cmd: Command) -> ViewSnapshot {
    match cmd {
      Command::SetFilter { filter } => self.filter = filter,
      Command::SetSort { sort } => self.sort = sort,
      Command::ToggleDetails { id } => {
        self.expanded.toggle(id);
      }
      Command::ToggleForm => {
        // Opening presents a clean form; cancelling discards any entered
        // values and errors.
        let visible = !self.form.visible;
        self.form.reset();
        self.form.visible = visible;
      }
      Command::Submit(draft) => self.submit(draft),
    }
    self.snapshot()
  }

  fn submit(&mut self, draft: InboundDraft) {
    match validate::validate(&draft) {
      Ok(valid) => {
        self.store.create(valid);
        // Successful submit hides the form and clears transient fields.
        self.form.reset();
      }
      Err(errors) => {
        // Keep the form open with entered values retained, errors inline.
        // The store is untouched.
        self.form.visible = true;
        self.form.title = draft.title;
        self.form.description = draft.description;
        self.form.severity = draft.severity;
        self.form.errors = errors;
      }
    }
  }

  /// Assemble the current derived view.
  pub fn snapshot(&self) -> ViewSnapshot {
    let incidents = view::derive(self.store.incidents(), self.filter, self.sort)
      .into_iter()
      .map(|i| {
        let expanded = self.expanded.is_expanded(i.id);
        IncidentRow {
          id: i.id,
          title: i.title,
          severity: i.severity,
          severity_label: i.severity.label(),
          reported_date: view::display_date(&i.reported_at),
          reported_at: i.reported_at,
          expanded,
          description: expanded.then_some(i.description),
        }
      })
      .collect();

    ViewSnapshot {
      filter: self.filter,
      sort: self.sort,
      total: self.store.len(),
      form: FormSnapshot {
        visible: self.form.visible,
        title: self.form.title.clone(),
        description: self.form.description.clone(),
        severity: self.form.severity,
        errors: self.form.errors.by_field(),
      },
      incidents,
    }
  }
}

impl Default for Dashboard {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn submit(title: &str, description: &str, severity: Severity) -> Command {
    Command::Submit(InboundDraft {
      title: title.into(),
      description: description.into(),
      severity,
    })
  }

  #[test]
  fn defaults_match_process_start() {
    let dash = Dashboard::seeded();
    let snap = dash.snapshot();
    assert_eq!(snap.filter, SeverityFilter::All);
    assert_eq!(snap.sort, SortOrder::Newest);
    assert_eq!(snap.total, 3);
    assert!(!snap.form.visible);
    assert_eq!(snap.form.severity, Severity::Medium);
  }

  #[test]
  fn set_filter_narrows_the_view() {
    let mut dash = Dashboard::seeded();
    let snap = dash.apply(Command::SetFilter {
      filter: SeverityFilter::High,
    });
    assert_eq!(snap.incidents.len(), 1);
    assert_eq!(snap.incidents[0].title, "LLM Hallucination in Critical Info");
    // The store itself is untouched.
    assert_eq!(snap.total, 3);
  }

  #[test]
  fn empty_filtered_view_keeps_total() {
    let mut dash = Dashboard::with_store(IncidentStore::new());
    dash.apply(submit("only one", "desc", Severity::Low));
    let snap = dash.apply(Command::SetFilter {
      filter: SeverityFilter::High,
    });
    assert!(snap.incidents.is_empty());
    assert_eq!(snap.total, 1);
  }

  #[test]
  fn successful_submit_appends_and_resets_form() {
    let mut dash = Dashboard::seeded();
    dash.apply(Command::ToggleForm);
    let snap = dash.apply(submit("Test", "Desc", Severity::Low));

    assert_eq!(snap.total, 4);
    // Default sort is newest-first, so the new incident leads the view.
    assert_eq!(snap.incidents[0].id, 4);
    assert_eq!(snap.incidents[0].title, "Test");
    // Form hidden and back to defaults.
    assert!(!snap.form.visible);
    assert!(snap.form.title.is_empty());
    assert!(snap.form.description.is_empty());
    assert_eq!(snap.form.severity, Severity::Medium);
    assert!(snap.form.errors.is_empty());
  }

  #[test]
  fn failed_submit_retains_entered_values() {
    let mut dash = Dashboard::seeded();
    dash.apply(Command::ToggleForm);
    let snap = dash.apply(submit("  ", "Still here", Severity::High));

    assert_eq!(snap.total, 3);
    assert!(snap.form.visible);
    assert_eq!(snap.form.description, "Still here");
    assert_eq!(snap.form.severity, Severity::High);
    assert_eq!(snap.form.errors.get("title").unwrap(), "Title is required");
    assert!(!snap.form.errors.contains_key("description"));
  }

  #[test]
  fn both_errors_surface_together() {
    let mut dash = Dashboard::seeded();
    let snap = dash.apply(submit("", " ", Severity::Medium));
    assert_eq!(snap.form.errors.len(), 2);
    assert_eq!(snap.total, 3);
  }

  #[test]
  fn toggle_details_reveals_description() {
    let mut dash = Dashboard::seeded();
    let snap = dash.apply(Command::ToggleDetails { id: 2 });
    let row = snap.incidents.iter().find(|r| r.id == 2).unwrap();
    assert!(row.expanded);
    assert!(row.description.as_deref().unwrap().contains("medical information"));

    // Collapsed rows omit the description.
    let other = snap.incidents.iter().find(|r| r.id == 1).unwrap();
    assert!(!other.expanded);
    assert!(other.description.is_none());
  }

  #[test]
  fn double_toggle_collapses_again() {
    let mut dash = Dashboard::seeded();
    dash.apply(Command::ToggleDetails { id: 3 });
    let snap = dash.apply(Command::ToggleDetails { id: 3 });
    let row = snap.incidents.iter().find(|r| r.id == 3).unwrap();
    assert!(!row.expanded);
    assert!(row.description.is_none());
  }

  #[test]
  fn cancelling_the_form_discards_entered_state() {
    let mut dash = Dashboard::seeded();
    dash.apply(Command::ToggleForm);
    dash.apply(submit("", "kept for now", Severity::Low));
    // Cancel, then reopen: fields and errors are gone.
    dash.apply(Command::ToggleForm);
    let snap = dash.apply(Command::ToggleForm);
    assert!(snap.form.visible);
    assert!(snap.form.description.is_empty());
    assert!(snap.form.errors.is_empty());
    assert_eq!(snap.form.severity, Severity::Medium);
  }

  #[test]
  fn command_json_contract_parses() {
    let cmd: Command = serde_json::from_str(r#"{"cmd":"set_filter","filter":"high"}"#).unwrap();
    assert!(matches!(
      cmd,
      Command::SetFilter {
        filter: SeverityFilter::High
      }
    ));

    let cmd: Command =
      serde_json::from_str(r#"{"cmd":"submit","title":"t","description":"d","severity":"low"}"#)
        .unwrap();
    match cmd {
      Command::Submit(draft) => assert_eq!(draft.severity, Severity::Low),
      other => panic!("unexpected command: {:?}", other),
    }
  }
}
