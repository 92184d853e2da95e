//! Core types for the dashboard (JSON contracts + internal models).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Severity enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Low,
  #[default]
  Medium,
  High,
}

impl Severity {
  /// Badge label as shown in the UI ("Low" / "Medium" / "High").
  pub fn label(self) -> &'static str {
    match self {
      Self::Low => "Low",
      Self::Medium => "Medium",
      Self::High => "High",
    }
  }
}

impl std::fmt::Display for Severity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

// ---------------------------------------------------------------------------
// View selections
// ---------------------------------------------------------------------------

/// Severity filter selection. `All` passes every incident through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityFilter {
  #[default]
  All,
  Low,
  Medium,
  High,
}

impl SeverityFilter {
  pub fn matches(self, severity: Severity) -> bool {
    self == Self::All || self == Self::from(severity)
  }
}

impl From<Severity> for SeverityFilter {
  fn from(s: Severity) -> Self {
    match s {
      Severity::Low => Self::Low,
      Severity::Medium => Self::Medium,
      Severity::High => Self::High,
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
  #[default]
  Newest,
  Oldest,
}

// ---------------------------------------------------------------------------
// Internal models
// ---------------------------------------------------------------------------

/// One reported incident. Immutable once created; the store is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Incident {
  pub id: u64,
  pub title: String,
  pub description: String,
  pub severity: Severity,
  pub reported_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// A draft incident as entered into the report form. Unknown fields are
/// silently ignored; a missing severity falls back to the form default.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundDraft {
  pub title: String,
  pub description: String,
  #[serde(default)]
  pub severity: Severity,
}

/// A draft that passed validation, ready for [`IncidentStore::create`].
///
/// [`IncidentStore::create`]: crate::store::IncidentStore::create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
  pub title: String,
  pub description: String,
  pub severity: Severity,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// One row of the derived view, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentRow {
  pub id: u64,
  pub title: String,
  pub severity: Severity,
  /// Badge label ("Low" / "Medium" / "High").
  pub severity_label: &'static str,
  pub reported_at: DateTime<Utc>,
  /// Pre-formatted report date ("Mar 15, 2025").
  pub reported_date: String,
  pub expanded: bool,
  /// Full description, present only while the row is expanded.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

/// Current state of the report form, including inline validation errors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormSnapshot {
  pub visible: bool,
  pub title: String,
  pub description: String,
  pub severity: Severity,
  /// Field name -> inline error message. Empty when the form is clean.
  #[serde(skip_serializing_if = "std::collections::BTreeMap::is_empty")]
  pub errors: std::collections::BTreeMap<String, String>,
}

/// The full derived view after a command: selections, form state, and the
/// filtered+sorted rows. An empty `incidents` with a nonzero `total` is the
/// "no incidents found with current filters" case.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
  pub filter: SeverityFilter,
  pub sort: SortOrder,
  /// Incidents in the store, before filtering.
  pub total: usize,
  pub form: FormSnapshot,
  pub incidents: Vec<IncidentRow>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines. Field-level validation
/// errors never travel this way — they surface inline in [`FormSnapshot`].
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn severity_default_is_medium() {
    assert_eq!(Severity::default(), Severity::Medium);
  }

  #[test]
  fn filter_all_matches_everything() {
    for sev in [Severity::Low, Severity::Medium, Severity::High] {
      assert!(SeverityFilter::All.matches(sev));
    }
  }

  #[test]
  fn filter_matches_exact_severity_only() {
    assert!(SeverityFilter::High.matches(Severity::High));
    assert!(!SeverityFilter::High.matches(Severity::Medium));
    assert!(!SeverityFilter::High.matches(Severity::Low));
  }

  #[test]
  fn filter_from_severity_matches_that_severity() {
    for sev in [Severity::Low, Severity::Medium, Severity::High] {
      let filter = SeverityFilter::from(sev);
      assert_ne!(filter, SeverityFilter::All);
      assert!(filter.matches(sev));
    }
  }

  #[test]
  fn severity_serde_is_lowercase() {
    assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
    let parsed: Severity = serde_json::from_str("\"low\"").unwrap();
    assert_eq!(parsed, Severity::Low);
  }

  #[test]
  fn draft_severity_defaults_to_medium_when_omitted() {
    let draft: InboundDraft =
      serde_json::from_str(r#"{"title":"t","description":"d"}"#).unwrap();
    assert_eq!(draft.severity, Severity::Medium);
  }
}
