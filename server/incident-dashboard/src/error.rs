//! Structured error types for the dashboard.

use std::collections::BTreeMap;

use thiserror::Error;

/// A single form-field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
  #[error("Title is required")]
  MissingTitle,
  #[error("Description is required")]
  MissingDescription,
}

impl FieldError {
  /// The form field this error attaches to.
  pub fn field(self) -> &'static str {
    match self {
      Self::MissingTitle => "title",
      Self::MissingDescription => "description",
    }
  }
}

/// All field errors from one validation pass. Both fields are checked
/// independently, so both errors can be present at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
  pub fn push(&mut self, err: FieldError) {
    self.0.push(err);
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn contains(&self, err: FieldError) -> bool {
    self.0.contains(&err)
  }

  pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
    self.0.iter().copied()
  }

  /// Field name -> inline message, for rendering next to the inputs.
  pub fn by_field(&self) -> BTreeMap<String, String> {
    self
      .0
      .iter()
      .map(|e| (e.field().to_string(), e.to_string()))
      .collect()
  }
}

impl std::fmt::Display for FieldErrors {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let mut first = true;
    for err in &self.0 {
      if !first {
        f.write_str("; ")?;
      }
      write!(f, "{}: {}", err.field(), err)?;
      first = false;
    }
    Ok(())
  }
}

impl std::error::Error for FieldErrors {}

/// Frontend-level errors of the JSON-lines loop. Validation failures are not
/// represented here: they surface as inline form state, never as an error.
#[derive(Debug, Error)]
pub enum DashboardError {
  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}
