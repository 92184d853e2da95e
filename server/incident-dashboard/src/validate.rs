//! Form validation for draft incidents.

use crate::error::{FieldError, FieldErrors};
use crate::types::{InboundDraft, ValidDraft};

/// Validate a draft before it may enter the store.
///
/// A field fails when it is empty after trimming leading/trailing whitespace.
/// Title and description are checked independently, so a draft can fail on
/// both at once. Severity is constrained upstream (the three enum values are
/// the only representable inputs) and passes through untouched.
///
/// On success the draft text is returned as entered — trimming is a
/// validation concern only, not a normalization step.
pub fn validate(draft: &InboundDraft) -> Result<ValidDraft, FieldErrors> {
  let mut errors = FieldErrors::default();

  if draft.title.trim().is_empty() {
    errors.push(FieldError::MissingTitle);
  }
  if draft.description.trim().is_empty() {
    errors.push(FieldError::MissingDescription);
  }

  if !errors.is_empty() {
    return Err(errors);
  }

  Ok(ValidDraft {
    title: draft.title.clone(),
    description: draft.description.clone(),
    severity: draft.severity,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Severity;

  fn draft(title: &str, description: &str) -> InboundDraft {
    InboundDraft {
      title: title.into(),
      description: description.into(),
      severity: Severity::Low,
    }
  }

  #[test]
  fn valid_draft_passes_through_unchanged() {
    let valid = validate(&draft("  Test  ", "Desc")).unwrap();
    assert_eq!(valid.title, "  Test  ");
    assert_eq!(valid.description, "Desc");
    assert_eq!(valid.severity, Severity::Low);
  }

  #[test]
  fn empty_title_is_missing_title() {
    let errs = validate(&draft("", "Desc")).unwrap_err();
    assert!(errs.contains(FieldError::MissingTitle));
    assert!(!errs.contains(FieldError::MissingDescription));
  }

  #[test]
  fn whitespace_only_title_is_missing_title() {
    let errs = validate(&draft("   \t ", "Desc")).unwrap_err();
    assert!(errs.contains(FieldError::MissingTitle));
  }

  #[test]
  fn whitespace_only_description_is_missing_description() {
    let errs = validate(&draft("Test", " \n ")).unwrap_err();
    assert!(errs.contains(FieldError::MissingDescription));
  }

  #[test]
  fn both_fields_reported_together() {
    let errs = validate(&draft(" ", "")).unwrap_err();
    assert!(errs.contains(FieldError::MissingTitle));
    assert!(errs.contains(FieldError::MissingDescription));
    assert_eq!(errs.iter().count(), 2);
  }
}
