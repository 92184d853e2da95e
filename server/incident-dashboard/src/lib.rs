//! AI-Safety Incident Dashboard core — deterministic, in-memory view model.
//!
//! Holds the session's incident log, derives the filtered + sorted display
//! projection on demand, validates drafts entering the store, and tracks
//! per-incident expand/collapse and report-form state.
//!
//! No DB, no network; pure computation + in-memory state. The presentation
//! layer consumes [`ViewSnapshot`] lines and sends [`Command`] lines back.

pub mod dashboard;
pub mod error;
pub mod expand;
pub mod store;
pub mod types;
pub mod validate;
pub mod view;

pub use dashboard::{Command, Dashboard};
pub use error::{DashboardError, FieldError, FieldErrors};
pub use store::IncidentStore;
pub use types::{Incident, InboundDraft, Severity, SeverityFilter, SortOrder, ViewSnapshot};
