//! Append-only in-memory incident store.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{Incident, Severity, ValidDraft};

/// Holds every incident reported this session. Incidents are never mutated
/// or deleted; newest-created sits at the front of the backing vector
/// (display order is decided separately by view derivation).
#[derive(Debug, Default)]
pub struct IncidentStore {
  incidents: Vec<Incident>,
}

impl IncidentStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// The three example incidents loaded at process start.
  pub fn seed() -> Self {
    let mut store = Self::new();
    store.incidents = vec![
      Incident {
        id: 3,
        title: "Minor Data Leak via Chatbot".into(),
        description: "Chatbot conversation interface inadvertently exposed email \
                      addresses of other users in response to specific queries about \
                      account details."
          .into(),
        severity: Severity::Low,
        reported_at: Utc.with_ymd_and_hms(2025, 3, 20, 9, 15, 0).unwrap(),
      },
      Incident {
        id: 2,
        title: "LLM Hallucination in Critical Info".into(),
        description: "Large Language Model provided incorrect medical information \
                      when asked about emergency procedures, potentially endangering \
                      users who relied on the advice."
          .into(),
        severity: Severity::High,
        reported_at: Utc.with_ymd_and_hms(2025, 4, 1, 14, 30, 0).unwrap(),
      },
      Incident {
        id: 1,
        title: "Biased Recommendation Algorithm".into(),
        description: "Algorithm consistently favored certain demographics over others \
                      in job recommendation results, showing significant gender bias \
                      in technical role suggestions."
          .into(),
        severity: Severity::Medium,
        reported_at: Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap(),
      },
    ];
    store
  }

  pub fn len(&self) -> usize {
    self.incidents.len()
  }

  pub fn is_empty(&self) -> bool {
    self.incidents.is_empty()
  }

  /// All incidents in storage order (newest-created first).
  pub fn incidents(&self) -> &[Incident] {
    &self.incidents
  }

  pub fn iter(&self) -> impl Iterator<Item = &Incident> {
    self.incidents.iter()
  }

  pub fn get(&self, id: u64) -> Option<&Incident> {
    self.incidents.iter().find(|i| i.id == id)
  }

  /// Append a validated draft, stamped with the current time.
  pub fn create(&mut self, draft: ValidDraft) -> &Incident {
    self.create_at(draft, Utc::now())
  }

  /// Append a validated draft with an explicit report time.
  ///
  /// Assigns `id = max(existing ids, 0) + 1` (so the first incident in an
  /// empty store gets id 1) and prepends the record.
  pub fn create_at(&mut self, draft: ValidDraft, reported_at: DateTime<Utc>) -> &Incident {
    let id = self.incidents.iter().map(|i| i.id).max().unwrap_or(0) + 1;
    let incident = Incident {
      id,
      title: draft.title,
      description: draft.description,
      severity: draft.severity,
      reported_at,
    };
    self.incidents.insert(0, incident);
    &self.incidents[0]
  }
}
