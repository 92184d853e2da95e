//! Per-incident expand/collapse state.

use std::collections::BTreeSet;

/// The set of incident ids currently showing full detail.
///
/// Each id toggles independently between collapsed (the initial state) and
/// expanded; toggling twice restores the original membership. Purely a UI
/// concern — carries no reference into the store.
#[derive(Debug, Clone, Default)]
pub struct ExpandedSet {
  ids: BTreeSet<u64>,
}

impl ExpandedSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Flip the expansion state of `id` and return the new membership.
  pub fn toggle(&mut self, id: u64) -> bool {
    if self.ids.remove(&id) {
      false
    } else {
      self.ids.insert(id);
      true
    }
  }

  pub fn is_expanded(&self, id: u64) -> bool {
    self.ids.contains(&id)
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }
}
