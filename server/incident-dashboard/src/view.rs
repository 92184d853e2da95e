//! View derivation: the filtered + sorted projection of the store.

use chrono::{DateTime, Utc};

use crate::types::{Incident, SeverityFilter, SortOrder};

/// Compute the display projection for the given selections.
///
/// Pure: filters by exact severity match (or passes everything for `All`),
/// then orders by `reported_at` — `Newest` descending, `Oldest` ascending.
/// The sort is stable, so incidents sharing a timestamp keep their relative
/// store order. Returns fresh clones; the store is never aliased or mutated.
pub fn derive(
  incidents: &[Incident],
  filter: SeverityFilter,
  sort: SortOrder,
) -> Vec<Incident> {
  let mut view: Vec<Incident> = incidents
    .iter()
    .filter(|i| filter.matches(i.severity))
    .cloned()
    .collect();

  // Vec::sort_by is stable; ties preserve store order.
  match sort {
    SortOrder::Newest => view.sort_by(|a, b| b.reported_at.cmp(&a.reported_at)),
    SortOrder::Oldest => view.sort_by(|a, b| a.reported_at.cmp(&b.reported_at)),
  }

  view
}

/// Format a report timestamp for display: "Mar 15, 2025".
pub fn display_date(ts: &DateTime<Utc>) -> String {
  ts.format("%b %-d, %Y").to_string()
}
