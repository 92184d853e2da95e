//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! The first output line is the seeded initial view. Each input line is a
//! Command; each valid command produces one ViewSnapshot line. Malformed
//! lines produce an ErrorOutput line and leave the dashboard untouched.

use incident_dashboard::types::ErrorOutput;
use incident_dashboard::{Command, Dashboard, DashboardError};
use std::io::{self, BufRead, Write};

fn main() {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let mut dashboard = Dashboard::seeded();

  // Initial render before any user action.
  let _ = serde_json::to_writer(&mut out, &dashboard.snapshot());
  let _ = writeln!(out);
  let _ = out.flush();

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "incident-dashboard: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    // Parse the command.
    let cmd: Command = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        let err = ErrorOutput::new(DashboardError::from(e).to_string());
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        let _ = out.flush();
        continue;
      }
    };

    // Apply and emit the re-derived view.
    let snapshot = dashboard.apply(cmd);
    let _ = serde_json::to_writer(&mut out, &snapshot);
    let _ = writeln!(out);
    let _ = out.flush();
  }

  let _ = out.flush();
}
