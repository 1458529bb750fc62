//! Human-readable text rendering of a classification [`Report`].
//!
//! The output is stable plain text for terminals and logs. It is not a
//! canonical format; the JSON form of [`Report`] is the machine-readable one.

use crate::resolution::Resolution;
use crate::walk::{Report, ReportEntry};

/// Render a single entry on one line.
///
/// ```text
/// $.result[0].attachment[0]  object  Image  convenient_presence
/// ```
pub fn render_entry(entry: &ReportEntry) -> String {
    let mut out = format!("{}  {}", entry.location(), entry.kind);
    if let Some(type_name) = &entry.type_name {
        out.push_str(&format!("  {type_name}"));
    }
    out.push_str(&format!("  {}", entry.presence));
    out
}

/// Render a report grouped by resolution.
///
/// ```text
/// Resolution report  7 slots
/// ──────────────────────────
///
/// RESOLVED (2)
///   $.result[0]  object  Note  convenient_presence
///   $.result[0].content[0]  text  convenient_presence
///
/// RAW RESOLUTION NEEDED (5)
///   $[0]  object  Arrive  convenient_presence
///   ...
/// ```
pub fn render_report(report: &Report) -> String {
    let total = report.len();
    let header = format!(
        "Resolution report  {} slot{}",
        total,
        if total == 1 { "" } else { "s" }
    );
    let rule = "─".repeat(header.chars().count());

    let mut out = format!("{header}\n{rule}\n");

    let groups = [
        (Resolution::Resolved, "RESOLVED"),
        (Resolution::RawResolutionNeeded, "RAW RESOLUTION NEEDED"),
        (Resolution::Unresolved, "UNRESOLVED"),
    ];

    for (resolution, label) in groups {
        let entries: Vec<&ReportEntry> = report
            .entries()
            .iter()
            .filter(|e| e.resolution == resolution)
            .collect();
        if entries.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(&format!("{} ({})\n", label, entries.len()));
        for e in entries {
            out.push_str(&format!("  {}\n", truncate(&render_entry(e), 96)));
        }
    }

    out
}

// --- helpers -----------------------------------------------------------------

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max - 1).collect();
        format!("{kept}…")
    }
}

// --- tests -------------------------------------------------------------------
