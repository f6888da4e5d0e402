//! Plain-text rendering of a wash plan for the CLI.

use std::fmt::Write;

use wash_batch::WashPlan;

/// Render `plan` as a table of sorted colors, the batches and the savings.
pub fn render_text(plan: &WashPlan) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Sorted colors (lightest first):");
    let _ = writeln!(
        out,
        "  {:>3}  {:<7}  {:>9}  {:<4}  {:<24}  Source",
        "#", "Hex", "Lightness", "Wash", "Remark"
    );
    for (i, color) in plan.ordered().iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>3}  {:<7}  {:>9.2}  {:<4}  {:<24}  {}",
            i + 1,
            color.hex(),
            color.lightness(),
            if color.requires_wash() { "yes" } else { "no" },
            color.wash_reason().map(|r| r.remark()).unwrap_or(""),
            color.source_id()
        );
    }

    let _ = writeln!(out, "\nBatches:");
    for (i, batch) in plan.batches().iter().enumerate() {
        let members: Vec<String> = batch
            .iter()
            .map(|c| format!("{} ({})", c.hex(), c.source_id()))
            .collect();
        let _ = writeln!(out, "  Batch {}: {}", i + 1, members.join(", "));
    }

    if !plan.skipped().is_empty() {
        let _ = writeln!(out, "\nSkipped:");
        for skipped in plan.skipped() {
            let _ = writeln!(out, "  {}: {}", skipped.source_id, skipped.reason);
        }
    }

    let _ = writeln!(out, "\nWashes saved: {}", plan.washes_saved());
    out
}
