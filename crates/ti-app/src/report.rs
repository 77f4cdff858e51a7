//! Plain-text report of a calculation.

use std::fmt::Write;

use ti_turbulence::Reported;

use crate::format::format_reported;
use crate::service::CalculateResponse;

pub const DIRICHLET_DISCLAIMER: &str = "These are direct values calculated from the inputs. \
It is often more stable to use the recommended conditions above if your solver supports them.";

fn section(out: &mut String, title: &str, items: &[Reported]) {
    let _ = writeln!(out, "{title}");
    let width = items
        .iter()
        .map(|r| r.quantity.label().chars().count())
        .max()
        .unwrap_or(0);
    for r in items {
        let label = r.quantity.label();
        let pad = width - label.chars().count();
        let _ = writeln!(out, "  {label}{}  {}", " ".repeat(pad), format_reported(r));
    }
}

/// Render the response as the text shown to the user.
pub fn render_report(response: &CalculateResponse) -> String {
    let mut out = String::new();
    let r = &response.result;

    let _ = writeln!(out, "Model:       {}", r.model);
    let _ = writeln!(out, "Application: {}", r.application);
    out.push('\n');

    section(
        &mut out,
        "Recommended Boundary Conditions",
        &response.selection.primary,
    );
    let _ = writeln!(out, "  {}", response.selection.advice);

    if !response.flow_properties.is_empty() {
        out.push('\n');
        section(&mut out, "Calculated Flow Properties", &response.flow_properties);
    }

    if !response.selection.secondary.is_empty() {
        out.push('\n');
        section(
            &mut out,
            "Reference Dirichlet Values",
            &response.selection.secondary,
        );
        let _ = writeln!(out, "  Disclaimer: {DIRICHLET_DISCLAIMER}");
    }

    if !response.notes.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Notes");
        for note in &response.notes {
            let _ = writeln!(out, "  - {note}");
        }
    }

    out
}
