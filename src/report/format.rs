//! Formatted terminal output for stored curves and curve sets.
//!
//! Formatting stays out of the storage and fitting code so:
//! - the engine itself remains free of presentation concerns
//! - output changes are localized (important for future snapshot tests)
//!
//! These summaries are meant for logs and terminal inspection; chart
//! rendering and phrase interpolation live in outer layers.

use crate::sets::MemberAnnotation;
use crate::store::AnalysisOutput;

/// Format a one-screen summary of everything an analysis run stored.
pub fn format_analysis_summary(output: &AnalysisOutput) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Analysis curves ({}) ===\n", output.asof_date()));
    if output.curves().is_empty() {
        out.push_str("(no curves stored)\n");
    }
    for curve in output.curves() {
        let kind = curve.kind();
        out.push_str(&format!(
            "- {:<28} [{}] {} vs {} | n={}\n",
            kind.display_name(),
            kind.application().display_name(),
            kind.y_unit().unit_label(),
            kind.x_unit().unit_label(),
            curve.len(),
        ));
    }

    match output.curve_set() {
        None => out.push_str("\nCurve set: none\n"),
        Some(set) => {
            out.push_str(&format!(
                "\nCurve set: {} / {} | members={}\n",
                set.source().display_name(),
                set.kind().display_name(),
                set.members().len(),
            ));
            for member in set.members() {
                match member.annotation {
                    MemberAnnotation::Tornado { frequency } => {
                        out.push_str(&format!(
                            "  - {:>7.2} Hz | n={}\n",
                            frequency,
                            member.curve.len()
                        ));
                    }
                    MemberAnnotation::GasLiquidRatio { ratio, primary } => {
                        let marker = if primary { " (primary)" } else { "" };
                        out.push_str(&format!(
                            "  - GLR {:>8.1}{} | n={}\n",
                            ratio,
                            marker,
                            member.curve.len()
                        ));
                    }
                }
            }
        }
    }

    out
}
