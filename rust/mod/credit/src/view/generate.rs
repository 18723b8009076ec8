//! Report generation form.

use crate::state::GenerateState;

use super::banner;

pub fn render_generate(state: &GenerateState) -> String {
    let mut out = vec!["Generate Credit Report".to_string()];
    if let Some(b) = banner(state.error.as_deref()) {
        out.push(b);
    }
    let field = |v: &str| if v.is_empty() { "-".to_string() } else { v.to_string() };
    out.push(format!("  Business ID: {}", field(&state.business_id)));
    out.push(format!("  Purpose: {}", field(&state.purpose)));
    out.push(format!("  Comments: {}", field(&state.comments)));
    out.push(if state.submitting {
        "  [Generating...] (disabled)".to_string()
    } else {
        "  [Generate]".to_string()
    });
    if let Some(report) = &state.generated {
        out.push(format!(
            "Report {} generated for {}.",
            report.report_number, report.business_name
        ));
    }
    out.join("\n")
}
