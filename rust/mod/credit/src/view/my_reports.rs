//! The caller's reports, one page at a time.

use chrono::NaiveDateTime;

use crate::model::CreditReport;
use crate::present::format::{format_date, format_score};
use crate::present::labels::{grade_badge, risk_badge, status_badge};
use crate::state::MyReportsState;

use super::{badge, banner, loading_spinner, pagination, Table};

/// Report rows for a list; expiry is derived from `now`, not the stored
/// status.
pub fn report_table(reports: &[CreditReport], now: NaiveDateTime) -> Table {
    let mut table = Table::new([
        "Report #", "Business", "Grade", "Score", "Risk", "Generated", "Valid Until", "Status",
    ]);
    for r in reports {
        let status = if r.is_expired(now) {
            "[Expired]".to_string()
        } else {
            badge(&status_badge(&r.status))
        };
        table.row(vec![
            r.report_number.clone(),
            r.business_name.clone(),
            badge(&grade_badge(&r.credit_grade)),
            format_score(r.credit_score),
            badge(&risk_badge(&r.risk_category)),
            r.created_at.as_ref().map(format_date).unwrap_or_else(|| "-".to_string()),
            format_date(&r.report_valid_until),
            status,
        ]);
    }
    table
}

pub fn render_my_reports(state: &MyReportsState, now: NaiveDateTime) -> String {
    let mut out = vec!["My Credit Reports".to_string()];
    if let Some(b) = banner(state.error.as_deref()) {
        out.push(b);
    }
    if state.loading {
        out.push(loading_spinner(Some("Loading reports...")));
    }

    if state.page.content.is_empty() {
        if !state.loading {
            out.push("You have not generated any credit reports yet.".to_string());
        }
    } else {
        out.push(report_table(&state.page.content, now).render());
        out.push(format!(
            "{} reports  {}",
            state.page.total_elements,
            pagination(&state.pager())
        ));
    }
    out.join("\n")
}
