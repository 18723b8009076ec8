//! Business detail: header, tab strip, and the active tab's body.

use chrono::NaiveDateTime;
use credit_flux::Location;

use crate::model::Business;
use crate::present::format::{format_optional_currency, format_optional_date};
use crate::present::labels::{active_badge, humanize};
use crate::state::{BusinessDetail, BusinessTab, CreditHistory};

use super::my_reports::report_table;
use super::{badge, loading_spinner};

/// Render the detail view for `location`. `detail` is the state stored for
/// the location's business, if any.
pub fn render_business_detail(
    detail: Option<&BusinessDetail>,
    location: &Location,
    now: NaiveDateTime,
) -> String {
    let Some(detail) = detail.filter(|d| !d.loading) else {
        return loading_spinner(Some("Loading business details..."));
    };
    let Some(business) = detail.business.as_ref().filter(|_| detail.error.is_none()) else {
        return not_found(detail);
    };

    let tab = BusinessTab::from_location(location);
    let mut out = vec![header(business), tab_strip(tab), String::new()];
    out.push(match tab {
        BusinessTab::Overview => overview(business),
        BusinessTab::Compliance => compliance(business),
        BusinessTab::CreditHistory => credit_history(&detail.history, now),
    });
    out.join("\n")
}

fn not_found(detail: &BusinessDetail) -> String {
    let mut out = vec![
        "Business Not Found".to_string(),
        format!("No business could be loaded for id {}.", detail.business_id),
    ];
    if let Some(error) = &detail.error {
        out.push(error.clone());
    }
    out.push("[Back to search]".to_string());
    out.join("\n")
}

fn header(b: &Business) -> String {
    let mut out = vec![format!("{}  {}", b.display_name(), badge(&active_badge(b.active)))];
    if b.display_name() != b.legal_name {
        out.push(format!("Legal name: {}", b.legal_name));
    }
    if let Some(gstin) = &b.gstin {
        out.push(format!("GSTIN: {}", gstin));
    }
    out.join("\n")
}

/// `[Overview]  Compliance  Credit History`; the active tab is bracketed.
pub fn tab_strip(active: BusinessTab) -> String {
    BusinessTab::ALL
        .iter()
        .map(|t| {
            if *t == active {
                format!("[{}]", t.label())
            } else {
                format!(" {} ", t.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

fn or_dash(v: Option<&str>) -> String {
    v.filter(|s| !s.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

fn overview(b: &Business) -> String {
    let mut rows = vec![
        ("Business Type", b.business_type.as_deref().map(humanize).unwrap_or_else(|| "-".into())),
        ("Industry", b.industry_category.as_deref().map(humanize).unwrap_or_else(|| "-".into())),
        ("Business Size", b.business_size.as_deref().map(humanize).unwrap_or_else(|| "-".into())),
        ("Registered", format_optional_date(b.registration_date.as_ref(), "-")),
        ("Annual Turnover", format_optional_currency(b.annual_turnover)),
        ("Employees", b.employee_count.map(|n| n.to_string()).unwrap_or_else(|| "-".into())),
        ("Address", {
            let a = b.address();
            if a.is_empty() { "-".to_string() } else { a }
        }),
        ("Email", or_dash(b.email.as_deref())),
        ("Phone", or_dash(b.phone.as_deref())),
        ("Website", or_dash(b.website.as_deref())),
    ];
    if let Some(d) = b.description.as_deref().filter(|d| !d.trim().is_empty()) {
        rows.push(("About", d.to_string()));
    }
    key_values(&rows)
}

fn compliance(b: &Business) -> String {
    let status = |verified: bool| if verified { "Verified ✓" } else { "Not verified" };
    key_values(&[
        ("GSTIN", or_dash(b.gstin.as_deref())),
        ("GSTIN Status", status(b.gstin_verified).to_string()),
        ("PAN", or_dash(b.pan.as_deref())),
        ("PAN Status", status(b.pan_verified).to_string()),
        ("Registered", format_optional_date(b.registration_date.as_ref(), "-")),
    ])
}

fn credit_history(history: &CreditHistory, now: NaiveDateTime) -> String {
    if history.loading {
        return loading_spinner(Some("Loading credit history..."));
    }
    if history.reports.is_empty() {
        return "No credit reports generated for this business yet.".to_string();
    }
    report_table(&history.reports, now).render()
}

fn key_values(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|(k, v)| format!("  {:<width$}  {}", k, v, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
