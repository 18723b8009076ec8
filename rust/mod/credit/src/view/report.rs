//! Credit report display: header, score ring, badges, component bars and
//! the textual sections.

use chrono::NaiveDateTime;

use crate::model::{ComponentScores, CreditReport};
use crate::present::format::{format_date, format_optional_currency, format_optional_date, format_score};
use crate::present::labels::{grade_badge, risk_badge, status_badge};
use crate::present::score::text_bar;
use crate::present::{RingGeometry, RingSize, ScoreBand};
use crate::state::ReportView;

use super::{badge, banner, loading_spinner};

const BAR_CELLS: usize = 20;

/// Score chart: the number, its band, and the ring geometry the graphical
/// shells draw.
pub fn render_score_chart(score: f64, size: RingSize) -> String {
    let band = ScoreBand::of(score);
    let ring = RingGeometry::new(size, score);
    format!(
        "Credit Score: {} / 100 ({})\n  ring r={} stroke={} font={} circumference={:.2} offset={:.2} color={}",
        format_score(score),
        band.label(),
        ring.radius,
        ring.stroke_width,
        ring.font_size,
        ring.circumference,
        ring.dash_offset,
        band.tone().name(),
    )
}

/// One bar per component score; widths clamp at 100.
pub fn render_component_scores(scores: &ComponentScores) -> String {
    let label_width = scores
        .entries()
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    scores
        .entries()
        .iter()
        .map(|(label, score)| {
            format!(
                "  {:<width$}  {}  {}",
                label,
                text_bar(*score, BAR_CELLS),
                format_score(*score),
                width = label_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full report. `now` decides the expired flag and must be the render-time
/// clock.
pub fn render_credit_report(report: &CreditReport, now: NaiveDateTime, size: RingSize) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "Credit Report {}  {}",
        report.report_number,
        badge(&status_badge(&report.status))
    ));
    if report.is_expired(now) {
        out.push(format!(
            "⚠ Expired on {}. Generate a new report for a current assessment.",
            format_date(&report.report_valid_until)
        ));
    }

    let mut ids = Vec::new();
    if let Some(gstin) = &report.business_gstin {
        ids.push(format!("GSTIN {}", gstin));
    }
    if let Some(pan) = &report.business_pan {
        ids.push(format!("PAN {}", pan));
    }
    out.push(if ids.is_empty() {
        format!("Business: {}", report.business_name)
    } else {
        format!("Business: {} ({})", report.business_name, ids.join(", "))
    });
    out.push(format!(
        "Generated: {}  Valid until: {}",
        format_optional_date(report.created_at.as_ref(), "-"),
        format_date(&report.report_valid_until)
    ));

    out.push(String::new());
    out.push(render_score_chart(report.credit_score, size));
    out.push(format!(
        "Grade: {}  Risk: {}",
        badge(&grade_badge(&report.credit_grade)),
        badge(&risk_badge(&report.risk_category))
    ));
    out.push(format!(
        "Recommended credit limit: {}",
        format_optional_currency(report.recommended_credit_limit)
    ));

    out.push(String::new());
    out.push("Component Scores".to_string());
    out.push(render_component_scores(&report.components));

    let sections = [
        ("Summary", &report.summary),
        ("Recommendations", &report.recommendations),
        ("Risk Factors", &report.risk_factors),
        ("Positive Indicators", &report.positive_indicators),
        ("Purpose", &report.purpose),
        ("Comments", &report.comments),
    ];
    for (title, text) in sections {
        if let Some(text) = text.as_deref().filter(|t| !t.trim().is_empty()) {
            out.push(String::new());
            out.push(title.to_string());
            out.extend(text.lines().map(|l| format!("  {}", l)));
        }
    }
    out.join("\n")
}

pub fn render_report_view(state: &ReportView, now: NaiveDateTime) -> String {
    let mut out = Vec::new();
    if let Some(b) = banner(state.error.as_deref()) {
        out.push(b);
    }
    match &state.report {
        Some(report) => out.push(render_credit_report(report, now, RingSize::Large)),
        None if state.loading => out.push(loading_spinner(Some("Loading report..."))),
        None => out.push("Report not found.".to_string()),
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn report() -> CreditReport {
        serde_json::from_value(crate::model::report::tests::sample_json()).unwrap()
    }

    #[test]
    fn expired_flag_follows_the_clock() {
        let r = report();
        let before = r.report_valid_until - Duration::days(1);
        let after = r.report_valid_until + Duration::minutes(1);
        assert!(!render_credit_report(&r, before, RingSize::Medium).contains("Expired on"));
        assert!(render_credit_report(&r, after, RingSize::Medium).contains("Expired on 15 Apr 2024"));
        assert!(!render_credit_report(&r, r.report_valid_until, RingSize::Medium).contains("Expired on"));
    }

    #[test]
    fn report_sections() {
        let r = report();
        let out = render_credit_report(&r, r.report_valid_until, RingSize::Medium);
        assert!(out.starts_with("Credit Report CR-2024-0001  [Generated]"));
        assert!(out.contains("Business: Sharma Textiles Pvt Ltd (GSTIN 27AAPFU0939F1ZV)"));
        assert!(out.contains("Credit Score: 72.5 / 100 (Good)"));
        assert!(out.contains("Grade: [BBB - Adequate]  Risk: [Moderate Risk]"));
        assert!(out.contains("Recommended credit limit: ₹25.00 L"));
        assert!(out.contains("Summary\n  Stable mid-size manufacturer."));
        assert!(!out.contains("Recommendations"));
    }

    #[test]
    fn component_bars() {
        let scores = ComponentScores {
            financial_health_score: 80.0,
            payment_behavior_score: 50.0,
            compliance_score: 120.0,
            business_stability_score: 0.0,
        };
        let out = render_component_scores(&scores);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains(&format!("{}{}", "█".repeat(16), "░".repeat(4))));
        assert!(lines[2].contains(&"█".repeat(20)));
        assert!(lines[2].ends_with("120"));
    }

    #[test]
    fn chart_geometry() {
        let out = render_score_chart(75.0, RingSize::Medium);
        assert!(out.contains("ring r=60 stroke=10 font=24"));
        assert!(out.contains("circumference=376.99 offset=94.25"));
        assert!(out.contains("color=blue"));
    }

    #[test]
    fn view_states() {
        let loading = ReportView { loading: true, ..Default::default() };
        let now = report().report_valid_until;
        assert!(render_report_view(&loading, now).contains("Loading report..."));

        let failed = ReportView { error: Some("Not found".into()), ..Default::default() };
        assert_eq!(render_report_view(&failed, now), "! Not found  (dismiss: view/dismiss-error)\nReport not found.");
    }
}
