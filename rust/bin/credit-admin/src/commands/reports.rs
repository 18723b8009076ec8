//! `report`, `my-reports`, `generate`.

use std::path::Path;

use anyhow::Result;

use credit_admin::present::{RingGeometry, RingSize};
use credit_admin::request::*;
use credit_admin::state::*;
use credit_admin::view::{render_credit_report, render_generate, render_my_reports};

use super::{now, Console};

/// Show one report, looked up by number or by id. `svg` also writes the
/// score ring to a file.
pub async fn show(console: &Console, lookup: ReportLookup, svg: Option<&Path>) -> Result<()> {
    let path = ReportView::path(&lookup.key());
    console.emit(LoadReportReq::PATH, LoadReportReq { lookup }).await;
    let state = console.loaded::<ReportView>(&path)?;
    let Some(report) = &state.report else {
        anyhow::bail!("Report not found");
    };

    if let Some(svg_path) = svg {
        let ring = RingGeometry::new(RingSize::Large, report.credit_score);
        std::fs::write(svg_path, ring.svg(report.credit_score))?;
        tracing::info!(path = %svg_path.display(), "score chart written");
    }
    console.print(report, || render_credit_report(report, now(), RingSize::Large))
}

/// One page of the caller's reports. `page` is 1-based as typed.
pub async fn mine(console: &Console, page: u32) -> Result<()> {
    console
        .emit(
            LoadMyReportsReq::PATH,
            LoadMyReportsReq {
                page: page.saturating_sub(1),
            },
        )
        .await;
    let state = console.loaded::<MyReportsState>(MyReportsState::PATH)?;
    console.print(&state.page, || render_my_reports(&state, now()))
}

pub async fn generate(
    console: &Console,
    business_id: &str,
    purpose: Option<String>,
    comments: Option<String>,
) -> Result<()> {
    console
        .emit(
            GenerateReportReq::PATH,
            GenerateReportReq {
                business_id: business_id.to_string(),
                purpose,
                comments,
            },
        )
        .await;
    let state = console.loaded::<GenerateState>(GenerateState::PATH)?;
    console.print(&state.generated, || render_generate(&state))
}
