//! Credit reports: single report, the caller's paginated list, generation.

use credit_flux::StateStore;

use crate::handlers::helpers::{commit_with, update_existing};
use crate::handlers::CreditContext;
use crate::model::GenerateReportRequest;
use crate::request::*;
use crate::state::*;

/// Handle `credit/report/load`.
pub async fn handle_load_report(req: &LoadReportReq, store: &StateStore, ctx: &CreditContext) {
    let path = ReportView::path(&req.lookup.key());
    let ticket = store.begin(&path);
    store.update(&path, ReportView::default, |s: &mut ReportView| {
        s.loading = true;
        s.error = None;
    });

    let result = match &req.lookup {
        ReportLookup::Number(number) => ctx.reports.by_number(number).await,
        ReportLookup::Id(id) => ctx.reports.by_id(id).await,
    };
    commit_with(store, &ticket, ReportView::default, |s: &mut ReportView| {
        s.loading = false;
        match result {
            Ok(report) => s.report = Some(report),
            Err(e) => s.error = Some(e.message()),
        }
    });
}

/// Handle `credit/my-reports/load`.
///
/// The last page stays visible while the requested one loads. A slow
/// response for a page the user already flipped past is dropped.
pub async fn handle_load_my_reports(req: &LoadMyReportsReq, store: &StateStore, ctx: &CreditContext) {
    let page_size = ctx.page_size;
    let init = move || MyReportsState::new(page_size);

    let ticket = store.begin(MyReportsState::PATH);
    store.update(MyReportsState::PATH, init, |s: &mut MyReportsState| {
        s.loading = true;
        s.error = None;
        s.page_index = req.page;
    });

    let result = ctx.reports.my_reports(req.page, page_size).await;
    commit_with(store, &ticket, init, |s: &mut MyReportsState| {
        s.loading = false;
        match result {
            Ok(page) => s.page = page,
            Err(e) => s.error = Some(e.message()),
        }
    });
}

/// Handle `credit/my-reports/turn`. A turn that would leave the page range
/// does nothing.
pub async fn handle_turn_my_reports(req: &TurnMyReportsPageReq, store: &StateStore, ctx: &CreditContext) {
    let Some(state) = store.get_as::<MyReportsState>(MyReportsState::PATH) else {
        return;
    };
    let pager = state.pager();
    let target = pager.turn(req.turn);
    if target == pager {
        return;
    }
    handle_load_my_reports(&LoadMyReportsReq { page: target.page }, store, ctx).await;
}

/// Handle `credit/generate/submit`.
pub async fn handle_generate(req: &GenerateReportReq, store: &StateStore, ctx: &CreditContext) {
    let busy = store
        .get_as::<GenerateState>(GenerateState::PATH)
        .is_some_and(|s| s.submitting);
    if busy {
        return;
    }

    let business_id = req.business_id.trim().to_string();
    store.update(GenerateState::PATH, GenerateState::default, |s: &mut GenerateState| {
        s.business_id = business_id.clone();
        s.purpose = req.purpose.clone().unwrap_or_default();
        s.comments = req.comments.clone().unwrap_or_default();
        s.generated = None;
        s.error = None;
        s.submitting = !business_id.is_empty();
        if business_id.is_empty() {
            s.error = Some("Business ID is required".to_string());
        }
    });
    if business_id.is_empty() {
        return;
    }

    let body = GenerateReportRequest {
        business_id,
        purpose: non_blank(req.purpose.as_deref()),
        comments: non_blank(req.comments.as_deref()),
    };
    let result = ctx.reports.generate(&body).await;

    update_existing(store, GenerateState::PATH, |s: &mut GenerateState| {
        match result {
            Ok(report) => {
                tracing::info!(report_number = %report.report_number, "credit report generated");
                s.generated = Some(report);
                s.purpose.clear();
                s.comments.clear();
            }
            Err(e) => s.error = Some(e.message()),
        }
        s.submitting = false;
    });
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
