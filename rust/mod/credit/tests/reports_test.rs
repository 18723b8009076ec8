//! Credit report flows against a mock backend.

mod common;

use std::sync::atomic::Ordering;
use std::time::Duration;

use serde_json::json;

use credit_admin::present::PageTurn;
use credit_admin::request::*;
use credit_admin::state::*;
use credit_flux::Flux;

fn my_reports(flux: &Flux) -> MyReportsState {
    flux.get_as::<MyReportsState>(MyReportsState::PATH).unwrap()
}

fn page_call(page: u32) -> String {
    format!("GET /api/credit/my-reports?page={}&size=10", page)
}

async fn turn(flux: &Flux, turn: PageTurn) {
    flux.emit(TurnMyReportsPageReq::PATH, TurnMyReportsPageReq { turn })
        .await;
}

async fn load_report(flux: &Flux, lookup: ReportLookup) -> ReportView {
    let path = ReportView::path(&lookup.key());
    flux.emit(LoadReportReq::PATH, LoadReportReq { lookup }).await;
    flux.get_as::<ReportView>(&path).unwrap()
}

#[tokio::test]
async fn report_by_number_and_by_id() {
    let (flux, backend) = common::setup().await;

    let view = load_report(&flux, ReportLookup::Number("CR-0007".into())).await;
    let report = view.report.unwrap();
    assert_eq!(report.report_number, "CR-0007");
    assert_eq!(report.credit_score, 76.0);
    assert!(!view.loading);

    let view = load_report(&flux, ReportLookup::Id("r-9".into())).await;
    assert_eq!(view.report.unwrap().id, "r-9");

    assert_eq!(
        backend.calls(),
        vec!["GET /api/credit/report/CR-0007", "GET /api/credit/report/id/r-9"]
    );
}

#[tokio::test]
async fn number_and_id_lookups_keep_separate_views() {
    let (flux, _backend) = common::setup().await;

    load_report(&flux, ReportLookup::Id("X".into())).await;
    load_report(&flux, ReportLookup::Number("id:X".into())).await;

    let by_id = flux
        .get_as::<ReportView>(&ReportView::path(&ReportLookup::Id("X".into()).key()))
        .unwrap();
    assert_eq!(by_id.report.unwrap().id, "X");
    let by_number = flux
        .get_as::<ReportView>(&ReportView::path(&ReportLookup::Number("id:X".into()).key()))
        .unwrap();
    assert_eq!(by_number.report.unwrap().report_number, "id:X");
}

#[tokio::test]
async fn report_number_stays_one_path_segment() {
    let (flux, backend) = common::setup().await;

    let view = load_report(&flux, ReportLookup::Number("CR 2024/7?draft#1".into())).await;
    assert_eq!(view.error, None);
    assert_eq!(view.report.unwrap().report_number, "CR 2024/7?draft#1");
    assert_eq!(backend.calls(), vec!["GET /api/credit/report/CR 2024/7?draft#1"]);
}

#[tokio::test]
async fn missing_report_banner_can_be_dismissed() {
    let (flux, backend) = common::setup().await;
    let path = ReportView::path(&ReportLookup::Number("CR-missing".into()).key());

    flux.emit(
        LoadReportReq::PATH,
        LoadReportReq {
            lookup: ReportLookup::Number("CR-missing".into()),
        },
    )
    .await;
    let view = flux.get_as::<ReportView>(&path).unwrap();
    assert_eq!(view.error.as_deref(), Some("Report not found"));
    assert!(view.report.is_none());

    flux.emit(DismissErrorReq::PATH, DismissErrorReq { path: path.clone() })
        .await;
    let view = flux.get_as::<ReportView>(&path).unwrap();
    assert_eq!(view.error, None);
    // Dismissing never refetches.
    assert_eq!(backend.calls().len(), 1);
}

#[tokio::test]
async fn pagination_stays_in_range() {
    let (flux, backend) = common::setup().await;

    // Turning before anything loaded has no range to move in.
    turn(&flux, PageTurn::Next).await;
    assert!(backend.calls().is_empty());

    flux.emit(LoadMyReportsReq::PATH, LoadMyReportsReq { page: 0 })
        .await;
    let s = my_reports(&flux);
    assert_eq!(s.page.total_pages, 3);
    assert_eq!(s.page.content.len(), 10);
    assert!(!s.pager().has_previous());

    turn(&flux, PageTurn::Previous).await;
    turn(&flux, PageTurn::Next).await;
    turn(&flux, PageTurn::Next).await;
    turn(&flux, PageTurn::Next).await;

    let s = my_reports(&flux);
    assert_eq!(s.page_index, 2);
    assert_eq!(s.page.number, 2);
    assert_eq!(s.page.content.len(), 5);
    assert!(!s.pager().has_next());
    assert_eq!(s.pager().label(), "Page 3 of 3");

    assert_eq!(backend.calls(), vec![page_call(0), page_call(1), page_call(2)]);
}

#[tokio::test]
async fn superseded_page_response_is_dropped() {
    let (flux, backend) = common::setup().await;
    backend.slow_first_page.store(true, Ordering::SeqCst);

    let first = flux.emit(LoadMyReportsReq::PATH, LoadMyReportsReq { page: 0 });
    let second = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        flux.emit(LoadMyReportsReq::PATH, LoadMyReportsReq { page: 1 })
            .await;
    };
    tokio::join!(first, second);

    let s = my_reports(&flux);
    assert_eq!(s.page_index, 1);
    assert_eq!(s.page.number, 1);
    assert_eq!(s.page.content[0].report_number, "CR-0010");
    assert!(!s.loading);
    assert_eq!(backend.calls(), vec![page_call(0), page_call(1)]);
}

#[tokio::test]
async fn generate_requires_business_id() {
    let (flux, backend) = common::setup().await;
    flux.emit(
        GenerateReportReq::PATH,
        GenerateReportReq {
            business_id: "   ".into(),
            purpose: Some("Working capital".into()),
            comments: None,
        },
    )
    .await;

    let s = flux.get_as::<GenerateState>(GenerateState::PATH).unwrap();
    assert_eq!(s.error.as_deref(), Some("Business ID is required"));
    assert!(!s.submitting);
    assert_eq!(s.purpose, "Working capital");
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn generate_posts_and_keeps_result() {
    let (flux, backend) = common::setup().await;
    flux.emit(
        GenerateReportReq::PATH,
        GenerateReportReq {
            business_id: " b-1 ".into(),
            purpose: Some("Working capital".into()),
            comments: Some("  ".into()),
        },
    )
    .await;

    let s = flux.get_as::<GenerateState>(GenerateState::PATH).unwrap();
    assert!(!s.submitting);
    assert_eq!(s.error, None);
    assert_eq!(s.generated.unwrap().report_number, "CR-NEW-0001");
    assert!(s.purpose.is_empty());
    assert_eq!(
        backend.bodies(),
        vec![json!({ "businessId": "b-1", "purpose": "Working capital" })]
    );
}

#[tokio::test]
async fn generate_surfaces_validation_errors() {
    let (flux, _backend) = common::setup().await;
    flux.emit(
        GenerateReportReq::PATH,
        GenerateReportReq {
            business_id: "b-missing".into(),
            purpose: None,
            comments: None,
        },
    )
    .await;

    let s = flux.get_as::<GenerateState>(GenerateState::PATH).unwrap();
    assert!(!s.submitting);
    assert!(s.generated.is_none());
    assert_eq!(s.error.as_deref(), Some("Business does not exist"));
    assert_eq!(s.business_id, "b-missing");
}
