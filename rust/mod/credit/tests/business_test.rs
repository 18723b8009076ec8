//! Business detail and search against a mock backend.

mod common;

use credit_admin::present::PageTurn;
use credit_admin::request::*;
use credit_admin::state::*;
use credit_flux::Flux;

fn detail(flux: &Flux, id: &str) -> BusinessDetail {
    flux.get_as::<BusinessDetail>(&BusinessDetail::path(id)).unwrap()
}

fn history_call(id: &str) -> String {
    format!("GET /api/credit/business/{}/history", id)
}

async fn navigate(flux: &Flux, url: &str) {
    flux.emit(NavigateReq::PATH, NavigateReq { url: url.into() }).await;
}

async fn select(flux: &Flux, tab: BusinessTab) {
    flux.emit(SelectTabReq::PATH, SelectTabReq { tab }).await;
}

#[tokio::test]
async fn overview_does_not_fetch_history() {
    let (flux, backend) = common::setup().await;
    navigate(&flux, "/business/b-1").await;

    let d = detail(&flux, "b-1");
    assert!(d.is_ready());
    assert_eq!(d.history.requested_for, None);
    assert_eq!(backend.calls(), vec!["GET /api/business/b-1"]);
}

#[tokio::test]
async fn credit_history_fetched_once_per_business() {
    let (flux, backend) = common::setup().await;
    navigate(&flux, "/business/b-1").await;

    select(&flux, BusinessTab::CreditHistory).await;
    let d = detail(&flux, "b-1");
    assert!(!d.history.loading);
    assert_eq!(d.history.reports.len(), 2);
    let location = flux.get_as::<AppLocation>(AppLocation::PATH).unwrap().0;
    assert_eq!(location.to_string(), "/business/b-1?tab=credit-history");

    // Leaving and re-entering the tab reuses the loaded history.
    select(&flux, BusinessTab::Compliance).await;
    select(&flux, BusinessTab::CreditHistory).await;
    navigate(&flux, "/business/b-1?tab=credit-history").await;
    assert_eq!(backend.count(&history_call("b-1")), 1);
    assert_eq!(backend.count("GET /api/business/b-1"), 1);

    // Another business gets its own fetch.
    navigate(&flux, "/business/b-2?tab=credit-history").await;
    assert_eq!(backend.count(&history_call("b-2")), 1);
    assert_eq!(detail(&flux, "b-2").history.reports[0].business_id, "b-2");

    // Coming back to a different id reloads the business and its history.
    navigate(&flux, "/business/b-1?tab=credit-history").await;
    assert_eq!(backend.count("GET /api/business/b-1"), 2);
    assert_eq!(backend.count(&history_call("b-1")), 2);
}

#[tokio::test]
async fn history_waits_for_business() {
    let (flux, backend) = common::setup().await;
    navigate(&flux, "/business/b-missing?tab=credit-history").await;

    let d = detail(&flux, "b-missing");
    assert!(!d.loading);
    assert!(d.business.is_none());
    assert_eq!(d.error.as_deref(), Some("Business not found"));
    assert_eq!(backend.count(&history_call("b-missing")), 0);
}

#[tokio::test]
async fn history_failure_is_not_a_banner() {
    let (flux, backend) = common::setup().await;
    navigate(&flux, "/business/b-broken?tab=credit-history").await;

    let d = detail(&flux, "b-broken");
    assert!(d.is_ready());
    assert_eq!(d.error, None);
    assert!(d.history.failed);
    assert!(!d.history.loading);
    assert!(d.history.reports.is_empty());

    // A failed fetch still counts as requested.
    select(&flux, BusinessTab::Overview).await;
    select(&flux, BusinessTab::CreditHistory).await;
    assert_eq!(backend.count(&history_call("b-broken")), 1);
}

#[tokio::test]
async fn explicit_reload_resets_history() {
    let (flux, backend) = common::setup().await;
    navigate(&flux, "/business/b-1?tab=credit-history").await;
    assert_eq!(backend.count(&history_call("b-1")), 1);

    flux.emit(
        LoadBusinessReq::PATH,
        LoadBusinessReq {
            business_id: "b-1".into(),
        },
    )
    .await;
    assert_eq!(backend.count("GET /api/business/b-1"), 2);
    assert_eq!(backend.count(&history_call("b-1")), 2);
}

#[tokio::test]
async fn search_runs_and_pages() {
    let (flux, backend) = common::setup().await;

    flux.emit(
        SearchBusinessReq::PATH,
        SearchBusinessReq {
            query: " textiles ".into(),
            page: 0,
        },
    )
    .await;
    let s = flux.get_as::<SearchState>(SearchState::PATH).unwrap();
    assert_eq!(s.query, "textiles");
    assert_eq!(s.results.content.len(), 2);
    assert_eq!(s.results.total_pages, 2);

    flux.emit(
        TurnSearchPageReq::PATH,
        TurnSearchPageReq {
            turn: PageTurn::Next,
        },
    )
    .await;
    flux.emit(
        TurnSearchPageReq::PATH,
        TurnSearchPageReq {
            turn: PageTurn::Next,
        },
    )
    .await;
    let s = flux.get_as::<SearchState>(SearchState::PATH).unwrap();
    assert_eq!(s.page_index, 1);

    assert_eq!(
        backend.calls(),
        vec![
            "GET /api/business/search?query=textiles&page=0&size=10",
            "GET /api/business/search?query=textiles&page=1&size=10",
        ]
    );
}

#[tokio::test]
async fn blank_search_clears_without_request() {
    let (flux, backend) = common::setup().await;
    flux.emit(
        SearchBusinessReq::PATH,
        SearchBusinessReq {
            query: "sharma".into(),
            page: 0,
        },
    )
    .await;
    flux.emit(
        SearchBusinessReq::PATH,
        SearchBusinessReq {
            query: "  ".into(),
            page: 0,
        },
    )
    .await;

    let s = flux.get_as::<SearchState>(SearchState::PATH).unwrap();
    assert!(s.query.is_empty());
    assert!(s.results.content.is_empty());
    assert_eq!(backend.calls().len(), 1);
}
