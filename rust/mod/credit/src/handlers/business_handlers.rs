//! Business detail and search.
//!
//! The detail view's tab lives in the location (`?tab=`). Every change of
//! location or business runs [`sync_tab`], which fetches the credit history
//! once per business, and only after the business itself has loaded.

use credit_flux::{Location, StateStore};

use crate::handlers::helpers::{commit_with, update_existing};
use crate::handlers::CreditContext;
use crate::request::*;
use crate::state::business::business_route;
use crate::state::*;

pub(crate) fn current_location(store: &StateStore) -> Location {
    store
        .get_as::<AppLocation>(AppLocation::PATH)
        .map(|l| l.0)
        .unwrap_or_else(|| Location::new("/"))
}

/// Handle `app/navigate`.
///
/// Entering a business route loads the business when the id differs from
/// the one currently shown, or when it was never loaded.
pub async fn handle_navigate(req: &NavigateReq, store: &StateStore, ctx: &CreditContext) {
    let previous = current_location(store);
    let next = Location::parse(&req.url);
    tracing::debug!(from = %previous, to = %next, "navigate");
    store.set(AppLocation::PATH, AppLocation(next.clone()));

    if let Some(id) = business_route(&next) {
        let changed = business_route(&previous) != Some(id);
        if changed || !store.contains(&BusinessDetail::path(id)) {
            load_business(id, store, ctx).await;
        }
    }
    sync_tab(store, ctx).await;
}

/// Handle `business/load`.
pub async fn handle_load_business(req: &LoadBusinessReq, store: &StateStore, ctx: &CreditContext) {
    load_business(&req.business_id, store, ctx).await;
    sync_tab(store, ctx).await;
}

/// Handle `business/select-tab`.
pub async fn handle_select_tab(req: &SelectTabReq, store: &StateStore, ctx: &CreditContext) {
    let location = req.tab.apply(current_location(store));
    store.set(AppLocation::PATH, AppLocation(location));
    sync_tab(store, ctx).await;
}

/// Fetch the business; resets its credit history.
async fn load_business(business_id: &str, store: &StateStore, ctx: &CreditContext) {
    let path = BusinessDetail::path(business_id);
    let ticket = store.begin(&path);
    store.set(&path, BusinessDetail::loading(business_id));

    let result = ctx.businesses.get(business_id).await;
    commit_with(
        store,
        &ticket,
        || BusinessDetail::loading(business_id),
        |s: &mut BusinessDetail| {
            s.loading = false;
            match result {
                Ok(business) => s.business = Some(business),
                Err(e) => {
                    tracing::warn!(%business_id, error = %e, "business not loaded");
                    s.error = Some(e.message());
                }
            }
        },
    );
}

/// Start the credit-history fetch if the credit-history tab is active, the
/// business is loaded, and its history was not requested yet.
pub async fn sync_tab(store: &StateStore, ctx: &CreditContext) {
    let location = current_location(store);
    if BusinessTab::from_location(&location) != BusinessTab::CreditHistory {
        return;
    }
    let Some(business_id) = business_route(&location).map(str::to_string) else {
        return;
    };
    let path = BusinessDetail::path(&business_id);
    let Some(detail) = store.get_as::<BusinessDetail>(&path) else {
        return;
    };
    if !detail.is_ready() || detail.history.is_requested_for(&business_id) {
        return;
    }

    let ticket = store.begin(&format!("{}/history", path));
    update_existing(store, &path, |s: &mut BusinessDetail| {
        s.history = CreditHistory {
            requested_for: Some(business_id.clone()),
            loading: true,
            ..CreditHistory::default()
        };
    });

    let result = ctx.reports.business_history(&business_id).await;
    if !store.is_current(&ticket) {
        return;
    }
    update_existing(store, &path, |s: &mut BusinessDetail| {
        if !s.history.is_requested_for(&business_id) {
            return;
        }
        s.history.loading = false;
        match result {
            Ok(reports) => s.history.reports = reports,
            Err(e) => {
                // Secondary data: no banner, the tab shows its empty state.
                tracing::warn!(%business_id, error = %e, "credit history not loaded");
                s.history.failed = true;
            }
        }
    });
}

/// Handle `search/business/run`. A blank query clears the results without
/// a request.
pub async fn handle_search(req: &SearchBusinessReq, store: &StateStore, ctx: &CreditContext) {
    let page_size = ctx.page_size;
    let init = move || SearchState::new(page_size);
    let query = req.query.trim().to_string();

    let ticket = store.begin(SearchState::PATH);
    if query.is_empty() {
        store.set(SearchState::PATH, init());
        return;
    }
    store.update(SearchState::PATH, init, |s: &mut SearchState| {
        if s.query != query {
            s.results = credit_client::Page::empty(page_size);
        }
        s.query = query.clone();
        s.page_index = req.page;
        s.loading = true;
        s.error = None;
    });

    let result = ctx.businesses.search(&query, req.page, page_size).await;
    commit_with(store, &ticket, init, |s: &mut SearchState| {
        s.loading = false;
        match result {
            Ok(page) => s.results = page,
            Err(e) => s.error = Some(e.message()),
        }
    });
}

/// Handle `search/business/turn`.
pub async fn handle_turn_search(req: &TurnSearchPageReq, store: &StateStore, ctx: &CreditContext) {
    let Some(state) = store.get_as::<SearchState>(SearchState::PATH) else {
        return;
    };
    let pager = state.pager();
    let target = pager.turn(req.turn);
    if target == pager || state.query.is_empty() {
        return;
    }
    let req = SearchBusinessReq {
        query: state.query,
        page: target.page,
    };
    handle_search(&req, store, ctx).await;
}
