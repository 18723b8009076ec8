//! Shell-level requests.

use std::any::Any;

use credit_flux::StateStore;

use crate::request::*;
use crate::state::*;

/// Handle `view/dismiss-error`: hide the banner of the view at `req.path`.
/// Loaded data is kept and nothing is refetched.
pub async fn handle_dismiss_error(req: &DismissErrorReq, store: &StateStore) {
    let path = req.path.as_str();
    let dismissed = dismiss::<UsersState>(store, path)
        || dismiss::<RoleHistoryState>(store, path)
        || dismiss::<ReportView>(store, path)
        || dismiss::<MyReportsState>(store, path)
        || dismiss::<BusinessDetail>(store, path)
        || dismiss::<SearchState>(store, path)
        || dismiss::<GenerateState>(store, path);
    if !dismissed {
        tracing::debug!(%path, "dismiss-error: no view with a banner at path");
    }
}

fn dismiss<T>(store: &StateStore, path: &str) -> bool
where
    T: ErrorBanner + Any + Clone + Send + Sync,
{
    let Some(mut state) = store.get_as::<T>(path) else {
        return false;
    };
    if state.error().is_some() {
        state.clear_error();
        store.set(path, state);
    }
    true
}
