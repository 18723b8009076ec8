//! Role audit log.

use credit_flux::StateStore;

use crate::handlers::helpers::commit_with;
use crate::handlers::CreditContext;
use crate::request::*;
use crate::state::*;

/// Handle `roles/history/load`.
pub async fn handle_load(req: &LoadRoleHistoryReq, store: &StateStore, ctx: &CreditContext) {
    let ticket = store.begin(RoleHistoryState::PATH);
    store.update(
        RoleHistoryState::PATH,
        RoleHistoryState::default,
        |s: &mut RoleHistoryState| {
            if s.user_id != req.user_id {
                s.records.clear();
            }
            s.user_id = req.user_id.clone();
            s.loading = true;
            s.error = None;
        },
    );

    let result = match &req.user_id {
        Some(user_id) => ctx.roles.user_history(user_id).await,
        None => ctx.roles.history().await,
    };
    commit_with(store, &ticket, RoleHistoryState::default, |s: &mut RoleHistoryState| {
        s.loading = false;
        match result {
            Ok(records) => s.records = records,
            Err(e) => s.error = Some(e.message()),
        }
    });
}
