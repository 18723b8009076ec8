//! User management: table load, role-assignment modal, status toggle.
//!
//! Mutations follow one protocol: mark submitting, await the POST, on success
//! await a full table refetch and only then close the modal, on failure keep
//! the modal open with the error. Submitting is cleared last, whatever the
//! outcome. There are no optimistic updates.

use credit_flux::StateStore;

use crate::handlers::helpers::{commit_with, update_existing};
use crate::handlers::CreditContext;
use crate::model::{AssignRoleRequest, ToggleStatusRequest};
use crate::request::*;
use crate::state::*;

/// Handle `users/load`.
pub async fn handle_load(store: &StateStore, ctx: &CreditContext) {
    let _ = refresh_users(store, ctx).await;

    match ctx.roles.available_roles().await {
        Ok(roles) => {
            store.update(UsersState::PATH, UsersState::default, |s: &mut UsersState| {
                s.available_roles = roles;
            });
        }
        Err(e) => {
            // The picker falls back to every known role.
            tracing::warn!(error = %e, "available roles not loaded");
        }
    }
}

/// Refetch the user table.
///
/// `Err` carries the message also shown in the table's banner. A refetch
/// superseded by a newer one counts as success: the newer one owns the table.
pub async fn refresh_users(store: &StateStore, ctx: &CreditContext) -> Result<(), String> {
    let ticket = store.begin(UsersState::PATH);
    store.update(UsersState::PATH, UsersState::default, |s: &mut UsersState| {
        s.loading = true;
        s.error = None;
    });

    let result = ctx.roles.list_users().await;
    let outcome = result.as_ref().map(|_| ()).map_err(|e| e.message());
    commit_with(store, &ticket, UsersState::default, |s: &mut UsersState| {
        s.loading = false;
        match result {
            Ok(users) => s.users = users,
            Err(e) => s.error = Some(e.message()),
        }
    });
    outcome
}

/// Handle `users/modal/open`.
pub async fn handle_open_modal(req: &OpenRoleModalReq, store: &StateStore) {
    update_existing(store, UsersState::PATH, |s: &mut UsersState| {
        let user = s.user(&req.user_id).cloned();
        match user {
            Some(user) => s.modal = Some(RoleModal::open(user)),
            None => tracing::warn!(user_id = %req.user_id, "role modal: user not listed"),
        }
    });
}

/// Handle `users/modal/edit`.
pub async fn handle_edit_modal(req: &EditRoleModalReq, store: &StateStore) {
    update_existing(store, UsersState::PATH, |s: &mut UsersState| {
        if let Some(modal) = s.modal.as_mut() {
            if let Some(role) = &req.role {
                modal.role = role.clone();
            }
            if let Some(reason) = &req.reason {
                modal.reason = reason.clone();
            }
        }
    });
}

/// Handle `users/modal/close`. Ignored while submitting.
pub async fn handle_close_modal(store: &StateStore) {
    update_existing(store, UsersState::PATH, |s: &mut UsersState| {
        if s.modal.as_ref().is_some_and(|m| !m.submitting) {
            s.modal = None;
        }
    });
}

/// Handle `users/modal/submit`.
pub async fn handle_submit_role(store: &StateStore, ctx: &CreditContext) {
    let Some(modal) = store
        .get_as::<UsersState>(UsersState::PATH)
        .and_then(|s| s.modal)
    else {
        return;
    };
    if modal.submitting {
        return;
    }

    set_modal(store, |m| {
        m.submitting = true;
        m.error = None;
    });

    let req = AssignRoleRequest {
        user_id: modal.user.id.clone(),
        role: modal.role.clone(),
        reason: modal.reason(),
    };
    let outcome = match ctx.roles.assign_role(&req).await {
        Ok(_) => refresh_users(store, ctx).await,
        Err(e) => Err(e.message()),
    };

    match outcome {
        Ok(()) => {
            update_existing(store, UsersState::PATH, |s: &mut UsersState| {
                s.modal = None;
            });
        }
        Err(message) => set_modal(store, |m| m.error = Some(message)),
    }

    set_modal(store, |m| m.submitting = false);
}

/// Handle `users/toggle-status`.
pub async fn handle_toggle_status(req: &ToggleUserStatusReq, store: &StateStore, ctx: &CreditContext) {
    let busy = store
        .get_as::<UsersState>(UsersState::PATH)
        .is_some_and(|s| s.toggling.is_some());
    if busy {
        return;
    }

    store.update(UsersState::PATH, UsersState::default, |s: &mut UsersState| {
        s.toggling = Some(req.user_id.clone());
    });

    let body = ToggleStatusRequest {
        reason: req.reason.clone().filter(|r| !r.trim().is_empty()),
    };
    match ctx.roles.toggle_status(&req.user_id, &body).await {
        // A failed refetch is already in the banner.
        Ok(_) => {
            let _ = refresh_users(store, ctx).await;
        }
        Err(e) => {
            update_existing(store, UsersState::PATH, |s: &mut UsersState| {
                s.error = Some(e.message());
            });
        }
    }

    update_existing(store, UsersState::PATH, |s: &mut UsersState| {
        s.toggling = None;
    });
}

fn set_modal(store: &StateStore, f: impl FnOnce(&mut RoleModal)) {
    update_existing(store, UsersState::PATH, |s: &mut UsersState| {
        if let Some(modal) = s.modal.as_mut() {
            f(modal);
        }
    });
}
