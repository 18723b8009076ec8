//! `users`, `assign-role`, `toggle-status`, `history`, `roles`.

use anyhow::Result;
use serde_json::json;

use credit_admin::model::Role;
use credit_admin::present::labels::role_label;
use credit_admin::request::*;
use credit_admin::state::*;
use credit_admin::view::{render_role_history, render_users};

use super::Console;

/// Accepts wire values in any case, with `-` for `_` (`sme-user`).
pub fn parse_role(raw: &str) -> Result<Role> {
    let role = Role::parse(&raw.trim().to_uppercase().replace('-', "_"));
    if !role.is_known() {
        let known: Vec<&str> = Role::ALL.iter().map(Role::as_str).collect();
        anyhow::bail!("Unknown role \"{}\" (expected one of {})", raw, known.join(", "));
    }
    Ok(role)
}

async fn load(console: &Console) -> Result<UsersState> {
    console.emit(LoadUsersReq::PATH, LoadUsersReq).await;
    console.loaded::<UsersState>(UsersState::PATH)
}

pub async fn list(console: &Console) -> Result<()> {
    let state = load(console).await?;
    console.print(&state.users, || render_users(&state))
}

pub async fn assign_role(console: &Console, user_id: &str, role: &str, reason: Option<String>) -> Result<()> {
    let role = parse_role(role)?;
    load(console).await?;

    console
        .emit(OpenRoleModalReq::PATH, OpenRoleModalReq { user_id: user_id.to_string() })
        .await;
    let state = console.state::<UsersState>(UsersState::PATH)?;
    if state.modal.is_none() {
        anyhow::bail!("User {} not found", user_id);
    }

    console
        .emit(
            EditRoleModalReq::PATH,
            EditRoleModalReq {
                role: Some(role.clone()),
                reason,
            },
        )
        .await;
    console.emit(SubmitRoleReq::PATH, SubmitRoleReq).await;

    let state = console.loaded::<UsersState>(UsersState::PATH)?;
    if let Some(modal) = &state.modal {
        anyhow::bail!(
            "{}",
            modal.error.as_deref().unwrap_or("Role assignment did not complete")
        );
    }

    let user = state.user(user_id);
    if console.json() {
        return console.print(&user, String::new);
    }
    let name = user.map(|u| u.name.as_str()).unwrap_or(user_id);
    println!("Assigned {} to {}.", role_label(&role), name);
    println!();
    println!("{}", render_users(&state));
    Ok(())
}

pub async fn toggle_status(console: &Console, user_id: &str, reason: Option<String>) -> Result<()> {
    let before = load(console).await?;
    if before.user(user_id).is_none() {
        anyhow::bail!("User {} not found", user_id);
    }

    console
        .emit(
            ToggleUserStatusReq::PATH,
            ToggleUserStatusReq {
                user_id: user_id.to_string(),
                reason,
            },
        )
        .await;
    let state = console.loaded::<UsersState>(UsersState::PATH)?;
    let user = state.user(user_id);
    if console.json() {
        return console.print(&user, String::new);
    }
    if let Some(user) = user {
        let status = if user.active { "active" } else { "inactive" };
        println!("{} is now {}.", user.name, status);
    }
    Ok(())
}

pub async fn history(console: &Console, user_id: Option<String>) -> Result<()> {
    console
        .emit(LoadRoleHistoryReq::PATH, LoadRoleHistoryReq { user_id })
        .await;
    let state = console.loaded::<RoleHistoryState>(RoleHistoryState::PATH)?;
    console.print(&state.records, || render_role_history(&state))
}

/// Roles the server accepts for assignment.
pub async fn roles(console: &Console) -> Result<()> {
    let state = load(console).await?;
    let choices = state.role_choices();
    let rows: Vec<_> = choices
        .iter()
        .map(|r| json!({ "role": r.as_str(), "label": role_label(r) }))
        .collect();
    console.print(&rows, || {
        choices
            .iter()
            .map(|r| format!("{:<10}  {}", r.as_str(), role_label(r)))
            .collect::<Vec<_>>()
            .join("\n")
    })
}
