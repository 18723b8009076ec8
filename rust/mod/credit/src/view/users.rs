//! User management table and role-assignment modal.

use crate::model::User;
use crate::present::format::format_optional_datetime;
use crate::present::labels::{active_badge, role_badge, role_label};
use crate::state::{RoleModal, UsersState};

use super::{badge, banner, loading_spinner, Table};

pub fn render_users(state: &UsersState) -> String {
    let mut out = Vec::new();
    out.push("User Management".to_string());
    if let Some(b) = banner(state.error.as_deref()) {
        out.push(b);
    }

    if state.loading && state.users.is_empty() {
        out.push(loading_spinner(Some("Loading users...")));
        return out.join("\n");
    }

    if state.users.is_empty() {
        out.push("No users found.".to_string());
    } else {
        let mut table = Table::new([
            "ID", "Name", "Email", "Phone", "Role", "Status", "Verified", "Last Login",
        ]);
        for user in &state.users {
            table.row(user_row(user, state.toggling.as_deref()));
        }
        out.push(table.render());
    }

    if let Some(modal) = &state.modal {
        out.push(String::new());
        out.push(render_role_modal(modal, &state.role_choices()));
    }
    out.join("\n")
}

fn user_row(user: &User, toggling: Option<&str>) -> Vec<String> {
    let role = user
        .role()
        .map(|r| badge(&role_badge(r)))
        .unwrap_or_else(|| "-".to_string());
    let status = if toggling == Some(user.id.as_str()) {
        "Updating...".to_string()
    } else {
        badge(&active_badge(user.active))
    };
    vec![
        user.id.clone(),
        user.name.clone(),
        user.email.clone(),
        user.phone.clone().unwrap_or_else(|| "-".to_string()),
        role,
        status,
        verified(user),
        format_optional_datetime(user.last_login_at.as_ref(), "Never"),
    ]
}

fn verified(user: &User) -> String {
    let mark = |ok: bool| if ok { "✓" } else { "✗" };
    format!("email {} phone {}", mark(user.email_verified), mark(user.phone_verified))
}

/// The modal: target user, role choice, reason, submit control.
pub fn render_role_modal(modal: &RoleModal, choices: &[crate::model::Role]) -> String {
    let mut out = vec![format!("Assign Role: {} <{}>", modal.user.name, modal.user.email)];
    out.push(format!(
        "  Current role: {}",
        modal
            .user
            .role()
            .map(role_label)
            .unwrap_or_else(|| "None".to_string())
    ));

    let options = choices
        .iter()
        .map(|r| {
            let mark = if *r == modal.role { "(•)" } else { "( )" };
            format!("{} {}", mark, role_label(r))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push(format!("  New role: {}", options));
    out.push(format!(
        "  Reason: {}",
        if modal.reason.is_empty() { "(optional)" } else { modal.reason.as_str() }
    ));
    if let Some(error) = &modal.error {
        out.push(format!("  ! {}", error));
    }
    out.push(if modal.submitting {
        "  [Assigning...] (disabled)".to_string()
    } else {
        "  [Assign Role]  [Cancel]".to_string()
    });
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn user(id: &str, role: Role, active: bool) -> User {
        User {
            id: id.into(),
            name: format!("User {}", id),
            email: format!("{}@example.com", id),
            phone: None,
            roles: vec![role],
            active,
            email_verified: true,
            phone_verified: false,
            created_at: None,
            updated_at: None,
            last_login_at: None,
        }
    }

    #[test]
    fn spinner_only_before_first_load() {
        let state = UsersState { loading: true, ..Default::default() };
        assert!(render_users(&state).contains("Loading users..."));

        let state = UsersState {
            loading: true,
            users: vec![user("u-1", Role::Viewer, true)],
            ..Default::default()
        };
        let out = render_users(&state);
        assert!(!out.contains("Loading users..."));
        assert!(out.contains("User u-1"));
    }

    #[test]
    fn banner_sits_above_stale_rows() {
        let state = UsersState {
            users: vec![user("u-1", Role::Admin, false)],
            error: Some("Network error. Please check your connection.".into()),
            ..Default::default()
        };
        let out = render_users(&state);
        let banner_at = out.find("! Network error").unwrap();
        let row_at = out.find("[Administrator]").unwrap();
        assert!(banner_at < row_at);
        assert!(out.contains("[Inactive]"));
        assert!(out.contains("email ✓ phone ✗"));
        assert!(out.contains("Never"));
    }

    #[test]
    fn modal_shows_choice_and_submitting() {
        let mut modal = RoleModal::open(user("u-1", Role::Viewer, true));
        modal.role = Role::Admin;
        modal.submitting = true;
        let out = render_role_modal(&modal, Role::ALL);
        assert!(out.contains("Current role: Viewer"));
        assert!(out.contains("(•) Administrator"));
        assert!(out.contains("( ) Viewer"));
        assert!(out.contains("[Assigning...] (disabled)"));
    }
}
