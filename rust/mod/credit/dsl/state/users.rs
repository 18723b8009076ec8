//! User management state, stored at `users/list`.

use credit_flux_derive::state;

use crate::model::{Role, User};

/// The user table, the role picker options and the role-assignment modal.
#[state("users/list")]
#[derive(Default)]
pub struct UsersState {
    pub loading: bool,
    pub users: Vec<User>,
    pub available_roles: Vec<Role>,
    pub error: Option<String>,
    pub modal: Option<RoleModal>,
    /// User whose active flag is being toggled.
    pub toggling: Option<String>,
}

impl UsersState {
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Roles offered by the picker. Falls back to every known role until the
    /// server list has loaded.
    pub fn role_choices(&self) -> Vec<Role> {
        if self.available_roles.is_empty() {
            Role::ALL.to_vec()
        } else {
            self.available_roles.clone()
        }
    }
}

/// Role-assignment modal for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleModal {
    pub user: User,
    pub role: Role,
    pub reason: String,
    /// Set while the assignment and the refetch are in flight; the submit
    /// control is disabled.
    pub submitting: bool,
    pub error: Option<String>,
}

impl RoleModal {
    /// Open on `user`, preselecting their current role.
    pub fn open(user: User) -> Self {
        let role = user.role().cloned().unwrap_or(Role::Viewer);
        Self {
            user,
            role,
            reason: String::new(),
            submitting: false,
            error: None,
        }
    }

    /// Reason as sent: blank means none.
    pub fn reason(&self) -> Option<String> {
        let trimmed = self.reason.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
