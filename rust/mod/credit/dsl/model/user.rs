use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::time;
use super::wire_enum;

wire_enum! {
    /// Platform role. A user carries a collection on the wire but the console
    /// treats it as single-valued.
    pub enum Role {
        Admin => "ADMIN",
        SmeUser => "SME_USER",
        Viewer => "VIEWER",
    }
}

/// A platform account as listed under `/api/admin/roles/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default, alias = "isActive")]
    pub active: bool,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub phone_verified: bool,
    #[serde(default, with = "time::lenient_option")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "time::lenient_option")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, with = "time::lenient_option")]
    pub last_login_at: Option<NaiveDateTime>,
}

impl User {
    /// The role the console shows and edits.
    pub fn role(&self) -> Option<&Role> {
        self.roles.first()
    }
}

/// One entry of the role audit log. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleHistoryRecord {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub old_role: Option<Role>,
    pub new_role: Role,
    #[serde(alias = "changedBy")]
    pub changed_by_name: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(alias = "createdAt", with = "time::lenient")]
    pub changed_at: NaiveDateTime,
}

/// Body of `POST /api/admin/roles/assign`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleRequest {
    pub user_id: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body of `POST /api/admin/roles/toggle-status/{userId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleStatusRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
