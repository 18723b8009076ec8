//! User management requests.

use credit_flux_derive::request;

use crate::model::Role;

/// Load the user table and the role picker options.
#[request("users/load")]
pub struct LoadUsersReq;

/// Open the role-assignment modal for a listed user.
#[request("users/modal/open")]
pub struct OpenRoleModalReq {
    pub user_id: String,
}

/// Edit modal fields. `None` leaves a field unchanged.
#[request("users/modal/edit")]
pub struct EditRoleModalReq {
    pub role: Option<Role>,
    pub reason: Option<String>,
}

#[request("users/modal/close")]
pub struct CloseRoleModalReq;

/// Assign the modal's role, refetch the table, then close the modal.
#[request("users/modal/submit")]
pub struct SubmitRoleReq;

/// Flip a user's active flag, then refetch the table.
#[request("users/toggle-status")]
pub struct ToggleUserStatusReq {
    pub user_id: String,
    pub reason: Option<String>,
}
