use credit_flux_derive::request;

/// Load the role audit log, optionally scoped to one user.
#[request("roles/history/load")]
pub struct LoadRoleHistoryReq {
    pub user_id: Option<String>,
}
