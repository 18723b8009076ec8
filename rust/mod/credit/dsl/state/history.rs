//! Role audit log state, stored at `roles/history`.

use credit_flux_derive::state;

use crate::model::RoleHistoryRecord;

#[state("roles/history")]
#[derive(Default)]
pub struct RoleHistoryState {
    pub loading: bool,
    /// `Some` when scoped to one user.
    pub user_id: Option<String>,
    pub records: Vec<RoleHistoryRecord>,
    pub error: Option<String>,
}
