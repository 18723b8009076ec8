//! `/api/admin/roles`: users, role assignment and the audit log.

use credit_client::{ApiClient, ApiError};
use urlencoding::encode;

use crate::model::{AssignRoleRequest, Role, RoleHistoryRecord, ToggleStatusRequest, User};

const BASE: &str = "/api/admin/roles";

#[derive(Clone)]
pub struct RoleService {
    client: ApiClient,
}

impl RoleService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.client.get(&format!("{}/users", BASE)).await
    }

    /// Returns the updated user.
    pub async fn assign_role(&self, req: &AssignRoleRequest) -> Result<User, ApiError> {
        tracing::info!(user_id = %req.user_id, role = %req.role, "assigning role");
        self.client.post(&format!("{}/assign", BASE), req).await
    }

    /// Flip the user's active flag. Returns the updated user.
    pub async fn toggle_status(
        &self,
        user_id: &str,
        req: &ToggleStatusRequest,
    ) -> Result<User, ApiError> {
        tracing::info!(%user_id, "toggling user status");
        self.client
            .post(&format!("{}/toggle-status/{}", BASE, encode(user_id)), req)
            .await
    }

    /// Full audit log, newest first as the server orders it.
    pub async fn history(&self) -> Result<Vec<RoleHistoryRecord>, ApiError> {
        self.client.get(&format!("{}/history", BASE)).await
    }

    pub async fn user_history(&self, user_id: &str) -> Result<Vec<RoleHistoryRecord>, ApiError> {
        self.client
            .get(&format!("{}/history/{}", BASE, encode(user_id)))
            .await
    }

    pub async fn available_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.client.get(&format!("{}/available", BASE)).await
    }
}
