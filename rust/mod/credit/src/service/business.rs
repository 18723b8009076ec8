//! `/api/business`: the business registry.

use credit_client::{ApiClient, ApiError, Page};
use urlencoding::encode;

use crate::model::{Business, BusinessSearchRequest};

const BASE: &str = "/api/business";

#[derive(Clone)]
pub struct BusinessService {
    client: ApiClient,
}

impl BusinessService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, business_id: &str) -> Result<Business, ApiError> {
        self.client.get(&format!("{}/{}", BASE, encode(business_id))).await
    }

    /// Free-text search over names, GSTIN and PAN; `page` is zero-based.
    pub async fn search(&self, query: &str, page: u32, size: u32) -> Result<Page<Business>, ApiError> {
        let req = BusinessSearchRequest {
            query: query.to_string(),
            page,
            size,
        };
        self.client.get_query(&format!("{}/search", BASE), &req).await
    }
}
