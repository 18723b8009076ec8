//! `/api/credit`: report generation and lookup.

use credit_client::{ApiClient, ApiError, Page, PageRequest};
use urlencoding::encode;

use crate::model::{CreditReport, GenerateReportRequest};

const BASE: &str = "/api/credit";

#[derive(Clone)]
pub struct CreditReportService {
    client: ApiClient,
}

impl CreditReportService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Generate a new report for a business. Scoring happens server-side.
    pub async fn generate(&self, req: &GenerateReportRequest) -> Result<CreditReport, ApiError> {
        tracing::info!(business_id = %req.business_id, "generating credit report");
        self.client.post(&format!("{}/generate", BASE), req).await
    }

    pub async fn by_number(&self, report_number: &str) -> Result<CreditReport, ApiError> {
        self.client
            .get(&format!("{}/report/{}", BASE, encode(report_number)))
            .await
    }

    pub async fn by_id(&self, id: &str) -> Result<CreditReport, ApiError> {
        self.client.get(&format!("{}/report/id/{}", BASE, encode(id))).await
    }

    /// Every report generated for a business.
    pub async fn business_history(&self, business_id: &str) -> Result<Vec<CreditReport>, ApiError> {
        self.client
            .get(&format!("{}/business/{}/history", BASE, encode(business_id)))
            .await
    }

    /// Reports generated by the caller; `page` is zero-based.
    pub async fn my_reports(&self, page: u32, size: u32) -> Result<Page<CreditReport>, ApiError> {
        self.client
            .get_query(&format!("{}/my-reports", BASE), &PageRequest::new(page, size))
            .await
    }
}
