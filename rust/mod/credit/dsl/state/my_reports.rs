//! The caller's own reports, stored at `credit/my-reports`.

use credit_client::Page;
use credit_flux_derive::state;

use crate::model::CreditReport;
use crate::present::Pager;

#[state("credit/my-reports")]
pub struct MyReportsState {
    pub loading: bool,
    /// Last page the server returned. Kept while the next one loads.
    pub page: Page<CreditReport>,
    /// Requested zero-based page index.
    pub page_index: u32,
    pub page_size: u32,
    pub error: Option<String>,
}

impl MyReportsState {
    pub fn new(page_size: u32) -> Self {
        Self {
            loading: false,
            page: Page::empty(page_size),
            page_index: 0,
            page_size,
            error: None,
        }
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.page_index, self.page.total_pages)
    }
}
