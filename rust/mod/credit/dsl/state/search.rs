//! Business search state, stored at `search/business`.

use credit_client::Page;
use credit_flux_derive::state;

use crate::model::Business;
use crate::present::Pager;

#[state("search/business")]
pub struct SearchState {
    pub query: String,
    pub loading: bool,
    pub results: Page<Business>,
    pub page_index: u32,
    pub page_size: u32,
    pub error: Option<String>,
}

impl SearchState {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: String::new(),
            loading: false,
            results: Page::empty(page_size),
            page_index: 0,
            page_size,
            error: None,
        }
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.page_index, self.results.total_pages)
    }
}
