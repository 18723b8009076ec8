//! Business requests.

use credit_flux_derive::request;

use crate::present::PageTurn;
use crate::state::BusinessTab;

/// Load a business for the detail view. Reloads even when cached.
#[request("business/load")]
pub struct LoadBusinessReq {
    pub business_id: String,
}

/// Switch the detail view's tab by rewriting the location.
#[request("business/select-tab")]
pub struct SelectTabReq {
    pub tab: BusinessTab,
}

#[request("search/business/run")]
pub struct SearchBusinessReq {
    pub query: String,
    pub page: u32,
}

#[request("search/business/turn")]
pub struct TurnSearchPageReq {
    pub turn: PageTurn,
}
