//! Shell requests.

use credit_flux_derive::request;

/// Go to `url` (path plus optional query). Opening a business route loads
/// that business.
#[request("app/navigate")]
pub struct NavigateReq {
    pub url: String,
}

/// Hide the error banner of the view stored at `path`.
#[request("view/dismiss-error")]
pub struct DismissErrorReq {
    pub path: String,
}
