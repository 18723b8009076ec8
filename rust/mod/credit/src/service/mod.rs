//! Domain services: one per backend resource family.
//!
//! Every method is exactly one round trip through the shared [`ApiClient`].
//! Ids in the path are percent-encoded as single segments. Each call returns
//! the `data` payload on success, one normalized [`ApiError`] otherwise.
//! No retries, no caching.

pub mod business;
pub mod credit_report;
pub mod role;

pub use business::BusinessService;
pub use credit_report::CreditReportService;
pub use role::RoleService;

pub use credit_client::{ApiClient, ApiError, Page, PageRequest};
