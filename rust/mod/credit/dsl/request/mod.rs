//! Request definitions.
//!
//! Each request type is routed to handlers at its path. `#[request("path")]`
//! generates the `PATH` const.

pub mod app;
pub mod business;
pub mod history;
pub mod report;
pub mod users;

pub use app::{DismissErrorReq, NavigateReq};
pub use business::{LoadBusinessReq, SearchBusinessReq, SelectTabReq, TurnSearchPageReq};
pub use history::LoadRoleHistoryReq;
pub use report::{
    GenerateReportReq, LoadMyReportsReq, LoadReportReq, ReportLookup, TurnMyReportsPageReq,
};
pub use users::{
    CloseRoleModalReq, EditRoleModalReq, LoadUsersReq, OpenRoleModalReq, SubmitRoleReq,
    ToggleUserStatusReq,
};
