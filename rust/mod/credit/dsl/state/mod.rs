//! View state definitions.
//!
//! Each file defines the state of one view, stored at a well-known path.
//! `#[state("path")]` generates the `PATH` const (or `PATTERN` + `path(..)`
//! for keyed views).

pub mod app;
pub mod business;
pub mod generate;
pub mod history;
pub mod my_reports;
pub mod report;
pub mod search;
pub mod users;

pub use app::AppLocation;
pub use business::{BusinessDetail, BusinessTab, CreditHistory};
pub use generate::GenerateState;
pub use history::RoleHistoryState;
pub use my_reports::MyReportsState;
pub use report::ReportView;
pub use search::SearchState;
pub use users::{RoleModal, UsersState};

/// A view that can show a dismissible error banner.
pub trait ErrorBanner {
    fn error(&self) -> Option<&str>;

    /// Hide the banner. Loaded data stays as it was.
    fn clear_error(&mut self);
}

macro_rules! error_banner {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ErrorBanner for $ty {
                fn error(&self) -> Option<&str> {
                    self.error.as_deref()
                }

                fn clear_error(&mut self) {
                    self.error = None;
                }
            }
        )+
    };
}

error_banner!(
    BusinessDetail,
    GenerateState,
    MyReportsState,
    ReportView,
    RoleHistoryState,
    SearchState,
    UsersState,
);
