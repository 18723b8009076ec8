//! Credit report requests.

use credit_flux_derive::request;

use crate::present::PageTurn;

/// How a single report is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLookup {
    Number(String),
    Id(String),
}

impl ReportLookup {
    /// Key of the `credit/report/{key}` state path. Numbers and ids get
    /// separate prefixes and are encoded to stay one path segment.
    pub fn key(&self) -> String {
        match self {
            ReportLookup::Number(number) => format!("number:{}", urlencoding::encode(number)),
            ReportLookup::Id(id) => format!("id:{}", urlencoding::encode(id)),
        }
    }
}

#[request("credit/report/load")]
pub struct LoadReportReq {
    pub lookup: ReportLookup,
}

/// Load one page of the caller's reports (zero-based).
#[request("credit/my-reports/load")]
pub struct LoadMyReportsReq {
    pub page: u32,
}

/// Previous/Next control of the my-reports list.
#[request("credit/my-reports/turn")]
pub struct TurnMyReportsPageReq {
    pub turn: PageTurn,
}

#[request("credit/generate/submit")]
pub struct GenerateReportReq {
    pub business_id: String,
    pub purpose: Option<String>,
    pub comments: Option<String>,
}
