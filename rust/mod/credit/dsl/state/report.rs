//! Single report state, stored at `credit/report/{key}`.
//!
//! The key is the report number, or `id:{id}` for lookups by id.

use credit_flux_derive::state;

use crate::model::CreditReport;

#[state("credit/report/{key}")]
#[derive(Default)]
pub struct ReportView {
    pub loading: bool,
    pub report: Option<CreditReport>,
    pub error: Option<String>,
}
