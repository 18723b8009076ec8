//! Report generation form, stored at `credit/generate`.

use credit_flux_derive::state;

use crate::model::CreditReport;

#[state("credit/generate")]
#[derive(Default)]
pub struct GenerateState {
    pub business_id: String,
    pub purpose: String,
    pub comments: String,
    pub submitting: bool,
    pub error: Option<String>,
    /// The report created by the last successful submit.
    pub generated: Option<CreditReport>,
}
