use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{de_opt_f64, time};

/// A registered business.
///
/// Classification fields (`business_type`, `industry_category`,
/// `business_size`) are open server enums kept as raw strings;
/// [`crate::present::labels::humanize`] turns them into labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: String,
    pub legal_name: String,
    #[serde(default)]
    pub trade_name: Option<String>,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub gstin_verified: bool,
    #[serde(default)]
    pub pan: Option<String>,
    #[serde(default)]
    pub pan_verified: bool,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub industry_category: Option<String>,
    #[serde(default)]
    pub business_size: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, with = "time::lenient_option")]
    pub registration_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub annual_turnover: Option<f64>,
    #[serde(default)]
    pub employee_count: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "active_by_default", alias = "isActive")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Business {
    /// Trade name when set, else the legal name.
    pub fn display_name(&self) -> &str {
        self.trade_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.legal_name)
    }

    /// Address lines, city, state and pincode joined with ", "; blanks skipped.
    pub fn address(&self) -> String {
        let city_line = match (self.city.as_deref(), self.pincode.as_deref()) {
            (Some(c), Some(p)) if !p.trim().is_empty() => Some(format!("{} - {}", c, p)),
            (Some(c), _) => Some(c.to_string()),
            (None, p) => p.map(str::to_string),
        };
        [
            self.address_line1.clone(),
            self.address_line2.clone(),
            city_line,
            self.state.clone(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Query of `GET /api/business/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSearchRequest {
    pub query: String,
    pub page: u32,
    pub size: u32,
}
