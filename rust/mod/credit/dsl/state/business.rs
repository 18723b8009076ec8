//! Business detail state, stored at `business/{id}`.
//!
//! The active tab is not stored here: it is derived from the location's
//! `tab` query parameter by [`BusinessTab::from_location`].

use credit_flux::Location;
use credit_flux_derive::state;

use crate::model::{Business, CreditReport};

#[state("business/{id}")]
pub struct BusinessDetail {
    pub business_id: String,
    pub loading: bool,
    pub business: Option<Business>,
    /// Primary fetch failure. The view shows a not-found screen instead of
    /// the body.
    pub error: Option<String>,
    pub history: CreditHistory,
}

impl BusinessDetail {
    pub fn loading(business_id: &str) -> Self {
        Self {
            business_id: business_id.to_string(),
            loading: true,
            business: None,
            error: None,
            history: CreditHistory::default(),
        }
    }

    /// Loaded and not failed.
    pub fn is_ready(&self) -> bool {
        !self.loading && self.business.is_some()
    }
}

/// Report history of the business, fetched lazily for the credit-history
/// tab. A failed fetch degrades to an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditHistory {
    /// Business the history was requested for. Set when the fetch starts,
    /// so the tab never fetches twice for the same business.
    pub requested_for: Option<String>,
    pub loading: bool,
    pub reports: Vec<CreditReport>,
    pub failed: bool,
}

impl CreditHistory {
    pub fn is_requested_for(&self, business_id: &str) -> bool {
        self.requested_for.as_deref() == Some(business_id)
    }
}

/// Tabs of the business detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusinessTab {
    #[default]
    Overview,
    Compliance,
    CreditHistory,
}

impl BusinessTab {
    /// Query parameter that carries the tab.
    pub const PARAM: &'static str = "tab";

    pub const ALL: [BusinessTab; 3] = [
        BusinessTab::Overview,
        BusinessTab::Compliance,
        BusinessTab::CreditHistory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BusinessTab::Overview => "overview",
            BusinessTab::Compliance => "compliance",
            BusinessTab::CreditHistory => "credit-history",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BusinessTab::Overview => "Overview",
            BusinessTab::Compliance => "Compliance",
            BusinessTab::CreditHistory => "Credit History",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    /// Active tab for `location`. Missing or unknown values select the
    /// overview.
    pub fn from_location(location: &Location) -> Self {
        location
            .param(Self::PARAM)
            .and_then(Self::parse)
            .unwrap_or_default()
    }

    /// `location` with this tab selected.
    pub fn apply(self, location: Location) -> Location {
        location.with_param(Self::PARAM, self.as_str())
    }
}

/// Business id of a `/business/{id}` location.
pub fn business_route(location: &Location) -> Option<&str> {
    location
        .path()
        .strip_prefix("/business/")
        .map(|id| id.trim_end_matches('/'))
        .filter(|id| !id.is_empty() && !id.contains('/'))
}
