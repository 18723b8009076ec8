use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{de_f64, de_opt_f64, time, wire_enum};

wire_enum! {
    /// Ordinal credit quality, best first.
    pub enum CreditGrade {
        Aaa => "AAA",
        Aa => "AA",
        A => "A",
        Bbb => "BBB",
        Bb => "BB",
        B => "B",
        Ccc => "CCC",
        Cc => "CC",
        C => "C",
        D => "D",
    }
}

wire_enum! {
    /// Coarse risk bucket computed by the scoring engine.
    pub enum RiskCategory {
        Low => "LOW",
        Moderate => "MODERATE",
        High => "HIGH",
        VeryHigh => "VERY_HIGH",
    }
}

wire_enum! {
    /// Stored report status. The console derives expiry itself and does not
    /// trust `Expired` alone.
    pub enum ReportStatus {
        Generated => "GENERATED",
        Expired => "EXPIRED",
        Archived => "ARCHIVED",
    }
}

/// The four sub-scores behind the overall credit score, each 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    #[serde(default, deserialize_with = "de_f64")]
    pub financial_health_score: f64,
    #[serde(default, deserialize_with = "de_f64")]
    pub payment_behavior_score: f64,
    #[serde(default, deserialize_with = "de_f64")]
    pub compliance_score: f64,
    #[serde(default, deserialize_with = "de_f64")]
    pub business_stability_score: f64,
}

impl ComponentScores {
    /// `(label, score)` in display order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("Financial Health", self.financial_health_score),
            ("Payment Behavior", self.payment_behavior_score),
            ("Compliance", self.compliance_score),
            ("Business Stability", self.business_stability_score),
        ]
    }
}

/// A generated credit report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditReport {
    pub id: String,
    pub report_number: String,
    pub business_id: String,
    pub business_name: String,
    #[serde(default)]
    pub business_gstin: Option<String>,
    #[serde(default)]
    pub business_pan: Option<String>,
    pub credit_grade: CreditGrade,
    #[serde(deserialize_with = "de_f64")]
    pub credit_score: f64,
    #[serde(flatten)]
    pub components: ComponentScores,
    pub risk_category: RiskCategory,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub recommended_credit_limit: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub recommendations: Option<String>,
    #[serde(default)]
    pub risk_factors: Option<String>,
    #[serde(default)]
    pub positive_indicators: Option<String>,
    #[serde(default, with = "time::lenient_option")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(with = "time::lenient")]
    pub report_valid_until: NaiveDateTime,
    pub status: ReportStatus,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl CreditReport {
    /// Whether the validity window has closed at `now`. Strictly before:
    /// a report valid until exactly `now` is still valid.
    ///
    /// Always pass the render-time clock; never cache the result.
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        self.report_valid_until < now
    }
}

/// Body of `POST /api/credit/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    pub business_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}
