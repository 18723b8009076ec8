//! Label and color tables for roles, grades, risk and report status.
//!
//! Plain `match` tables, defined once. Unknown (`Other`) values render their
//! raw wire string in gray.

use crate::model::{CreditGrade, ReportStatus, RiskCategory, Role};

/// Badge color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
    Purple,
    Gray,
}

impl Tone {
    pub fn name(self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Blue => "blue",
            Tone::Yellow => "yellow",
            Tone::Orange => "orange",
            Tone::Red => "red",
            Tone::Purple => "purple",
            Tone::Gray => "gray",
        }
    }

    /// Badge classes, e.g. `bg-green-100 text-green-800`.
    pub fn badge_class(self) -> String {
        let n = self.name();
        format!("bg-{}-100 text-{}-800", n, n)
    }
}

/// A resolved label with its color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    fn known(label: &str, tone: Tone) -> Self {
        Self {
            label: label.to_string(),
            tone,
        }
    }

    fn raw(raw: &str) -> Self {
        Self {
            label: raw.to_string(),
            tone: Tone::Gray,
        }
    }
}

pub fn role_badge(role: &Role) -> Badge {
    match role {
        Role::Admin => Badge::known("Administrator", Tone::Purple),
        Role::SmeUser => Badge::known("SME User", Tone::Blue),
        Role::Viewer => Badge::known("Viewer", Tone::Gray),
        Role::Other(raw) => Badge::raw(raw),
    }
}

/// Short label for a role, as in the role picker.
pub fn role_label(role: &Role) -> String {
    role_badge(role).label
}

pub fn grade_badge(grade: &CreditGrade) -> Badge {
    match grade {
        CreditGrade::Aaa => Badge::known("AAA - Excellent", Tone::Green),
        CreditGrade::Aa => Badge::known("AA - Very Good", Tone::Green),
        CreditGrade::A => Badge::known("A - Good", Tone::Blue),
        CreditGrade::Bbb => Badge::known("BBB - Adequate", Tone::Blue),
        CreditGrade::Bb => Badge::known("BB - Moderate", Tone::Yellow),
        CreditGrade::B => Badge::known("B - Weak", Tone::Yellow),
        CreditGrade::Ccc => Badge::known("CCC - Poor", Tone::Orange),
        CreditGrade::Cc => Badge::known("CC - Very Poor", Tone::Orange),
        CreditGrade::C => Badge::known("C - Extremely Poor", Tone::Red),
        CreditGrade::D => Badge::known("D - Default", Tone::Red),
        CreditGrade::Other(raw) => Badge::raw(raw),
    }
}

pub fn risk_badge(risk: &RiskCategory) -> Badge {
    match risk {
        RiskCategory::Low => Badge::known("Low Risk", Tone::Green),
        RiskCategory::Moderate => Badge::known("Moderate Risk", Tone::Yellow),
        RiskCategory::High => Badge::known("High Risk", Tone::Orange),
        RiskCategory::VeryHigh => Badge::known("Very High Risk", Tone::Red),
        RiskCategory::Other(raw) => Badge::raw(raw),
    }
}

pub fn status_badge(status: &ReportStatus) -> Badge {
    match status {
        ReportStatus::Generated => Badge::known("Generated", Tone::Green),
        ReportStatus::Expired => Badge::known("Expired", Tone::Red),
        ReportStatus::Archived => Badge::known("Archived", Tone::Gray),
        ReportStatus::Other(raw) => Badge::raw(raw),
    }
}

/// Active/inactive account badge.
pub fn active_badge(active: bool) -> Badge {
    if active {
        Badge::known("Active", Tone::Green)
    } else {
        Badge::known("Inactive", Tone::Red)
    }
}

/// `PRIVATE_LIMITED` → `Private Limited`.
pub fn humanize(raw: &str) -> String {
    raw.split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let lower = w.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_table() {
        assert_eq!(role_label(&Role::SmeUser), "SME User");
        assert_eq!(role_badge(&Role::Admin).tone, Tone::Purple);
        assert_eq!(
            role_badge(&Role::Other("AUDITOR".into())),
            Badge { label: "AUDITOR".into(), tone: Tone::Gray }
        );
    }

    #[test]
    fn every_grade_has_a_label() {
        for grade in CreditGrade::ALL {
            let badge = grade_badge(grade);
            assert!(badge.label.starts_with(grade.as_str()), "{:?}", grade);
            assert_ne!(badge.tone, Tone::Gray);
        }
        assert_eq!(grade_badge(&CreditGrade::Other("A+".into())).label, "A+");
    }

    #[test]
    fn risk_and_status_tables() {
        assert_eq!(risk_badge(&RiskCategory::VeryHigh).label, "Very High Risk");
        assert_eq!(risk_badge(&RiskCategory::Low).tone, Tone::Green);
        assert_eq!(status_badge(&ReportStatus::Expired).tone, Tone::Red);
        assert_eq!(status_badge(&ReportStatus::Other("DRAFT".into())).label, "DRAFT");
        assert_eq!(Tone::Yellow.badge_class(), "bg-yellow-100 text-yellow-800");
    }

    #[test]
    fn humanize_server_enums() {
        assert_eq!(humanize("PRIVATE_LIMITED"), "Private Limited");
        assert_eq!(humanize("MANUFACTURING"), "Manufacturing");
        assert_eq!(humanize(""), "");
    }
}
