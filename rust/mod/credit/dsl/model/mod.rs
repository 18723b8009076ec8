//! Credit platform records as the REST API returns them.
//!
//! Every record is immutable on receipt; the backend owns it. Field names
//! follow the wire (camelCase). Closed enums keep an `Other` variant so an
//! unknown value from a newer server still decodes.

/// Declare a string enum whose wire values are fixed.
///
/// Generates `as_str`, `parse` (never fails, unknown → `Other`), `ALL`,
/// `Display`, `FromStr` and string serde.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this build does not know, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Every known value in wire order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Other(raw) => raw,
                }
            }

            pub fn parse(raw: &str) -> Self {
                match raw {
                    $( $wire => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse(s))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(d)?;
                Ok(Self::parse(&raw))
            }
        }
    };
}

pub(crate) use wire_enum;

pub mod business;
pub mod report;
pub mod time;
pub mod user;

pub use business::{Business, BusinessSearchRequest};
pub use report::{ComponentScores, CreditGrade, CreditReport, GenerateReportRequest, ReportStatus, RiskCategory};
pub use user::{AssignRoleRequest, Role, RoleHistoryRecord, ToggleStatusRequest, User};

/// Flexible f64 deserializer: accepts a number, a numeric string, or null (0).
/// Some report endpoints send BigDecimal scores as strings.
pub fn de_f64<'de, D: serde::Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    use serde::Deserialize;
    let v = serde_json::Value::deserialize(d)?;
    match v {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("invalid number")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("cannot parse '{}' as a number", s))),
        serde_json::Value::Null => Ok(0.0),
        _ => Err(serde::de::Error::custom("expected number or string")),
    }
}

/// Optional variant of [`de_f64`]: null stays `None`.
pub fn de_opt_f64<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    use serde::Deserialize;
    let v = serde_json::Value::deserialize(d)?;
    match v {
        serde_json::Value::Null => Ok(None),
        other => de_f64(other).map(Some).map_err(serde::de::Error::custom),
    }
}
