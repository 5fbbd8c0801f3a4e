use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The three-way judgment an advisor embeds in its free-text output,
/// or `Unknown` when no token could be found.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema, Hash)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Green,
    Yellow,
    Red,
    #[default]
    Unknown,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GREEN" => Some(Self::Green),
            "YELLOW" => Some(Self::Yellow),
            "RED" => Some(Self::Red),
            "UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// Run-level recommendation derived from the four advisor verdicts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum Recommendation {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "PROCEED WITH CAUTION")]
    ProceedWithCaution,
    #[serde(rename = "NO-GO")]
    NoGo,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "GO",
            Self::ProceedWithCaution => "PROCEED WITH CAUTION",
            Self::NoGo => "NO-GO",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GO" => Some(Self::Go),
            "PROCEED WITH CAUTION" => Some(Self::ProceedWithCaution),
            "NO-GO" => Some(Self::NoGo),
            _ => None,
        }
    }
}

/// The recommendation plus its human-readable one-liner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct OverallVerdict {
    pub recommendation: Recommendation,
    pub label: String,
}

impl OverallVerdict {
    pub fn new(recommendation: Recommendation, label: impl Into<String>) -> Self {
        Self {
            recommendation,
            label: label.into(),
        }
    }
}
