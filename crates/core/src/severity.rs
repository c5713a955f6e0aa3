//! Emergency alert severity levels.
//!
//! The severity-to-visual mapping (yellow/orange/red/flashing) belongs to
//! the dashboard rendering layer, not here.

use serde::{Deserialize, Serialize};

/// Severity of an emergency alert, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Canonical text form stored in the `severity_level` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Parse the canonical text form. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Severity::Low),
            "Medium" => Some(Severity::Medium),
            "High" => Some(Severity::High),
            "Critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_canonical_forms() {
        for level in [
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ] {
            assert_eq!(Severity::parse(level.as_str()), Some(level));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_wrong_case() {
        assert_eq!(Severity::parse("Severe"), None);
        assert_eq!(Severity::parse("low"), None);
        assert_eq!(Severity::parse(""), None);
    }
}
