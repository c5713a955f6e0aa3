//! Server-side required-field validation.
//!
//! The form layer enforces presence client-side; these helpers repeat the
//! check on the server so a hand-crafted request cannot insert blank rows.

use crate::error::CoreError;
use crate::status::EquipmentStatusSet;

/// Deployment-dependent vocabulary handed to per-kind validation hooks.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    pub equipment_statuses: EquipmentStatusSet,
}

/// Require a text field to be present and non-blank.
pub fn require_text(field: &'static str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Require an equipment status to be present and part of the configured
/// vocabulary.
pub fn require_status(
    value: Option<&str>,
    statuses: &EquipmentStatusSet,
) -> Result<(), CoreError> {
    require_text("status", value)?;
    let status = value.unwrap_or_default();
    if !statuses.contains(status) {
        return Err(CoreError::Validation(format!(
            "status must be one of: {}",
            statuses.values().join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn require_text_rejects_missing_and_blank() {
        assert_matches!(
            require_text("badge_number", None),
            Err(CoreError::Validation(msg)) if msg.contains("badge_number")
        );
        assert_matches!(
            require_text("badge_number", Some("   ")),
            Err(CoreError::Validation(_))
        );
        assert!(require_text("badge_number", Some("1024")).is_ok());
    }

    #[test]
    fn require_status_checks_vocabulary_membership() {
        let statuses = EquipmentStatusSet::default();
        assert!(require_status(Some("Down"), &statuses).is_ok());
        assert_matches!(
            require_status(Some("Sideways"), &statuses),
            Err(CoreError::Validation(msg)) if msg.contains("must be one of")
        );
        assert_matches!(
            require_status(None, &statuses),
            Err(CoreError::Validation(_))
        );
    }
}
