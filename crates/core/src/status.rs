//! Config-driven equipment status vocabulary.
//!
//! The accepted status set changed across deployments (`Down` vs `Broken`
//! in the first position), so the vocabulary is loaded from configuration
//! instead of being hardcoded. The default is the union of every value
//! observed in production.

/// Comma-separated default vocabulary.
pub const DEFAULT_EQUIPMENT_STATUSES: &str = "Down,Broken,Pending,Repairing,Fixed";

/// The set of status values an equipment record may carry.
#[derive(Debug, Clone)]
pub struct EquipmentStatusSet {
    values: Vec<String>,
}

impl EquipmentStatusSet {
    /// Parse a comma-separated vocabulary. Empty entries and surrounding
    /// whitespace are ignored; an input with no usable entries falls back
    /// to the default set.
    pub fn parse(raw: &str) -> Self {
        let values: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if values.is_empty() {
            return Self::default();
        }
        Self { values }
    }

    /// Whether `candidate` is a member of the vocabulary (exact match).
    pub fn contains(&self, candidate: &str) -> bool {
        self.values.iter().any(|v| v == candidate)
    }

    /// The accepted values, for error messages and client form rendering.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Default for EquipmentStatusSet {
    fn default() -> Self {
        Self::parse(DEFAULT_EQUIPMENT_STATUSES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_accepts_both_revisions() {
        let set = EquipmentStatusSet::default();
        // First-position label changed across revisions; both must pass.
        assert!(set.contains("Down"));
        assert!(set.contains("Broken"));
        assert!(set.contains("Pending"));
        assert!(set.contains("Repairing"));
        assert!(set.contains("Fixed"));
    }

    #[test]
    fn membership_is_exact_match() {
        let set = EquipmentStatusSet::default();
        assert!(!set.contains("down"));
        assert!(!set.contains("Sideways"));
        assert!(!set.contains(""));
    }

    #[test]
    fn parse_trims_and_drops_empty_entries() {
        let set = EquipmentStatusSet::parse(" Down , Fixed ,, ");
        assert_eq!(set.values(), &["Down".to_string(), "Fixed".to_string()]);
    }

    #[test]
    fn parse_of_blank_input_falls_back_to_default() {
        let set = EquipmentStatusSet::parse("  ,  ");
        assert!(set.contains("Repairing"));
    }
}
