//! Store configuration.
//!
//! The defaults reproduce the console's historical behaviour exactly,
//! including its occupancy bookkeeping quirks. The other settings are
//! opt-in behaviour changes.

/// How [`FacilityStore::assign_prisoner_to_cell`](crate::FacilityStore::assign_prisoner_to_cell)
/// treats a prisoner that is already in the target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignmentPolicy {
    /// Decrement the current cell, then increment the target, even when they
    /// are the same cell. Re-assigning to the same cell counts the prisoner
    /// twice.
    #[default]
    Faithful,
    /// Re-assigning to the current cell changes nothing.
    Guarded,
}

/// Configuration for a [`FacilityStore`](crate::FacilityStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Same-cell re-assignment handling.
    pub assignment_policy: AssignmentPolicy,

    /// Whether `try_assign_prisoner_to_cell` rejects assignments into a full
    /// cell. The infallible `assign_prisoner_to_cell` never checks capacity.
    pub enforce_capacity: bool,

    /// Load the fixture records at construction.
    pub seed: bool,

    /// Maximum number of entries kept in the activity history.
    pub activity_limit: usize,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            assignment_policy: AssignmentPolicy::Faithful,
            enforce_capacity: false,
            seed: true,
            activity_limit: 256,
        }
    }

    /// Set the same-cell re-assignment policy.
    pub fn with_assignment_policy(mut self, policy: AssignmentPolicy) -> Self {
        self.assignment_policy = policy;
        self
    }

    /// Reject over-capacity assignments in `try_assign_prisoner_to_cell`.
    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    /// Start with empty collections instead of the fixtures.
    pub fn without_seed(mut self) -> Self {
        self.seed = false;
        self
    }

    /// Bound the activity history.
    pub fn with_activity_limit(mut self, limit: usize) -> Self {
        self.activity_limit = limit;
        self
    }

    /// Guarded re-assignment plus capacity enforcement.
    pub fn strict() -> Self {
        Self::new()
            .with_assignment_policy(AssignmentPolicy::Guarded)
            .with_capacity_enforcement(true)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_faithful() {
        let config = StoreConfig::default();
        assert_eq!(config.assignment_policy, AssignmentPolicy::Faithful);
        assert!(!config.enforce_capacity);
        assert!(config.seed);
    }

    #[test]
    fn test_strict() {
        let config = StoreConfig::strict().without_seed();
        assert_eq!(config.assignment_policy, AssignmentPolicy::Guarded);
        assert!(config.enforce_capacity);
        assert!(!config.seed);
    }
}
