//! Testing utilities for the facility store.
//!
//! This module provides:
//! - `TestHarness`, a seeded store wired to a `RecordingNotifier`
//! - Assertion helpers for occupancy, collection sizes and notifications

use crate::config::StoreConfig;
use crate::notify::{NotificationKind, RecordingNotifier};
use crate::records::{CellId, NewPrisoner, NewStaff, Position, PrisonerId, Shift, StaffId};
use crate::store::FacilityStore;

/// A store plus the notifications it emitted.
pub struct TestHarness {
    pub store: FacilityStore<RecordingNotifier>,
}

impl TestHarness {
    /// Seeded store with the default (faithful) config.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::new())
    }

    /// Store built from a custom config.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            store: FacilityStore::with_notifier(config, RecordingNotifier::new()),
        }
    }

    /// A minimal valid prisoner.
    pub fn sample_prisoner(first_name: &str) -> NewPrisoner {
        NewPrisoner::new(first_name, "Sample", 30, "Burglary", 4, "2024-02-02")
    }

    /// A minimal valid staff member.
    pub fn sample_staff(first_name: &str) -> NewStaff {
        NewStaff::new(
            first_name,
            "Sample",
            Position::Guard,
            Shift::Evening,
            "555-0000",
            format!("{}.sample@prison.gov", first_name.to_lowercase()),
        )
    }

    /// Add a sample prisoner.
    pub fn admit(&mut self, first_name: &str) -> PrisonerId {
        self.store.add_prisoner(Self::sample_prisoner(first_name))
    }

    /// Add a sample staff member.
    pub fn hire(&mut self, first_name: &str) -> StaffId {
        self.store.add_staff(Self::sample_staff(first_name))
    }

    /// Assign a prisoner, chaining.
    pub fn assign(&mut self, prisoner: u32, cell: u32) -> &mut Self {
        self.store
            .assign_prisoner_to_cell(PrisonerId(prisoner), CellId(cell));
        self
    }

    /// Cached occupants of a cell, `None` if the cell doesn't exist.
    pub fn occupants(&self, cell: u32) -> Option<u32> {
        self.store.cell_by_id(CellId(cell)).map(|c| c.occupants)
    }

    /// Occupants of every cell, in cell order.
    pub fn occupancy(&self) -> Vec<u32> {
        self.store.cells().iter().map(|c| c.occupants).collect()
    }

    /// Cell reference of a prisoner.
    pub fn cell_of(&self, prisoner: u32) -> Option<CellId> {
        self.store
            .prisoner_by_id(PrisonerId(prisoner))
            .and_then(|p| p.cell_id)
    }

    /// Kinds of all notifications received so far.
    pub fn notification_kinds(&self) -> Vec<NotificationKind> {
        self.store
            .notifier()
            .received()
            .iter()
            .map(|n| n.kind)
            .collect()
    }

    /// Message of the last notification.
    pub fn last_message(&self) -> Option<&'static str> {
        self.store.notifier().last().map(|n| n.message())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert a cell caches the expected number of occupants.
#[track_caller]
pub fn assert_occupants(harness: &TestHarness, cell: u32, expected: u32) {
    let actual = harness.occupants(cell);
    assert_eq!(
        actual,
        Some(expected),
        "Expected cell {cell} to have {expected} occupants, got {actual:?}"
    );
}

/// Assert every cell's cached count matches the prisoners referencing it.
#[track_caller]
pub fn assert_consistent(harness: &TestHarness) {
    let drift = harness.store.occupancy_drift();
    assert!(drift.is_empty(), "Expected no occupancy drift, got {drift:?}");
}

/// Assert the collection sizes as (prisoners, cells, staff).
#[track_caller]
pub fn assert_sizes(harness: &TestHarness, prisoners: usize, cells: usize, staff: usize) {
    let actual = (
        harness.store.prisoners().len(),
        harness.store.cells().len(),
        harness.store.staff().len(),
    );
    assert_eq!(
        actual,
        (prisoners, cells, staff),
        "Expected sizes ({prisoners}, {cells}, {staff}), got {actual:?}"
    );
}

/// Assert the last notification was of the given kind.
#[track_caller]
pub fn assert_notified(harness: &TestHarness, kind: NotificationKind) {
    let last = harness.store.notifier().last().map(|n| n.kind);
    assert_eq!(last, Some(kind), "Expected last notification {kind:?}, got {last:?}");
}

/// Assert no notification has been emitted.
#[track_caller]
pub fn assert_silent(harness: &TestHarness) {
    let received = harness.store.notifier().received();
    assert!(
        received.is_empty(),
        "Expected no notifications, got {} ({:?})",
        received.len(),
        harness.notification_kinds()
    );
}
