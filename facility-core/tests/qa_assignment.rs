//! QA tests for prisoner-to-cell assignment and occupancy bookkeeping.
//!
//! These tests verify:
//! - Moving prisoners between cells updates both counts
//! - Repeat assignment to the same cell double-counts by default
//! - Capacity is advisory unless the checked path enforces it
//! - Drift from deletes and updates, and its repair
//!
//! Run with: `cargo test -p facility-core --test qa_assignment`

use facility_core::testing::{
    assert_consistent, assert_notified, assert_occupants, assert_silent, TestHarness,
};
use facility_core::{
    AssignmentPolicy, CellId, FacilityStore, NotificationKind, PrisonerId, StoreConfig,
    StoreError,
};

// =============================================================================
// END-TO-END SCENARIOS
// =============================================================================

#[test]
fn test_reassign_from_full_cell_to_empty_cell() {
    let mut harness = TestHarness::new();
    assert_occupants(&harness, 1, 2);
    assert_occupants(&harness, 5, 0);

    harness.assign(1, 5);

    assert_occupants(&harness, 1, 1);
    assert_occupants(&harness, 5, 1);
    assert_eq!(harness.cell_of(1), Some(CellId(5)));
    assert_consistent(&harness);
    assert_notified(&harness, NotificationKind::PrisonerAssigned);
    assert_eq!(
        harness.last_message(),
        Some("Prisoner assigned to cell successfully")
    );
}

#[test]
fn test_two_moves_net_out() {
    let mut harness = TestHarness::new();
    let c1_before = harness.occupants(3).unwrap();
    let c2_before = harness.occupants(5).unwrap();

    // Prisoner 2 goes to B-201, then on to C-301.
    harness.assign(2, 3).assign(2, 5);

    assert_occupants(&harness, 3, c1_before);
    assert_occupants(&harness, 5, c2_before + 1);
    assert_occupants(&harness, 1, 1);
    assert_eq!(harness.cell_of(2), Some(CellId(5)));
}

#[test]
fn test_first_move_decrements_previous_cell() {
    let mut harness = TestHarness::new();
    let a101_before = harness.occupants(1).unwrap();

    harness.assign(1, 3).assign(1, 4);

    assert_occupants(&harness, 1, a101_before - 1);
    assert_occupants(&harness, 3, 1);
    assert_occupants(&harness, 4, 2);
}

#[test]
fn test_unassigned_prisoner_only_increments_target() {
    let mut harness = TestHarness::new();
    let id = harness.admit("Nora");
    let before = harness.occupancy();

    harness.assign(id.get(), 5);

    let after = harness.occupancy();
    assert_eq!(after[4], before[4] + 1);
    assert_eq!(&after[..4], &before[..4]);
}

// =============================================================================
// REPEAT ASSIGNMENT
// =============================================================================

#[test]
fn test_repeat_assignment_counts_twice() {
    let mut harness = TestHarness::new();
    harness.assign(5, 4).assign(5, 4);

    // David Miller is the only prisoner in B-202, yet it now counts three.
    assert_occupants(&harness, 4, 3);
    assert_eq!(harness.store.referencing_count(CellId(4)), 1);
    assert_eq!(harness.store.occupancy_drift().len(), 1);
}

#[test]
fn test_guarded_policy_keeps_counts() {
    let config = StoreConfig::new().with_assignment_policy(AssignmentPolicy::Guarded);
    let mut harness = TestHarness::with_config(config);
    harness.assign(5, 4).assign(5, 4);

    assert_occupants(&harness, 4, 1);
    assert_consistent(&harness);
    assert_eq!(harness.notification_kinds().len(), 2);
}

// =============================================================================
// CAPACITY
// =============================================================================

#[test]
fn test_capacity_is_advisory() {
    let mut harness = TestHarness::new();
    // A-102 holds one prisoner and has capacity 1.
    harness.assign(1, 2).assign(4, 2);

    let cell = harness.store.cell_by_id(CellId(2)).unwrap().clone();
    assert_eq!(cell.occupants, 3);
    assert!(cell.occupants > cell.capacity);
    assert!(!harness.store.available_cells().iter().any(|c| c.id == CellId(2)));
}

#[test]
fn test_checked_assignment_rejects_full_cell() {
    let mut harness = TestHarness::with_config(StoreConfig::strict());

    let result = harness
        .store
        .try_assign_prisoner_to_cell(PrisonerId(3), CellId(1));

    match result {
        Err(StoreError::CapacityExceeded {
            cell_number,
            capacity,
            occupants,
            ..
        }) => {
            assert_eq!(cell_number, "A-101");
            assert_eq!((capacity, occupants), (2, 2));
        }
        other => panic!("expected CapacityExceeded, got {other:?}"),
    }
    assert_eq!(harness.cell_of(3), Some(CellId(2)));
    assert_silent(&harness);
}

#[test]
fn test_checked_assignment_fills_to_capacity() {
    let mut harness = TestHarness::with_config(StoreConfig::strict());

    for prisoner in 1..=4 {
        harness
            .store
            .try_assign_prisoner_to_cell(PrisonerId(prisoner), CellId(5))
            .unwrap();
    }
    assert_occupants(&harness, 5, 4);

    let err = harness
        .store
        .try_assign_prisoner_to_cell(PrisonerId(5), CellId(5))
        .unwrap_err();
    assert!(matches!(err, StoreError::CapacityExceeded { .. }));
    assert_consistent(&harness);
}

#[test]
fn test_checked_assignment_unknown_ids() {
    let mut store = FacilityStore::seeded();
    assert!(matches!(
        store.try_assign_prisoner_to_cell(PrisonerId(0), CellId(1)),
        Err(StoreError::PrisonerNotFound(_))
    ));
    assert!(matches!(
        store.try_assign_prisoner_to_cell(PrisonerId(1), CellId(0)),
        Err(StoreError::CellNotFound(_))
    ));
    assert_eq!(store.cell_by_id(CellId(1)).unwrap().occupants, 2);
}

// =============================================================================
// DRIFT
// =============================================================================

#[test]
fn test_delete_leaves_stale_occupancy() {
    let mut harness = TestHarness::new();
    harness.store.delete_prisoner(PrisonerId(3));

    assert_occupants(&harness, 2, 1);
    let err = harness.store.check_integrity().unwrap_err();
    assert_eq!(
        err.to_string(),
        "cell A-102 caches 1 occupants but 0 prisoners reference it"
    );

    assert_eq!(harness.store.reconcile_occupancy(), 1);
    assert_occupants(&harness, 2, 0);
    assert_consistent(&harness);
    assert_notified(&harness, NotificationKind::OccupancyReconciled);
}

#[test]
fn test_missing_prisoner_assignment_is_silent() {
    let mut harness = TestHarness::new();
    let before = harness.occupancy();

    assert!(!harness
        .store
        .assign_prisoner_to_cell(PrisonerId(404), CellId(5)));

    assert_eq!(harness.occupancy(), before);
    assert_silent(&harness);
}
