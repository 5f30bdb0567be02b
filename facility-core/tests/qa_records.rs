//! QA tests for prisoner and staff record management.
//!
//! Run with: `cargo test -p facility-core --test qa_records`

use facility_core::testing::{assert_notified, assert_silent, assert_sizes, TestHarness};
use facility_core::{
    CellId, FacilityStore, NewPrisoner, NewStaff, NotificationKind, Position, PrisonerId, Shift,
    StaffId, StoreConfig,
};

// =============================================================================
// PRISONERS
// =============================================================================

#[test]
fn test_add_prisoner_grows_by_one_with_larger_id() {
    let mut harness = TestHarness::new();

    for name in ["Ada", "Bo", "Cy"] {
        let max_before = harness
            .store
            .prisoners()
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap();
        let len_before = harness.store.prisoners().len();

        let id = harness.admit(name);

        assert!(id > max_before);
        assert_eq!(harness.store.prisoners().len(), len_before + 1);
        assert_notified(&harness, NotificationKind::PrisonerAdded);
    }
}

#[test]
fn test_add_unassigned_prisoner_keeps_occupancy() {
    let mut harness = TestHarness::new();
    let before = harness.occupancy();

    let id = harness.admit("Quinn");

    assert_eq!(harness.occupancy(), before);
    assert_eq!(harness.cell_of(id.get()), None);
    assert_eq!(
        harness.store.cell_label(harness.store.prisoner_by_id(id).unwrap()),
        "Unassigned"
    );
}

#[test]
fn test_update_prisoner_replaces_fields() {
    let mut harness = TestHarness::new();
    let replacement = NewPrisoner::new("Johnny", "Doe", 36, "Grand Theft", 4, "2023-05-15")
        .in_cell(CellId(1))
        .with_id(PrisonerId(1));

    assert!(harness.store.update_prisoner(replacement.clone()));

    assert_eq!(harness.store.prisoner_by_id(PrisonerId(1)), Some(&replacement));
    assert_sizes(&harness, 5, 5, 5);
    assert_notified(&harness, NotificationKind::PrisonerUpdated);
}

#[test]
fn test_update_unknown_prisoner_changes_nothing() {
    let mut harness = TestHarness::new();
    let before = harness.store.snapshot();

    let stranger = TestHarness::sample_prisoner("Nobody").with_id(PrisonerId(50));
    assert!(!harness.store.update_prisoner(stranger));

    assert_eq!(harness.store.snapshot(), before);
    assert_silent(&harness);
}

#[test]
fn test_delete_prisoner_removes_exactly_one() {
    let mut harness = TestHarness::new();

    assert!(harness.store.delete_prisoner(PrisonerId(2)));
    assert_sizes(&harness, 4, 5, 5);
    assert!(harness.store.prisoner_by_id(PrisonerId(2)).is_none());

    assert!(!harness.store.delete_prisoner(PrisonerId(2)));
    assert_sizes(&harness, 4, 5, 5);
    assert_eq!(harness.notification_kinds(), vec![NotificationKind::PrisonerDeleted]);
}

// =============================================================================
// STAFF
// =============================================================================

#[test]
fn test_delete_staff_three() {
    let mut harness = TestHarness::new();
    let prisoners_before = harness.store.prisoners().to_vec();
    let cells_before = harness.store.cells().to_vec();

    assert!(harness.store.delete_staff(StaffId(3)));

    assert_eq!(harness.store.staff().len(), 4);
    assert!(harness.store.staff().iter().all(|s| s.id != StaffId(3)));
    assert_eq!(harness.store.prisoners(), prisoners_before.as_slice());
    assert_eq!(harness.store.cells(), cells_before.as_slice());
    assert_notified(&harness, NotificationKind::StaffDeleted);
}

#[test]
fn test_staff_update_and_lookup() {
    let mut harness = TestHarness::new();
    let mut warden = harness.store.staff_by_id(StaffId(2)).unwrap().clone();
    warden.shift = Shift::Night;
    warden.contact_number = "555-0002".to_string();

    assert!(harness.store.update_staff(warden.clone()));
    assert_eq!(harness.store.staff_by_id(StaffId(2)), Some(&warden));

    let ghost = TestHarness::sample_staff("Ghost").with_id(StaffId(77));
    assert!(!harness.store.update_staff(ghost));
    assert!(harness.store.staff_by_id(StaffId(77)).is_none());
}

#[test]
fn test_staff_breakdown_follows_mutations() {
    let mut store = FacilityStore::seeded();
    store.add_staff(NewStaff::new(
        "Olivia",
        "Reed",
        Position::Administrator,
        Shift::Morning,
        "555-1111",
        "olivia.reed@prison.gov",
    ));
    store.delete_staff(StaffId(1));

    let by_position = store.staff_count_by_position();
    assert!(by_position.contains(&(Position::Administrator, 1)));
    assert!(by_position.contains(&(Position::Guard, 1)));

    let by_shift = store.staff_count_by_shift();
    assert!(by_shift.contains(&(Shift::Morning, 1)));
}

// =============================================================================
// EMPTY STORE
// =============================================================================

#[test]
fn test_empty_store_ids_start_at_one() {
    let mut harness = TestHarness::with_config(StoreConfig::new().without_seed());
    assert_sizes(&harness, 0, 0, 0);

    assert_eq!(harness.admit("First"), PrisonerId(1));
    assert_eq!(harness.admit("Second"), PrisonerId(2));
    assert_eq!(harness.hire("Third"), StaffId(1));
    assert!(harness.store.block_stats_all().is_empty());
}

#[test]
fn test_lookups_return_none_for_unknown_ids() {
    let store = FacilityStore::seeded();
    assert!(store.prisoner_by_id(PrisonerId(0)).is_none());
    assert!(store.staff_by_id(StaffId(6)).is_none());
    assert!(store.cell_by_id(CellId(6)).is_none());
    assert_eq!(store.cell_by_id(CellId(5)).unwrap().cell_number, "C-301");
}
