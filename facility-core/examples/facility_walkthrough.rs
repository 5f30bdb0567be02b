//! Walk through a session: admit, assign, report, reconcile.

use facility_core::stats::occupancy_percentage;
use facility_core::{CellId, FacilityStore, Notification, StoreConfig, TestHarness};

fn main() {
    println!("=== Facility Walkthrough ===\n");

    let mut store = FacilityStore::with_notifier(StoreConfig::new(), |n: &Notification| {
        println!("  [{}] {}", n.sequence, n.message());
    });

    print_cells(&store);

    println!("\nAdmitting a prisoner and assigning them to C-301...");
    let id = store.add_prisoner(TestHarness::sample_prisoner("Nora"));
    store.assign_prisoner_to_cell(id, CellId(5));

    println!("\nDeleting John Doe (A-101 keeps counting him)...");
    store.delete_prisoner(facility_core::PrisonerId(1));
    for drift in store.occupancy_drift() {
        println!(
            "  drift: {} caches {}, actual {}",
            drift.cell_number, drift.cached, drift.actual
        );
    }

    println!("\nReconciling...");
    let changed = store.reconcile_occupancy();
    println!("  {changed} cell(s) corrected\n");

    print_cells(&store);

    println!("\nBlock statistics:");
    for stats in store.block_stats_all() {
        println!(
            "  Block {}: {} cells, {}/{} occupied ({:.1}%, {:?})",
            stats.block,
            stats.cell_count,
            stats.total_occupants,
            stats.total_capacity,
            stats.occupancy_rate,
            stats.level()
        );
    }

    println!("\nStaff by shift:");
    for (shift, count) in store.staff_count_by_shift() {
        println!("  {shift}: {count}");
    }
}

fn print_cells<N: facility_core::Notifier>(store: &FacilityStore<N>) {
    println!("Cells:");
    for cell in store.cells() {
        let status = store
            .cell_status(cell.id)
            .map(|s| s.to_string())
            .unwrap_or_default();
        println!(
            "  {:<6} block {} {}/{} ({:>5.1}%) {}",
            cell.cell_number,
            cell.block,
            cell.occupants,
            cell.capacity,
            occupancy_percentage(cell),
            status
        );
    }
}
