//! In-memory record store for a correctional facility console.
//!
//! This crate provides:
//! - Prisoner, cell and staff records seeded with fixture data
//! - Create/update/delete operations with success notifications
//! - Manual prisoner-to-cell assignment with cached occupancy counts
//! - Derived views (cell status, block statistics, staff breakdowns)
//!
//! # Quick Start
//!
//! ```
//! use facility_core::{CellId, FacilityStore, PrisonerId};
//!
//! let mut store = FacilityStore::seeded();
//!
//! // Move John Doe from A-101 to C-301.
//! store.assign_prisoner_to_cell(PrisonerId(1), CellId(5));
//!
//! assert_eq!(store.cell_by_id(CellId(1)).unwrap().occupants, 1);
//! assert_eq!(store.cell_by_id(CellId(5)).unwrap().occupants, 1);
//! ```

pub mod config;
pub mod error;
pub mod notify;
pub mod records;
pub mod seed;
pub mod stats;
pub mod store;
pub mod testing;

// Primary public API
pub use config::{AssignmentPolicy, StoreConfig};
pub use error::StoreError;
pub use notify::{Notification, NotificationKind, Notifier, RecordingNotifier, SilentNotifier};
pub use records::{
    Cell, CellId, NewPrisoner, NewStaff, ParseEnumError, Position, Prisoner, PrisonerId, Shift,
    Staff, StaffId,
};
pub use stats::{BlockStats, CellStatus, OccupancyLevel};
pub use store::{FacilitySnapshot, FacilityStore, OccupancyDrift};
pub use testing::TestHarness;
