//! The facility store: prisoners, cells and staff for one session.

use crate::config::{AssignmentPolicy, StoreConfig};
use crate::error::StoreError;
use crate::notify::{Notification, NotificationKind, Notifier, SilentNotifier};
use crate::records::{
    next_id, Cell, CellId, NewPrisoner, NewStaff, Prisoner, PrisonerId, Staff, StaffId,
};
use crate::seed;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A cell whose cached occupant count disagrees with the prisoners
/// referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyDrift {
    pub cell_id: CellId,
    pub cell_number: String,
    /// Value of `Cell::occupants`.
    pub cached: u32,
    /// Number of prisoners whose `cell_id` is this cell.
    pub actual: u32,
}

impl From<OccupancyDrift> for StoreError {
    fn from(drift: OccupancyDrift) -> Self {
        StoreError::StaleOccupancy {
            cell_id: drift.cell_id,
            cell_number: drift.cell_number,
            cached: drift.cached,
            actual: drift.actual,
        }
    }
}

/// Read-only copy of all three collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilitySnapshot {
    pub prisoners: Vec<Prisoner>,
    pub cells: Vec<Cell>,
    pub staff: Vec<Staff>,
}

/// Owns the prisoner, cell and staff collections of a session.
///
/// Every mutation goes through the store so that `Cell::occupants` is only
/// ever changed by [`assign_prisoner_to_cell`](Self::assign_prisoner_to_cell).
/// Updates and deletes of prisoners leave occupancy untouched; use
/// [`occupancy_drift`](Self::occupancy_drift) and
/// [`reconcile_occupancy`](Self::reconcile_occupancy) to detect and repair
/// the resulting drift.
#[derive(Debug)]
pub struct FacilityStore<N = SilentNotifier> {
    prisoners: Vec<Prisoner>,
    cells: Vec<Cell>,
    staff: Vec<Staff>,
    config: StoreConfig,
    notifier: N,
    /// Recent notifications, oldest first.
    activity: VecDeque<Notification>,
    sequence: u64,
}

impl FacilityStore<SilentNotifier> {
    /// A store loaded with the fixture records and default config.
    pub fn seeded() -> Self {
        Self::new(StoreConfig::new())
    }

    /// A store with no records at all.
    pub fn empty() -> Self {
        Self::new(StoreConfig::new().without_seed())
    }

    pub fn new(config: StoreConfig) -> Self {
        Self::with_notifier(config, SilentNotifier)
    }
}

impl Default for FacilityStore<SilentNotifier> {
    fn default() -> Self {
        Self::seeded()
    }
}

impl<N: Notifier> FacilityStore<N> {
    /// Create a store that reports successful mutations to `notifier`.
    pub fn with_notifier(config: StoreConfig, notifier: N) -> Self {
        let (prisoners, cells, staff) = if config.seed {
            (
                seed::PRISONERS.clone(),
                seed::CELLS.clone(),
                seed::STAFF.clone(),
            )
        } else {
            (Vec::new(), Vec::new(), Vec::new())
        };

        Self {
            prisoners,
            cells,
            staff,
            config,
            notifier,
            activity: VecDeque::new(),
            sequence: 0,
        }
    }

    /// Replace all three collections.
    ///
    /// Records are taken as given; occupancy is not recomputed.
    pub fn with_records(
        mut self,
        prisoners: Vec<Prisoner>,
        cells: Vec<Cell>,
        staff: Vec<Staff>,
    ) -> Self {
        self.prisoners = prisoners;
        self.cells = cells;
        self.staff = staff;
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub fn prisoners(&self) -> &[Prisoner] {
        &self.prisoners
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    /// Get a prisoner by ID.
    pub fn prisoner_by_id(&self, id: PrisonerId) -> Option<&Prisoner> {
        self.prisoners.iter().find(|p| p.id == id)
    }

    /// Get a staff member by ID.
    pub fn staff_by_id(&self, id: StaffId) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }

    /// Get a cell by ID.
    pub fn cell_by_id(&self, id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|c| c.id == id)
    }

    fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|c| c.id == id)
    }

    /// Copy of every collection, for display or export.
    pub fn snapshot(&self) -> FacilitySnapshot {
        FacilitySnapshot {
            prisoners: self.prisoners.clone(),
            cells: self.cells.clone(),
            staff: self.staff.clone(),
        }
    }

    /// The snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    // =========================================================================
    // Prisoners
    // =========================================================================

    /// Add a prisoner and return its new ID.
    ///
    /// A cell reference in `prisoner` is stored as given and does not change
    /// that cell's occupant count.
    pub fn add_prisoner(&mut self, prisoner: NewPrisoner) -> PrisonerId {
        let id = PrisonerId(next_id(self.prisoners.iter().map(|p| p.id.get())));
        self.prisoners.push(prisoner.with_id(id));
        self.emit(NotificationKind::PrisonerAdded, Some(id.get()));
        id
    }

    /// Replace the prisoner with the same ID. Returns `false` (and does
    /// nothing) if there is none.
    ///
    /// Occupancy is not adjusted even if `cell_id` changed.
    pub fn update_prisoner(&mut self, prisoner: Prisoner) -> bool {
        let id = prisoner.id;
        match self.prisoners.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = prisoner;
                self.emit(NotificationKind::PrisonerUpdated, Some(id.get()));
                true
            }
            None => false,
        }
    }

    /// Remove a prisoner. Returns `false` if there was none.
    ///
    /// The prisoner's cell keeps its occupant count.
    pub fn delete_prisoner(&mut self, id: PrisonerId) -> bool {
        let before = self.prisoners.len();
        self.prisoners.retain(|p| p.id != id);
        if self.prisoners.len() == before {
            return false;
        }
        self.emit(NotificationKind::PrisonerDeleted, Some(id.get()));
        true
    }

    // =========================================================================
    // Staff
    // =========================================================================

    /// Add a staff member and return the new ID.
    pub fn add_staff(&mut self, staff: NewStaff) -> StaffId {
        let id = StaffId(next_id(self.staff.iter().map(|s| s.id.get())));
        self.staff.push(staff.with_id(id));
        self.emit(NotificationKind::StaffAdded, Some(id.get()));
        id
    }

    /// Replace the staff member with the same ID. Returns `false` if there
    /// is none.
    pub fn update_staff(&mut self, staff: Staff) -> bool {
        let id = staff.id;
        match self.staff.iter_mut().find(|s| s.id == id) {
            Some(existing) => {
                *existing = staff;
                self.emit(NotificationKind::StaffUpdated, Some(id.get()));
                true
            }
            None => false,
        }
    }

    /// Remove a staff member. Returns `false` if there was none.
    pub fn delete_staff(&mut self, id: StaffId) -> bool {
        let before = self.staff.len();
        self.staff.retain(|s| s.id != id);
        if self.staff.len() == before {
            return false;
        }
        self.emit(NotificationKind::StaffDeleted, Some(id.get()));
        true
    }

    // =========================================================================
    // Cell assignment
    // =========================================================================

    /// Move a prisoner into a cell, updating both cells' occupant counts.
    ///
    /// Returns `false` (and does nothing) if the prisoner does not exist.
    ///
    /// Both counts are computed from their values before the call: the old
    /// cell is decremented (never below zero), then the target is written as
    /// its previous count plus one. When the old and target cell are the
    /// same, the increment wins, so under [`AssignmentPolicy::Faithful`]
    /// each repeat assignment counts the prisoner again. Capacity is not
    /// checked. A target id with no cell still updates the prisoner's
    /// reference.
    pub fn assign_prisoner_to_cell(&mut self, prisoner_id: PrisonerId, cell_id: CellId) -> bool {
        let Some(index) = self.prisoners.iter().position(|p| p.id == prisoner_id) else {
            return false;
        };
        self.assign_at(index, cell_id);
        true
    }

    /// Checked variant of [`assign_prisoner_to_cell`](Self::assign_prisoner_to_cell).
    ///
    /// Fails on an unknown prisoner or cell and, when the config enforces
    /// capacity, on a cell that is already full. Nothing changes on error.
    pub fn try_assign_prisoner_to_cell(
        &mut self,
        prisoner_id: PrisonerId,
        cell_id: CellId,
    ) -> Result<(), StoreError> {
        let index = self
            .prisoners
            .iter()
            .position(|p| p.id == prisoner_id)
            .ok_or(StoreError::PrisonerNotFound(prisoner_id))?;
        let cell = self
            .cell_by_id(cell_id)
            .ok_or(StoreError::CellNotFound(cell_id))?;

        let stays_put = self.prisoners[index].cell_id == Some(cell_id)
            && self.config.assignment_policy == AssignmentPolicy::Guarded;

        if self.config.enforce_capacity && !stays_put && !cell.has_space() {
            return Err(StoreError::CapacityExceeded {
                cell_id,
                cell_number: cell.cell_number.clone(),
                capacity: cell.capacity,
                occupants: cell.occupants,
            });
        }

        self.assign_at(index, cell_id);
        Ok(())
    }

    fn assign_at(&mut self, index: usize, cell_id: CellId) {
        let prisoner_id = self.prisoners[index].id;
        let old_cell = self.prisoners[index].cell_id;

        if old_cell == Some(cell_id) && self.config.assignment_policy == AssignmentPolicy::Guarded {
            self.emit(NotificationKind::PrisonerAssigned, Some(prisoner_id.get()));
            return;
        }

        let target_before = self.cell_by_id(cell_id).map(|c| c.occupants);

        if let Some(old) = old_cell {
            if let Some(cell) = self.cell_mut(old) {
                cell.occupants = cell.occupants.saturating_sub(1);
            }
        }

        self.prisoners[index].cell_id = Some(cell_id);

        if let Some(before) = target_before {
            if let Some(cell) = self.cell_mut(cell_id) {
                cell.occupants = before + 1;
            }
        }

        self.emit(NotificationKind::PrisonerAssigned, Some(prisoner_id.get()));
    }

    // =========================================================================
    // Occupancy integrity
    // =========================================================================

    /// Number of prisoners whose cell reference is `cell_id`.
    pub fn referencing_count(&self, cell_id: CellId) -> u32 {
        self.prisoners
            .iter()
            .filter(|p| p.cell_id == Some(cell_id))
            .count() as u32
    }

    /// Cells whose cached occupant count differs from the prisoners that
    /// reference them, in cell order.
    pub fn occupancy_drift(&self) -> Vec<OccupancyDrift> {
        self.cells
            .iter()
            .filter_map(|cell| {
                let actual = self.referencing_count(cell.id);
                (actual != cell.occupants).then(|| OccupancyDrift {
                    cell_id: cell.id,
                    cell_number: cell.cell_number.clone(),
                    cached: cell.occupants,
                    actual,
                })
            })
            .collect()
    }

    /// Fails with [`StoreError::StaleOccupancy`] for the first drifting cell.
    pub fn check_integrity(&self) -> Result<(), StoreError> {
        match self.occupancy_drift().into_iter().next() {
            Some(drift) => Err(drift.into()),
            None => Ok(()),
        }
    }

    /// Recompute every cell's occupant count from prisoner references.
    ///
    /// Returns how many cells changed; notifies only if any did.
    pub fn reconcile_occupancy(&mut self) -> usize {
        let drift = self.occupancy_drift();
        for entry in &drift {
            if let Some(cell) = self.cell_mut(entry.cell_id) {
                cell.occupants = entry.actual;
            }
        }
        if !drift.is_empty() {
            self.emit(NotificationKind::OccupancyReconciled, None);
        }
        drift.len()
    }

    // =========================================================================
    // Activity
    // =========================================================================

    fn emit(&mut self, kind: NotificationKind, record_id: Option<u32>) {
        self.sequence += 1;
        let notification = Notification {
            kind,
            record_id,
            sequence: self.sequence,
        };
        self.notifier.notify(&notification);

        if self.config.activity_limit == 0 {
            return;
        }
        while self.activity.len() >= self.config.activity_limit {
            self.activity.pop_front();
        }
        self.activity.push_back(notification);
    }

    /// Notifications emitted this session, oldest first, bounded by
    /// `StoreConfig::activity_limit`.
    pub fn activity(&self) -> impl Iterator<Item = &Notification> {
        self.activity.iter()
    }

    /// The last `count` notifications, most recent first.
    pub fn recent_activity(&self, count: usize) -> Vec<&Notification> {
        self.activity.iter().rev().take(count).collect()
    }
}
