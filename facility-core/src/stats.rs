//! Derived views over the store: cell status, block statistics and staff
//! breakdowns. Nothing here mutates.

use crate::notify::Notifier;
use crate::records::{Cell, CellId, Position, Prisoner, Shift};
use crate::store::FacilityStore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    /// No free places (also when over-assigned).
    Full,
    /// No occupants at all.
    Empty,
    /// Some places free.
    Available(u32),
}

impl CellStatus {
    pub fn of(cell: &Cell) -> Self {
        let available = cell.available_space();
        if available == 0 {
            CellStatus::Full
        } else if available == cell.capacity {
            CellStatus::Empty
        } else {
            CellStatus::Available(available)
        }
    }
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellStatus::Full => write!(f, "Full"),
            CellStatus::Empty => write!(f, "Empty"),
            CellStatus::Available(n) => write!(f, "{n} Available"),
        }
    }
}

/// Occupancy as a percentage of capacity; zero for a zero-capacity cell.
pub fn occupancy_percentage(cell: &Cell) -> f64 {
    rate(cell.occupants, cell.capacity)
}

fn rate(occupants: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        0.0
    } else {
        f64::from(occupants) / f64::from(capacity) * 100.0
    }
}

/// How crowded a block is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OccupancyLevel {
    /// Below 70%.
    Normal,
    /// 70% up to 90%.
    High,
    /// 90% and above.
    Critical,
}

impl OccupancyLevel {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 90.0 {
            OccupancyLevel::Critical
        } else if rate >= 70.0 {
            OccupancyLevel::High
        } else {
            OccupancyLevel::Normal
        }
    }
}

/// Aggregate occupancy for one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStats {
    pub block: String,
    pub cell_count: usize,
    pub total_capacity: u32,
    pub total_occupants: u32,
    /// Capacity minus occupants, zero if over-assigned.
    pub available_space: u32,
    /// Occupants as a percentage of capacity.
    pub occupancy_rate: f64,
}

impl BlockStats {
    fn from_cells<'a>(block: &str, cells: impl Iterator<Item = &'a Cell>) -> Self {
        let mut stats = BlockStats {
            block: block.to_string(),
            cell_count: 0,
            total_capacity: 0,
            total_occupants: 0,
            available_space: 0,
            occupancy_rate: 0.0,
        };
        for cell in cells.filter(|c| c.block == block) {
            stats.cell_count += 1;
            stats.total_capacity += cell.capacity;
            stats.total_occupants += cell.occupants;
        }
        stats.available_space = stats.total_capacity.saturating_sub(stats.total_occupants);
        stats.occupancy_rate = rate(stats.total_occupants, stats.total_capacity);
        stats
    }

    pub fn level(&self) -> OccupancyLevel {
        OccupancyLevel::from_rate(self.occupancy_rate)
    }
}

/// Label shown for a prisoner without a (resolvable) cell.
pub const UNASSIGNED: &str = "Unassigned";

impl<N: Notifier> FacilityStore<N> {
    /// Prisoners whose cell reference is `cell_id`.
    pub fn cell_occupants(&self, cell_id: CellId) -> Vec<&Prisoner> {
        self.prisoners()
            .iter()
            .filter(|p| p.cell_id == Some(cell_id))
            .collect()
    }

    /// Status of a cell, `None` if it doesn't exist.
    pub fn cell_status(&self, cell_id: CellId) -> Option<CellStatus> {
        self.cell_by_id(cell_id).map(CellStatus::of)
    }

    /// Cells with at least one free place, the candidates for assignment.
    pub fn available_cells(&self) -> Vec<&Cell> {
        self.cells().iter().filter(|c| c.has_space()).collect()
    }

    /// Cell number of the prisoner's cell, or [`UNASSIGNED`].
    pub fn cell_label(&self, prisoner: &Prisoner) -> &str {
        prisoner
            .cell_id
            .and_then(|id| self.cell_by_id(id))
            .map(|c| c.cell_number.as_str())
            .unwrap_or(UNASSIGNED)
    }

    /// Distinct block designators, in order of first appearance.
    pub fn blocks(&self) -> Vec<&str> {
        let mut blocks: Vec<&str> = Vec::new();
        for cell in self.cells() {
            if !blocks.contains(&cell.block.as_str()) {
                blocks.push(&cell.block);
            }
        }
        blocks
    }

    /// Statistics for one block. A block with no cells reports zeros.
    pub fn block_stats(&self, block: &str) -> BlockStats {
        BlockStats::from_cells(block, self.cells().iter())
    }

    /// Statistics for every block.
    pub fn block_stats_all(&self) -> Vec<BlockStats> {
        self.blocks()
            .into_iter()
            .map(|block| self.block_stats(block))
            .collect()
    }

    /// Staff headcount per position, every position included.
    pub fn staff_count_by_position(&self) -> Vec<(Position, usize)> {
        Position::all()
            .into_iter()
            .map(|position| {
                let count = self.staff().iter().filter(|s| s.position == position).count();
                (position, count)
            })
            .collect()
    }

    /// Staff headcount per shift, every shift included.
    pub fn staff_count_by_shift(&self) -> Vec<(Shift, usize)> {
        Shift::all()
            .into_iter()
            .map(|shift| {
                let count = self.staff().iter().filter(|s| s.shift == shift).count();
                (shift, count)
            })
            .collect()
    }
}
