//! Errors from the store's checked operations.
//!
//! The default mutation path never fails: a missing id is a silent no-op.
//! These errors come only from the opt-in `try_*` and `check_*` calls.

use crate::records::{CellId, PrisonerId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("prisoner {0} not found")]
    PrisonerNotFound(PrisonerId),

    #[error("cell {0} not found")]
    CellNotFound(CellId),

    #[error("cell {cell_number} is full ({occupants}/{capacity})")]
    CapacityExceeded {
        cell_id: CellId,
        cell_number: String,
        capacity: u32,
        occupants: u32,
    },

    #[error("cell {cell_number} caches {cached} occupants but {actual} prisoners reference it")]
    StaleOccupancy {
        cell_id: CellId,
        cell_number: String,
        cached: u32,
        actual: u32,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
