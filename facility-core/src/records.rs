//! Record types held by the facility store.
//!
//! Three independent collections: prisoners, cells and staff. Prisoners
//! reference cells by id; cells cache how many prisoners reference them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Identifiers
// ============================================================================

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// The raw numeric value.
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

record_id!(
    /// Identifier of a prisoner record.
    PrisonerId
);
record_id!(
    /// Identifier of a cell record.
    CellId
);
record_id!(
    /// Identifier of a staff record.
    StaffId
);

/// Next identifier for a collection: one past the largest existing id, or 1.
pub(crate) fn next_id(existing: impl Iterator<Item = u32>) -> u32 {
    existing.max().unwrap_or(0) + 1
}

/// Names of required text fields that are blank.
fn blank_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

// ============================================================================
// Prisoners
// ============================================================================

/// A prisoner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prisoner {
    pub id: PrisonerId,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    /// Description of the offence.
    pub crime: String,
    pub sentence_years: u32,
    /// Cell the prisoner is housed in, `None` when unassigned.
    pub cell_id: Option<CellId>,
    /// Admission date, `YYYY-MM-DD`.
    pub admission_date: String,
}

impl Prisoner {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the prisoner has a cell reference.
    pub fn is_assigned(&self) -> bool {
        self.cell_id.is_some()
    }

    /// The record's fields without its identifier.
    pub fn fields(&self) -> NewPrisoner {
        NewPrisoner {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            crime: self.crime.clone(),
            sentence_years: self.sentence_years,
            cell_id: self.cell_id,
            admission_date: self.admission_date.clone(),
        }
    }
}

/// Fields of a prisoner that does not have an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrisoner {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub crime: String,
    pub sentence_years: u32,
    #[serde(default)]
    pub cell_id: Option<CellId>,
    pub admission_date: String,
}

impl NewPrisoner {
    /// Create an unassigned prisoner.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        crime: impl Into<String>,
        sentence_years: u32,
        admission_date: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            crime: crime.into(),
            sentence_years,
            cell_id: None,
            admission_date: admission_date.into(),
        }
    }

    /// Set the initial cell reference.
    ///
    /// The store does not count this towards the cell's occupants; only
    /// assignment does.
    pub fn in_cell(mut self, cell_id: CellId) -> Self {
        self.cell_id = Some(cell_id);
        self
    }

    /// Attach an identifier, producing a full record.
    pub fn with_id(self, id: PrisonerId) -> Prisoner {
        Prisoner {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            crime: self.crime,
            sentence_years: self.sentence_years,
            cell_id: self.cell_id,
            admission_date: self.admission_date,
        }
    }

    /// Required text fields left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("crime", self.crime.as_str()),
            ("admissionDate", self.admission_date.as_str()),
        ])
    }
}

// ============================================================================
// Cells
// ============================================================================

/// A cell record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub id: CellId,
    /// Display label, e.g. "A-101".
    pub cell_number: String,
    pub capacity: u32,
    /// Block designator, e.g. "A".
    pub block: String,
    /// Cached count of prisoners referencing this cell.
    pub occupants: u32,
}

impl Cell {
    /// Create an empty cell.
    pub fn new(
        id: CellId,
        cell_number: impl Into<String>,
        capacity: u32,
        block: impl Into<String>,
    ) -> Self {
        Self {
            id,
            cell_number: cell_number.into(),
            capacity,
            block: block.into(),
            occupants: 0,
        }
    }

    /// Set the cached occupant count.
    pub fn with_occupants(mut self, occupants: u32) -> Self {
        self.occupants = occupants;
        self
    }

    /// Free places, zero when full or over-assigned.
    pub fn available_space(&self) -> u32 {
        self.capacity.saturating_sub(self.occupants)
    }

    /// Whether at least one more prisoner fits.
    pub fn has_space(&self) -> bool {
        self.occupants < self.capacity
    }
}

// ============================================================================
// Staff
// ============================================================================

/// Error parsing a [`Position`] or [`Shift`] from its display name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

/// Staff position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Guard,
    Warden,
    #[serde(rename = "Medical Officer")]
    MedicalOfficer,
    Counselor,
    Administrator,
}

impl Position {
    pub fn name(&self) -> &'static str {
        match self {
            Position::Guard => "Guard",
            Position::Warden => "Warden",
            Position::MedicalOfficer => "Medical Officer",
            Position::Counselor => "Counselor",
            Position::Administrator => "Administrator",
        }
    }

    /// Every position, in display order.
    pub fn all() -> [Position; 5] {
        [
            Position::Guard,
            Position::Warden,
            Position::MedicalOfficer,
            Position::Counselor,
            Position::Administrator,
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Position {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::all()
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "position",
                value: s.to_string(),
            })
    }
}

/// Staff shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Day,
    Evening,
    Night,
}

impl Shift {
    pub fn name(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Day => "Day",
            Shift::Evening => "Evening",
            Shift::Night => "Night",
        }
    }

    /// Every shift, in display order.
    pub fn all() -> [Shift; 4] {
        [Shift::Morning, Shift::Day, Shift::Evening, Shift::Night]
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Shift {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shift::all()
            .into_iter()
            .find(|shift| shift.name() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "shift",
                value: s.to_string(),
            })
    }
}

/// A staff record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: StaffId,
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    pub shift: Shift,
    pub contact_number: String,
    pub email_address: String,
}

impl Staff {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields of a staff member that does not have an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStaff {
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    pub shift: Shift,
    pub contact_number: String,
    pub email_address: String,
}

impl NewStaff {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        position: Position,
        shift: Shift,
        contact_number: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            position,
            shift,
            contact_number: contact_number.into(),
            email_address: email_address.into(),
        }
    }

    /// Attach an identifier, producing a full record.
    pub fn with_id(self, id: StaffId) -> Staff {
        Staff {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            shift: self.shift,
            contact_number: self.contact_number,
            email_address: self.email_address,
        }
    }

    /// Required text fields left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("contactNumber", self.contact_number.as_str()),
            ("emailAddress", self.email_address.as_str()),
        ])
    }
}
