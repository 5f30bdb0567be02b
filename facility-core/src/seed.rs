//! Fixture records loaded when a session starts.

use crate::records::{Cell, CellId, NewPrisoner, NewStaff, Position, Prisoner, PrisonerId, Shift, Staff, StaffId};

lazy_static::lazy_static! {
    /// Seed prisoners. Prisoners 1 and 2 share cell A-101.
    pub static ref PRISONERS: Vec<Prisoner> = vec![
        NewPrisoner::new("John", "Doe", 35, "Theft", 3, "2023-05-15")
            .in_cell(CellId(1))
            .with_id(PrisonerId(1)),
        NewPrisoner::new("Michael", "Smith", 42, "Fraud", 5, "2022-11-08")
            .in_cell(CellId(1))
            .with_id(PrisonerId(2)),
        NewPrisoner::new("Robert", "Johnson", 29, "Assault", 7, "2021-03-21")
            .in_cell(CellId(2))
            .with_id(PrisonerId(3)),
        NewPrisoner::new("William", "Brown", 38, "Drug Possession", 2, "2024-01-14")
            .in_cell(CellId(3))
            .with_id(PrisonerId(4)),
        NewPrisoner::new("David", "Miller", 45, "Robbery", 10, "2020-08-30")
            .in_cell(CellId(4))
            .with_id(PrisonerId(5)),
    ];

    /// Seed cells, occupant counts matching [`PRISONERS`].
    pub static ref CELLS: Vec<Cell> = vec![
        Cell::new(CellId(1), "A-101", 2, "A").with_occupants(2),
        Cell::new(CellId(2), "A-102", 1, "A").with_occupants(1),
        Cell::new(CellId(3), "B-201", 2, "B").with_occupants(1),
        Cell::new(CellId(4), "B-202", 2, "B").with_occupants(1),
        Cell::new(CellId(5), "C-301", 4, "C"),
    ];

    /// Seed staff.
    pub static ref STAFF: Vec<Staff> = vec![
        NewStaff::new("James", "Wilson", Position::Guard, Shift::Morning, "555-1234", "james.wilson@prison.gov")
            .with_id(StaffId(1)),
        NewStaff::new("Patricia", "Moore", Position::Warden, Shift::Day, "555-5678", "patricia.moore@prison.gov")
            .with_id(StaffId(2)),
        NewStaff::new("Richard", "Taylor", Position::MedicalOfficer, Shift::Evening, "555-9012", "richard.taylor@prison.gov")
            .with_id(StaffId(3)),
        NewStaff::new("Jennifer", "Anderson", Position::Counselor, Shift::Day, "555-3456", "jennifer.anderson@prison.gov")
            .with_id(StaffId(4)),
        NewStaff::new("Charles", "Thomas", Position::Guard, Shift::Night, "555-7890", "charles.thomas@prison.gov")
            .with_id(StaffId(5)),
    ];
}
