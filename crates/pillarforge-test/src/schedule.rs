//! Shift scheduling fixtures.
//!
//! Shifts carry two planning variables, `employee` and `day`, plus a fixed
//! `start` used for ordering.
//!
//! # Example
//!
//! ```
//! use pillarforge_test::schedule::{Schedule, schedule_descriptor, shift_descriptor};
//!
//! let schedule = Schedule::with_employees(&[Some(1), Some(1), Some(2)]);
//! let descriptor = schedule_descriptor(shift_descriptor());
//! let (_, shifts) = descriptor.find_entity_descriptor("Shift").unwrap();
//! assert_eq!(shifts.entity_count(&schedule), 3);
//! ```

use std::cmp::Ordering;

use pillarforge_core::domain::{
    EntityDescriptor, ShadowVariableKind, SolutionDescriptor, VariableDescriptor,
};

/// A shift with two planning variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Shift {
    pub id: usize,
    pub start: u32,
    pub employee: Option<u32>,
    pub day: Option<u32>,
}

impl Shift {
    /// Creates a shift assigned to the given employee, without a day.
    pub fn new(id: usize, start: u32, employee: Option<u32>) -> Self {
        Self {
            id,
            start,
            employee,
            day: None,
        }
    }

    /// Sets the day of this shift.
    pub fn on_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }
}

/// A schedule holding the shifts to plan.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    pub shifts: Vec<Shift>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a schedule from explicit shifts.
    pub fn with_shifts(shifts: Vec<Shift>) -> Self {
        Self { shifts }
    }

    /// Creates one shift per employee assignment.
    ///
    /// Shift `i` starts at `i * 10`, so start order equals index order.
    pub fn with_employees(employees: &[Option<u32>]) -> Self {
        let shifts = employees
            .iter()
            .enumerate()
            .map(|(i, employee)| Shift::new(i, i as u32 * 10, *employee))
            .collect();
        Self { shifts }
    }
}

pub fn shift_count(s: &Schedule) -> usize {
    s.shifts.len()
}

pub fn get_employee(s: &Schedule, i: usize) -> Option<u32> {
    s.shifts.get(i).and_then(|shift| shift.employee)
}

pub fn set_employee(s: &mut Schedule, i: usize, employee: Option<u32>) {
    if let Some(shift) = s.shifts.get_mut(i) {
        shift.employee = employee;
    }
}

pub fn get_day(s: &Schedule, i: usize) -> Option<u32> {
    s.shifts.get(i).and_then(|shift| shift.day)
}

/// Orders shifts by start time.
pub fn by_start(s: &Schedule, a: usize, b: usize) -> Ordering {
    s.shifts[a].start.cmp(&s.shifts[b].start)
}

/// Orders shifts by descending start time.
pub fn by_start_desc(s: &Schedule, a: usize, b: usize) -> Ordering {
    by_start(s, b, a)
}

/// Shift descriptor without a natural ordering.
///
/// Registers the comparators `by_start` and `by_start_desc`, and a shadow
/// variable that pillar grouping must ignore.
pub fn shift_descriptor() -> EntityDescriptor<Schedule, u32> {
    EntityDescriptor::new("Shift", shift_count)
        .with_variable(VariableDescriptor::genuine("employee", get_employee))
        .with_variable(VariableDescriptor::genuine("day", get_day))
        .with_variable(VariableDescriptor::shadow(
            "employee_inverse",
            ShadowVariableKind::InverseRelation,
            get_employee,
        ))
        .with_comparator("by_start", by_start)
        .with_comparator("by_start_desc", by_start_desc)
}

/// Shift descriptor whose natural ordering is by start time.
pub fn comparable_shift_descriptor() -> EntityDescriptor<Schedule, u32> {
    shift_descriptor().with_natural_order(by_start)
}

/// Wraps an entity descriptor in a single-entity solution descriptor.
pub fn schedule_descriptor(
    shift: EntityDescriptor<Schedule, u32>,
) -> SolutionDescriptor<Schedule, u32> {
    SolutionDescriptor::new("Schedule").with_entity(shift)
}
