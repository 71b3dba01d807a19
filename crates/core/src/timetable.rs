//! Per-session timetable state.
//!
//! A [`Timetable`] is owned by a single session and passed to every
//! operation that reads or changes it. It is never persisted; clients keep
//! the entry list and send it back, and [`Timetable::replay`] rebuilds the
//! occupancy map from it.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::errors::{ClassError, ClassResult};
use crate::models::slot::{Day, GridCell, PERIODS};
use crate::models::timetable::{Occupant, TimetableEntry};
use crate::validator::{SlotClaim, SlotClashValidator};

#[derive(Debug, Clone, Default)]
pub struct Timetable {
    entries: Vec<TimetableEntry>,
    occupancy: BTreeMap<GridCell, Occupant>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a timetable by placing `entries` in order.
    ///
    /// Fails on the first entry that would not be accepted by
    /// [`SlotClashValidator::place`].
    pub fn replay(
        validator: &SlotClashValidator<'_>,
        entries: impl IntoIterator<Item = TimetableEntry>,
    ) -> ClassResult<Self> {
        let mut timetable = Self::new();
        for entry in entries {
            validator.place(&mut timetable, entry)?;
        }
        Ok(timetable)
    }

    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TimetableEntry> {
        self.entries
    }

    pub fn entry(&self, course_code: &str) -> Option<&TimetableEntry> {
        self.entries
            .iter()
            .find(|entry| entry.course_code.eq_ignore_ascii_case(course_code))
    }

    pub fn occupant(&self, cell: GridCell) -> Option<&Occupant> {
        self.occupancy.get(&cell)
    }

    /// Occupied cells of one day in period order.
    pub fn day_occupancy(&self, day: Day) -> impl Iterator<Item = (&GridCell, &Occupant)> {
        self.occupancy.range(day_range(day))
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.occupancy.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes the entry with `course_code` and frees every cell it held.
    pub fn remove(&mut self, course_code: &str) -> ClassResult<TimetableEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.course_code.eq_ignore_ascii_case(course_code))
            .ok_or_else(|| {
                ClassError::NotFound(format!("Course {} is not in the timetable", course_code))
            })?;

        let entry = self.entries.remove(index);
        self.occupancy
            .retain(|_, occupant| occupant.course_code != entry.course_code);

        debug!(course = %entry.course_code, "Removed timetable entry");
        Ok(entry)
    }

    /// Applies a batch of already validated claims together with its entry.
    pub(crate) fn commit(&mut self, entry: TimetableEntry, claims: Vec<SlotClaim>) {
        for claim in claims {
            self.occupancy.insert(
                claim.cell,
                Occupant {
                    course_code: entry.course_code.clone(),
                    slot: claim.slot,
                },
            );
        }
        self.entries.push(entry);
    }
}

pub(crate) fn day_range(day: Day) -> RangeInclusive<GridCell> {
    GridCell::new(day, 0)..=GridCell::new(day, PERIODS - 1)
}
