//! # Slot Clash Validator
//!
//! Maps free-form slot strings such as `"A1+TA1"` onto grid cells and
//! decides whether they can be placed on a [`Timetable`].
//!
//! ## Checking order
//!
//! 1. The slot string is split on `+`, `,` and whitespace and uppercased.
//!    No tokens at all is a required-field error.
//! 2. Every token is looked up before anything else; the first unknown
//!    token is reported as [`ClassError::InvalidSlot`].
//! 3. Tokens are then walked in input order, and each token's cells in
//!    (day, period) order. For every cell:
//!    - an occupied cell is a clash with its occupant;
//!    - otherwise the cell's time range is compared against every other
//!      occupied cell of that day in period order, and any overlap is a
//!      timing clash.
//!
//!    Cells claimed by earlier tokens of the same submission count as
//!    occupied, so `"A1+L1"` clashes with itself.
//! 4. Only when every cell passes are the claims committed, all at once.
//!
//! The first clash found in this order is the one returned; nothing is
//! written to the timetable on failure.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::errors::{ClassError, ClassResult};
use crate::models::slot::{GridCell, TimeRange};
use crate::models::timetable::{Occupant, TimetableEntry};
use crate::slots::SlotTables;
use crate::timetable::{Timetable, day_range};

/// One cell a submission wants, and the slot code that maps to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotClaim {
    pub slot: String,
    pub cell: GridCell,
}

/// Splits a slot string into uppercase tokens.
pub fn parse_slots(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == '+' || c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_uppercase)
        .collect()
}

pub struct SlotClashValidator<'a> {
    tables: &'a SlotTables,
}

impl<'a> SlotClashValidator<'a> {
    pub fn new(tables: &'a SlotTables) -> Self {
        Self { tables }
    }

    /// Works out the cells `slots` would occupy without touching `timetable`.
    pub fn check(&self, timetable: &Timetable, slots: &str) -> ClassResult<Vec<SlotClaim>> {
        let tokens = parse_slots(slots);
        if tokens.is_empty() {
            return Err(ClassError::Validation("Slot is required".to_string()));
        }

        let mut resolved = Vec::with_capacity(tokens.len());
        for token in tokens {
            let cells = self
                .tables
                .cells_for(&token)
                .ok_or_else(|| ClassError::InvalidSlot(token.clone()))?;
            resolved.push((token, cells));
        }

        // Cells claimed so far by this submission.
        let mut staged: BTreeMap<GridCell, Occupant> = BTreeMap::new();
        let mut claims = Vec::new();

        for (token, cells) in resolved {
            for &cell in cells {
                let existing = timetable.occupant(cell).or_else(|| staged.get(&cell));
                if let Some(occupant) = existing {
                    return Err(ClassError::Clash(format!(
                        "{} on {} is already taken by {} ({})",
                        token,
                        cell,
                        occupant.slot,
                        owner(occupant)
                    )));
                }

                if let Some(range) = self.tables.time_range(&token, cell.period) {
                    self.check_timing(timetable, &staged, &token, cell, range)?;
                }

                staged.insert(
                    cell,
                    Occupant {
                        course_code: String::new(),
                        slot: token.clone(),
                    },
                );
                claims.push(SlotClaim {
                    slot: token.clone(),
                    cell,
                });
            }
        }

        Ok(claims)
    }

    fn check_timing(
        &self,
        timetable: &Timetable,
        staged: &BTreeMap<GridCell, Occupant>,
        token: &str,
        cell: GridCell,
        range: TimeRange,
    ) -> ClassResult<()> {
        let mut same_day: Vec<(&GridCell, &Occupant)> = timetable
            .day_occupancy(cell.day)
            .chain(staged.range(day_range(cell.day)))
            .filter(|(other, _)| other.period != cell.period)
            .collect();
        same_day.sort_by_key(|(other, _)| other.period);

        for (other, occupant) in same_day {
            let Some(other_range) = self.tables.time_range(&occupant.slot, other.period) else {
                continue;
            };
            if range.overlaps(&other_range) {
                return Err(ClassError::Clash(format!(
                    "{} ({} {}) overlaps {} ({} {}) of {}",
                    token,
                    cell.day,
                    range,
                    occupant.slot,
                    other.day,
                    other_range,
                    owner(occupant)
                )));
            }
        }

        Ok(())
    }

    /// Validates `entry` and places it on `timetable` as a single batch.
    ///
    /// On error the timetable is left exactly as it was.
    pub fn place(&self, timetable: &mut Timetable, entry: TimetableEntry) -> ClassResult<()> {
        let entry = normalize(entry)?;

        if timetable.entry(&entry.course_code).is_some() {
            return Err(ClassError::Validation(format!(
                "Course {} is already in the timetable",
                entry.course_code
            )));
        }

        let claims = match self.check(timetable, &entry.slots) {
            Ok(claims) => claims,
            Err(err) => {
                debug!(course = %entry.course_code, slots = %entry.slots, "Rejected entry: {}", err);
                return Err(err);
            }
        };

        info!(
            course = %entry.course_code,
            slots = %entry.slots,
            cells = claims.len(),
            "Placed timetable entry"
        );
        timetable.commit(entry, claims);
        Ok(())
    }
}

/// Staged claims have no course code yet.
fn owner(occupant: &Occupant) -> &str {
    if occupant.course_code.is_empty() {
        "this submission"
    } else {
        &occupant.course_code
    }
}

/// Trims every field and enforces the required ones.
fn normalize(entry: TimetableEntry) -> ClassResult<TimetableEntry> {
    let entry = TimetableEntry {
        course_code: entry.course_code.trim().to_uppercase(),
        course_name: entry.course_name.trim().to_string(),
        faculty: entry.faculty.trim().to_string(),
        slots: entry.slots.trim().to_string(),
        room: entry.room.trim().to_string(),
    };

    if entry.course_code.is_empty() {
        return Err(ClassError::Validation("Course code is required".to_string()));
    }
    if entry.course_name.is_empty() {
        return Err(ClassError::Validation("Course name is required".to_string()));
    }
    if parse_slots(&entry.slots).is_empty() {
        return Err(ClassError::Validation("Slot is required".to_string()));
    }

    Ok(entry)
}
