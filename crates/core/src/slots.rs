//! # Slot Tables
//!
//! Static lookup data for the weekly grid: which slot codes sit in which
//! cell, and what time each period covers for theory and lab slots.
//!
//! The tables are built once with [`SlotTables::standard`] and handed to the
//! validator and renderer by reference. Nothing here is mutable after
//! construction.

use std::collections::{BTreeMap, HashMap};

use crate::models::slot::{Day, GridCell, LUNCH_PERIOD, PERIODS, SlotKind, TimeRange};

/// Theory slot codes per day. Empty strings mark periods without a theory
/// slot (period 5 and lunch).
const THEORY_GRID: [[&str; PERIODS]; 5] = [
    ["A1", "F1", "D1", "TB1", "TG1", "", "", "A2", "F2", "D2", "TB2", "TG2", "V3"],
    ["B1", "G1", "E1", "TC1", "TAA1", "", "", "B2", "G2", "E2", "TC2", "TAA2", "V4"],
    ["C1", "A1", "F1", "V1", "V2", "", "", "C2", "A2", "F2", "TD2", "TBB2", "V5"],
    ["D1", "B1", "G1", "TE1", "TCC1", "", "", "D2", "B2", "G2", "TE2", "TCC2", "V6"],
    ["E1", "C1", "TA1", "TF1", "TD1", "", "", "E2", "C2", "TA2", "TF2", "TDD2", "V7"],
];

const THEORY_TIMES: [Option<TimeRange>; PERIODS] = [
    Some(TimeRange::new(8, 0, 8, 50)),
    Some(TimeRange::new(9, 0, 9, 50)),
    Some(TimeRange::new(10, 0, 10, 50)),
    Some(TimeRange::new(11, 0, 11, 50)),
    Some(TimeRange::new(12, 0, 12, 50)),
    None,
    None,
    Some(TimeRange::new(14, 0, 14, 50)),
    Some(TimeRange::new(15, 0, 15, 50)),
    Some(TimeRange::new(16, 0, 16, 50)),
    Some(TimeRange::new(17, 0, 17, 50)),
    Some(TimeRange::new(18, 0, 18, 50)),
    Some(TimeRange::new(19, 0, 19, 50)),
];

const LAB_TIMES: [Option<TimeRange>; PERIODS] = [
    Some(TimeRange::new(8, 0, 8, 50)),
    Some(TimeRange::new(8, 51, 9, 40)),
    Some(TimeRange::new(9, 51, 10, 40)),
    Some(TimeRange::new(10, 41, 11, 30)),
    Some(TimeRange::new(11, 40, 12, 30)),
    Some(TimeRange::new(12, 31, 13, 20)),
    None,
    Some(TimeRange::new(14, 0, 14, 50)),
    Some(TimeRange::new(14, 51, 15, 40)),
    Some(TimeRange::new(15, 51, 16, 40)),
    Some(TimeRange::new(16, 41, 17, 30)),
    Some(TimeRange::new(17, 40, 18, 30)),
    Some(TimeRange::new(18, 31, 19, 20)),
];

/// Lab slots per half-day block.
const LABS_PER_BLOCK: usize = 6;

/// First afternoon lab number minus one (`L31` is Monday afternoon's first).
const AFTERNOON_LAB_OFFSET: usize = 30;

/// Read-only slot configuration shared by the validator and the renderer.
#[derive(Debug, Clone)]
pub struct SlotTables {
    cells: HashMap<String, Vec<GridCell>>,
    grid: BTreeMap<GridCell, Vec<String>>,
    theory_times: [Option<TimeRange>; PERIODS],
    lab_times: [Option<TimeRange>; PERIODS],
}

impl SlotTables {
    /// The campus timetable: 5 days, 13 periods, lunch at period 6.
    pub fn standard() -> Self {
        let mut placements = Vec::new();

        for (day, row) in Day::ALL.iter().zip(THEORY_GRID.iter()) {
            for (period, code) in row.iter().enumerate() {
                if !code.is_empty() {
                    placements.push((code.to_string(), GridCell::new(*day, period)));
                }
            }
        }

        for (index, day) in Day::ALL.iter().enumerate() {
            for offset in 0..LABS_PER_BLOCK {
                let morning = index * LABS_PER_BLOCK + offset + 1;
                let afternoon = AFTERNOON_LAB_OFFSET + morning;
                placements.push((format!("L{}", morning), GridCell::new(*day, offset)));
                placements.push((
                    format!("L{}", afternoon),
                    GridCell::new(*day, LUNCH_PERIOD + 1 + offset),
                ));
            }
        }

        Self::from_placements(placements, THEORY_TIMES, LAB_TIMES)
    }

    /// Builds tables from `(slot code, cell)` pairs and per-period timings.
    pub fn from_placements<I>(
        placements: I,
        theory_times: [Option<TimeRange>; PERIODS],
        lab_times: [Option<TimeRange>; PERIODS],
    ) -> Self
    where
        I: IntoIterator<Item = (String, GridCell)>,
    {
        let mut cells: HashMap<String, Vec<GridCell>> = HashMap::new();
        let mut grid: BTreeMap<GridCell, Vec<String>> = BTreeMap::new();

        for (code, cell) in placements {
            let code = code.to_uppercase();
            grid.entry(cell).or_default().push(code.clone());
            cells.entry(code).or_default().push(cell);
        }

        for list in cells.values_mut() {
            list.sort();
            list.dedup();
        }

        Self {
            cells,
            grid,
            theory_times,
            lab_times,
        }
    }

    /// Cells a slot code occupies, in (day, period) order.
    pub fn cells_for(&self, code: &str) -> Option<&[GridCell]> {
        self.cells.get(code).map(Vec::as_slice)
    }

    /// Slot codes valid at a cell; empty for lunch and unused cells.
    pub fn slots_at(&self, cell: GridCell) -> &[String] {
        self.grid.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn period_time(&self, kind: SlotKind, period: usize) -> Option<TimeRange> {
        let table = match kind {
            SlotKind::Theory => &self.theory_times,
            SlotKind::Lab => &self.lab_times,
        };
        table.get(period).copied().flatten()
    }

    /// Time range of `code` when it sits in `period`.
    pub fn time_range(&self, code: &str, period: usize) -> Option<TimeRange> {
        self.period_time(SlotKind::of(code), period)
    }

    pub fn is_lunch(&self, period: usize) -> bool {
        period == LUNCH_PERIOD
    }

    pub fn slot_count(&self) -> usize {
        self.cells.len()
    }
}

impl Default for SlotTables {
    fn default() -> Self {
        Self::standard()
    }
}
