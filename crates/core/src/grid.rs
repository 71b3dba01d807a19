//! Grid rendering and plain-text export of a [`Timetable`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::slot::{Day, GridCell, PERIODS, SlotKind};
use crate::models::timetable::TimetableResponse;
use crate::slots::SlotTables;
use crate::timetable::Timetable;

pub const OCCUPIED_COLOR: &str = "#4CAF50";
pub const LUNCH_COLOR: &str = "#FFD54F";
pub const EMPTY_COLOR: &str = "#EEEEEE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Occupied,
    Lunch,
    Empty,
}

impl CellState {
    pub fn color(&self) -> &'static str {
        match self {
            CellState::Occupied => OCCUPIED_COLOR,
            CellState::Lunch => LUNCH_COLOR,
            CellState::Empty => EMPTY_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodHeader {
    pub period: usize,
    pub theory: Option<String>,
    pub lab: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub state: CellState,
    pub color: String,
    /// Slot codes that map to this cell.
    pub slots: Vec<String>,
    pub course_code: Option<String>,
    pub slot: Option<String>,
    pub room: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub day: Day,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridView {
    pub headers: Vec<PeriodHeader>,
    pub rows: Vec<GridRow>,
}

impl GridView {
    pub fn render(tables: &SlotTables, timetable: &Timetable) -> Self {
        let headers = (0..PERIODS)
            .map(|period| PeriodHeader {
                period,
                theory: tables
                    .period_time(SlotKind::Theory, period)
                    .map(|range| range.to_string()),
                lab: tables
                    .period_time(SlotKind::Lab, period)
                    .map(|range| range.to_string()),
            })
            .collect();

        let rows = Day::ALL
            .iter()
            .map(|&day| GridRow {
                day,
                cells: (0..PERIODS)
                    .map(|period| render_cell(tables, timetable, GridCell::new(day, period)))
                    .collect(),
            })
            .collect();

        Self { headers, rows }
    }

    pub fn cell(&self, cell: GridCell) -> Option<&CellView> {
        self.rows
            .iter()
            .find(|row| row.day == cell.day)
            .and_then(|row| row.cells.get(cell.period))
    }
}

fn render_cell(tables: &SlotTables, timetable: &Timetable, cell: GridCell) -> CellView {
    let slots = tables.slots_at(cell).to_vec();

    if let Some(occupant) = timetable.occupant(cell) {
        let room = timetable
            .entry(&occupant.course_code)
            .map(|entry| entry.room.clone())
            .filter(|room| !room.is_empty());
        return CellView {
            state: CellState::Occupied,
            color: CellState::Occupied.color().to_string(),
            slots,
            course_code: Some(occupant.course_code.clone()),
            slot: Some(occupant.slot.clone()),
            room,
        };
    }

    let state = if tables.is_lunch(cell.period) {
        CellState::Lunch
    } else {
        CellState::Empty
    };

    CellView {
        state,
        color: state.color().to_string(),
        slots,
        course_code: None,
        slot: None,
        room: None,
    }
}

impl TimetableResponse {
    pub fn new(tables: &SlotTables, timetable: Timetable) -> Self {
        let grid = GridView::render(tables, &timetable);
        Self {
            entries: timetable.into_entries(),
            grid,
        }
    }
}

const DAY_WIDTH: usize = 4;
const CELL_WIDTH: usize = 11;

/// Renders the timetable as a fixed-layout text document: the grid first,
/// then a flat list of entries.
pub fn export_document(tables: &SlotTables, timetable: &Timetable) -> String {
    ExportDocument {
        grid: GridView::render(tables, timetable),
        timetable,
    }
    .to_string()
}

struct ExportDocument<'a> {
    grid: GridView,
    timetable: &'a Timetable,
}

impl fmt::Display for ExportDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = "CLASS TIMETABLE";
        writeln!(f, "{}", title)?;
        writeln!(f, "{}", "=".repeat(title.len()))?;
        writeln!(f)?;

        let divider = format!(
            "{}+{}",
            "-".repeat(DAY_WIDTH),
            vec!["-".repeat(CELL_WIDTH); PERIODS].join("+")
        );
        let headers = &self.grid.headers;

        write_grid_line(f, "", headers.iter().map(|h| h.period.to_string()))?;
        write_grid_line(
            f,
            "TH",
            headers.iter().map(|h| header_label(h.period, h.theory.as_deref())),
        )?;
        write_grid_line(
            f,
            "LAB",
            headers.iter().map(|h| header_label(h.period, h.lab.as_deref())),
        )?;
        writeln!(f, "{}", divider)?;

        for row in &self.grid.rows {
            write_grid_line(
                f,
                row.day.short_name(),
                row.cells.iter().map(|cell| match cell.state {
                    CellState::Occupied => cell.course_code.clone().unwrap_or_default(),
                    CellState::Lunch => "LUNCH".to_string(),
                    CellState::Empty => "-".to_string(),
                }),
            )?;
        }
        writeln!(f, "{}", divider)?;
        writeln!(f)?;

        writeln!(f, "ENTRIES")?;
        writeln!(f, "{}", "=".repeat("ENTRIES".len()))?;
        if self.timetable.is_empty() {
            return writeln!(f, "No courses added.");
        }

        write_entry_line(f, ["CODE", "COURSE", "FACULTY", "SLOTS", "ROOM"])?;
        for entry in self.timetable.entries() {
            write_entry_line(
                f,
                [
                    entry.course_code.as_str(),
                    &entry.course_name,
                    &entry.faculty,
                    &entry.slots,
                    &entry.room,
                ],
            )?;
        }

        Ok(())
    }
}

fn header_label(period: usize, time: Option<&str>) -> String {
    match time {
        Some(time) => time.to_string(),
        None if period == crate::models::slot::LUNCH_PERIOD => "LUNCH".to_string(),
        None => "-".to_string(),
    }
}

fn write_grid_line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    cells: impl Iterator<Item = String>,
) -> fmt::Result {
    let cells: Vec<String> = cells
        .map(|cell| format!("{:<width$}", fit(&cell, CELL_WIDTH), width = CELL_WIDTH))
        .collect();
    let line = format!(
        "{:<width$}|{}",
        fit(label, DAY_WIDTH),
        cells.join("|"),
        width = DAY_WIDTH
    );
    writeln!(f, "{}", line.trim_end())
}

/// Code, course, faculty, slots, room.
const ENTRY_WIDTHS: [usize; 5] = [10, 30, 24, 16, 8];

fn write_entry_line(f: &mut fmt::Formatter<'_>, columns: [&str; 5]) -> fmt::Result {
    let line = columns
        .iter()
        .zip(ENTRY_WIDTHS)
        .map(|(text, width)| format!("{:<width$}", fit(text, width), width = width))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(f, "{}", line.trim_end())
}

/// Truncates to `width` characters so columns stay aligned.
fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
