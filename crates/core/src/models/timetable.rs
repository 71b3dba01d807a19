use serde::{Deserialize, Serialize};

use crate::grid::GridView;

/// A course placed (or about to be placed) on the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub course_code: String,
    pub course_name: String,
    #[serde(default)]
    pub faculty: String,
    /// Raw slot string as typed, e.g. `"A1+TA1"` or `"L31, L32"`.
    pub slots: String,
    #[serde(default)]
    pub room: String,
}

/// Cell owner recorded in the occupancy map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub course_code: String,
    pub slot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableRequest {
    #[serde(default)]
    pub entries: Vec<TimetableEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceEntryRequest {
    #[serde(default)]
    pub entries: Vec<TimetableEntry>,
    pub entry: TimetableEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveEntryRequest {
    #[serde(default)]
    pub entries: Vec<TimetableEntry>,
    pub course_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableResponse {
    pub entries: Vec<TimetableEntry>,
    pub grid: GridView,
}
