//! # Classboard Core
//!
//! Domain types and logic shared by the API and storage crates: the slot
//! tables, the slot clash validator, per-session timetables, grid rendering,
//! and faculty review aggregation.

pub mod errors;
pub mod grid;
pub mod models;
pub mod reviews;
pub mod slots;
pub mod timetable;
pub mod validator;
