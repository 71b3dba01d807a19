pub mod review;
pub mod slot;
pub mod timetable;
