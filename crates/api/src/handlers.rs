pub mod faculty;
pub mod review;
pub mod timetable;
