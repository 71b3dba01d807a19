pub mod faculty;
pub mod health;
pub mod review;
pub mod timetable;
