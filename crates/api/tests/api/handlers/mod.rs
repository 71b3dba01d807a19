mod faculty_test;
mod middleware_test;
mod review_test;
mod timetable_test;
