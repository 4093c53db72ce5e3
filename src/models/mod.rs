pub mod assignments;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod rubrics;
pub mod submissions;
