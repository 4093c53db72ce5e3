pub mod assignments;
pub mod enrollments;
pub mod grades;
pub mod submissions;

pub use assignments::AssignmentService;
pub use enrollments::EnrollmentService;
pub use grades::GradeService;
pub use submissions::SubmissionService;
