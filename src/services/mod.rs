pub mod auth;
pub mod enrollments;
pub mod faculty;
pub mod students;
pub mod subjects;

pub use auth::AuthService;
pub use enrollments::EnrollmentService;
pub use faculty::FacultyService;
pub use students::StudentService;
pub use subjects::SubjectService;
