pub mod auth;

pub mod faculty;

pub mod students;

pub mod subjects;

pub mod enrollments;

pub use auth::configure_auth_routes;
pub use enrollments::configure_enrollment_routes;
pub use faculty::configure_faculty_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
