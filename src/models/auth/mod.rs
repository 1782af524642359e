pub mod responses;

pub use crate::models::faculty::requests::{FacultyLoginRequest, FacultySignupRequest};
pub use crate::models::students::requests::{ChangePasswordRequest, StudentLoginRequest};
