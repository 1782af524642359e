pub mod auth;
pub mod common;
pub mod enrollments;
pub mod faculty;
pub mod students;
pub mod subjects;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 程序启动时间，用于计算预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
