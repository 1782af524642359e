/// API 业务错误代码
///
/// 0 表示成功，4xxx 对应通用 HTTP 语义，1xxxx 为各域的细分代码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 4000,
    AuthFailed = 4010,
    PermissionDenied = 4030,
    NotFound = 4040,
    Conflict = 4090,
    InternalServerError = 5000,

    // 教职工域
    FacultyInvalidField = 10001,
    FacultyAlreadyExists = 10002,
    FacultyNotFound = 10003,

    // 学生域
    StudentInvalidField = 10101,
    StudentRollConflict = 10102,
    StudentEmailConflict = 10103,
    StudentNotFound = 10104,

    // 科目域
    SubjectNotFound = 10201,

    // 选课域
    EnrollmentAlreadyExists = 10301,
    EnrollmentNotFound = 10302,
    InvalidDataType = 10303,
}
