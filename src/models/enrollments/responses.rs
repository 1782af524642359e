use serde::Serialize;

use super::entities::Enrollment;
use crate::models::students::responses::StudentInfo;
use crate::models::subjects::entities::Subject;

// 选课创建响应
#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub enrollment: Enrollment,
}

// 选课记录及其关联的学生、科目信息
#[derive(Debug, Serialize)]
pub struct EnrollmentDetail {
    pub enrollment: Enrollment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
}

// 选课列表响应
#[derive(Debug, Serialize)]
pub struct EnrollmentListResponse {
    pub enrollments: Vec<EnrollmentDetail>,
    pub total: usize,
}
