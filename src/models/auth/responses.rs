use serde::Serialize;

use crate::models::faculty::responses::{FacultyInfo, FacultySummary};
use crate::models::students::responses::StudentInfo;

// 教职工登录响应
#[derive(Debug, Serialize)]
pub struct FacultyLoginResponse {
    pub faculty: FacultyInfo,
}

// 教职工注册响应
#[derive(Debug, Serialize)]
pub struct FacultySignupResponse {
    pub faculty: FacultySummary,
}

// 学生登录响应
#[derive(Debug, Serialize)]
pub struct StudentLoginResponse {
    pub student: StudentInfo,
}
