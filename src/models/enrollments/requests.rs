use serde::Deserialize;

// 选课创建请求
#[derive(Debug, Deserialize)]
pub struct CreateEnrollmentRequest {
    pub student_roll: String,
    pub subject_id: String,
    pub faculty_email: String,
}

// 学业数据更新请求
//
// data_type 以字符串接收，在服务层解析为 AcademicSection，
// 解析失败映射为 400 Invalid data type。
#[derive(Debug, Deserialize)]
pub struct UpdateAcademicsRequest {
    pub student_roll: String,
    pub subject_id: String,
    pub faculty_email: String,
    pub data_type: String,
    pub data: serde_json::Map<String, serde_json::Value>,
}
