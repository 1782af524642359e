use serde::Deserialize;

// 添加学生请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub department: String,
    #[serde(rename = "facultyEmail")]
    pub faculty_email: String,
}

// 更新学生请求（按 ID 全量更新可编辑字段）
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: String,
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub semester: i32,
}

// 学生登录请求
#[derive(Debug, Deserialize)]
pub struct StudentLoginRequest {
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
    pub password: String,
}

// 学生修改密码请求
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}
