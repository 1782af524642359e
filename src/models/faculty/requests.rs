use serde::Deserialize;

// 教职工注册请求
#[derive(Debug, Deserialize)]
pub struct FacultySignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub designation: String,
    pub phone: String,
    #[serde(default)]
    pub assigned_subjects: Vec<String>,
}

// 教职工登录请求
#[derive(Debug, Deserialize)]
pub struct FacultyLoginRequest {
    pub email: String,
    pub password: String,
}

// 教职工资料更新请求（邮箱是不可变键，修改资料与授课科目）
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFacultyRequest {
    pub name: String,
    pub department: String,
    pub designation: String,
    pub phone: String,
    #[serde(default)]
    pub assigned_subjects: Vec<String>,
}
