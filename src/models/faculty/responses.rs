use serde::{Deserialize, Serialize};

use super::entities::{AccountStatus, Faculty};
use crate::models::subjects::entities::Subject;

// 教职工信息（去除密码哈希后的安全视图）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub phone: String,
    pub assigned_subjects: Vec<String>,
    pub status: AccountStatus,
    pub registration_date: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Faculty> for FacultyInfo {
    fn from(f: Faculty) -> Self {
        Self {
            id: f.id,
            name: f.name,
            email: f.email,
            department: f.department,
            role: f.role,
            phone: f.phone,
            assigned_subjects: f.assigned_subjects,
            status: f.status,
            registration_date: f.registration_date,
            created_at: f.created_at,
        }
    }
}

// 注册成功后的摘要
#[derive(Debug, Serialize)]
pub struct FacultySummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
}

impl From<&Faculty> for FacultySummary {
    fn from(f: &Faculty) -> Self {
        Self {
            id: f.id.clone(),
            name: f.name.clone(),
            email: f.email.clone(),
            department: f.department.clone(),
            designation: f.role.clone(),
        }
    }
}

// 教职工列表响应
#[derive(Debug, Serialize)]
pub struct FacultyListResponse {
    pub faculty: Vec<FacultyInfo>,
    pub total: usize,
}

// 教职工及其授课科目的目录详情
#[derive(Debug, Serialize)]
pub struct FacultySubjectsResponse {
    pub faculty: FacultyInfo,
    pub subjects: Vec<Subject>,
}

// 删除成功后的摘要
#[derive(Debug, Serialize)]
pub struct DeletedFaculty {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_info_has_no_password() {
        let faculty: Faculty = serde_json::from_value(json!({
            "id": "FAC1",
            "name": "Dr. Khan",
            "email": "khan@university.edu",
            "password": "$argon2id$hash",
            "department": "CS",
            "role": "Professor",
            "phone": "03001234567",
            "assigned_subjects": ["CS101"],
            "status": "active",
            "registration_date": "2025-01-01T00:00:00Z",
            "created_at": "2025-01-01T00:00:00Z"
        }))
        .expect("deserialize faculty");

        let info = FacultyInfo::from(faculty);
        let value = serde_json::to_value(&info).expect("serialize");
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "khan@university.edu");
    }
}
