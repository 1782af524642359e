use serde::{Deserialize, Serialize};

use super::entities::Student;
use crate::models::faculty::entities::AccountStatus;

// 学生信息（去除密码哈希后的安全视图）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    #[serde(rename = "facultyEmail")]
    pub faculty_email: String,
    pub semester: i32,
    pub cgpa: f64,
    pub attendance: u32,
    pub status: AccountStatus,
    pub subjects: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Student> for StudentInfo {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            roll_number: s.roll_number,
            email: s.email,
            phone: s.phone,
            department: s.department,
            faculty_email: s.faculty_email,
            semester: s.semester,
            cgpa: s.cgpa,
            attendance: s.attendance,
            status: s.status,
            subjects: s.subjects,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

// 创建成功后的摘要
#[derive(Debug, Serialize)]
pub struct StudentSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
    pub email: String,
    pub department: String,
}

impl From<&Student> for StudentSummary {
    fn from(s: &Student) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            roll_number: s.roll_number.clone(),
            email: s.email.clone(),
            department: s.department.clone(),
        }
    }
}

// 删除成功后的摘要
#[derive(Debug, Serialize)]
pub struct DeletedStudent {
    pub name: String,
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
}

// 学生列表响应
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub students: Vec<StudentInfo>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_info_has_no_password() {
        let student: Student = serde_json::from_value(json!({
            "id": "s1",
            "name": "Ayesha",
            "rollNumber": "FA21-BCS-001",
            "email": "ayesha@university.edu",
            "phone": "03001234567",
            "password": "$argon2id$hash",
            "department": "CS",
            "facultyEmail": "khan@university.edu",
            "semester": 3,
            "cgpa": 3.4,
            "attendance": 80,
            "status": "active",
            "subjects": [],
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }))
        .expect("deserialize student");

        let info = StudentInfo::from(student);
        let value = serde_json::to_value(&info).expect("serialize");
        assert!(value.get("password").is_none());
        assert_eq!(value["rollNumber"], "FA21-BCS-001");
    }
}
