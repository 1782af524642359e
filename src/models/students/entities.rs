use serde::{Deserialize, Serialize};

use crate::models::faculty::entities::AccountStatus;

// 学生实体（磁盘记录的完整形态，含密码哈希）
//
// 磁盘 JSON 沿用门户历史字段名（rollNumber / facultyEmail 为驼峰）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    pub department: String,
    #[serde(rename = "facultyEmail")]
    pub faculty_email: String,
    pub semester: i32,
    pub cgpa: f64,
    /// 考勤汇总（展示字段，非权威数据）
    pub attendance: u32,
    pub status: AccountStatus,
    /// 历史展示字段，权威数据在选课集合中
    #[serde(default)]
    pub subjects: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_field_names() {
        let student = Student {
            id: "s1".to_string(),
            name: "Ayesha".to_string(),
            roll_number: "FA21-BCS-001".to_string(),
            email: "ayesha@university.edu".to_string(),
            phone: "03001234567".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            department: "CS".to_string(),
            faculty_email: "khan@university.edu".to_string(),
            semester: 1,
            cgpa: 0.0,
            attendance: 0,
            status: AccountStatus::Active,
            subjects: vec![],
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let json = serde_json::to_value(&student).expect("serialize");
        assert!(json.get("rollNumber").is_some());
        assert!(json.get("facultyEmail").is_some());
        assert!(json.get("password").is_some());
        assert!(json.get("roll_number").is_none());
    }
}
