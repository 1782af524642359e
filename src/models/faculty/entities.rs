use serde::{Deserialize, Serialize};

// 账号状态
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "active"),
            AccountStatus::Inactive => write!(f, "inactive"),
        }
    }
}

// 教职工实体（磁盘记录的完整形态，含密码哈希）
//
// 对外响应一律使用 responses::FacultyInfo，密码哈希不会离开存储层和认证路径。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    pub department: String,
    /// 职称（signup 请求中的 designation）
    pub role: String,
    pub phone: String,
    pub assigned_subjects: Vec<String>,
    pub status: AccountStatus,
    pub registration_date: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Faculty {
    /// 是否被授权教授指定科目
    pub fn is_assigned(&self, subject_id: &str) -> bool {
        self.assigned_subjects.iter().any(|s| s == subject_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_faculty() -> Faculty {
        Faculty {
            id: "FAC1700000000123".to_string(),
            name: "Dr. Khan".to_string(),
            email: "khan@university.edu".to_string(),
            password_hash: "$argon2id$...".to_string(),
            department: "CS".to_string(),
            role: "Assistant Professor".to_string(),
            phone: "03001234567".to_string(),
            assigned_subjects: vec!["CS101".to_string(), "CS202".to_string()],
            status: AccountStatus::Active,
            registration_date: chrono::Utc::now(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_is_assigned() {
        let faculty = sample_faculty();
        assert!(faculty.is_assigned("CS101"));
        assert!(!faculty.is_assigned("EE101"));
    }

    #[test]
    fn test_password_hash_serialized_as_password() {
        let json = serde_json::to_value(sample_faculty()).expect("serialize");
        assert!(json.get("password").is_some());
        assert!(json.get("password_hash").is_none());
    }
}
