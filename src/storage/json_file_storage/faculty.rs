use super::JsonFileStorage;
use super::collection::{StoredRecord, key_eq};
use crate::errors::{PortalError, Result};
use crate::models::faculty::{entities::Faculty, requests::UpdateFacultyRequest};

impl StoredRecord for Faculty {
    fn key(&self) -> String {
        self.email.clone()
    }
}

impl JsonFileStorage {
    /// 创建教职工（邮箱唯一，忽略大小写）
    pub async fn create_faculty_impl(&self, faculty: Faculty) -> Result<Faculty> {
        match self.faculty.insert(faculty).await {
            Ok(created) => Ok(created),
            Err(PortalError::Conflict(_)) => Err(PortalError::conflict(
                "Faculty with this email already exists",
            )),
            Err(e) => Err(e),
        }
    }

    /// 通过邮箱获取教职工
    pub async fn get_faculty_by_email_impl(&self, email: &str) -> Result<Option<Faculty>> {
        self.faculty.find_by_key(email).await
    }

    /// 列出全部教职工
    pub async fn list_faculty_impl(&self) -> Result<Vec<Faculty>> {
        self.faculty.load_all().await
    }

    /// 按邮箱更新教职工资料与授课科目
    ///
    /// 邮箱是集合键，不参与更新；记录不存在返回 Ok(None)。
    pub async fn update_faculty_impl(
        &self,
        email: &str,
        update: UpdateFacultyRequest,
    ) -> Result<Option<Faculty>> {
        let email = email.to_string();
        self.faculty
            .mutate(move |records| {
                match records.iter_mut().find(|f| key_eq(&f.email, &email)) {
                    Some(faculty) => {
                        faculty.name = update.name.trim().to_string();
                        faculty.department = update.department.trim().to_string();
                        faculty.role = update.designation.trim().to_string();
                        faculty.phone = update.phone.trim().to_string();
                        faculty.assigned_subjects = update.assigned_subjects;
                        Ok(Some(faculty.clone()))
                    }
                    None => Ok(None),
                }
            })
            .await
    }

    /// 按邮箱删除教职工，返回被删除的记录
    pub async fn delete_faculty_impl(&self, email: &str) -> Result<Option<Faculty>> {
        let email = email.to_string();
        self.faculty
            .mutate(
                move |records| match records.iter().position(|f| key_eq(&f.email, &email)) {
                    Some(index) => Ok(Some(records.remove(index))),
                    None => Ok(None),
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::faculty::entities::AccountStatus;

    async fn temp_storage(tag: &str) -> (JsonFileStorage, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "acadportal-faculty-{tag}-{}",
            uuid::Uuid::new_v4().simple()
        ));
        let storage = JsonFileStorage::new_with_dir(&dir).await.expect("storage");
        (storage, dir)
    }

    fn faculty(email: &str) -> Faculty {
        Faculty {
            id: format!("FAC-{email}"),
            name: "Dr. Khan".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$hash".to_string(),
            department: "CS".to_string(),
            role: "Professor".to_string(),
            phone: "03001234567".to_string(),
            assigned_subjects: vec!["CS101".to_string()],
            status: AccountStatus::Active,
            registration_date: chrono::Utc::now(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_any_case_conflicts() {
        let (storage, dir) = temp_storage("dup").await;
        storage
            .create_faculty_impl(faculty("khan@uni.edu"))
            .await
            .expect("first signup");

        let err = storage
            .create_faculty_impl(faculty("KHAN@UNI.EDU"))
            .await
            .expect_err("duplicate email");
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("email already exists"));

        // 不同邮箱总是成功
        storage
            .create_faculty_impl(faculty("aslam@uni.edu"))
            .await
            .expect("different email");
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    fn update_request(designation: &str, subjects: Vec<&str>) -> UpdateFacultyRequest {
        UpdateFacultyRequest {
            name: "Dr. Khan".to_string(),
            department: "CS".to_string(),
            designation: designation.to_string(),
            phone: "03001234567".to_string(),
            assigned_subjects: subjects.into_iter().map(String::from).collect(),
        }
    }

    #[tokio::test]
    async fn test_update_keeps_email_and_replaces_assignments() {
        let (storage, dir) = temp_storage("update").await;
        storage
            .create_faculty_impl(faculty("khan@uni.edu"))
            .await
            .expect("signup");

        let updated = storage
            .update_faculty_impl("KHAN@uni.edu", update_request("Professor", vec!["CS202"]))
            .await
            .expect("update")
            .expect("faculty exists");
        assert_eq!(updated.email, "khan@uni.edu");
        assert_eq!(updated.role, "Professor");
        assert_eq!(updated.assigned_subjects, vec!["CS202".to_string()]);
        // 密码哈希不受资料更新影响
        assert_eq!(updated.password_hash, "$argon2id$hash");
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_update_missing_faculty_is_none() {
        let (storage, dir) = temp_storage("update-missing").await;
        let result = storage
            .update_faculty_impl("ghost@uni.edu", update_request("Lecturer", vec![]))
            .await
            .expect("update call");
        assert!(result.is_none());
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_delete_by_email_any_case() {
        let (storage, dir) = temp_storage("delete").await;
        storage
            .create_faculty_impl(faculty("khan@uni.edu"))
            .await
            .expect("signup");
        storage
            .create_faculty_impl(faculty("aslam@uni.edu"))
            .await
            .expect("signup 2");

        let deleted = storage
            .delete_faculty_impl("KHAN@UNI.EDU")
            .await
            .expect("delete")
            .expect("deleted record");
        assert_eq!(deleted.email, "khan@uni.edu");

        let remaining = storage.list_faculty_impl().await.expect("list");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].email, "aslam@uni.edu");

        // 再删一次不命中
        let missing = storage
            .delete_faculty_impl("khan@uni.edu")
            .await
            .expect("delete again");
        assert!(missing.is_none());
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let (storage, dir) = temp_storage("lookup").await;
        storage
            .create_faculty_impl(faculty("khan@uni.edu"))
            .await
            .expect("signup");

        let found = storage
            .get_faculty_by_email_impl("Khan@Uni.Edu")
            .await
            .expect("lookup");
        assert!(found.is_some());
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
}
