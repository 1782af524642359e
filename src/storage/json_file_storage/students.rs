use super::JsonFileStorage;
use super::collection::{StoredRecord, key_eq};
use crate::errors::{PortalError, Result};
use crate::models::students::{entities::Student, requests::UpdateStudentRequest};

impl StoredRecord for Student {
    fn key(&self) -> String {
        self.roll_number.clone()
    }
}

impl JsonFileStorage {
    /// 创建学生
    ///
    /// 学号与邮箱在创建和更新两条路径上对称地强制唯一（忽略大小写）。
    pub async fn create_student_impl(&self, student: Student) -> Result<Student> {
        self.students
            .mutate(move |records| {
                if records
                    .iter()
                    .any(|s| key_eq(&s.roll_number, &student.roll_number))
                {
                    return Err(PortalError::conflict(
                        "A student with this roll number already exists",
                    ));
                }
                if records.iter().any(|s| key_eq(&s.email, &student.email)) {
                    return Err(PortalError::conflict(
                        "A student with this email already exists",
                    ));
                }
                records.push(student.clone());
                Ok(student)
            })
            .await
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: &str) -> Result<Option<Student>> {
        let students = self.students.load_all().await?;
        Ok(students.into_iter().find(|s| s.id == id))
    }

    /// 通过学号获取学生
    pub async fn get_student_by_roll_impl(&self, roll_number: &str) -> Result<Option<Student>> {
        self.students.find_by_key(roll_number).await
    }

    /// 列出全部学生（按创建时间倒序）
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let mut students = self.students.load_all().await?;
        students.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(students)
    }

    /// 按 ID 更新学生可编辑字段
    ///
    /// 与其他学生的学号或邮箱冲突时返回 Conflict，记录保持原状。
    pub async fn update_student_impl(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let id = id.to_string();
        self.students
            .mutate(move |records| {
                let Some(index) = records.iter().position(|s| s.id == id) else {
                    return Ok(None);
                };

                for other in records.iter().filter(|s| s.id != id) {
                    if key_eq(&other.roll_number, &update.roll_number) {
                        return Err(PortalError::conflict(
                            "Roll number already exists for another student",
                        ));
                    }
                    if key_eq(&other.email, &update.email) {
                        return Err(PortalError::conflict(
                            "Email already exists for another student",
                        ));
                    }
                }

                let student = &mut records[index];
                student.name = update.name.trim().to_string();
                student.roll_number = update.roll_number.trim().to_string();
                student.email = update.email.trim().to_string();
                student.phone = update.phone.trim().to_string();
                student.department = update.department.trim().to_string();
                student.semester = update.semester;
                student.updated_at = chrono::Utc::now();
                Ok(Some(student.clone()))
            })
            .await
    }

    /// 按 ID 删除学生，返回被删除的记录
    pub async fn delete_student_impl(&self, id: &str) -> Result<Option<Student>> {
        let id = id.to_string();
        self.students
            .mutate(move |records| match records.iter().position(|s| s.id == id) {
                Some(index) => Ok(Some(records.remove(index))),
                None => Ok(None),
            })
            .await
    }

    /// 更新学生密码哈希
    pub async fn update_student_password_impl(
        &self,
        roll_number: &str,
        password_hash: String,
    ) -> Result<bool> {
        let roll = roll_number.to_string();
        self.students
            .mutate(move |records| {
                match records.iter_mut().find(|s| key_eq(&s.roll_number, &roll)) {
                    Some(student) => {
                        student.password_hash = password_hash;
                        student.updated_at = chrono::Utc::now();
                        Ok(true)
                    }
                    None => Ok(false),
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::faculty::entities::AccountStatus;

    async fn temp_storage(tag: &str) -> (JsonFileStorage, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "acadportal-students-{tag}-{}",
            uuid::Uuid::new_v4().simple()
        ));
        let storage = JsonFileStorage::new_with_dir(&dir).await.expect("storage");
        (storage, dir)
    }

    fn student(id: &str, roll: &str, email: &str) -> Student {
        Student {
            id: id.to_string(),
            name: "Ayesha".to_string(),
            roll_number: roll.to_string(),
            email: email.to_string(),
            phone: "03001234567".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            department: "CS".to_string(),
            faculty_email: "khan@uni.edu".to_string(),
            semester: 1,
            cgpa: 0.0,
            attendance: 0,
            status: AccountStatus::Active,
            subjects: vec![],
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn update_request(roll: &str, email: &str) -> UpdateStudentRequest {
        UpdateStudentRequest {
            name: "Ayesha".to_string(),
            roll_number: roll.to_string(),
            email: email.to_string(),
            phone: "03001234567".to_string(),
            department: "CS".to_string(),
            semester: 2,
        }
    }

    #[tokio::test]
    async fn test_create_enforces_roll_and_email_uniqueness() {
        let (storage, dir) = temp_storage("create").await;
        storage
            .create_student_impl(student("s1", "FA21-001", "a@uni.edu"))
            .await
            .expect("first");

        let roll_err = storage
            .create_student_impl(student("s2", "fa21-001", "b@uni.edu"))
            .await
            .expect_err("duplicate roll");
        assert!(roll_err.message().contains("roll number"));

        let email_err = storage
            .create_student_impl(student("s3", "FA21-002", "A@UNI.EDU"))
            .await
            .expect_err("duplicate email");
        assert!(email_err.message().contains("email"));
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_update_collision_leaves_both_records_unchanged() {
        let (storage, dir) = temp_storage("collision").await;
        storage
            .create_student_impl(student("s1", "FA21-001", "a@uni.edu"))
            .await
            .expect("s1");
        storage
            .create_student_impl(student("s2", "FA21-002", "b@uni.edu"))
            .await
            .expect("s2");

        // 把 s1 的学号改成 s2 的学号，必须冲突
        let err = storage
            .update_student_impl("s1", update_request("FA21-002", "a@uni.edu"))
            .await
            .expect_err("collision");
        assert_eq!(err.code(), "E005");

        let s1 = storage
            .get_student_by_id_impl("s1")
            .await
            .expect("get")
            .expect("s1 exists");
        let s2 = storage
            .get_student_by_id_impl("s2")
            .await
            .expect("get")
            .expect("s2 exists");
        assert_eq!(s1.roll_number, "FA21-001");
        assert_eq!(s2.roll_number, "FA21-002");
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_update_own_roll_is_not_a_collision() {
        let (storage, dir) = temp_storage("own").await;
        storage
            .create_student_impl(student("s1", "FA21-001", "a@uni.edu"))
            .await
            .expect("s1");

        let updated = storage
            .update_student_impl("s1", update_request("FA21-001", "a@uni.edu"))
            .await
            .expect("update")
            .expect("found");
        assert_eq!(updated.semester, 2);
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_delete_missing_student_leaves_collection_unchanged() {
        let (storage, dir) = temp_storage("delete").await;
        storage
            .create_student_impl(student("s1", "FA21-001", "a@uni.edu"))
            .await
            .expect("s1");

        let deleted = storage.delete_student_impl("ghost").await.expect("delete");
        assert!(deleted.is_none());

        let students = storage.list_students_impl().await.expect("list");
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, "s1");
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let (storage, dir) = temp_storage("sort").await;
        let mut older = student("s1", "FA21-001", "a@uni.edu");
        older.created_at = chrono::Utc::now() - chrono::Duration::days(1);
        storage.create_student_impl(older).await.expect("older");
        storage
            .create_student_impl(student("s2", "FA21-002", "b@uni.edu"))
            .await
            .expect("newer");

        let students = storage.list_students_impl().await.expect("list");
        assert_eq!(students[0].id, "s2");
        assert_eq!(students[1].id, "s1");
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_password_update_by_roll() {
        let (storage, dir) = temp_storage("pwd").await;
        storage
            .create_student_impl(student("s1", "FA21-001", "a@uni.edu"))
            .await
            .expect("s1");

        let changed = storage
            .update_student_password_impl("fa21-001", "$argon2id$new".to_string())
            .await
            .expect("change");
        assert!(changed);

        let s1 = storage
            .get_student_by_roll_impl("FA21-001")
            .await
            .expect("get")
            .expect("exists");
        assert_eq!(s1.password_hash, "$argon2id$new");
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
}
