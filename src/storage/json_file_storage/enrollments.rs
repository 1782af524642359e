use super::JsonFileStorage;
use super::collection::{StoredRecord, key_eq};
use crate::errors::{PortalError, Result};
use crate::models::enrollments::entities::{AcademicSection, Enrollment};

impl StoredRecord for Enrollment {
    // 组合键：(student_roll, subject_id)
    fn key(&self) -> String {
        format!("{}::{}", self.student_roll, self.subject_id)
    }
}

impl JsonFileStorage {
    /// 创建选课记录（组合键唯一）
    pub async fn create_enrollment_impl(&self, enrollment: Enrollment) -> Result<Enrollment> {
        match self.enrollments.insert(enrollment).await {
            Ok(created) => Ok(created),
            Err(PortalError::Conflict(_)) => Err(PortalError::conflict(
                "Student already enrolled in this subject",
            )),
            Err(e) => Err(e),
        }
    }

    /// 获取指定学生在指定科目的选课记录
    pub async fn get_enrollment_impl(
        &self,
        student_roll: &str,
        subject_id: &str,
    ) -> Result<Option<Enrollment>> {
        self.enrollments
            .find_by_key(&format!("{student_roll}::{subject_id}"))
            .await
    }

    /// 列出某教职工创建的全部选课记录
    pub async fn list_enrollments_by_faculty_impl(
        &self,
        faculty_id: &str,
    ) -> Result<Vec<Enrollment>> {
        let enrollments = self.enrollments.load_all().await?;
        Ok(enrollments
            .into_iter()
            .filter(|e| e.faculty_id == faculty_id)
            .collect())
    }

    /// 列出某学生的全部选课记录
    pub async fn list_enrollments_by_student_impl(
        &self,
        student_roll: &str,
    ) -> Result<Vec<Enrollment>> {
        let enrollments = self.enrollments.load_all().await?;
        Ok(enrollments
            .into_iter()
            .filter(|e| key_eq(&e.student_roll, student_roll))
            .collect())
    }

    /// 合并一个学业数据分区并重算派生字段
    ///
    /// 只有创建该选课记录的教职工才能命中记录（faculty_id 必须匹配）。
    pub async fn update_enrollment_section_impl(
        &self,
        student_roll: &str,
        subject_id: &str,
        faculty_id: &str,
        section: AcademicSection,
        fields: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Option<Enrollment>> {
        let roll = student_roll.to_string();
        let subject = subject_id.to_string();
        let faculty = faculty_id.to_string();
        self.enrollments
            .mutate(move |records| {
                let found = records.iter_mut().find(|e| {
                    key_eq(&e.student_roll, &roll)
                        && key_eq(&e.subject_id, &subject)
                        && e.faculty_id == faculty
                });
                match found {
                    Some(enrollment) => {
                        enrollment.apply_section_update(section, &fields);
                        Ok(Some(enrollment.clone()))
                    }
                    None => Ok(None),
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn temp_storage(tag: &str) -> (JsonFileStorage, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "acadportal-enrollments-{tag}-{}",
            uuid::Uuid::new_v4().simple()
        ));
        let storage = JsonFileStorage::new_with_dir(&dir).await.expect("storage");
        (storage, dir)
    }

    fn enrollment(roll: &str, subject: &str, faculty: &str) -> Enrollment {
        Enrollment::new(roll.to_string(), subject.to_string(), faculty.to_string())
    }

    #[tokio::test]
    async fn test_enrollment_creation_is_idempotent_rejecting() {
        let (storage, dir) = temp_storage("idem").await;
        storage
            .create_enrollment_impl(enrollment("FA21-001", "CS101", "FAC1"))
            .await
            .expect("first enrollment");

        let err = storage
            .create_enrollment_impl(enrollment("FA21-001", "CS101", "FAC1"))
            .await
            .expect_err("second enrollment must conflict");
        assert_eq!(err.code(), "E005");

        // 集合中只有一条匹配记录
        let all = storage.enrollments.load_all().await.expect("load");
        assert_eq!(all.len(), 1);
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_same_student_different_subject_is_allowed() {
        let (storage, dir) = temp_storage("pair").await;
        storage
            .create_enrollment_impl(enrollment("FA21-001", "CS101", "FAC1"))
            .await
            .expect("cs101");
        storage
            .create_enrollment_impl(enrollment("FA21-001", "CS102", "FAC1"))
            .await
            .expect("cs102");
        storage
            .create_enrollment_impl(enrollment("FA21-002", "CS101", "FAC1"))
            .await
            .expect("other student");
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_section_update_recomputes_derived_fields() {
        let (storage, dir) = temp_storage("derive").await;
        storage
            .create_enrollment_impl(enrollment("FA21-001", "CS101", "FAC1"))
            .await
            .expect("enroll");

        let updated = storage
            .update_enrollment_section_impl(
                "FA21-001",
                "CS101",
                "FAC1",
                AcademicSection::Attendance,
                json!({"total_classes": 10, "attended_classes": 7, "percentage": 1})
                    .as_object()
                    .unwrap()
                    .clone(),
            )
            .await
            .expect("update")
            .expect("enrollment exists");
        assert_eq!(updated.attendance.percentage, 70);
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_section_update_requires_owning_faculty() {
        let (storage, dir) = temp_storage("owner").await;
        storage
            .create_enrollment_impl(enrollment("FA21-001", "CS101", "FAC1"))
            .await
            .expect("enroll");

        let result = storage
            .update_enrollment_section_impl(
                "FA21-001",
                "CS101",
                "FAC2",
                AcademicSection::Marks,
                serde_json::Map::new(),
            )
            .await
            .expect("update call");
        assert!(result.is_none());
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_get_by_composite_key_any_case() {
        let (storage, dir) = temp_storage("get").await;
        storage
            .create_enrollment_impl(enrollment("FA21-001", "CS101", "FAC1"))
            .await
            .expect("enroll");

        let found = storage
            .get_enrollment_impl("fa21-001", "cs101")
            .await
            .expect("lookup");
        assert!(found.is_some());
        assert_eq!(found.unwrap().faculty_id, "FAC1");

        let missing = storage
            .get_enrollment_impl("FA21-001", "CS999")
            .await
            .expect("lookup missing");
        assert!(missing.is_none());
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_list_by_faculty_and_student() {
        let (storage, dir) = temp_storage("list").await;
        storage
            .create_enrollment_impl(enrollment("FA21-001", "CS101", "FAC1"))
            .await
            .expect("e1");
        storage
            .create_enrollment_impl(enrollment("FA21-002", "CS101", "FAC2"))
            .await
            .expect("e2");

        let by_faculty = storage
            .list_enrollments_by_faculty_impl("FAC1")
            .await
            .expect("by faculty");
        assert_eq!(by_faculty.len(), 1);
        assert_eq!(by_faculty[0].student_roll, "FA21-001");

        let by_student = storage
            .list_enrollments_by_student_impl("fa21-002")
            .await
            .expect("by student");
        assert_eq!(by_student.len(), 1);
        assert_eq!(by_student[0].faculty_id, "FAC2");
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
}
