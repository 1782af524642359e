//! JSON 平面文件存储实现
//!
//! 每个集合一个 JSON 数组文件（faculty / students / subjects / enrollments），
//! 根目录由配置项 storage.data_dir 指定。

mod collection;
mod enrollments;
mod faculty;
mod students;
mod subjects;

pub use collection::{JsonCollection, StoredRecord, key_eq};

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use crate::models::{
    enrollments::entities::Enrollment, faculty::entities::Faculty, students::entities::Student,
    subjects::entities::Subject,
};

/// JSON 文件存储实例
pub struct JsonFileStorage {
    pub(crate) faculty: JsonCollection<Faculty>,
    pub(crate) students: JsonCollection<Student>,
    pub(crate) subjects: JsonCollection<Subject>,
    pub(crate) enrollments: JsonCollection<Enrollment>,
}

impl JsonFileStorage {
    /// 创建新的 JSON 文件存储实例（数据目录来自全局配置）
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let data_dir = PathBuf::from(&config.storage.data_dir);
        let storage = Self::new_with_dir(&data_dir).await?;
        info!(
            "JSON file storage initialized, data directory: {}",
            data_dir.display()
        );
        Ok(storage)
    }

    /// 在指定目录创建存储实例（测试用入口）
    pub async fn new_with_dir(data_dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir).await.map_err(|e| {
            PortalError::persistence(format!(
                "failed to create data directory {}: {e}",
                data_dir.display()
            ))
        })?;

        Ok(Self {
            faculty: JsonCollection::new("faculty", data_dir),
            students: JsonCollection::new("students", data_dir),
            subjects: JsonCollection::new("subjects", data_dir),
            enrollments: JsonCollection::new("enrollments", data_dir),
        })
    }
}

// Storage trait 实现
use crate::models::enrollments::entities::AcademicSection;
use crate::models::faculty::requests::UpdateFacultyRequest;
use crate::models::students::requests::UpdateStudentRequest;
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for JsonFileStorage {
    // 教职工模块
    async fn create_faculty(&self, faculty: Faculty) -> Result<Faculty> {
        self.create_faculty_impl(faculty).await
    }

    async fn get_faculty_by_email(&self, email: &str) -> Result<Option<Faculty>> {
        self.get_faculty_by_email_impl(email).await
    }

    async fn list_faculty(&self) -> Result<Vec<Faculty>> {
        self.list_faculty_impl().await
    }

    async fn update_faculty(
        &self,
        email: &str,
        update: UpdateFacultyRequest,
    ) -> Result<Option<Faculty>> {
        self.update_faculty_impl(email, update).await
    }

    async fn delete_faculty(&self, email: &str) -> Result<Option<Faculty>> {
        self.delete_faculty_impl(email).await
    }

    // 学生模块
    async fn create_student(&self, student: Student) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_roll(&self, roll_number: &str) -> Result<Option<Student>> {
        self.get_student_by_roll_impl(roll_number).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn update_student(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: &str) -> Result<Option<Student>> {
        self.delete_student_impl(id).await
    }

    async fn update_student_password(
        &self,
        roll_number: &str,
        password_hash: String,
    ) -> Result<bool> {
        self.update_student_password_impl(roll_number, password_hash)
            .await
    }

    // 科目模块
    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn get_subject_by_id(&self, id: &str) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn seed_subjects(&self, subjects: Vec<Subject>) -> Result<bool> {
        self.seed_subjects_impl(subjects).await
    }

    // 选课模块
    async fn create_enrollment(&self, enrollment: Enrollment) -> Result<Enrollment> {
        self.create_enrollment_impl(enrollment).await
    }

    async fn get_enrollment(
        &self,
        student_roll: &str,
        subject_id: &str,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(student_roll, subject_id).await
    }

    async fn list_enrollments_by_faculty(&self, faculty_id: &str) -> Result<Vec<Enrollment>> {
        self.list_enrollments_by_faculty_impl(faculty_id).await
    }

    async fn list_enrollments_by_student(&self, student_roll: &str) -> Result<Vec<Enrollment>> {
        self.list_enrollments_by_student_impl(student_roll).await
    }

    async fn update_enrollment_section(
        &self,
        student_roll: &str,
        subject_id: &str,
        faculty_id: &str,
        section: AcademicSection,
        fields: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_section_impl(student_roll, subject_id, faculty_id, section, fields)
            .await
    }
}
