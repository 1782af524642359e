use std::sync::Arc;

use crate::models::{
    enrollments::entities::{AcademicSection, Enrollment},
    faculty::{entities::Faculty, requests::UpdateFacultyRequest},
    students::{entities::Student, requests::UpdateStudentRequest},
    subjects::entities::Subject,
};

use crate::errors::Result;

pub mod json_file_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教职工管理方法
    // 创建教职工（邮箱唯一，忽略大小写）
    async fn create_faculty(&self, faculty: Faculty) -> Result<Faculty>;
    // 通过邮箱获取教职工
    async fn get_faculty_by_email(&self, email: &str) -> Result<Option<Faculty>>;
    // 列出全部教职工
    async fn list_faculty(&self) -> Result<Vec<Faculty>>;
    // 按邮箱更新教职工资料与授课科目（邮箱不可变）
    async fn update_faculty(
        &self,
        email: &str,
        update: UpdateFacultyRequest,
    ) -> Result<Option<Faculty>>;
    // 按邮箱删除教职工，返回被删除的记录
    async fn delete_faculty(&self, email: &str) -> Result<Option<Faculty>>;

    /// 学生管理方法
    // 创建学生（学号与邮箱均唯一，忽略大小写）
    async fn create_student(&self, student: Student) -> Result<Student>;
    // 通过 ID 获取学生
    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>>;
    // 通过学号获取学生
    async fn get_student_by_roll(&self, roll_number: &str) -> Result<Option<Student>>;
    // 列出全部学生（按创建时间倒序）
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 按 ID 更新学生可编辑字段
    async fn update_student(&self, id: &str, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 按 ID 删除学生，返回被删除的记录
    async fn delete_student(&self, id: &str) -> Result<Option<Student>>;
    // 更新学生密码哈希
    async fn update_student_password(&self, roll_number: &str, password_hash: String)
    -> Result<bool>;

    /// 科目管理方法
    // 列出科目目录
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    // 通过 ID 获取科目
    async fn get_subject_by_id(&self, id: &str) -> Result<Option<Subject>>;
    // 首次运行时写入预置科目目录（文件已存在则跳过）
    async fn seed_subjects(&self, subjects: Vec<Subject>) -> Result<bool>;

    /// 选课管理方法
    // 创建选课记录（(student_roll, subject_id) 组合唯一）
    async fn create_enrollment(&self, enrollment: Enrollment) -> Result<Enrollment>;
    // 获取指定学生在指定科目的选课记录
    async fn get_enrollment(
        &self,
        student_roll: &str,
        subject_id: &str,
    ) -> Result<Option<Enrollment>>;
    // 列出某教职工创建的全部选课记录
    async fn list_enrollments_by_faculty(&self, faculty_id: &str) -> Result<Vec<Enrollment>>;
    // 列出某学生的全部选课记录
    async fn list_enrollments_by_student(&self, student_roll: &str) -> Result<Vec<Enrollment>>;
    // 合并一个学业数据分区并重算派生字段
    async fn update_enrollment_section(
        &self,
        student_roll: &str,
        subject_id: &str,
        faculty_id: &str,
        section: AcademicSection,
        fields: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Option<Enrollment>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = json_file_storage::JsonFileStorage::new_async().await?;
    Ok(Arc::new(storage))
}
