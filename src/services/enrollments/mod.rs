pub mod create;
pub mod get;
pub mod list;
pub mod update_academics;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::{CreateEnrollmentRequest, UpdateAcademicsRequest};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建选课记录
    pub async fn create_enrollment(
        &self,
        enrollment_data: CreateEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_enrollment(self, enrollment_data, request).await
    }

    // 获取单条选课记录详情
    pub async fn get_enrollment(
        &self,
        student_roll: String,
        subject_id: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_enrollment(self, student_roll, subject_id, request).await
    }

    // 更新学业数据分区
    pub async fn update_academics(
        &self,
        update_data: UpdateAcademicsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update_academics::update_academics(self, update_data, request).await
    }

    // 列出某教职工创建的选课记录（附学生与科目信息）
    pub async fn list_faculty_enrollments(
        &self,
        faculty_email: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_faculty_enrollments(self, faculty_email, request).await
    }

    // 列出某学生的选课记录（附科目信息）
    pub async fn list_student_enrollments(
        &self,
        roll_number: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_student_enrollments(self, roll_number, request).await
    }
}
