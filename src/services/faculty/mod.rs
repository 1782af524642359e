pub mod delete;
pub mod get;
pub mod list;
pub mod subjects;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::faculty::requests::UpdateFacultyRequest;
use crate::storage::Storage;

pub struct FacultyService {
    storage: Option<Arc<dyn Storage>>,
}

impl FacultyService {
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

    // 获取教职工列表（安全视图）
    pub async fn list_faculty(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_faculty(self, request).await
    }

    // 根据邮箱获取教职工
    pub async fn get_faculty(
        &self,
        email: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_faculty(self, email, request).await
    }

    // 获取教职工的授课科目目录
    pub async fn get_faculty_subjects(
        &self,
        email: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::get_faculty_subjects(self, email, request).await
    }

    // 更新教职工资料与授课科目
    pub async fn update_faculty(
        &self,
        email: String,
        update_data: UpdateFacultyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_faculty(self, email, update_data, request).await
    }

    // 删除教职工
    pub async fn delete_faculty(
        &self,
        email: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_faculty(self, email, request).await
    }
}
