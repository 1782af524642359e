pub mod change_password;
pub mod faculty_login;
pub mod signup;
pub mod student_login;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    // 教职工登录
    pub async fn faculty_login(
        &self,
        login_request: crate::models::auth::FacultyLoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        faculty_login::handle_faculty_login(self, login_request, request).await
    }

    // 教职工注册
    pub async fn faculty_signup(
        &self,
        signup_request: crate::models::auth::FacultySignupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        signup::handle_faculty_signup(self, signup_request, request).await
    }

    // 学生登录
    pub async fn student_login(
        &self,
        login_request: crate::models::auth::StudentLoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student_login::handle_student_login(self, login_request, request).await
    }

    // 学生修改密码
    pub async fn change_student_password(
        &self,
        change_request: crate::models::auth::ChangePasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        change_password::handle_change_password(self, change_request, request).await
    }
}
