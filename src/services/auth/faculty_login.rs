use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AuthService;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::FacultyLoginRequest,
    auth::responses::FacultyLoginResponse,
};
use crate::utils::password::verify_password;

pub async fn handle_faculty_login(
    service: &AuthService,
    login_request: FacultyLoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if login_request.email.trim().is_empty() || login_request.password.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Email and password required",
        )));
    }

    let storage = service.get_storage(request);

    // 1. 根据邮箱获取教职工
    match storage.get_faculty_by_email(&login_request.email).await {
        Ok(Some(faculty)) => {
            // 2. 验证密码；标识符未知与密码错误对外不作区分
            if verify_password(&login_request.password, &faculty.password_hash) {
                tracing::info!("Faculty {} logged in successfully", faculty.email);
                Ok(HttpResponse::Ok().json(ApiResponse::success(
                    FacultyLoginResponse {
                        faculty: faculty.into(),
                    },
                    "Login successful",
                )))
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Invalid email or password",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Invalid email or password",
        ))),
        Err(e) => {
            error!("Faculty login failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed",
                )),
            )
        }
    }
}
