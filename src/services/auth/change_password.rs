use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AuthService;
use crate::models::{ApiResponse, ErrorCode, auth::ChangePasswordRequest};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::validate_password_length;

pub async fn handle_change_password(
    service: &AuthService,
    change_request: ChangePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if change_request.roll_number.trim().is_empty()
        || change_request.current_password.is_empty()
        || change_request.new_password.is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Roll number, current password, and new password required",
        )));
    }

    if validate_password_length(&change_request.new_password).is_err() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "New password must be at least 6 characters long",
        )));
    }

    let storage = service.get_storage(request);

    // 1. 定位学生
    let student = match storage.get_student_by_roll(&change_request.roll_number).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Change password lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Password change failed",
                )),
            );
        }
    };

    // 2. 验证当前密码
    if !verify_password(&change_request.current_password, &student.password_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Current password is incorrect",
        )));
    }

    // 3. 重新哈希并持久化
    let new_hash = match hash_password(&change_request.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Password change failed",
                )),
            );
        }
    };

    match storage
        .update_student_password(&change_request.roll_number, new_hash)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Password changed successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Password update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Password change failed",
                )),
            )
        }
    }
}
