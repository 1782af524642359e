use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AuthService;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::StudentLoginRequest,
    auth::responses::StudentLoginResponse,
};
use crate::utils::password::verify_password;

pub async fn handle_student_login(
    service: &AuthService,
    login_request: StudentLoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if login_request.roll_number.trim().is_empty() || login_request.password.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Roll number and password required",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_student_by_roll(&login_request.roll_number).await {
        Ok(Some(student)) => {
            if verify_password(&login_request.password, &student.password_hash) {
                tracing::info!("Student {} logged in successfully", student.roll_number);
                Ok(HttpResponse::Ok().json(ApiResponse::success(
                    StudentLoginResponse {
                        student: student.into(),
                    },
                    "Login successful",
                )))
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Invalid roll number or password",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Invalid roll number or password",
        ))),
        Err(e) => {
            error!("Student login failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed",
                )),
            )
        }
    }
}
