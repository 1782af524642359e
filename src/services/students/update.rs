use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::errors::PortalError;
use crate::models::{ApiResponse, ErrorCode, students::requests::UpdateStudentRequest};
use crate::utils::validate::{
    collect_missing_fields, validate_email, validate_phone, validate_semester,
};

pub async fn update_student(
    service: &StudentService,
    student_id: String,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 1. 校验必填字段
    if let Some(msg) = collect_missing_fields(&[
        ("name", &update_data.name),
        ("rollNumber", &update_data.roll_number),
        ("email", &update_data.email),
        ("phone", &update_data.phone),
        ("department", &update_data.department),
    ]) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentInvalidField, msg)));
    }

    // 2. 校验格式
    if let Err(msg) = validate_email(&update_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentInvalidField, msg)));
    }
    if let Err(msg) = validate_phone(&update_data.phone) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentInvalidField, msg)));
    }
    if let Err(msg) = validate_semester(update_data.semester) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentInvalidField, msg)));
    }

    // 3. 持久化（对其他学生的学号/邮箱冲突在存储层强制）
    let storage = service.get_storage(request);
    match storage.update_student(&student_id, update_data).await {
        Ok(Some(_)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Student updated successfully!"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(PortalError::Conflict(msg)) => {
            let code = if msg.contains("Roll number") {
                ErrorCode::StudentRollConflict
            } else {
                ErrorCode::StudentEmailConflict
            };
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(code, msg)))
        }
        Err(e) => {
            error!("Student update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Student update failed",
                )),
            )
        }
    }
}
