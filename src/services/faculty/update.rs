use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode, faculty::requests::UpdateFacultyRequest};
use crate::utils::validate::{collect_missing_fields, validate_phone};

pub async fn update_faculty(
    service: &FacultyService,
    email: String,
    update_data: UpdateFacultyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if email.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Email required",
        )));
    }

    // 1. 校验必填字段
    if let Some(msg) = collect_missing_fields(&[
        ("name", &update_data.name),
        ("department", &update_data.department),
        ("designation", &update_data.designation),
        ("phone", &update_data.phone),
    ]) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyInvalidField, msg)));
    }

    // 2. 校验格式
    if let Err(msg) = validate_phone(&update_data.phone) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyInvalidField, msg)));
    }

    // 3. 持久化（邮箱是键，不参与更新）
    let storage = service.get_storage(request);
    match storage.update_faculty(&email, update_data).await {
        Ok(Some(_)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Faculty updated successfully!"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty not found",
        ))),
        Err(e) => {
            error!("Faculty update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Faculty update failed",
                )),
            )
        }
    }
}
