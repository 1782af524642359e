use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::responses::StudentInfo};

pub async fn get_student(
    service: &StudentService,
    roll_number: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if roll_number.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Roll number required",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_student_by_roll(&roll_number).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentInfo::from(student),
            "Student loaded successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Failed to load student {}: {}", roll_number, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load student",
                )),
            )
        }
    }
}
