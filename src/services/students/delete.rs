use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::responses::DeletedStudent};

pub async fn delete_student(
    service: &StudentService,
    student_id: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if student_id.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Student ID is required",
        )));
    }

    let storage = service.get_storage(request);

    match storage.delete_student(&student_id).await {
        Ok(Some(deleted)) => {
            tracing::info!("Student deleted: {}", deleted.roll_number);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                DeletedStudent {
                    name: deleted.name,
                    roll_number: deleted.roll_number,
                },
                "Student deleted successfully!",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Student deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Student deletion failed",
                )),
            )
        }
    }
}
