use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode, faculty::responses::DeletedFaculty};

pub async fn delete_faculty(
    service: &FacultyService,
    email: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if email.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Email required",
        )));
    }

    let storage = service.get_storage(request);

    match storage.delete_faculty(&email).await {
        Ok(Some(deleted)) => {
            tracing::info!("Faculty deleted: {}", deleted.email);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                DeletedFaculty {
                    name: deleted.name,
                    email: deleted.email,
                },
                "Faculty deleted successfully!",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty not found",
        ))),
        Err(e) => {
            error!("Faculty deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Faculty deletion failed",
                )),
            )
        }
    }
}
