use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode, faculty::responses::FacultyInfo};

pub async fn get_faculty(
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

    match storage.get_faculty_by_email(&email).await {
        Ok(Some(faculty)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FacultyInfo::from(faculty),
            "Faculty loaded successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty not found",
        ))),
        Err(e) => {
            error!("Failed to load faculty {}: {}", email, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load faculty",
                )),
            )
        }
    }
}
