use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FacultyService;
use crate::models::{
    ApiResponse, ErrorCode,
    faculty::responses::{FacultyInfo, FacultyListResponse},
};

pub async fn list_faculty(
    service: &FacultyService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_faculty().await {
        Ok(faculty) => {
            let faculty: Vec<FacultyInfo> = faculty.into_iter().map(FacultyInfo::from).collect();
            let total = faculty.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                FacultyListResponse { faculty, total },
                "Faculty loaded successfully",
            )))
        }
        Err(e) => {
            error!("Failed to list faculty: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load faculty",
                )),
            )
        }
    }
}
