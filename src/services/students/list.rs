use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::responses::{StudentInfo, StudentListResponse},
};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students().await {
        Ok(students) => {
            let students: Vec<StudentInfo> = students.into_iter().map(StudentInfo::from).collect();
            let total = students.len();
            let message = if total > 0 {
                "Students loaded successfully"
            } else {
                "No students enrolled yet"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentListResponse { students, total },
                message,
            )))
        }
        Err(e) => {
            error!("Failed to list students: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load students",
                )),
            )
        }
    }
}
