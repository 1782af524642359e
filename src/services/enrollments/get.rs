use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::models::{
    ApiResponse, ErrorCode, enrollments::responses::EnrollmentDetail,
};

/// 单条选课记录详情，附学生与科目信息
pub async fn get_enrollment(
    service: &EnrollmentService,
    student_roll: String,
    subject_id: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let enrollment = match storage.get_enrollment(&student_roll, &subject_id).await {
        Ok(Some(enrollment)) => enrollment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            )));
        }
        Err(e) => {
            error!("Enrollment lookup failed: {}", e);
            return Ok(internal_error());
        }
    };

    let student = match storage.get_student_by_roll(&enrollment.student_roll).await {
        Ok(student) => student.map(Into::into),
        Err(e) => {
            error!("Enrollment student join failed: {}", e);
            return Ok(internal_error());
        }
    };
    let subject = match storage.get_subject_by_id(&enrollment.subject_id).await {
        Ok(subject) => subject,
        Err(e) => {
            error!("Enrollment subject join failed: {}", e);
            return Ok(internal_error());
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        EnrollmentDetail {
            enrollment,
            student,
            subject,
        },
        "Enrollment loaded successfully",
    )))
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Failed to load enrollment",
    ))
}
