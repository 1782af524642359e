use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    enrollments::{
        entities::Enrollment,
        responses::{EnrollmentDetail, EnrollmentListResponse},
    },
};
use crate::storage::Storage;

/// 教职工视角的选课列表，每条记录附上学生与科目信息
pub async fn list_faculty_enrollments(
    service: &EnrollmentService,
    faculty_email: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let faculty = match storage.get_faculty_by_email(&faculty_email).await {
        Ok(Some(faculty)) => faculty,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                "Faculty not found",
            )));
        }
        Err(e) => {
            error!("Enrollment listing faculty lookup failed: {}", e);
            return Ok(internal_error());
        }
    };

    let enrollments = match storage.list_enrollments_by_faculty(&faculty.id).await {
        Ok(enrollments) => enrollments,
        Err(e) => {
            error!("Faculty enrollment listing failed: {}", e);
            return Ok(internal_error());
        }
    };

    match join_details(&storage, enrollments, true).await {
        Ok(details) => Ok(ok_response(details)),
        Err(e) => {
            error!("Faculty enrollment join failed: {}", e);
            Ok(internal_error())
        }
    }
}

/// 学生视角的选课列表，每条记录附上科目信息
pub async fn list_student_enrollments(
    service: &EnrollmentService,
    roll_number: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let enrollments = match storage.list_enrollments_by_student(&roll_number).await {
        Ok(enrollments) => enrollments,
        Err(e) => {
            error!("Student enrollment listing failed: {}", e);
            return Ok(internal_error());
        }
    };

    match join_details(&storage, enrollments, false).await {
        Ok(details) => Ok(ok_response(details)),
        Err(e) => {
            error!("Student enrollment join failed: {}", e);
            Ok(internal_error())
        }
    }
}

// 逐条关联学生与科目；关联对象缺失时保留记录本身，字段置空
async fn join_details(
    storage: &std::sync::Arc<dyn Storage>,
    enrollments: Vec<Enrollment>,
    include_student: bool,
) -> crate::errors::Result<Vec<EnrollmentDetail>> {
    let mut details = Vec::with_capacity(enrollments.len());

    for enrollment in enrollments {
        let student = if include_student {
            storage
                .get_student_by_roll(&enrollment.student_roll)
                .await?
                .map(Into::into)
        } else {
            None
        };
        let subject = storage.get_subject_by_id(&enrollment.subject_id).await?;

        details.push(EnrollmentDetail {
            enrollment,
            student,
            subject,
        });
    }

    Ok(details)
}

fn ok_response(details: Vec<EnrollmentDetail>) -> HttpResponse {
    let message = if details.is_empty() {
        "No enrollments found"
    } else {
        "Enrollments loaded successfully"
    };
    let total = details.len();
    HttpResponse::Ok().json(ApiResponse::success(
        EnrollmentListResponse {
            enrollments: details,
            total,
        },
        message,
    ))
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Failed to load enrollments",
    ))
}
