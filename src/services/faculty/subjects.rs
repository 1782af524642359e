use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FacultyService;
use crate::models::{
    ApiResponse, ErrorCode,
    faculty::responses::{FacultyInfo, FacultySubjectsResponse},
};

/// 教职工授课科目：assigned_subjects 与科目目录做关联
///
/// 目录里不存在的科目 ID 被跳过（目录变更后的历史残留）。
pub async fn get_faculty_subjects(
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

    let faculty = match storage.get_faculty_by_email(&email).await {
        Ok(Some(faculty)) => faculty,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                "Faculty not found",
            )));
        }
        Err(e) => {
            error!("Faculty subjects lookup failed: {}", e);
            return Ok(internal_error());
        }
    };

    let mut subjects = Vec::with_capacity(faculty.assigned_subjects.len());
    for subject_id in &faculty.assigned_subjects {
        match storage.get_subject_by_id(subject_id).await {
            Ok(Some(subject)) => subjects.push(subject),
            Ok(None) => {}
            Err(e) => {
                error!("Faculty subjects catalog join failed: {}", e);
                return Ok(internal_error());
            }
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        FacultySubjectsResponse {
            faculty: FacultyInfo::from(faculty),
            subjects,
        },
        "Faculty subjects loaded successfully",
    )))
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Failed to load faculty subjects",
    ))
}
