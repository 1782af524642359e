use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::str::FromStr;
use tracing::error;

use super::EnrollmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    enrollments::{entities::AcademicSection, requests::UpdateAcademicsRequest},
};

/// 合并一个学业数据分区
///
/// 只有创建该选课记录的教职工可以更新它。派生字段在
/// 存储层合并时重算，请求里携带的派生值不会生效。
pub async fn update_academics(
    service: &EnrollmentService,
    update_data: UpdateAcademicsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 1. 输入校验
    if update_data.student_roll.trim().is_empty()
        || update_data.subject_id.trim().is_empty()
        || update_data.faculty_email.trim().is_empty()
        || update_data.data_type.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Missing required fields",
        )));
    }

    // 2. 分区名解析
    let section = match AcademicSection::from_str(update_data.data_type.trim()) {
        Ok(section) => section,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidDataType,
                "Invalid data type",
            )));
        }
    };

    let storage = service.get_storage(request);

    // 3. 教职工存在性（faculty_id 是记录匹配条件之一）
    let faculty = match storage
        .get_faculty_by_email(&update_data.faculty_email)
        .await
    {
        Ok(Some(faculty)) => faculty,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                "Faculty not found",
            )));
        }
        Err(e) => {
            error!("Academics update faculty lookup failed: {}", e);
            return Ok(internal_error());
        }
    };

    if !faculty.is_assigned(&update_data.subject_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Faculty not authorized for this subject",
        )));
    }

    // 4. 合并并持久化；记录不存在或不属于该教职工都是 404
    match storage
        .update_enrollment_section(
            &update_data.student_roll,
            &update_data.subject_id,
            &faculty.id,
            section,
            update_data.data,
        )
        .await
    {
        Ok(Some(_)) => {
            tracing::info!(
                "Academic data ({}) updated for {} / {}",
                section,
                update_data.student_roll,
                update_data.subject_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(format!(
                "{} updated successfully",
                capitalize(&section.to_string())
            ))))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => {
            error!("Academics update failed: {}", e);
            Ok(internal_error())
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Academic data update failed",
    ))
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn test_capitalize_section_names() {
        assert_eq!(capitalize("attendance"), "Attendance");
        assert_eq!(capitalize("marks"), "Marks");
        assert_eq!(capitalize("clos"), "Clos");
        assert_eq!(capitalize(""), "");
    }
}
