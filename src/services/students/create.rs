use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::errors::PortalError;
use crate::models::{
    ApiResponse, ErrorCode,
    faculty::entities::AccountStatus,
    students::{entities::Student, requests::CreateStudentRequest, responses::StudentSummary},
};
use crate::utils::ident::generate_student_id;
use crate::utils::password::hash_password;
use crate::utils::validate::{
    collect_missing_fields, validate_email, validate_password_length, validate_phone,
};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 1. 校验必填字段，一次性报告所有缺失项
    if let Some(msg) = collect_missing_fields(&[
        ("name", &student_data.name),
        ("rollNumber", &student_data.roll_number),
        ("email", &student_data.email),
        ("phone", &student_data.phone),
        ("password", &student_data.password),
        ("department", &student_data.department),
        ("facultyEmail", &student_data.faculty_email),
    ]) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentInvalidField, msg)));
    }

    // 2. 校验格式
    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentInvalidField, msg)));
    }
    if let Err(msg) = validate_phone(&student_data.phone) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentInvalidField, msg)));
    }
    if let Err(msg) = validate_password_length(&student_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentInvalidField, msg)));
    }

    // 3. 哈希密码
    let password_hash = match hash_password(&student_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Student creation failed",
                )),
            );
        }
    };

    let now = chrono::Utc::now();
    let student = Student {
        id: generate_student_id(),
        name: student_data.name.trim().to_string(),
        roll_number: student_data.roll_number.trim().to_string(),
        email: student_data.email.trim().to_string(),
        phone: student_data.phone.trim().to_string(),
        password_hash,
        department: student_data.department.trim().to_string(),
        faculty_email: student_data.faculty_email.trim().to_string(),
        semester: 1,
        cgpa: 0.0,
        attendance: 0,
        status: AccountStatus::Active,
        subjects: vec![],
        created_at: now,
        updated_at: now,
    };

    // 4. 持久化（学号与邮箱唯一性在存储层强制）
    let storage = service.get_storage(request);
    match storage.create_student(student).await {
        Ok(created) => {
            tracing::info!("Student added: {}", created.roll_number);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StudentSummary::from(&created),
                "Student enrolled successfully!",
            )))
        }
        Err(PortalError::Conflict(msg)) => {
            let code = if msg.contains("roll") {
                ErrorCode::StudentRollConflict
            } else {
                ErrorCode::StudentEmailConflict
            };
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(code, msg)))
        }
        Err(e) => {
            error!("Student creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Student creation failed",
                )),
            )
        }
    }
}
