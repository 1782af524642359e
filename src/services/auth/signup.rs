use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AuthService;
use crate::errors::PortalError;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::FacultySignupRequest,
    auth::responses::FacultySignupResponse,
    faculty::{
        entities::{AccountStatus, Faculty},
        responses::FacultySummary,
    },
};
use crate::utils::ident::generate_faculty_id;
use crate::utils::password::hash_password;
use crate::utils::validate::{
    collect_missing_fields, validate_email, validate_password_length, validate_phone,
};

pub async fn handle_faculty_signup(
    service: &AuthService,
    signup_request: FacultySignupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 1. 校验必填字段
    if let Some(msg) = collect_missing_fields(&[
        ("name", &signup_request.name),
        ("email", &signup_request.email),
        ("password", &signup_request.password),
        ("department", &signup_request.department),
        ("designation", &signup_request.designation),
        ("phone", &signup_request.phone),
    ]) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyInvalidField, msg)));
    }

    if signup_request.assigned_subjects.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FacultyInvalidField,
            "Missing or invalid fields: assigned_subjects",
        )));
    }

    // 2. 校验格式
    if let Err(msg) = validate_email(&signup_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyInvalidField, msg)));
    }
    if let Err(msg) = validate_password_length(&signup_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyInvalidField, msg)));
    }
    if let Err(msg) = validate_phone(&signup_request.phone) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyInvalidField, msg)));
    }

    // 3. 哈希密码
    let password_hash = match hash_password(&signup_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Faculty account creation failed",
                )),
            );
        }
    };

    let now = chrono::Utc::now();
    let faculty = Faculty {
        id: generate_faculty_id(),
        name: signup_request.name.trim().to_string(),
        email: signup_request.email.trim().to_string(),
        password_hash,
        department: signup_request.department.trim().to_string(),
        role: signup_request.designation.trim().to_string(),
        phone: signup_request.phone.trim().to_string(),
        assigned_subjects: signup_request.assigned_subjects,
        status: AccountStatus::Active,
        registration_date: now,
        created_at: now,
    };

    // 4. 持久化
    let storage = service.get_storage(request);
    match storage.create_faculty(faculty).await {
        Ok(created) => {
            tracing::info!("Faculty account created: {}", created.email);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                FacultySignupResponse {
                    faculty: FacultySummary::from(&created),
                },
                "Faculty account created successfully! You can now login.",
            )))
        }
        Err(PortalError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::FacultyAlreadyExists, msg))),
        Err(e) => {
            error!("Faculty signup failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Faculty account creation failed",
                )),
            )
        }
    }
}
