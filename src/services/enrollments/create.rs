use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::errors::PortalError;
use crate::models::{
    ApiResponse, ErrorCode,
    enrollments::{
        entities::Enrollment, requests::CreateEnrollmentRequest, responses::EnrollmentResponse,
    },
};

/// 选课创建工作流
///
/// 每一步短路返回，任何失败都不会留下部分写入的选课记录：
/// 输入校验 → 教职工存在 → 科目授权 → 学生存在 → 科目存在 → 组合键唯一 → 持久化。
pub async fn create_enrollment(
    service: &EnrollmentService,
    enrollment_data: CreateEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 1. 输入校验；后续查找与持久化使用同一份修剪后的值
    let student_roll = enrollment_data.student_roll.trim();
    let subject_id = enrollment_data.subject_id.trim();
    let faculty_email = enrollment_data.faculty_email.trim();

    if student_roll.is_empty() || subject_id.is_empty() || faculty_email.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Student roll number, subject ID, and faculty email required",
        )));
    }

    let storage = service.get_storage(request);

    // 2. 教职工存在性与科目授权
    let faculty = match storage.get_faculty_by_email(faculty_email).await {
        Ok(Some(faculty)) => faculty,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                "Faculty not found",
            )));
        }
        Err(e) => {
            error!("Enrollment faculty lookup failed: {}", e);
            return Ok(internal_error());
        }
    };

    // 授权检查先于科目存在性检查：未授权的科目无论是否存在都返回 403
    if !faculty.is_assigned(subject_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Faculty not authorized for this subject",
        )));
    }

    // 3. 学生存在性
    match storage.get_student_by_roll(student_roll).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Enrollment student lookup failed: {}", e);
            return Ok(internal_error());
        }
    }

    // 4. 科目存在性
    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            )));
        }
        Err(e) => {
            error!("Enrollment subject lookup failed: {}", e);
            return Ok(internal_error());
        }
    }

    // 5. 构造零值初始化的选课记录并持久化（组合键唯一性在存储层强制）
    let enrollment = Enrollment::new(
        student_roll.to_string(),
        subject_id.to_string(),
        faculty.id,
    );

    match storage.create_enrollment(enrollment).await {
        Ok(created) => {
            tracing::info!(
                "Student {} enrolled in subject {}",
                created.student_roll,
                created.subject_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                EnrollmentResponse {
                    enrollment: created,
                },
                "Student enrolled successfully",
            )))
        }
        Err(PortalError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::EnrollmentAlreadyExists, msg))),
        Err(e) => {
            error!("Enrollment creation failed: {}", e);
            Ok(internal_error())
        }
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Enrollment failed",
    ))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{HttpRequest, test, web};
    use std::sync::Arc;

    use crate::models::enrollments::requests::CreateEnrollmentRequest;
    use crate::models::faculty::entities::{AccountStatus, Faculty};
    use crate::models::students::entities::Student;
    use crate::models::subjects::entities::Subject;
    use crate::services::EnrollmentService;
    use crate::storage::{Storage, json_file_storage::JsonFileStorage};

    async fn seeded_storage(tag: &str) -> (Arc<dyn Storage>, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "acadportal-enroll-service-{tag}-{}",
            uuid::Uuid::new_v4().simple()
        ));
        let storage = JsonFileStorage::new_with_dir(&dir).await.expect("storage");

        storage
            .create_faculty_impl(Faculty {
                id: "FAC1".to_string(),
                name: "Dr. Khan".to_string(),
                email: "khan@uni.edu".to_string(),
                password_hash: "$argon2id$hash".to_string(),
                department: "CS".to_string(),
                role: "Professor".to_string(),
                phone: "03001234567".to_string(),
                assigned_subjects: vec!["CS101".to_string()],
                status: AccountStatus::Active,
                registration_date: chrono::Utc::now(),
                created_at: chrono::Utc::now(),
            })
            .await
            .expect("faculty");

        storage
            .create_student_impl(Student {
                id: "s1".to_string(),
                name: "Ayesha".to_string(),
                roll_number: "FA21-001".to_string(),
                email: "ayesha@uni.edu".to_string(),
                phone: "03001234567".to_string(),
                password_hash: "$argon2id$hash".to_string(),
                department: "CS".to_string(),
                faculty_email: "khan@uni.edu".to_string(),
                semester: 1,
                cgpa: 0.0,
                attendance: 0,
                status: AccountStatus::Active,
                subjects: vec![],
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            })
            .await
            .expect("student");

        storage
            .seed_subjects_impl(vec![Subject {
                id: "CS101".to_string(),
                name: "Programming Fundamentals".to_string(),
                code: "CS-101".to_string(),
                credit_hours: 4,
                department: "CS".to_string(),
                semester: 1,
            }])
            .await
            .expect("subjects");

        (Arc::new(storage), dir)
    }

    fn request_with(storage: Arc<dyn Storage>) -> HttpRequest {
        test::TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request()
    }

    #[tokio::test]
    async fn test_padded_input_enrolls_under_trimmed_key() {
        let (storage, dir) = seeded_storage("trim").await;
        let service = EnrollmentService::new_lazy();
        let req = request_with(storage.clone());

        let resp = service
            .create_enrollment(
                CreateEnrollmentRequest {
                    student_roll: "  FA21-001 ".to_string(),
                    subject_id: " CS101  ".to_string(),
                    faculty_email: " khan@uni.edu ".to_string(),
                },
                &req,
            )
            .await
            .expect("handler");
        assert_eq!(resp.status(), StatusCode::CREATED);

        // 记录以修剪后的键持久化，修剪后的查找必须命中
        let found = storage
            .get_enrollment("FA21-001", "CS101")
            .await
            .expect("lookup");
        assert!(found.is_some());

        // 修剪后的重复请求落在同一个键上
        let resp = service
            .create_enrollment(
                CreateEnrollmentRequest {
                    student_roll: "FA21-001".to_string(),
                    subject_id: "CS101".to_string(),
                    faculty_email: "khan@uni.edu".to_string(),
                },
                &req,
            )
            .await
            .expect("handler");
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_unassigned_subject_is_forbidden_before_existence() {
        let (storage, dir) = seeded_storage("authz").await;
        let service = EnrollmentService::new_lazy();
        let req = request_with(storage);

        // CS999 不在目录中也未被授权，授权检查先行
        let resp = service
            .create_enrollment(
                CreateEnrollmentRequest {
                    student_roll: "FA21-001".to_string(),
                    subject_id: "CS999".to_string(),
                    faculty_email: "khan@uni.edu".to_string(),
                },
                &req,
            )
            .await
            .expect("handler");
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
}
