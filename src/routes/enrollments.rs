use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::enrollments::requests::{CreateEnrollmentRequest, UpdateAcademicsRequest};
use crate::services::EnrollmentService;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

// HTTP处理程序
pub async fn create_enrollment(
    req: HttpRequest,
    enrollment_data: web::Json<CreateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .create_enrollment(enrollment_data.into_inner(), &req)
        .await
}

pub async fn update_academics(
    req: HttpRequest,
    update_data: web::Json<UpdateAcademicsRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_academics(update_data.into_inner(), &req)
        .await
}

pub async fn get_enrollment(
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (roll_number, subject_id) = path.into_inner();
    ENROLLMENT_SERVICE
        .get_enrollment(roll_number, subject_id, &req)
        .await
}

pub async fn list_faculty_enrollments(
    req: HttpRequest,
    faculty_email: web::Path<String>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_faculty_enrollments(faculty_email.into_inner(), &req)
        .await
}

pub async fn list_student_enrollments(
    req: HttpRequest,
    roll_number: web::Path<String>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_student_enrollments(roll_number.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .route("", web::post().to(create_enrollment))
            .route("/academics", web::put().to(update_academics))
            .route("/faculty/{email}", web::get().to(list_faculty_enrollments))
            .route("/student/{roll}", web::get().to(list_student_enrollments))
            .route("/{roll}/{subject_id}", web::get().to(get_enrollment)),
    );
}
