use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auth::{
    ChangePasswordRequest, FacultyLoginRequest, FacultySignupRequest, StudentLoginRequest,
};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

// HTTP处理程序
pub async fn faculty_signup(
    req: HttpRequest,
    signup_data: web::Json<FacultySignupRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .faculty_signup(signup_data.into_inner(), &req)
        .await
}

pub async fn faculty_login(
    req: HttpRequest,
    login_data: web::Json<FacultyLoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .faculty_login(login_data.into_inner(), &req)
        .await
}

pub async fn student_login(
    req: HttpRequest,
    login_data: web::Json<StudentLoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .student_login(login_data.into_inner(), &req)
        .await
}

pub async fn change_student_password(
    req: HttpRequest,
    change_data: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .change_student_password(change_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .route("/faculty/signup", web::post().to(faculty_signup))
            .route("/faculty/login", web::post().to(faculty_login))
            .route("/student/login", web::post().to(student_login))
            .route(
                "/student/change-password",
                web::post().to(change_student_password),
            ),
    );
}
