use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::faculty::requests::UpdateFacultyRequest;
use crate::services::FacultyService;

// 懒加载的全局 FacultyService 实例
static FACULTY_SERVICE: Lazy<FacultyService> = Lazy::new(FacultyService::new_lazy);

// HTTP处理程序
pub async fn list_faculty(req: HttpRequest) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.list_faculty(&req).await
}

pub async fn get_faculty(req: HttpRequest, email: web::Path<String>) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.get_faculty(email.into_inner(), &req).await
}

pub async fn get_faculty_subjects(
    req: HttpRequest,
    email: web::Path<String>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .get_faculty_subjects(email.into_inner(), &req)
        .await
}

pub async fn update_faculty(
    req: HttpRequest,
    email: web::Path<String>,
    update_data: web::Json<UpdateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .update_faculty(email.into_inner(), update_data.into_inner(), &req)
        .await
}

pub async fn delete_faculty(
    req: HttpRequest,
    email: web::Path<String>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .delete_faculty(email.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_faculty_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/faculty")
            .route("", web::get().to(list_faculty))
            .route("/{email}/subjects", web::get().to(get_faculty_subjects))
            .route("/{email}", web::get().to(get_faculty))
            .route("/{email}", web::put().to(update_faculty))
            .route("/{email}", web::delete().to(delete_faculty)),
    );
}
