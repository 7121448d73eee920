use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grading::requests::GradeHomeworkRequest;
use crate::services::GradingService;

// 懒加载的全局 GRADING_SERVICE 实例
static GRADING_SERVICE: Lazy<GradingService> = Lazy::new(GradingService::new_lazy);

pub async fn grade_homework(
    req: HttpRequest,
    grade_request: web::Json<GradeHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    GRADING_SERVICE
        .grade_homework(&req, grade_request.into_inner())
        .await
}

// 配置路由
pub fn configure_grading_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/grade", web::post().to(grade_homework));
}
