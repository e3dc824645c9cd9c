//! API 라우트 설정 모듈
//!
//! 직원 CRUD 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(employee_service))
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// JSON 추출기 설정도 함께 등록하므로, 잘못된 요청 본문은 400
/// `{"error": "Validation error: ..."}` 응답이 됩니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_employee_routes(cfg);
}

/// 직원 관련 라우트를 설정합니다
///
/// - `POST /employees` - 직원 생성
/// - `GET /employees` - 직원 목록
/// - `GET /employees/{id}` - 직원 조회
/// - `PUT /employees/{id}` - 직원 수정
/// - `DELETE /employees/{id}` - 직원 삭제
///
/// ```bash
/// curl http://localhost:8080/employees
/// curl -X DELETE http://localhost:8080/employees/65a0f1c2d3e4f5a6b7c8d9e0
/// ```
fn configure_employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            .service(handlers::employees::save_employee)
            .service(handlers::employees::get_all_employees)
            .service(handlers::employees::get_employee)
            .service(handlers::employees::update_employee)
            .service(handlers::employees::delete_employee)
    );
}

/// 요청 본문 역직렬화 실패를 `AppError::ValidationError`로 변환하는 JSON 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "employee_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "api": "REST/JSON"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "employee_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "api": "REST/JSON"
        }
    }))
}
