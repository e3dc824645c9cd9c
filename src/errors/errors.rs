//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 직원 CRUD 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 JSON 요청 본문 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 직원 ID |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 드라이버 오류 |
//! | `InternalError` | 500 Internal Server Error | 설정 오류, 잠금 오염 등 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! let employee = service.get(&id).await?
//!     .ok_or_else(|| AppError::NotFound(format!("직원을 찾을 수 없습니다: {}", id)))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스 코어는 "찾을 수 없음"을 에러가 아닌 빈 결과(`None`)로 표현합니다.
/// `NotFound`는 HTTP 경계(핸들러)에서만 생성됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 연결 실패, 타임아웃 등 저장소 계층 오류입니다. 재시도 없이 그대로 전파됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러는 `{ "error": "<메시지>" }` 형식의 JSON으로 응답됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
