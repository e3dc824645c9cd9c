//! 애플리케이션 에러 모듈
//!
//! [`errors`] 하위 모듈의 [`AppError`]와 보조 타입들을 다시 내보냅니다.
//! 모든 계층은 `crate::errors::AppError` 경로로 에러 타입을 사용합니다.

pub mod errors;

pub use errors::{AppError, AppResult};
