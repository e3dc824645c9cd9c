//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문으로 사용되는 직렬화 타입들입니다.
//! JSON 필드명은 camelCase를 사용합니다.

pub mod employees;
