//! # Domain Layer Module
//!
//! 직원 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 대응되는 영속 엔티티
//! └── dto       - HTTP 경계에서 주고받는 데이터 전송 객체
//!      │
//!      ▼
//! Mappers (entity ↔ dto 변환)
//! ```
//!
//! 두 표현은 필드 구성이 같고, 변환은 [`crate::mappers`]에서 담당합니다.

pub mod entities;
pub mod dto;
