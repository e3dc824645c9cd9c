//! 엔티티 ↔ DTO 변환 모듈
//!
//! 상태 없는 순수 함수로 구성되며, 실패 경로가 없습니다.

pub mod employee_mapper;
