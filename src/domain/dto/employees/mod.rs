//! 직원 API DTO 모듈
//!
//! 클라이언트와 주고받는 직원 JSON 표현을 정의합니다.

pub mod employee_dto;

pub use employee_dto::EmployeeDto;
