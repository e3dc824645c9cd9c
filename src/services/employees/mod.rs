//! 직원 관리 서비스 모듈
//!
//! 직원 저장, 조회, 목록, 수정, 삭제를 제공합니다.

pub mod employee_service;

pub use employee_service::{EmployeeDtoStream, EmployeeService};
