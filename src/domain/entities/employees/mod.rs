//! Employees Entity Module
//!
//! 직원 도메인의 영속 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::employees::Employee;
//!
//! let employee = Employee::new("Isy".into(), "Fawcer".into(), "gauaa@qas.df".into());
//! assert!(employee.id.is_none()); // 저장 전에는 ID 없음
//! ```

pub mod employee;

pub use employee::Employee;
