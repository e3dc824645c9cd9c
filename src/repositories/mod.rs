//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 직원 저장소는 [`EmployeeRepository`](employees::EmployeeRepository) trait으로 추상화되며,
//! MongoDB 구현과 프로세스 내부 메모리 구현을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::employees::{EmployeeRepository, MongoEmployeeRepository};
//!
//! let repo: Arc<dyn EmployeeRepository> = Arc::new(MongoEmployeeRepository::new(&database));
//! let employee = repo.find_by_id("65a0f1c2d3e4f5a6b7c8d9e0").await?;
//! ```

pub mod employees;
