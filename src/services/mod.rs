//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 연산은 리포지토리 호출과 매퍼 변환을 잇는 얇은 조율 계층입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::employees::EmployeeService;
//!
//! let service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));
//! let saved = service.save(dto).await?;
//! ```

pub mod employees;
