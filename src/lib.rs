//! 직원 관리 서비스 백엔드
//!
//! Actix-web과 MongoDB 기반의 논블로킹 직원 CRUD REST 서비스입니다.
//!
//! # Features
//!
//! - **직원 CRUD**: 생성, 조회, 목록, 수정, 삭제
//! - **MongoDB**: 직원 문서 영구 저장 (메모리 저장소로 대체 가능)
//! - **명시적 의존성 연결**: `main`에서 리포지토리 → 서비스 → 핸들러 순으로 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답, 상태 코드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 조율 + Mapper
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use employee_service::repositories::employees::InMemoryEmployeeRepository;
//! use employee_service::services::employees::EmployeeService;
//! use employee_service::domain::dto::employees::EmployeeDto;
//!
//! let service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));
//! let saved = service.save(EmployeeDto::new("Isy", "Fawcer", "gauaa@qas.df")).await?;
//! let found = service.get(saved.id.as_deref().unwrap()).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod mappers;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
