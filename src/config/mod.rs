//! # Configuration Module
//!
//! 직원 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 각 설정은 연관 함수만 가진 구조체로 노출됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 저장소, Rate Limit, CORS 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, DatabaseConfig};
//!
//! let env = Environment::current();
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let uri = DatabaseConfig::mongodb_uri();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongodb"      # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="employee_service_dev"
//! export EMPLOYEE_COLLECTION="employees"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://127.0.0.1:3000"
//! ```

pub mod data_config;

pub use data_config::*;
