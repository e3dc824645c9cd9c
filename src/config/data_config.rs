//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, MongoDB, 저장소 백엔드, Rate Limiting, CORS 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let value = env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string());
        Self::from_str(&value)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 로그 기본 필터를 반환합니다.
    ///
    /// `RUST_LOG`가 설정되지 않았을 때 사용됩니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=info,mongodb=info",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        parse_or(env::var("PORT").ok(), 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// HTTP 워커 스레드 수를 반환합니다. 기본값: 4
    pub fn workers() -> usize {
        parse_or(env::var("WORKERS").ok(), 4)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017"
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름. 기본값: "employee_service_dev"
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "employee_service_dev".to_string())
    }

    /// 직원 문서를 저장하는 컬렉션 이름. 기본값: "employees"
    pub fn employee_collection() -> String {
        env::var("EMPLOYEE_COLLECTION").unwrap_or_else(|_| "employees".to_string())
    }

    /// MongoDB 클라이언트에 보고할 애플리케이션 이름
    pub fn app_name() -> &'static str {
        "employee_service"
    }
}

/// 직원 리포지토리 구현 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB 컬렉션
    MongoDb,
    /// 프로세스 내부 메모리 (개발/테스트용, 재시작 시 데이터 소실)
    Memory,
}

impl StorageBackend {
    /// 문자열에서 StorageBackend를 생성합니다. 알 수 없는 값은 `MongoDb`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" | "mem" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }
}

/// 저장소 설정
pub struct StorageConfig;

impl StorageConfig {
    /// `STORAGE_BACKEND` 환경 변수에서 저장소 백엔드를 결정합니다.
    pub fn backend() -> StorageBackend {
        env::var("STORAGE_BACKEND")
            .map(|value| StorageBackend::from_str(&value))
            .unwrap_or(StorageBackend::MongoDb)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok(),
            env::var("RATE_LIMIT_BURST_SIZE").ok(),
        )
    }

    /// 문자열 값에서 설정을 만듭니다. 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_values(per_second: Option<String>, burst_size: Option<String>) -> Self {
        Self {
            per_second: parse_or(per_second, 100),
            burst_size: parse_or(burst_size, 200),
        }
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// `CORS_ALLOWED_ORIGINS`(쉼표 구분)가 없으면 로컬 개발 주소들을 허용합니다.
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok())
    }

    pub fn parse_origins(raw: Option<String>) -> Vec<String> {
        match raw {
            Some(value) if !value.trim().is_empty() => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            _ => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("설정값 '{}' 파싱 실패: {}. 기본값 사용", value, e);
            default
        }),
        None => default,
    }
}
