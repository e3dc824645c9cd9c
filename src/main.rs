//! 직원 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 저장소(MongoDB 또는 메모리)를 연결하고 서비스를 명시적으로 생성해 핸들러에 주입합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use employee_service::config::{
    CorsConfig, Environment, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
use employee_service::db::Database;
use employee_service::repositories::employees::{
    EmployeeRepository, InMemoryEmployeeRepository, MongoEmployeeRepository,
};
use employee_service::routes::configure_all_routes;
use employee_service::services::employees::EmployeeService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 직원 서비스 시작중...");

    let employee_repo = initialize_repository().await?;
    let employee_service = web::Data::new(EmployeeService::new(employee_repo));

    match employee_service.count().await {
        Ok(count) => info!("📦 저장된 직원 수: {}", count),
        Err(e) => warn!("직원 수 조회 실패: {}", e),
    }

    start_http_server(employee_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(employee_service: web::Data<EmployeeService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Employees API: http://{}/employees", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            .app_data(employee_service.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 실행되므로 결과는 stderr로만 알립니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("환경 파일 로드 실패 (profile={}): {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경(`ENVIRONMENT`)에 맞는 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=employee_service=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
    info!("실행 환경: {:?}", environment);
}

/// 설정된 저장소 백엔드로 직원 리포지토리를 생성합니다
///
/// MongoDB 연결 실패 시 서버를 시작하지 않고 에러를 반환합니다.
async fn initialize_repository() -> io::Result<Arc<dyn EmployeeRepository>> {
    match StorageConfig::backend() {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            let repo = MongoEmployeeRepository::new(&database);
            info!(
                "✅ MongoDB 리포지토리 준비 완료: {}.{}",
                database.database_name(),
                repo.collection_name()
            );

            Ok(Arc::new(repo))
        }
        StorageBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중 - 재시작 시 데이터가 사라집니다");
            Ok(Arc::new(InMemoryEmployeeRepository::new()))
        }
    }
}

/// CORS 설정을 구성합니다
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
