//! 수영 기록 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 컴포넌트를 초기화합니다.
//! SQLite 연결을 설정하고 JWT 인증 기반의 REST API를 제공합니다.
//!
//! 설정은 시작 시 한 번 [`AppConfig`]로 로드되어 각 컴포넌트에
//! 명시적으로 주입됩니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use swimlog_backend::config::AppConfig;
use swimlog_backend::db;
use swimlog_backend::repositories::bookmarks::BookmarkRepository;
use swimlog_backend::repositories::places::PlaceRepository;
use swimlog_backend::repositories::records::RecordRepository;
use swimlog_backend::repositories::users::UserRepository;
use swimlog_backend::routes::configure_all_routes;
use swimlog_backend::services::auth::{SocialAuthService, TokenService};
use swimlog_backend::services::bookmarks::BookmarkService;
use swimlog_backend::services::places::PlaceService;
use swimlog_backend::services::records::RecordService;
use swimlog_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 수영 기록 서비스 시작중...");

    let config = AppConfig::from_env();

    // 데이터 스토어 초기화 (스키마 멱등 생성 포함)
    let pool = db::init_pool(&config.database)
        .await
        .expect("데이터베이스 연결 실패");

    info!("✅ SQLite 연결 성공: {}", config.database.url);

    // 리포지토리/서비스 구성 - 싱글톤 없이 명시적으로 주입한다
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let place_repo = Arc::new(PlaceRepository::new(pool.clone()));
    let bookmark_repo = Arc::new(BookmarkRepository::new(pool.clone()));
    let record_repo = Arc::new(RecordRepository::new(pool.clone()));

    let user_service = web::Data::new(UserService::new(user_repo, config.bcrypt_cost));
    let token_service = web::Data::new(TokenService::new(&config.jwt));
    let social_auth = web::Data::new(
        SocialAuthService::new(&config.oauth).expect("소셜 로그인 클라이언트 구성 실패"),
    );
    let place_service = web::Data::new(PlaceService::new(place_repo));
    let bookmark_service = web::Data::new(BookmarkService::new(bookmark_repo));
    let record_service = web::Data::new(RecordService::new(record_repo));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // Rate Limiting 설정
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.server.rate_limit_per_second)
        .burst_size(config.server.rate_limit_burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.server.rate_limit_per_second, config.server.rate_limit_burst_size
    );

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            // 기존 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 서비스 주입
            .app_data(user_service.clone())
            .app_data(token_service.clone())
            .app_data(social_auth.clone())
            .app_data(place_service.clone())
            .app_data(bookmark_service.clone())
            .app_data(record_service.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE` 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS(Cross-Origin Resource Sharing)
/// 설정을 구성합니다. 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
