//! 스크리너 Mock API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다. 관심기업 목록과 뉴스 키워드
//! 통계 등 프론트엔드 개발용 Mock 엔드포인트를 제공하며, 모든 상태는
//! 프로세스 메모리에만 유지됩니다.
//!
//! `--export-openapi` 플래그로 실행하면 서버를 띄우지 않고 OpenAPI
//! 스펙만 `openapi.json`으로 내보냅니다.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;

use screener_api::{openapi, routes, AppState, ServerConfig};
use screener_core::{CompanyDirectory, FavoriteStore};

/// CORS 미들웨어 구성
///
/// `CORS_ORIGINS` 환경변수(쉼표 구분)가 있으면 해당 origin만 허용하고
/// credential을 켭니다. 없으면 개발 모드로 간주해 모든 origin을
/// credential 없이 허용합니다.
fn cors_layer() -> CorsLayer {
    let (allow_origin, allow_credentials) = match std::env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.trim().is_empty() => {
            let parsed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();

            if parsed.is_empty() {
                warn!("CORS_ORIGINS에 유효한 origin이 없어 모든 origin을 허용합니다");
                (AllowOrigin::any(), false)
            } else {
                info!(count = parsed.len(), "CORS 허용 origin 설정");
                (AllowOrigin::list(parsed), true)
            }
        }
        _ => {
            warn!("CORS_ORIGINS 미설정, 개발 모드로 모든 origin을 허용합니다");
            (AllowOrigin::any(), false)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(allow_credentials)
        .max_age(Duration::from_secs(3600))
}

/// 전체 라우터 생성 (API + Swagger UI + 공통 레이어)
fn create_router(state: Arc<AppState>) -> Router {
    routes::create_api_router()
        .with_state(state)
        .merge(openapi::swagger_ui_router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors_layer())
}

/// OpenAPI 스펙을 `openapi.json`으로 내보내고 종료
fn export_openapi() -> Result<(), Box<dyn std::error::Error>> {
    let spec = serde_json::to_string_pretty(&openapi::ApiDoc::openapi())?;
    std::fs::write("openapi.json", &spec)?;
    info!(bytes = spec.len(), "openapi.json 내보내기 완료");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일은 없어도 된다
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "screener_api=info,screener_core=info,tower_http=debug".into()),
        )
        .init();

    if std::env::args().any(|arg| arg == "--export-openapi") {
        return export_openapi();
    }

    info!("스크리너 Mock API 서버 시작");

    let config = ServerConfig::from_env();
    let addr = config.socket_addr()?;

    let directory = CompanyDirectory::default();
    let store = if config.seed_demo_data {
        FavoriteStore::with_demo_data(directory)
    } else {
        FavoriteStore::new(directory)
    };

    let state = Arc::new(AppState::new(store, config.response_delay()));
    info!(
        version = %state.version,
        delay_ms = config.response_delay_ms,
        seeded = config.seed_demo_data,
        "애플리케이션 상태 초기화 완료"
    );

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API 서버 대기 중");
    info!("Swagger UI: http://{addr}/swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("서버가 정상 종료되었습니다");
    Ok(())
}

/// 종료 시그널 대기 (Ctrl+C 또는 SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Ctrl+C 수신, 서버 종료 중...");
        }
        _ = terminate => {
            info!("SIGTERM 수신, 서버 종료 중...");
        }
    }
}
