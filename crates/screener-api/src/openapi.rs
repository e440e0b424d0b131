//! OpenAPI 문서화 설정.
//!
//! utoipa로 OpenAPI 스펙을 생성하고 Swagger UI를 통해 제공합니다.
//!
//! - Swagger UI: `http://localhost:8080/swagger-ui`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`
//!
//! 프론트엔드는 이 스펙에서 타입을 생성해 실제 백엔드 전환 시에도
//! 같은 계약을 유지합니다.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use screener_core::{FavoriteItem, NewsKeyword};

use crate::error::{Envelope, ErrorEnvelope};
use crate::routes::favorites::AddFavoriteRequest;
use crate::routes::HealthResponse;

/// OpenAPI 문서 정의.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Screener Mock API",
        version = "0.3.2",
        description = "스크리너 프론트엔드 개발용 Mock REST API.\n\n관심기업 목록과 뉴스 키워드 통계를 제공하며, 모든 상태는 프로세스 메모리에만 유지됩니다. 관심기업 경로는 Authorization 헤더가 있어야 호출할 수 있습니다.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "로컬 개발 서버")
    ),
    tags(
        (name = "health", description = "서버 상태 확인"),
        (name = "favorites", description = "관심기업 목록 관리 (Authorization 헤더 필요)"),
        (name = "news", description = "뉴스 키워드 통계")
    ),
    components(schemas(
        HealthResponse,
        ErrorEnvelope,
        FavoriteItem,
        NewsKeyword,
        AddFavoriteRequest,
        Envelope<FavoriteItem>,
        Envelope<Vec<FavoriteItem>>,
        Envelope<Vec<NewsKeyword>>
    )),
    paths(
        crate::routes::health::health_check,
        crate::routes::favorites::list_favorites,
        crate::routes::favorites::add_favorite,
        crate::routes::favorites::remove_favorite,
        crate::routes::news::get_keyword_stats
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
