//! 관심기업 API 라우트.
//!
//! 스크리너 프론트엔드의 관심기업 화면이 붙는 Mock 엔드포인트입니다.
//! 모든 경로는 Authorization 헤더가 있어야 하며, 값 자체는 검증하지
//! 않습니다.
//!
//! # 엔드포인트
//!
//! - `GET /users/favorites` - 관심기업 목록 조회 (favoriteId 내림차순)
//! - `POST /users/favorites` - 관심기업 등록
//! - `DELETE /users/favorites/{favoriteId}` - 관심기업 삭제
//!
//! # 에러 정책
//!
//! | 상황 | HTTP | code |
//! |------|------|------|
//! | Authorization 헤더 없음 | 401 | `UNAUTHORIZED` |
//! | companyId 누락/형식 오류 | 400 | `INVALID_REQUEST` |
//! | 이미 등록된 기업 | 409 | `ALREADY_EXISTS` |
//! | 목록이 비어 있음 | 404 | `EMPTY_LIST` |
//! | 없는 favoriteId 삭제 | 404 | `NOT_FOUND` |

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, warn};
use utoipa::ToSchema;

use screener_core::FavoriteItem;

use crate::error::{ApiError, ApiResult, Envelope, ErrorEnvelope};
use crate::middleware::require_authorization;
use crate::state::AppState;

/// 등록 요청 거절 시 표시 메시지
const INVALID_COMPANY_ID: &str = "companyId가 유효하지 않습니다.";
/// 삭제 경로 파라미터 거절 시 표시 메시지
const INVALID_FAVORITE_ID: &str = "favoriteId가 유효하지 않습니다.";

// ==================== 요청 타입 ====================

/// 관심기업 등록 요청.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    /// 등록할 기업 ID
    ///
    /// 누락되면 400으로 거절됩니다.
    pub company_id: Option<i64>,
}

// ==================== 핸들러 ====================

/// 관심기업 목록 조회.
///
/// 목록은 항상 favoriteId 내림차순(최신 등록 우선)입니다.
/// 빈 목록은 200이 아니라 404 `EMPTY_LIST`로 응답하며, 프론트엔드는
/// 이 코드로 빈 상태 화면을 분기합니다.
#[utoipa::path(
    get,
    path = "/users/favorites",
    responses(
        (status = 200, description = "관심기업 목록 (favoriteId 내림차순)", body = Envelope<Vec<FavoriteItem>>),
        (status = 401, description = "Authorization 헤더 없음", body = ErrorEnvelope),
        (status = 404, description = "등록된 관심기업 없음", body = ErrorEnvelope)
    ),
    tag = "favorites"
)]
pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Envelope<Vec<FavoriteItem>>> {
    state.simulate_latency().await;

    let store = state.favorites.read().await;
    let items = store.list();

    if items.is_empty() {
        return Err(ApiError::EmptyList);
    }

    debug!(count = items.len(), "관심기업 목록 조회");
    Ok(Envelope::ok(StatusCode::OK, "관심기업 목록 조회 성공", items))
}

/// 관심기업 등록.
///
/// 본문이 JSON이 아니거나 companyId가 없는 경우, 숫자가 아닌 경우 모두
/// 400 `INVALID_REQUEST`로 처리합니다. 디렉토리에 없는 기업 ID도 등록은
/// 허용되며 임시 표시 정보가 채워집니다.
#[utoipa::path(
    post,
    path = "/users/favorites",
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "관심기업 등록 성공", body = Envelope<FavoriteItem>),
        (status = 400, description = "companyId 누락 또는 형식 오류", body = ErrorEnvelope),
        (status = 401, description = "Authorization 헤더 없음", body = ErrorEnvelope),
        (status = 409, description = "이미 등록된 기업", body = ErrorEnvelope)
    ),
    tag = "favorites"
)]
pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> ApiResult<Envelope<FavoriteItem>> {
    state.simulate_latency().await;

    let company_id = parse_company_id(payload)?;

    let mut store = state.favorites.write().await;
    let item = store.add(company_id).map_err(|error| {
        warn!(company_id, %error, "관심기업 등록 거절");
        ApiError::from(error)
    })?;

    Ok(Envelope::ok(StatusCode::CREATED, "관심기업 등록 성공", item))
}

/// 관심기업 삭제.
///
/// 성공 시 데이터 없는 200 Envelope를 반환합니다.
#[utoipa::path(
    delete,
    path = "/users/favorites/{favoriteId}",
    params(
        ("favoriteId" = i64, Path, description = "삭제할 관심기업 ID")
    ),
    responses(
        (status = 200, description = "관심기업 삭제 성공"),
        (status = 400, description = "favoriteId 형식 오류", body = ErrorEnvelope),
        (status = 401, description = "Authorization 헤더 없음", body = ErrorEnvelope),
        (status = 404, description = "존재하지 않는 favoriteId", body = ErrorEnvelope)
    ),
    tag = "favorites"
)]
pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    favorite_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Envelope<()>> {
    state.simulate_latency().await;

    let Path(favorite_id) = favorite_id.map_err(|rejection| {
        debug!(%rejection, "favoriteId 경로 파라미터 파싱 실패");
        ApiError::InvalidRequest(INVALID_FAVORITE_ID.to_string())
    })?;

    let mut store = state.favorites.write().await;
    store.remove(favorite_id).map_err(|error| {
        warn!(favorite_id, %error, "관심기업 삭제 거절");
        ApiError::from(error)
    })?;

    Ok(Envelope::ok_empty(StatusCode::OK, "관심기업 삭제 성공"))
}

/// 등록 요청 본문에서 companyId 추출.
fn parse_company_id(
    payload: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<i64, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(%rejection, "등록 요청 본문 파싱 실패");
        ApiError::InvalidRequest(INVALID_COMPANY_ID.to_string())
    })?;

    request
        .company_id
        .ok_or_else(|| ApiError::InvalidRequest(INVALID_COMPANY_ID.to_string()))
}

// ==================== 라우터 ====================

/// 관심기업 API 라우터.
///
/// 모든 경로에 Authorization 헤더 검사 미들웨어가 적용됩니다.
pub fn favorites_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_favorites))
        .route("/", post(add_favorite))
        .route("/{favorite_id}", delete(remove_favorite))
        .layer(middleware::from_fn(require_authorization))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use screener_core::{CompanyDirectory, FavoriteStore};

    use super::*;
    use crate::state::create_test_state;

    const AUTH: &str = "Bearer mock-token";

    fn app_with_state(state: Arc<AppState>) -> Router {
        Router::new()
            .nest("/users/favorites", favorites_router())
            .with_state(state)
    }

    fn empty_app() -> Router {
        app_with_state(Arc::new(create_test_state()))
    }

    fn seeded_app() -> Router {
        let store = FavoriteStore::with_demo_data(CompanyDirectory::default());
        app_with_state(Arc::new(AppState::new(store, Duration::ZERO)))
    }

    fn get_favorites() -> Request<Body> {
        Request::builder()
            .uri("/users/favorites")
            .header(header::AUTHORIZATION, AUTH)
            .body(Body::empty())
            .unwrap()
    }

    fn post_favorite(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/users/favorites")
            .header(header::AUTHORIZATION, AUTH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete_favorite(favorite_id: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(format!("/users/favorites/{favorite_id}"))
            .header(header::AUTHORIZATION, AUTH)
            .body(Body::empty())
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_without_auth_header_is_rejected() {
        let app = empty_app();

        let request = Request::builder()
            .uri("/users/favorites")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = read_json(response).await;
        assert_eq!(body["status"], 401);
        assert_eq!(body["code"], "UNAUTHORIZED");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_empty_auth_header_is_rejected() {
        let app = empty_app();

        let request = Request::builder()
            .uri("/users/favorites")
            .header(header::AUTHORIZATION, "")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_empty_store_returns_empty_list_error() {
        let app = empty_app();

        let response = app.oneshot(get_favorites()).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = read_json(response).await;
        assert_eq!(body["code"], "EMPTY_LIST");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_add_favorite_returns_created_record() {
        let app = empty_app();

        let response = app
            .oneshot(post_favorite(&json!({ "companyId": 404 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = read_json(response).await;
        assert_eq!(body["status"], 201);
        assert!(body.get("code").is_none());
        assert_eq!(body["data"]["favoriteId"], 1);
        assert_eq!(body["data"]["companyId"], 404);
        assert_eq!(body["data"]["companyName"], "SK하이닉스");
        assert_eq!(body["data"]["logoUrl"], "/logos/sk-hynix.svg");
    }

    #[tokio::test]
    async fn test_add_unknown_company_gets_placeholder_profile() {
        let app = empty_app();

        let response = app
            .oneshot(post_favorite(&json!({ "companyId": 999 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = read_json(response).await;
        assert_eq!(body["data"]["companyName"], "기업 #999");
        assert_eq!(body["data"]["logoUrl"], "");
    }

    #[tokio::test]
    async fn test_add_duplicate_company_is_conflict() {
        let app = empty_app();

        let first = app
            .clone()
            .oneshot(post_favorite(&json!({ "companyId": 101 })))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .clone()
            .oneshot(post_favorite(&json!({ "companyId": 101 })))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);

        let body = read_json(second).await;
        assert_eq!(body["code"], "ALREADY_EXISTS");

        // 중복 등록 실패 후에도 목록은 1건 그대로
        let list = app.oneshot(get_favorites()).await.unwrap();
        let list_body = read_json(list).await;
        assert_eq!(list_body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_missing_company_id_is_bad_request() {
        let app = empty_app();

        let response = app.oneshot(post_favorite(&json!({}))).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert_eq!(body["code"], "INVALID_REQUEST");
        assert_eq!(body["message"], INVALID_COMPANY_ID);
    }

    #[tokio::test]
    async fn test_add_non_numeric_company_id_is_bad_request() {
        let app = empty_app();

        let response = app
            .oneshot(post_favorite(&json!({ "companyId": "삼성전자" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert_eq!(body["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_add_malformed_body_is_bad_request() {
        let app = empty_app();

        let request = Request::builder()
            .method("POST")
            .uri("/users/favorites")
            .header(header::AUTHORIZATION, AUTH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("not-json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert_eq!(body["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_seeded_list_is_descending_and_ids_continue_above_seed() {
        let app = seeded_app();

        let list = app.clone().oneshot(get_favorites()).await.unwrap();
        assert_eq!(list.status(), StatusCode::OK);

        let body = read_json(list).await;
        let ids: Vec<i64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["favoriteId"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![10, 9, 8]);

        // 시드 이후 등록은 시드 최대값 다음 ID를 받는다
        let created = app
            .oneshot(post_favorite(&json!({ "companyId": 404 })))
            .await
            .unwrap();
        let created_body = read_json(created).await;
        assert_eq!(created_body["data"]["favoriteId"], 11);
    }

    #[tokio::test]
    async fn test_remove_favorite_then_list_reflects_deletion() {
        let app = seeded_app();

        let response = app.clone().oneshot(delete_favorite("10")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["status"], 200);
        assert!(body.get("code").is_none());
        assert!(body.get("data").is_none());

        let list = app.oneshot(get_favorites()).await.unwrap();
        let list_body = read_json(list).await;
        let ids: Vec<i64> = list_body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["favoriteId"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![9, 8]);
    }

    #[tokio::test]
    async fn test_remove_unknown_favorite_is_not_found() {
        let app = seeded_app();

        let response = app.oneshot(delete_favorite("4242")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = read_json(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_remove_non_numeric_favorite_id_is_bad_request() {
        let app = seeded_app();

        let response = app.oneshot(delete_favorite("abc")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert_eq!(body["code"], "INVALID_REQUEST");
        assert_eq!(body["message"], INVALID_FAVORITE_ID);
    }

    #[tokio::test]
    async fn test_add_without_auth_is_rejected_before_validation() {
        let app = empty_app();

        // 본문이 유효해도 인증이 먼저 거절된다
        let request = Request::builder()
            .method("POST")
            .uri("/users/favorites")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "companyId": 101 }).to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
