//! 헬스 체크 라우트.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// 헬스 체크 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// 서버 상태
    pub status: String,
    /// 서버 버전
    pub version: String,
}

/// 헬스 체크.
///
/// 인증과 인공 지연 없이 즉시 응답합니다. 로드밸런서나 컨테이너
/// 오케스트레이터의 프로브 용도입니다.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "서버 정상", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: state.version.clone(),
    })
}
