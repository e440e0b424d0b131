//! 뉴스 키워드 통계 라우트.
//!
//! 최근 뉴스에서 추출한 키워드 빈도 Top N을 제공하는 Mock 엔드포인트입니다.
//! 데이터는 고정 픽스처이며 인증 없이 조회할 수 있습니다.
//!
//! # 엔드포인트
//!
//! - `GET /news/keywords/?size=10&days=7` - 키워드 통계 조회

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use screener_core::NewsKeyword;

use crate::error::{ApiError, ApiResult, Envelope, ErrorEnvelope};
use crate::state::AppState;

// ==================== 요청 타입 ====================

/// 뉴스 키워드 조회 쿼리.
#[derive(Debug, Deserialize, IntoParams)]
pub struct KeywordStatsQuery {
    /// 반환할 키워드 수 (기본 10)
    #[serde(default = "default_size")]
    pub size: usize,
    /// 집계 기간 일수 (기본 7)
    ///
    /// 고정 픽스처라 결과에 영향을 주지 않지만, 실제 백엔드와 쿼리
    /// 인터페이스를 맞추기 위해 받아 둡니다.
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_size() -> usize {
    10
}

fn default_days() -> u32 {
    7
}

// ==================== 핸들러 ====================

/// 뉴스 키워드 통계 조회.
///
/// 빈도 내림차순 상위 `size`개를 반환합니다. `size`가 전체보다 크면
/// 전체를, 0이면 빈 목록을 반환합니다.
#[utoipa::path(
    get,
    path = "/news/keywords/",
    params(KeywordStatsQuery),
    responses(
        (status = 200, description = "키워드 통계 (빈도 내림차순)", body = Envelope<Vec<NewsKeyword>>),
        (status = 400, description = "쿼리 파라미터 형식 오류", body = ErrorEnvelope)
    ),
    tag = "news"
)]
pub async fn get_keyword_stats(
    State(state): State<Arc<AppState>>,
    query: Result<Query<KeywordStatsQuery>, QueryRejection>,
) -> ApiResult<Envelope<Vec<NewsKeyword>>> {
    state.simulate_latency().await;

    let Query(query) = query.map_err(|rejection| {
        debug!(%rejection, "키워드 쿼리 파싱 실패");
        ApiError::InvalidRequest("size/days 쿼리 파라미터가 유효하지 않습니다.".to_string())
    })?;

    debug!(size = query.size, days = query.days, "뉴스 키워드 조회");

    let keywords = state.news.top(query.size);
    Ok(Envelope::ok(StatusCode::OK, "뉴스 키워드 조회 성공", keywords))
}

// ==================== 라우터 ====================

/// 뉴스 API 라우터.
pub fn news_router() -> Router<Arc<AppState>> {
    // 프론트엔드가 끝 슬래시를 붙여 호출하는 경우가 있어 두 표기 모두 받는다
    Router::new()
        .route("/keywords", get(get_keyword_stats))
        .route("/keywords/", get(get_keyword_stats))
}
