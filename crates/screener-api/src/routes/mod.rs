//! API 라우트 모듈.
//!
//! # 엔드포인트
//!
//! - `GET /health` - 헬스 체크
//! - `GET /users/favorites` - 관심기업 목록 조회
//! - `POST /users/favorites` - 관심기업 등록
//! - `DELETE /users/favorites/{favoriteId}` - 관심기업 삭제
//! - `GET /news/keywords/` - 뉴스 키워드 통계 조회

pub mod favorites;
pub mod health;
pub mod news;

pub use health::{health_check, HealthResponse};

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 관심기업 경로에만 인증 미들웨어가 적용되고, 뉴스/헬스 체크는
/// 인증 없이 접근할 수 있습니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/users/favorites", favorites::favorites_router())
        .nest("/news", news::news_router())
}
