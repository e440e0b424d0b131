//! 요청 미들웨어.
//!
//! 관심기업 API는 로그인한 사용자 전용이므로 Authorization 헤더가 있어야
//! 접근할 수 있습니다. Mock 서버라 토큰 값 자체는 검증하지 않고 헤더
//! 존재 여부만 검사합니다.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::ApiError;

/// Authorization 헤더 존재 검사 미들웨어.
///
/// 헤더가 없거나 값이 비어 있으면 401 Envelope로 즉시 응답합니다.
pub async fn require_authorization(request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .is_some_and(|value| !value.is_empty());

    if !authorized {
        debug!(path = %request.uri().path(), "인증 헤더 없는 요청 거부");
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}
