//! 공통 응답 Envelope과 API 에러 정책.
//!
//! 모든 응답은 성공/실패와 무관하게 같은 형태를 따릅니다:
//!
//! ```json
//! { "status": 200, "code": "...", "message": "...", "data": ... }
//! ```
//!
//! 성공 응답은 `code` 없이 `data`를, 실패 응답은 `data` 없이 `code`를
//! 채웁니다. HTTP 상태 코드는 본문의 `status`와 항상 일치합니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use screener_core::StoreError;

// ==================== 응답 Envelope ====================

/// 성공 응답 Envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    /// HTTP 상태 코드 (본문에도 동일하게 포함)
    pub status: u16,
    /// 기계 판독용 에러 코드 (성공 시 생략)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// 표시용 메시지
    pub message: String,
    /// 응답 데이터 (없으면 생략)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// 데이터를 담은 성공 Envelope 생성.
    pub fn ok(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status: status.as_u16(),
            code: None,
            message: message.into(),
            data: Some(data),
        }
    }

    /// 데이터 없는 성공 Envelope 생성.
    pub fn ok_empty(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            code: None,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// 에러 응답 Envelope.
///
/// 성공 Envelope과 같은 형태에서 `data` 없이 `code`가 채워진 모양입니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// HTTP 상태 코드
    pub status: u16,
    /// 기계 판독용 에러 코드
    pub code: String,
    /// 표시용 메시지
    pub message: String,
}

// ==================== API 에러 ====================

/// Mock API 에러 분류.
///
/// 각 변형은 HTTP 상태 코드, 에러 코드 문자열, 표시용 메시지로
/// 변환되어 Envelope에 실립니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Authorization 헤더 없이 보호 경로에 접근
    #[error("Authorization header is missing")]
    Unauthorized,

    /// 요청 형식 위반 (본문/파라미터 파싱 실패 포함)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 이미 관심기업으로 등록된 기업
    #[error("Company {company_id} is already registered as a favorite")]
    AlreadyExists { company_id: i64 },

    /// 관심기업 목록이 비어 있음
    #[error("Favorites list is empty")]
    EmptyList,

    /// 존재하지 않는 관심기업 ID
    #[error("Favorite {favorite_id} not found")]
    NotFound { favorite_id: i64 },
}

impl ApiError {
    /// HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::AlreadyExists { .. } => StatusCode::CONFLICT,
            Self::EmptyList => StatusCode::NOT_FOUND,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// 기계 판독용 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::AlreadyExists { .. } => "ALREADY_EXISTS",
            Self::EmptyList => "EMPTY_LIST",
            Self::NotFound { .. } => "NOT_FOUND",
        }
    }

    /// 프론트엔드 표시용 메시지
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "로그인이 필요한 서비스입니다.".to_string(),
            Self::InvalidRequest(message) => message.clone(),
            Self::AlreadyExists { .. } => "이미 관심기업으로 등록되어 있습니다.".to_string(),
            Self::EmptyList => "등록된 관심기업이 없습니다.".to_string(),
            Self::NotFound { .. } => "해당 관심기업을 찾을 수 없습니다.".to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::DuplicateCompany { company_id } => Self::AlreadyExists { company_id },
            StoreError::FavoriteNotFound { favorite_id } => Self::NotFound { favorite_id },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorEnvelope {
            status: status.as_u16(),
            code: self.code().to_string(),
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// 핸들러 Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;
