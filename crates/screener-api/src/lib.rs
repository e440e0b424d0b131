//! 스크리너 Mock API 서버 라이브러리.
//!
//! 프론트엔드 개발용 Mock REST API를 제공합니다:
//! - 관심기업 목록 조회/등록/삭제 (Authorization 헤더 필요)
//! - 뉴스 키워드 통계 조회
//! - 공통 응답 Envelope과 에러 정책
//!
//! 모든 응답은 `{ status, code?, message, data? }` 형태의 Envelope로
//! 감싸지며, 실제 백엔드가 준비되기 전까지 프론트엔드가 이 형태에
//! 맞춰 개발할 수 있게 합니다.

pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

// 설정 재내보내기
pub use config::ServerConfig;

// 에러/Envelope 재내보내기
pub use error::{ApiError, ApiResult, Envelope, ErrorEnvelope};

// 상태 재내보내기
pub use state::{create_test_state, AppState};
