//! 스크리너 Mock 백엔드의 도메인 계층.
//!
//! 이 crate는 프론트엔드 개발용 Mock 서버가 사용하는 핵심 타입을 제공합니다:
//! - 관심기업 레코드와 인메모리 저장소
//! - 기업 디렉토리 (정적 참조 데이터)
//! - 뉴스 키워드 통계 픽스처
//!
//! 외부 저장소나 네트워크 의존성이 없으며, 모든 상태는 프로세스 메모리에만
//! 존재합니다.

pub mod domain;
pub mod error;
pub mod store;

// 도메인 타입 재내보내기
pub use domain::{CompanyDirectory, CompanyProfile, FavoriteItem, NewsKeyword, NewsKeywordFeed};

// 에러 타입 재내보내기
pub use error::{Result, StoreError};

// 저장소 재내보내기
pub use store::FavoriteStore;
