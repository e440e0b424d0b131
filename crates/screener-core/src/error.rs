//! 에러 타입 정의.

use thiserror::Error;

/// 관심기업 저장소 에러 타입
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// 이미 관심기업으로 등록된 기업
    #[error("Company {company_id} is already registered as a favorite")]
    DuplicateCompany { company_id: i64 },

    /// 존재하지 않는 관심기업 ID
    #[error("Favorite {favorite_id} not found")]
    FavoriteNotFound { favorite_id: i64 },
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, StoreError>;
