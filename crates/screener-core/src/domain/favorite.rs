//! 관심기업 레코드 타입.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::company::CompanyProfile;

/// 관심기업 레코드.
///
/// 목록 응답에 그대로 실리는 형태이며, 기업 표시 정보(이름/로고)는
/// 등록 시점에 디렉토리에서 복사해 둡니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    /// 관심기업 고유 ID (등록 순서대로 증가)
    pub favorite_id: i64,
    /// 기업 ID
    pub company_id: i64,
    /// 기업명
    pub company_name: String,
    /// 기업 로고 URL (없으면 빈 문자열)
    pub logo_url: String,
    /// 등록 시각
    pub created_at: DateTime<Utc>,
}

impl FavoriteItem {
    /// 디렉토리 표시 정보로부터 새 관심기업 레코드 생성.
    pub fn new(
        favorite_id: i64,
        company_id: i64,
        profile: CompanyProfile,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            favorite_id,
            company_id,
            company_name: profile.name,
            logo_url: profile.logo_url,
            created_at,
        }
    }
}
