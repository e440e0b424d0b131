//! 기업 디렉토리 (정적 참조 데이터).
//!
//! Mock 서버가 기업 ID를 표시용 이름/로고로 변환할 때 사용하는
//! 고정 테이블입니다. 실제 종목 마스터를 흉내 낸 소규모 데이터이며
//! 런타임에 변경되지 않습니다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

/// 기본 디렉토리 테이블: (기업 ID, 기업명, 로고 URL)
const COMPANY_TABLE: &[(i64, &str, &str)] = &[
    (101, "삼성전자", "/logos/samsung-electronics.svg"),
    (202, "현대자동차", "/logos/hyundai-motor.svg"),
    (303, "NAVER", "/logos/naver.svg"),
    (404, "SK하이닉스", "/logos/sk-hynix.svg"),
    (505, "카카오", "/logos/kakao.svg"),
    (606, "LG에너지솔루션", "/logos/lg-energy-solution.svg"),
    (707, "셀트리온", "/logos/celltrion.svg"),
    (808, "POSCO홀딩스", "/logos/posco-holdings.svg"),
    (909, "기아", "/logos/kia.svg"),
];

/// 기업 표시 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// 기업명
    pub name: String,
    /// 로고 URL (없으면 빈 문자열)
    pub logo_url: String,
}

/// 기업 ID → 표시 정보 조회 디렉토리
#[derive(Debug, Clone)]
pub struct CompanyDirectory {
    entries: HashMap<i64, CompanyProfile>,
}

impl Default for CompanyDirectory {
    fn default() -> Self {
        let entries = COMPANY_TABLE
            .iter()
            .map(|&(company_id, name, logo_url)| {
                (
                    company_id,
                    CompanyProfile {
                        name: name.to_string(),
                        logo_url: logo_url.to_string(),
                    },
                )
            })
            .collect();

        Self { entries }
    }
}

impl CompanyDirectory {
    /// 디렉토리에 등록된 기업 조회.
    pub fn get(&self, company_id: i64) -> Option<&CompanyProfile> {
        self.entries.get(&company_id)
    }

    /// 디렉토리 등록 여부
    pub fn contains(&self, company_id: i64) -> bool {
        self.entries.contains_key(&company_id)
    }

    /// 표시용 기업 정보 조회.
    ///
    /// 디렉토리에 없는 기업 ID는 실패 대신 임시 이름과 빈 로고를 가진
    /// 프로필로 대체하고 경고를 남깁니다.
    pub fn display_for(&self, company_id: i64) -> CompanyProfile {
        match self.get(company_id) {
            Some(profile) => profile.clone(),
            None => {
                warn!(company_id, "디렉토리에 없는 기업 ID, 임시 표시 정보로 대체");
                CompanyProfile {
                    name: format!("기업 #{company_id}"),
                    logo_url: String::new(),
                }
            }
        }
    }

    /// 등록된 기업 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 디렉토리가 비어 있는지 여부
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
