//! 뉴스 키워드 통계 픽스처.
//!
//! 최근 뉴스 기사에서 추출한 키워드 빈도 집계를 흉내 내는 고정 데이터입니다.
//! 빈도 내림차순으로 정렬되어 있으며 상위 N개만 잘라서 반환합니다.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 키워드 픽스처 테이블: (키워드, 등장 빈도), 빈도 내림차순
const KEYWORD_TABLE: &[(&str, u32)] = &[
    ("반도체", 1842),
    ("금리", 1511),
    ("실적발표", 1187),
    ("인공지능", 1002),
    ("환율", 953),
    ("배당", 847),
    ("전기차", 791),
    ("2차전지", 748),
    ("바이오", 612),
    ("수출", 563),
    ("코스피", 512),
    ("공매도", 447),
    ("유가", 391),
    ("리밸런싱", 288),
    ("신규상장", 201),
];

/// 뉴스 키워드 통계 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewsKeyword {
    /// 키워드
    pub keyword: String,
    /// 집계 기간 내 등장 빈도
    pub frequency: u32,
}

/// 뉴스 키워드 통계 피드.
///
/// 고정 픽스처이므로 조회 파라미터와 무관하게 항상 같은 순서의
/// 데이터를 반환합니다.
#[derive(Debug, Clone)]
pub struct NewsKeywordFeed {
    entries: Vec<NewsKeyword>,
}

impl Default for NewsKeywordFeed {
    fn default() -> Self {
        let entries = KEYWORD_TABLE
            .iter()
            .map(|&(keyword, frequency)| NewsKeyword {
                keyword: keyword.to_string(),
                frequency,
            })
            .collect();

        Self { entries }
    }
}

impl NewsKeywordFeed {
    /// 빈도 상위 `size`개 키워드 반환.
    ///
    /// `size`가 전체 개수보다 크면 전체를, 0이면 빈 목록을 반환합니다.
    pub fn top(&self, size: usize) -> Vec<NewsKeyword> {
        self.entries.iter().take(size).cloned().collect()
    }

    /// 전체 키워드 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 피드가 비어 있는지 여부
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
