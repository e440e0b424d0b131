//! 애플리케이션 공유 상태.

use std::time::Duration;

use screener_core::{CompanyDirectory, FavoriteStore, NewsKeywordFeed};
use tokio::sync::RwLock;

/// Axum 핸들러에 주입되는 공유 상태.
pub struct AppState {
    /// 관심기업 저장소
    ///
    /// 단일 잠금 하나로 전체 저장소를 보호합니다. 변경 연산은 쓰기 잠금
    /// 안에서 통째로 실행되므로 중복 검사와 삽입이 교차되지 않습니다.
    pub favorites: RwLock<FavoriteStore>,
    /// 뉴스 키워드 픽스처 (읽기 전용)
    pub news: NewsKeywordFeed,
    /// 응답 전 인공 지연 (0이면 비활성화)
    pub response_delay: Duration,
    /// 서버 버전
    pub version: String,
}

impl AppState {
    /// 새 상태 생성.
    pub fn new(store: FavoriteStore, response_delay: Duration) -> Self {
        Self {
            favorites: RwLock::new(store),
            news: NewsKeywordFeed::default(),
            response_delay,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 설정된 인공 지연만큼 대기.
    ///
    /// 실제 백엔드의 체감 응답 시간을 재현합니다. 저장소 잠금을 잡기 전에
    /// 호출해야 다른 요청의 잠금 대기 시간에 지연이 누적되지 않습니다.
    pub async fn simulate_latency(&self) {
        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }
    }
}

/// 테스트용 상태 생성 (빈 저장소, 지연 없음)
pub fn create_test_state() -> AppState {
    AppState::new(FavoriteStore::new(CompanyDirectory::default()), Duration::ZERO)
}
