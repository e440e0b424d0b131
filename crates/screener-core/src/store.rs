//! 관심기업 인메모리 저장소.
//!
//! 사용자의 관심기업 목록을 프로세스 메모리에만 보관합니다.
//! 재시작하면 초기화되며, 데모 시드를 켜면 고정 픽스처 3건으로
//! 시작합니다.

use std::collections::{BTreeMap, HashSet};

use chrono::{Duration, Utc};
use tracing::{debug, info};

use crate::domain::{CompanyDirectory, FavoriteItem};
use crate::error::{Result, StoreError};

/// 데모 시드 항목: (favoriteId, 기업 ID, 등록 후 경과 일수)
///
/// favoriteId가 클수록 최근에 등록된 항목입니다. 이후 발급되는 ID는
/// 항상 시드 최대값보다 커야 합니다.
const DEMO_FAVORITES: &[(i64, i64, i64)] = &[
    (8, 303, 5),
    (9, 505, 3),
    (10, 101, 1),
];

/// 관심기업 저장소.
///
/// - `favoriteId`는 저장소 수명 동안 단조 증가하며 재사용되지 않습니다.
/// - 하나의 기업은 동시에 한 번만 등록될 수 있습니다.
/// - 목록은 항상 `favoriteId` 내림차순(최신 등록 우선)입니다.
#[derive(Debug)]
pub struct FavoriteStore {
    directory: CompanyDirectory,
    /// favoriteId → 레코드. BTreeMap 역방향 순회가 곧 내림차순 목록.
    items: BTreeMap<i64, FavoriteItem>,
    /// 등록된 기업 ID 중복 검사용 인덱스
    company_index: HashSet<i64>,
    /// 다음에 발급할 favoriteId
    next_id: i64,
}

impl FavoriteStore {
    /// 빈 저장소 생성.
    pub fn new(directory: CompanyDirectory) -> Self {
        Self {
            directory,
            items: BTreeMap::new(),
            company_index: HashSet::new(),
            next_id: 1,
        }
    }

    /// 데모 시드가 채워진 저장소 생성.
    ///
    /// 시드 이후 발급되는 favoriteId는 시드 최대값 다음부터 시작합니다.
    pub fn with_demo_data(directory: CompanyDirectory) -> Self {
        let mut store = Self::new(directory);

        for &(favorite_id, company_id, days_ago) in DEMO_FAVORITES {
            let profile = store.directory.display_for(company_id);
            let created_at = Utc::now() - Duration::days(days_ago);
            store
                .items
                .insert(favorite_id, FavoriteItem::new(favorite_id, company_id, profile, created_at));
            store.company_index.insert(company_id);
        }

        let max_seed_id = DEMO_FAVORITES.iter().map(|&(id, _, _)| id).max().unwrap_or(0);
        store.next_id = max_seed_id + 1;

        info!(count = store.items.len(), next_id = store.next_id, "데모 관심기업 시드 완료");
        store
    }

    /// 관심기업 목록 조회 (favoriteId 내림차순)
    pub fn list(&self) -> Vec<FavoriteItem> {
        self.items.values().rev().cloned().collect()
    }

    /// 관심기업 등록.
    ///
    /// 이미 등록된 기업이면 `StoreError::DuplicateCompany`를 반환하고
    /// 저장소는 변경되지 않습니다.
    pub fn add(&mut self, company_id: i64) -> Result<FavoriteItem> {
        if self.company_index.contains(&company_id) {
            return Err(StoreError::DuplicateCompany { company_id });
        }

        let favorite_id = self.next_id;
        self.next_id += 1;

        let profile = self.directory.display_for(company_id);
        let item = FavoriteItem::new(favorite_id, company_id, profile, Utc::now());

        self.company_index.insert(company_id);
        self.items.insert(favorite_id, item.clone());

        debug!(favorite_id, company_id, "관심기업 등록");
        Ok(item)
    }

    /// 관심기업 삭제.
    ///
    /// 없는 favoriteId면 `StoreError::FavoriteNotFound`를 반환하고
    /// 저장소는 변경되지 않습니다. 삭제된 기업은 새 favoriteId로
    /// 다시 등록할 수 있습니다.
    pub fn remove(&mut self, favorite_id: i64) -> Result<()> {
        let item = self
            .items
            .remove(&favorite_id)
            .ok_or(StoreError::FavoriteNotFound { favorite_id })?;

        self.company_index.remove(&item.company_id);

        debug!(favorite_id, company_id = item.company_id, "관심기업 삭제");
        Ok(())
    }

    /// 기업 등록 여부 조회.
    pub fn contains_company(&self, company_id: i64) -> bool {
        self.company_index.contains(&company_id)
    }

    /// 등록된 관심기업 수
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 저장소가 비어 있는지 여부
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
