//! 장소 조회 비즈니스 로직 서비스
//!
//! 검색어 트리밍 등 경계 규칙을 적용하고 리포지토리에 위임합니다.
//! 뷰어 ID는 그대로 전달되어 단일 쿼리의 북마크 플래그 계산에
//! 사용됩니다.

use std::sync::Arc;

use crate::domain::dto::places::PlaceResponse;
use crate::errors::{AppError, AppResult};
use crate::repositories::places::PlaceRepository;
use crate::utils::string_utils::clean_optional_string;

/// 장소 조회 서비스
pub struct PlaceService {
    place_repo: Arc<PlaceRepository>,
}

impl PlaceService {
    pub fn new(place_repo: Arc<PlaceRepository>) -> Self {
        Self { place_repo }
    }

    /// 페이지네이션 장소 목록 조회
    ///
    /// 검색어는 트리밍되며 공백뿐인 검색어는 "필터 없음"으로 취급합니다.
    /// 전체 건수는 페이징과 무관하게 동일한 필터로 독립 계산됩니다.
    pub async fn list_places(
        &self,
        offset: i64,
        limit: i64,
        search: Option<String>,
        viewer_id: Option<i64>,
    ) -> AppResult<(i64, Vec<PlaceResponse>)> {
        let search = clean_optional_string(search);

        let total = self.place_repo.count(search.as_deref()).await?;
        let result = self
            .place_repo
            .list(offset, limit, search.as_deref(), viewer_id)
            .await?;

        Ok((total, result))
    }

    /// 단일 장소 조회
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 장소가 존재하지 않음
    pub async fn get_place_detail(
        &self,
        place_id: i64,
        viewer_id: Option<i64>,
    ) -> AppResult<PlaceResponse> {
        self.place_repo
            .find_by_id(place_id, viewer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("장소를 찾을 수 없습니다".to_string()))
    }
}
