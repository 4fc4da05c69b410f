//! # 장소 리포지토리 구현
//!
//! 장소 목록/상세 조회의 데이터 액세스 계층입니다. 장소는 외부에서
//! 일괄 적재되는 참조 데이터이며 이 서비스는 조회만 수행합니다.
//!
//! ## 뷰어별 북마크 플래그
//!
//! `is_bookmark`는 뷰어 ID를 조인 조건에 바인딩한 단일 LEFT JOIN으로
//! 계산됩니다. 뷰어가 없으면 NULL이 바인딩되어 조인 조건이 결코 참이
//! 되지 않으므로 플래그는 항상 false입니다. 로그인 여부에 따라 쿼리
//! 모양이 갈라지지 않고, 행별 추가 쿼리도 없습니다.

use sqlx::SqlitePool;

use crate::domain::dto::places::PlaceResponse;
use crate::errors::AppResult;

/// 장소 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct PlaceRepository {
    pool: SqlitePool,
}

const PLACE_SELECT: &str = "\
SELECT
    place.id,
    place.name,
    place.address,
    place.image_url,
    place.x_position,
    place.y_position,
    bookmark.id IS NOT NULL AS is_bookmark
FROM place
LEFT JOIN bookmark
    ON bookmark.place_id = place.id AND bookmark.user_id = ?";

impl PlaceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 이름 부분 일치 필터를 적용한 전체 장소 수
    ///
    /// 목록 쿼리와 동일한 필터를 독립적으로 적용합니다. 검색어가 없으면
    /// 전체 건수를 반환합니다.
    pub async fn count(&self, search: Option<&str>) -> AppResult<i64> {
        let pattern = like_pattern(search);

        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM place WHERE name LIKE ?")
            .bind(pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    /// 페이지네이션 장소 목록 조회
    ///
    /// # 인자
    ///
    /// * `offset` / `limit` - 페이징 (상한 보정은 라우트 경계 책임)
    /// * `search` - 트리밍이 끝난 검색어 (None이면 필터 없음)
    /// * `viewer_id` - 로그인한 뷰어의 사용자 ID (익명이면 None)
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        viewer_id: Option<i64>,
    ) -> AppResult<Vec<PlaceResponse>> {
        let pattern = like_pattern(search);
        let query = format!("{} WHERE place.name LIKE ? LIMIT ? OFFSET ?", PLACE_SELECT);

        sqlx::query_as::<_, PlaceResponse>(&query)
            .bind(viewer_id)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    /// 단일 장소 조회
    ///
    /// 목록과 동일한 북마크 플래그 규칙을 적용하며, 해당 ID의 장소가
    /// 없으면 None을 반환합니다.
    pub async fn find_by_id(
        &self,
        place_id: i64,
        viewer_id: Option<i64>,
    ) -> AppResult<Option<PlaceResponse>> {
        let query = format!("{} WHERE place.id = ?", PLACE_SELECT);

        sqlx::query_as::<_, PlaceResponse>(&query)
            .bind(viewer_id)
            .bind(place_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }
}

fn like_pattern(search: Option<&str>) -> String {
    format!("%{}%", search.unwrap_or(""))
}
