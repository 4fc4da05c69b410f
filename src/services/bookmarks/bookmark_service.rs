//! 북마크 비즈니스 로직 서비스
//!
//! 사용자 범위의 북마크 목록/생성/삭제를 담당합니다.
//! 생성의 유니크 보장은 저장소 제약에 위임합니다.

use std::sync::Arc;

use crate::domain::dto::bookmarks::BookmarkResponse;
use crate::domain::entities::Bookmark;
use crate::errors::AppResult;
use crate::repositories::bookmarks::BookmarkRepository;
use crate::utils::string_utils::clean_optional_string;

/// 북마크 서비스
pub struct BookmarkService {
    bookmark_repo: Arc<BookmarkRepository>,
}

impl BookmarkService {
    pub fn new(bookmark_repo: Arc<BookmarkRepository>) -> Self {
        Self { bookmark_repo }
    }

    /// 사용자의 북마크 목록 조회
    ///
    /// 트리밍된 검색어가 있으면 장소 이름으로 추가 필터링합니다.
    /// 전체 건수가 0이면 페이지 조회 없이 즉시 빈 결과를 반환합니다.
    pub async fn list_bookmarks(
        &self,
        offset: i64,
        limit: i64,
        search: Option<String>,
        user_id: i64,
    ) -> AppResult<(i64, Vec<BookmarkResponse>)> {
        let search = clean_optional_string(search);

        let total = self
            .bookmark_repo
            .count_for_user(user_id, search.as_deref())
            .await?;
        if total == 0 {
            return Ok((0, Vec::new()));
        }

        let result = self
            .bookmark_repo
            .list_for_user(offset, limit, search.as_deref(), user_id)
            .await?;

        Ok((total, result))
    }

    /// 북마크 생성
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::ConflictError)` - 이미 같은 (user, place) 쌍 존재
    /// * `Err(AppError::NotFound)` - 존재하지 않는 장소
    pub async fn create(&self, user_id: i64, place_id: i64) -> AppResult<Bookmark> {
        self.bookmark_repo.create(user_id, place_id).await
    }

    /// 북마크 삭제
    ///
    /// 일치하는 행이 있었으면 true, 없었으면 false를 반환합니다.
    /// 없는 북마크 삭제는 에러가 아닙니다.
    pub async fn delete(&self, user_id: i64, place_id: i64) -> AppResult<bool> {
        self.bookmark_repo.delete(user_id, place_id).await
    }
}
