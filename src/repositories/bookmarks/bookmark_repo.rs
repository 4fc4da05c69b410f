//! # 북마크 리포지토리 구현
//!
//! (사용자, 장소) 북마크 연관의 데이터 액세스 계층입니다.
//!
//! ## 유니크 제약
//!
//! 사용자당 장소당 최대 1개의 북마크는 `UNIQUE (user_id, place_id)`
//! 제약으로 저장소 수준에서 강제됩니다. 사전 조회로 검사하지 않으며,
//! 위반은 `ConflictError`로 번역됩니다.

use sqlx::{FromRow, SqlitePool};

use crate::domain::dto::bookmarks::BookmarkResponse;
use crate::domain::dto::places::PlaceResponse;
use crate::domain::entities::Bookmark;
use crate::errors::{AppError, AppResult};

/// 북마크 목록 조회의 평탄화된 행
#[derive(Debug, FromRow)]
struct BookmarkRow {
    id: i64,
    place_id: i64,
    name: String,
    address: String,
    image_url: String,
    x_position: String,
    y_position: String,
}

impl From<BookmarkRow> for BookmarkResponse {
    fn from(row: BookmarkRow) -> Self {
        BookmarkResponse {
            id: row.id,
            place_id: row.place_id,
            place: PlaceResponse {
                id: row.place_id,
                name: row.name,
                address: row.address,
                image_url: row.image_url,
                x_position: row.x_position,
                y_position: row.y_position,
                // 북마크 목록 안의 장소는 정의상 북마크된 장소
                is_bookmark: true,
            },
        }
    }
}

/// 북마크 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct BookmarkRepository {
    pool: SqlitePool,
}

impl BookmarkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 사용자의 북마크 수 (장소 이름 필터 포함)
    pub async fn count_for_user(&self, user_id: i64, search: Option<&str>) -> AppResult<i64> {
        let pattern = like_pattern(search);

        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) \
             FROM bookmark \
             JOIN place ON place.id = bookmark.place_id \
             WHERE bookmark.user_id = ? AND place.name LIKE ?",
        )
        .bind(user_id)
        .bind(pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(Into::into)
    }

    /// 사용자의 북마크 목록 조회 (연관 장소 즉시 포함)
    pub async fn list_for_user(
        &self,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        user_id: i64,
    ) -> AppResult<Vec<BookmarkResponse>> {
        let pattern = like_pattern(search);

        let rows = sqlx::query_as::<_, BookmarkRow>(
            "SELECT
                 bookmark.id,
                 bookmark.place_id,
                 place.name,
                 place.address,
                 place.image_url,
                 place.x_position,
                 place.y_position
             FROM bookmark
             JOIN place ON place.id = bookmark.place_id
             WHERE bookmark.user_id = ? AND place.name LIKE ?
             LIMIT ? OFFSET ?",
        )
        .bind(user_id)
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// 북마크 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(Bookmark)` - 생성된 북마크
    /// * `Err(AppError::ConflictError)` - 이미 같은 (user, place) 쌍 존재
    /// * `Err(AppError::NotFound)` - 존재하지 않는 장소 (FK 위반)
    pub async fn create(&self, user_id: i64, place_id: i64) -> AppResult<Bookmark> {
        sqlx::query_as::<_, Bookmark>(
            "INSERT INTO bookmark (user_id, place_id) VALUES (?, ?) \
             RETURNING id, user_id, place_id",
        )
        .bind(user_id)
        .bind(place_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_sqlx(e, "이미 북마크한 장소입니다", "장소를 찾을 수 없습니다")
        })
    }

    /// 북마크 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 일치하는 행이 있어 삭제됨
    /// * `Ok(false)` - 삭제할 북마크가 없음 (에러 아님)
    pub async fn delete(&self, user_id: i64, place_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookmark WHERE user_id = ? AND place_id = ?")
            .bind(user_id)
            .bind(place_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn like_pattern(search: Option<&str>) -> String {
    format!("%{}%", search.unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use chrono::Utc;

    async fn seed_user(pool: &SqlitePool, nickname: &str) -> i64 {
        let now = Utc::now();
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO user (nickname, created_at, updated_at) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(nickname)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn seed_place(pool: &SqlitePool, name: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO place (name, address, x_position, y_position) \
             VALUES (?, '서울시 송파구', '127.07', '37.51') RETURNING id",
        )
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[actix_web::test]
    async fn test_create_then_duplicate_is_conflict() {
        let pool = db::memory_pool().await;
        let repo = BookmarkRepository::new(pool.clone());

        let user_id = seed_user(&pool, "유저").await;
        let place_id = seed_place(&pool, "잠실 수영장").await;

        let bookmark = repo.create(user_id, place_id).await.unwrap();
        assert_eq!(bookmark.user_id, user_id);
        assert_eq!(bookmark.place_id, place_id);

        let err = repo.create(user_id, place_id).await.unwrap_err();
        assert!(matches!(err, AppError::ConflictError(_)));
    }

    #[actix_web::test]
    async fn test_create_for_unknown_place_is_not_found() {
        let pool = db::memory_pool().await;
        let repo = BookmarkRepository::new(pool.clone());

        let user_id = seed_user(&pool, "유저").await;

        let err = repo.create(user_id, 9999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_delete_is_idempotent() {
        let pool = db::memory_pool().await;
        let repo = BookmarkRepository::new(pool.clone());

        let user_id = seed_user(&pool, "유저").await;
        let place_id = seed_place(&pool, "잠실 수영장").await;
        repo.create(user_id, place_id).await.unwrap();

        assert!(repo.delete(user_id, place_id).await.unwrap());
        // 존재하지 않는 북마크 삭제는 에러가 아니라 false
        assert!(!repo.delete(user_id, place_id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_list_is_scoped_to_user_and_search() {
        let pool = db::memory_pool().await;
        let repo = BookmarkRepository::new(pool.clone());

        let me = seed_user(&pool, "나").await;
        let other = seed_user(&pool, "남").await;
        let jamsil = seed_place(&pool, "잠실 수영장").await;
        let gangnam = seed_place(&pool, "강남 수영장").await;

        repo.create(me, jamsil).await.unwrap();
        repo.create(me, gangnam).await.unwrap();
        repo.create(other, jamsil).await.unwrap();

        assert_eq!(repo.count_for_user(me, None).await.unwrap(), 2);
        assert_eq!(repo.count_for_user(other, None).await.unwrap(), 1);

        let mine = repo.list_for_user(0, 10, None, me).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|b| b.place.is_bookmark));

        let filtered = repo.list_for_user(0, 10, Some("잠실"), me).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].place.name, "잠실 수영장");
        assert_eq!(repo.count_for_user(me, Some("잠실")).await.unwrap(), 1);
    }
}
