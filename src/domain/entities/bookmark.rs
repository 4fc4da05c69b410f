//! 북마크 엔티티
//!
//! 사용자와 장소 사이의 저장된 참조입니다. (user_id, place_id) 쌍은
//! 스키마 수준에서 유니크합니다.

use sqlx::FromRow;

/// 북마크 엔티티
#[derive(Debug, Clone, FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub user_id: i64,
    pub place_id: i64,
}
