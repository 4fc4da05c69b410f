//! 북마크 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::places::PlaceResponse;

/// 북마크 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct BookmarkCreateRequest {
    #[validate(range(min = 1, message = "유효한 장소 ID가 필요합니다"))]
    pub place_id: i64,
}

/// 북마크 조회 응답 DTO
///
/// 연관된 장소를 즉시 포함합니다.
#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: i64,
    pub place_id: i64,
    pub place: PlaceResponse,
}
