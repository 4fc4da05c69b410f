//! 장소 조회 응답 DTO
//!
//! 장소 행에 뷰어별 북마크 여부를 덧붙인 조회 전용 뷰입니다.
//! 리포지토리의 LEFT JOIN 결과 행에서 바로 디코딩됩니다.

use serde::Serialize;
use sqlx::FromRow;

/// 장소 조회 응답 DTO
///
/// `is_bookmark`는 뷰어가 존재하고 해당 (viewer, place) 북마크 행이
/// 있을 때만 true이며, 익명 조회에서는 항상 false입니다.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlaceResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub image_url: String,
    pub x_position: String,
    pub y_position: String,
    pub is_bookmark: bool,
}
