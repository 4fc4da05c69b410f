//! 수영 기록 요청/응답 DTO

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::places::PlaceResponse;
use crate::utils::string_utils::deserialize_optional_string;

/// 수영 기록 생성 요청
///
/// 날짜/시간/레인 길이/거리/메모는 모두 생략 가능하며, 생략 시
/// 경계에서 기본값(오늘, 현재 시각, 25m, 0m, 빈 메모)이 적용됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct RecordCreateRequest {
    #[validate(range(min = 1, message = "유효한 장소 ID가 필요합니다"))]
    pub place_id: i64,

    pub record_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub pool_length: Option<i32>,
    pub swim_distance: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub memo: Option<String>,
}

/// 수영 기록 조회 응답 DTO
///
/// 연관된 장소를 즉시 포함합니다.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub id: i64,
    pub place_id: i64,
    pub record_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub pool_length: i32,
    pub swim_distance: i32,
    pub memo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub place: PlaceResponse,
}
