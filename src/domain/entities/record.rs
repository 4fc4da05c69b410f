//! 수영 기록 엔티티
//!
//! 사용자가 소유하고 장소를 참조하는 수영 세션 기록입니다.
//! 생성한 사용자만 조회할 수 있으며, 소유권 이전은 없습니다.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// 수영 기록 엔티티
#[derive(Debug, Clone, FromRow)]
pub struct Record {
    pub id: i64,
    pub user_id: i64,
    pub place_id: i64,
    /// 수영한 날짜
    pub record_date: NaiveDate,
    /// 시작 시각
    pub start_time: NaiveTime,
    /// 종료 시각
    pub end_time: NaiveTime,
    /// 레인 길이 (미터)
    pub pool_length: i32,
    /// 수영 거리 (미터)
    pub swim_distance: i32,
    pub memo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
