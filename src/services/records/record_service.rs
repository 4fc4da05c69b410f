//! 수영 기록 비즈니스 로직 서비스
//!
//! 기록 생성 시 경계 기본값(오늘, 현재 시각, 25m 레인, 0m, 빈 메모)을
//! 적용하고 리포지토리에 위임합니다. `end_time >= start_time` 검증은
//! 수행하지 않으며, 장소 존재 여부는 FK 제약에 위임합니다.

use std::sync::Arc;

use chrono::Local;

use crate::domain::dto::records::{RecordCreateRequest, RecordResponse};
use crate::domain::entities::Record;
use crate::errors::{AppError, AppResult};
use crate::repositories::records::{NewRecord, RecordRepository};

/// 레인 길이 기본값 (미터)
const DEFAULT_POOL_LENGTH: i32 = 25;

/// 수영 기록 서비스
pub struct RecordService {
    record_repo: Arc<RecordRepository>,
}

impl RecordService {
    pub fn new(record_repo: Arc<RecordRepository>) -> Self {
        Self { record_repo }
    }

    /// 사용자의 기록 목록 조회 (최신순)
    pub async fn list_records(
        &self,
        offset: i64,
        limit: i64,
        user_id: i64,
    ) -> AppResult<(i64, Vec<RecordResponse>)> {
        let total = self.record_repo.count_for_user(user_id).await?;
        let result = self.record_repo.list_for_user(offset, limit, user_id).await?;

        Ok((total, result))
    }

    /// 기록 생성
    ///
    /// 생략된 입력에 경계 기본값을 적용합니다.
    pub async fn create(&self, user_id: i64, request: RecordCreateRequest) -> AppResult<Record> {
        let now = Local::now().naive_local();

        let data = NewRecord {
            place_id: request.place_id,
            record_date: request.record_date.unwrap_or_else(|| now.date()),
            start_time: request.start_time.unwrap_or_else(|| now.time()),
            end_time: request.end_time.unwrap_or_else(|| now.time()),
            pool_length: request.pool_length.unwrap_or(DEFAULT_POOL_LENGTH),
            swim_distance: request.swim_distance.unwrap_or(0),
            memo: request.memo.unwrap_or_default(),
        };

        self.record_repo.create(user_id, data).await
    }

    /// 소유자 범위 단일 기록 조회
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::NotFound)` - 기록이 없거나 다른 사용자의 기록
    pub async fn get_detail(&self, record_id: i64, user_id: i64) -> AppResult<RecordResponse> {
        self.record_repo
            .find_by_id(record_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("기록을 찾을 수 없습니다".to_string()))
    }
}
