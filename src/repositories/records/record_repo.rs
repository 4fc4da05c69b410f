//! # 수영 기록 리포지토리 구현
//!
//! 수영 기록의 데이터 액세스 계층입니다. 모든 조회는 소유자
//! (`user_id`)로 엄격하게 범위가 제한됩니다.
//!
//! 목록은 `record_date` 내림차순, 동일 날짜는 `start_time` 내림차순으로
//! 정렬됩니다. 장소 존재 여부는 FK 제약에 위임하며, 위반은 `NotFound`로
//! 번역됩니다.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::domain::dto::places::PlaceResponse;
use crate::domain::dto::records::RecordResponse;
use crate::domain::entities::Record;
use crate::errors::{AppError, AppResult};

/// 기본값 적용이 끝난 기록 생성 입력
///
/// 경계 기본값(오늘, 현재 시각, 25m, 0m, 빈 메모)은 서비스 계층에서
/// 채워지며, 리포지토리는 완전한 값만 받습니다.
#[derive(Debug)]
pub struct NewRecord {
    pub place_id: i64,
    pub record_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub pool_length: i32,
    pub swim_distance: i32,
    pub memo: String,
}

/// 기록 목록/상세 조회의 평탄화된 행
#[derive(Debug, FromRow)]
struct RecordRow {
    id: i64,
    place_id: i64,
    record_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    pool_length: i32,
    swim_distance: i32,
    memo: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    place_name: String,
    place_address: String,
    place_image_url: String,
    place_x_position: String,
    place_y_position: String,
}

impl From<RecordRow> for RecordResponse {
    fn from(row: RecordRow) -> Self {
        RecordResponse {
            id: row.id,
            place_id: row.place_id,
            record_date: row.record_date,
            start_time: row.start_time,
            end_time: row.end_time,
            pool_length: row.pool_length,
            swim_distance: row.swim_distance,
            memo: row.memo,
            created_at: row.created_at,
            updated_at: row.updated_at,
            place: PlaceResponse {
                id: row.place_id,
                name: row.place_name,
                address: row.place_address,
                image_url: row.place_image_url,
                x_position: row.place_x_position,
                y_position: row.place_y_position,
                is_bookmark: false,
            },
        }
    }
}

const RECORD_SELECT: &str = "\
SELECT
    record.id,
    record.place_id,
    record.record_date,
    record.start_time,
    record.end_time,
    record.pool_length,
    record.swim_distance,
    record.memo,
    record.created_at,
    record.updated_at,
    place.name AS place_name,
    place.address AS place_address,
    place.image_url AS place_image_url,
    place.x_position AS place_x_position,
    place.y_position AS place_y_position
FROM record
JOIN place ON place.id = record.place_id";

/// 수영 기록 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct RecordRepository {
    pool: SqlitePool,
}

impl RecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 사용자의 전체 기록 수
    pub async fn count_for_user(&self, user_id: i64) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM record WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    /// 사용자의 기록 목록 조회 (최신순, 연관 장소 즉시 포함)
    pub async fn list_for_user(
        &self,
        offset: i64,
        limit: i64,
        user_id: i64,
    ) -> AppResult<Vec<RecordResponse>> {
        let query = format!(
            "{} WHERE record.user_id = ? \
             ORDER BY record.record_date DESC, record.start_time DESC \
             LIMIT ? OFFSET ?",
            RECORD_SELECT
        );

        let rows = sqlx::query_as::<_, RecordRow>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// 기록 생성
    ///
    /// 단일 INSERT ... RETURNING 문장으로 원자적으로 수행됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Record)` - 생성된 기록
    /// * `Err(AppError::NotFound)` - 존재하지 않는 장소 (FK 위반)
    pub async fn create(&self, user_id: i64, data: NewRecord) -> AppResult<Record> {
        let now = Utc::now();

        sqlx::query_as::<_, Record>(
            "INSERT INTO record \
             (user_id, place_id, record_date, start_time, end_time, pool_length, swim_distance, memo, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, user_id, place_id, record_date, start_time, end_time, \
                       pool_length, swim_distance, memo, created_at, updated_at",
        )
        .bind(user_id)
        .bind(data.place_id)
        .bind(data.record_date)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(data.pool_length)
        .bind(data.swim_distance)
        .bind(&data.memo)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_sqlx(e, "기록을 생성할 수 없습니다", "장소를 찾을 수 없습니다")
        })
    }

    /// 소유자 범위 단일 기록 조회
    ///
    /// 소유자가 아닌 사용자의 기록은 존재하더라도 None을 반환합니다.
    pub async fn find_by_id(
        &self,
        record_id: i64,
        user_id: i64,
    ) -> AppResult<Option<RecordResponse>> {
        let query = format!("{} WHERE record.id = ? AND record.user_id = ?", RECORD_SELECT);

        let row = sqlx::query_as::<_, RecordRow>(&query)
            .bind(record_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

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

    fn new_record(place_id: i64, date: &str, start: &str) -> NewRecord {
        NewRecord {
            place_id,
            record_date: date.parse().unwrap(),
            start_time: start.parse().unwrap(),
            end_time: "23:00:00".parse().unwrap(),
            pool_length: 25,
            swim_distance: 1000,
            memo: String::new(),
        }
    }

    #[actix_web::test]
    async fn test_list_orders_by_date_then_start_time_desc() {
        let pool = db::memory_pool().await;
        let repo = RecordRepository::new(pool.clone());

        let user_id = seed_user(&pool, "유저").await;
        let place_id = seed_place(&pool, "잠실 수영장").await;

        repo.create(user_id, new_record(place_id, "2024-01-01", "09:00:00"))
            .await
            .unwrap();
        repo.create(user_id, new_record(place_id, "2024-01-02", "09:00:00"))
            .await
            .unwrap();
        repo.create(user_id, new_record(place_id, "2024-01-01", "18:00:00"))
            .await
            .unwrap();

        let records = repo.list_for_user(0, 10, user_id).await.unwrap();
        let keys: Vec<(String, String)> = records
            .iter()
            .map(|r| (r.record_date.to_string(), r.start_time.to_string()))
            .collect();

        assert_eq!(
            keys,
            vec![
                ("2024-01-02".to_string(), "09:00:00".to_string()),
                ("2024-01-01".to_string(), "18:00:00".to_string()),
                ("2024-01-01".to_string(), "09:00:00".to_string()),
            ]
        );
    }

    #[actix_web::test]
    async fn test_list_is_scoped_to_owner() {
        let pool = db::memory_pool().await;
        let repo = RecordRepository::new(pool.clone());

        let me = seed_user(&pool, "나").await;
        let other = seed_user(&pool, "남").await;
        let place_id = seed_place(&pool, "잠실 수영장").await;

        repo.create(me, new_record(place_id, "2024-01-01", "09:00:00"))
            .await
            .unwrap();
        repo.create(other, new_record(place_id, "2024-01-02", "09:00:00"))
            .await
            .unwrap();

        assert_eq!(repo.count_for_user(me).await.unwrap(), 1);
        let records = repo.list_for_user(0, 10, me).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record_date.to_string(), "2024-01-01");
        assert_eq!(records[0].place.name, "잠실 수영장");
    }

    #[actix_web::test]
    async fn test_detail_returns_owned_record() {
        let pool = db::memory_pool().await;
        let repo = RecordRepository::new(pool.clone());

        let user_id = seed_user(&pool, "유저").await;
        let place_id = seed_place(&pool, "잠실 수영장").await;
        let created = repo
            .create(user_id, new_record(place_id, "2024-01-01", "09:00:00"))
            .await
            .unwrap();

        let detail = repo.find_by_id(created.id, user_id).await.unwrap().unwrap();
        assert_eq!(detail.id, created.id);
        assert_eq!(detail.swim_distance, 1000);
        assert_eq!(detail.place.name, "잠실 수영장");
    }

    #[actix_web::test]
    async fn test_detail_hides_other_users_record() {
        let pool = db::memory_pool().await;
        let repo = RecordRepository::new(pool.clone());

        let owner = seed_user(&pool, "주인").await;
        let other = seed_user(&pool, "남").await;
        let place_id = seed_place(&pool, "잠실 수영장").await;
        let created = repo
            .create(owner, new_record(place_id, "2024-01-01", "09:00:00"))
            .await
            .unwrap();

        assert!(repo.find_by_id(created.id, other).await.unwrap().is_none());
        assert!(repo.find_by_id(9999, owner).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_create_for_unknown_place_is_not_found() {
        let pool = db::memory_pool().await;
        let repo = RecordRepository::new(pool.clone());

        let user_id = seed_user(&pool, "유저").await;

        let err = repo
            .create(user_id, new_record(9999, "2024-01-01", "09:00:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
