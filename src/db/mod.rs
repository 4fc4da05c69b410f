//! 데이터베이스 연결 및 스키마 관리 모듈
//!
//! SQLite 커넥션 풀을 생성하고 서비스가 사용하는 테이블을
//! 멱등적으로 생성합니다. 유니크 제약(이메일, 닉네임, (user, place)
//! 북마크 쌍, (provider, provider_user_id))과 외래 키 제약은 모두
//! 스키마 수준에서 강제되며, 위반은 리포지토리 경계에서 도메인 에러로
//! 번역됩니다.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::DatabaseConfig;

/// 서비스 테이블 스키마
///
/// `place`는 외부에서 일괄 적재되는 참조 데이터로, 이 서비스는
/// 조회만 수행합니다. 날짜/시간 컬럼은 chrono 타입과 호환되는
/// TEXT 표현으로 저장됩니다.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS user (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    nickname         TEXT NOT NULL UNIQUE,
    email            TEXT UNIQUE,
    password         TEXT,
    profile_image    TEXT,
    provider         TEXT,
    provider_user_id TEXT,
    created_at       TEXT NOT NULL,
    updated_at       TEXT NOT NULL,
    UNIQUE (provider, provider_user_id)
);

CREATE TABLE IF NOT EXISTS place (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    address    TEXT NOT NULL,
    image_url  TEXT NOT NULL DEFAULT 'https://placehold.co/600x400?text=pool',
    x_position TEXT NOT NULL,
    y_position TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_place_name ON place (name);

CREATE TABLE IF NOT EXISTS bookmark (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id  INTEGER NOT NULL REFERENCES user (id),
    place_id INTEGER NOT NULL REFERENCES place (id),
    UNIQUE (user_id, place_id)
);

CREATE TABLE IF NOT EXISTS record (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id       INTEGER NOT NULL REFERENCES user (id),
    place_id      INTEGER NOT NULL REFERENCES place (id),
    record_date   TEXT NOT NULL,
    start_time    TEXT NOT NULL,
    end_time      TEXT NOT NULL,
    pool_length   INTEGER NOT NULL DEFAULT 25,
    swim_distance INTEGER NOT NULL DEFAULT 0,
    memo          TEXT NOT NULL DEFAULT '',
    created_at    TEXT NOT NULL,
    updated_at    TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_record_user_date ON record (user_id, record_date DESC, start_time DESC);
"#;

/// 커넥션 풀을 생성하고 스키마를 초기화합니다.
///
/// 연결 실패는 호출자(`main`)에서 처리합니다.
pub async fn init_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// 테이블과 인덱스를 멱등적으로 생성합니다.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// 테스트용 인메모리 풀
///
/// 인메모리 SQLite는 커넥션마다 별도 데이터베이스를 가지므로
/// 풀 크기를 1로 고정합니다.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    init_schema(&pool).await.unwrap();

    pool
}
