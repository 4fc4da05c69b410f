//! # Record HTTP Handlers
//!
//! 수영 기록 목록/생성/상세 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 엔드포인트는 bearer 인증이 필요하며, 기록은 생성한 사용자만
//! 조회할 수 있습니다.

use actix_web::{get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::common::{ApiResponse, PageQuery, PagingResponse};
use crate::domain::dto::records::RecordCreateRequest;
use crate::errors::AppError;
use crate::services::records::RecordService;

/// 기록 목록 조회 핸들러
///
/// # Endpoint
/// `GET /records?page&size`
///
/// `record_date` 내림차순, 동일 날짜는 `start_time` 내림차순으로
/// 정렬됩니다.
#[get("")]
pub async fn get_records(
    query: web::Query<PageQuery>,
    user: AuthenticatedUser,
    record_service: web::Data<RecordService>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner().into_params();

    let (total, result) = record_service
        .list_records(params.offset, params.size, user.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(PagingResponse { total, result }))
}

/// 기록 생성 핸들러
///
/// # Endpoint
/// `POST /records`
///
/// 날짜/시간/레인 길이/거리/메모는 생략 가능하며 경계 기본값이
/// 적용됩니다.
#[post("")]
pub async fn create_record(
    payload: web::Json<RecordCreateRequest>,
    user: AuthenticatedUser,
    record_service: web::Data<RecordService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let record = record_service
        .create(user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Record created successfully",
        Some(json!({ "record_id": record.id })),
    )))
}

/// 기록 상세 조회 핸들러
///
/// # Endpoint
/// `GET /records/{record_id}`
///
/// 다른 사용자의 기록은 존재하더라도 404로 응답합니다.
#[get("/{record_id}")]
pub async fn get_record_detail(
    path: web::Path<i64>,
    user: AuthenticatedUser,
    record_service: web::Data<RecordService>,
) -> Result<HttpResponse, AppError> {
    let record_id = path.into_inner();

    let record = record_service.get_detail(record_id, user.user_id).await?;

    Ok(HttpResponse::Ok().json(record))
}
