//! # Place HTTP Handlers
//!
//! 장소 검색/조회 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 두 엔드포인트 모두 선택적 신원 계약을 가집니다: bearer 토큰이 있으면
//! 뷰어 기준의 `is_bookmark`가 계산되고, 없으면 항상 false입니다.

use actix_web::{get, web, HttpResponse};

use crate::domain::auth::OptionalUser;
use crate::domain::dto::common::{PageQuery, PagingResponse};
use crate::errors::AppError;
use crate::services::places::PlaceService;

/// 장소 목록 조회 핸들러
///
/// # Endpoint
/// `GET /places?page&size&search`
///
/// `size`는 1-50으로 보정되며, `search`는 장소 이름 부분 일치 필터입니다.
#[get("")]
pub async fn get_places(
    query: web::Query<PageQuery>,
    viewer: OptionalUser,
    place_service: web::Data<PlaceService>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner().into_params();

    let (total, result) = place_service
        .list_places(params.offset, params.size, params.search, viewer.user_id())
        .await?;

    Ok(HttpResponse::Ok().json(PagingResponse { total, result }))
}

/// 장소 상세 조회 핸들러
///
/// # Endpoint
/// `GET /places/{place_id}`
///
/// 존재하지 않는 장소는 404로 응답합니다.
#[get("/{place_id}")]
pub async fn get_place_detail(
    path: web::Path<i64>,
    viewer: OptionalUser,
    place_service: web::Data<PlaceService>,
) -> Result<HttpResponse, AppError> {
    let place_id = path.into_inner();

    let place = place_service
        .get_place_detail(place_id, viewer.user_id())
        .await?;

    Ok(HttpResponse::Ok().json(place))
}
