//! # Bookmark HTTP Handlers
//!
//! 북마크 목록/생성/삭제 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 엔드포인트는 bearer 인증이 필요하며, 항상 인증된 사용자
//! 본인의 북마크만 다룹니다.

use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::bookmarks::BookmarkCreateRequest;
use crate::domain::dto::common::{ApiResponse, PageQuery, PagingResponse};
use crate::errors::AppError;
use crate::services::bookmarks::BookmarkService;

/// 북마크 목록 조회 핸들러
///
/// # Endpoint
/// `GET /bookmarks?page&size&search`
#[get("")]
pub async fn get_bookmarks(
    query: web::Query<PageQuery>,
    user: AuthenticatedUser,
    bookmark_service: web::Data<BookmarkService>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner().into_params();

    let (total, result) = bookmark_service
        .list_bookmarks(params.offset, params.size, params.search, user.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(PagingResponse { total, result }))
}

/// 북마크 생성 핸들러
///
/// # Endpoint
/// `POST /bookmarks`
///
/// 같은 장소를 두 번 북마크하면 409, 존재하지 않는 장소면 404입니다.
#[post("")]
pub async fn create_bookmark(
    payload: web::Json<BookmarkCreateRequest>,
    user: AuthenticatedUser,
    bookmark_service: web::Data<BookmarkService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let bookmark = bookmark_service
        .create(user.user_id, payload.place_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Bookmark created successfully",
        Some(json!({ "bookmark_id": bookmark.id })),
    )))
}

/// 북마크 삭제 핸들러
///
/// # Endpoint
/// `DELETE /bookmarks/{place_id}`
///
/// 없는 북마크 삭제는 에러가 아니며 `success: false`로 응답합니다.
#[delete("/{place_id}")]
pub async fn delete_bookmark(
    path: web::Path<i64>,
    user: AuthenticatedUser,
    bookmark_service: web::Data<BookmarkService>,
) -> Result<HttpResponse, AppError> {
    let place_id = path.into_inner();

    let deleted = bookmark_service.delete(user.user_id, place_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_success(
        deleted,
        "Bookmark deleted successfully",
    )))
}
