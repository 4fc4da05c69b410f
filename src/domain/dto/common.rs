//! 공통 응답 봉투 및 페이징 파라미터
//!
//! 변경 연산은 `{success, message, data}` 형태의 [`ApiResponse`]로,
//! 페이지네이션 조회는 `{total, result}` 형태의 [`PagingResponse`]로
//! 응답합니다.

use serde::{Deserialize, Serialize};

/// 변경 연산의 API 응답 봉투
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    /// 성공 응답 생성
    pub fn ok(message: &str, data: Option<serde_json::Value>) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }

    /// success 값을 결과에 따라 채우는 응답 생성 (멱등 삭제 등)
    pub fn with_success(success: bool, message: &str) -> Self {
        Self {
            success,
            message: message.to_string(),
            data: None,
        }
    }
}

/// 페이지네이션 조회 응답 봉투
#[derive(Debug, Serialize, Deserialize)]
pub struct PagingResponse<T> {
    /// 필터를 독립적으로 적용한 전체 건수
    pub total: i64,
    pub result: Vec<T>,
}

/// 페이지 번호 (1부터 시작)
const DEFAULT_PAGE: i64 = 1;
/// 페이지당 항목 수 기본값
const DEFAULT_SIZE: i64 = 10;
/// 페이지당 항목 수 상한
const MAX_SIZE: i64 = 50;

/// 페이지네이션 쿼리 파라미터
///
/// `page`는 1 이상, `size`는 1-50 범위로 라우트 경계에서 보정됩니다.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

/// 보정이 끝난 페이징 파라미터
#[derive(Debug)]
pub struct PageParams {
    pub offset: i64,
    pub size: i64,
    pub search: Option<String>,
}

impl PageQuery {
    /// page/size를 허용 범위로 보정하고 offset을 계산합니다.
    pub fn into_params(self) -> PageParams {
        let page = self.page.unwrap_or(DEFAULT_PAGE).max(1);
        let size = self.size.unwrap_or(DEFAULT_SIZE).clamp(1, MAX_SIZE);

        PageParams {
            offset: (page - 1) * size,
            size,
            search: self.search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_defaults() {
        let params = PageQuery {
            page: None,
            size: None,
            search: None,
        }
        .into_params();

        assert_eq!(params.offset, 0);
        assert_eq!(params.size, 10);
    }

    #[test]
    fn test_page_query_clamps_size_to_fifty() {
        let params = PageQuery {
            page: Some(2),
            size: Some(500),
            search: None,
        }
        .into_params();

        assert_eq!(params.size, 50);
        assert_eq!(params.offset, 50);
    }

    #[test]
    fn test_page_query_floors_invalid_values() {
        let params = PageQuery {
            page: Some(0),
            size: Some(0),
            search: None,
        }
        .into_params();

        assert_eq!(params.size, 1);
        assert_eq!(params.offset, 0);
    }

    #[test]
    fn test_page_query_offset_calculation() {
        let params = PageQuery {
            page: Some(3),
            size: Some(20),
            search: None,
        }
        .into_params();

        assert_eq!(params.offset, 40);
        assert_eq!(params.size, 20);
    }
}
