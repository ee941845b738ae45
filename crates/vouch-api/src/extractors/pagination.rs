//! Pagination extractor
//!
//! Extracts page-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,
    /// Maximum number of items to return
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated pagination parameters
///
/// Out-of-range values are clamped rather than rejected. The limit stays
/// optional here because each listing has its own default; handlers resolve
/// it with [`Pagination::limit_or`].
#[derive(Debug, Clone)]
pub struct Pagination {
    /// 1-based page number, at least 1
    pub page: i64,
    limit: Option<i64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: None,
        }
    }
}

impl Pagination {
    /// Page size, falling back to the endpoint default, clamped to 1-100
    pub fn limit_or(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).clamp(1, MAX_LIMIT)
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self {
            page: params.page.unwrap_or(1).max(1),
            limit: params.limit,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Pagination::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let pagination = Pagination::from(PaginationParams {
            page: None,
            limit: None,
        });
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit_or(30), 30);
        assert_eq!(pagination.limit_or(10), 10);
    }

    #[test]
    fn test_limit_clamping() {
        let pagination = Pagination::from(PaginationParams {
            page: Some(2),
            limit: Some(500),
        });
        assert_eq!(pagination.limit_or(30), MAX_LIMIT);

        let pagination = Pagination::from(PaginationParams {
            page: Some(1),
            limit: Some(0),
        });
        assert_eq!(pagination.limit_or(30), 1);
    }

    #[test]
    fn test_page_clamped_to_one() {
        let pagination = Pagination::from(PaginationParams {
            page: Some(0),
            limit: None,
        });
        assert_eq!(pagination.page, 1);

        let pagination = Pagination::from(PaginationParams {
            page: Some(-3),
            limit: None,
        });
        assert_eq!(pagination.page, 1);
    }
}
