//! Pagination over the review ledger.
//!
//! Pages are 1-based; a page maps onto an inclusive, zero-based list range
//! `start = (page - 1) * limit`, `end = start + limit - 1`.

use crate::errors::ServiceError;

pub const MAX_LIMIT: u32 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub limit: u32,
}

impl Pagination {
    /// Apply defaults (page 1, limit 1) and reject non-positive or oversized values.
    pub fn from_query(page: Option<u32>, limit: Option<u32>) -> Result<Self, ServiceError> {
        let d = Self::default();
        let page = page.unwrap_or(d.page);
        let limit = limit.unwrap_or(d.limit);
        if page == 0 {
            return Err(ServiceError::Validation("page must be a positive integer".into()));
        }
        if limit == 0 {
            return Err(ServiceError::Validation("limit must be a positive integer".into()));
        }
        if limit > MAX_LIMIT {
            return Err(ServiceError::Validation(format!("limit must not exceed {MAX_LIMIT}")));
        }
        Ok(Self { page, limit })
    }

    /// Inclusive `(start, end)` list indexes for this page.
    pub fn range(self) -> (i64, i64) {
        let start = i64::from(self.page - 1) * i64::from(self.limit);
        (start, start + i64::from(self.limit) - 1)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, limit: 1 } }
}
