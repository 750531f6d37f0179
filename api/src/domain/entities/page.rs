//! Pagination types for trip listings

use serde::Serialize;

use super::TripSummary;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A normalized, 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Coerce raw caller input: a page below 1 becomes 1, a size below 1 becomes 10
    pub fn coerce(page: i64, page_size: i64) -> Self {
        Self {
            page: if page < 1 { DEFAULT_PAGE } else { page as u64 },
            page_size: if page_size < 1 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size as u64
            },
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// ceil(total / page_size)
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }
}

/// One page of trips plus pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct TripPage {
    pub page_num: u64,
    pub page_size: u64,
    pub all_pages: u64,
    pub trips: Vec<TripSummary>,
}
