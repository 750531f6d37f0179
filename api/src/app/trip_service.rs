//! Trip service
//!
//! Paginated, read-only listing of the trip catalog.

use std::sync::Arc;

use crate::domain::entities::{PageRequest, TripPage};
use crate::domain::ports::TripCatalog;
use crate::error::DomainError;

/// Service for browsing trips
pub struct TripService<C>
where
    C: TripCatalog,
{
    catalog: Arc<C>,
}

impl<C> TripService<C>
where
    C: TripCatalog,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// List one page of trips, latest start date first.
    ///
    /// `page` below 1 is treated as 1 and `page_size` below 1 as 10. A page
    /// past the end yields no trips but still reports the page count.
    pub async fn list_trips(&self, page: i64, page_size: i64) -> Result<TripPage, DomainError> {
        let request = PageRequest::coerce(page, page_size);

        let total = self.catalog.count_trips().await?;
        let offset = request.offset();
        let trips = if offset >= total {
            Vec::new()
        } else {
            self.catalog.list_trips(offset, request.page_size).await?
        };

        Ok(TripPage {
            page_num: request.page,
            page_size: request.page_size,
            all_pages: request.page_count(total),
            trips,
        })
    }
}
