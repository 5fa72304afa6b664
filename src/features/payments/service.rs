//! Payments Service
//!
//! Simulated backend for the payments page. Every request waits for the
//! configured latency, then filters, sorts and slices the in-memory data
//! set the way a paginated API would.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use super::payment::{Payment, sample_payments};
use crate::table::{ColumnSort, PaginationState, SortingState};

/// Parameters of one page request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentsQuery {
    pub pagination: PaginationState,
    pub sorting: SortingState,
    /// Substring matched against the payment status
    pub global_filter: String,
}

/// One page of results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentsPageData {
    pub rows: Vec<Payment>,
    /// Rows matching the filter across all pages
    pub total: usize,
}

/// In-memory payments backend
#[derive(Debug, Clone)]
pub struct PaymentsService {
    payments: Arc<Vec<Payment>>,
    latency: Duration,
}

impl PaymentsService {
    pub fn new(payments: Vec<Payment>, latency: Duration) -> Self {
        Self {
            payments: Arc::new(payments),
            latency,
        }
    }

    /// Service over the built-in sample payments
    pub fn with_sample_data(latency: Duration) -> Self {
        Self::new(sample_payments(), latency)
    }

    /// Fetch one page after the simulated round trip
    ///
    /// Must run on the tokio runtime.
    pub async fn fetch_page(&self, query: PaymentsQuery) -> PaymentsPageData {
        tokio::time::sleep(self.latency).await;
        let page = self.query(&query);
        tracing::debug!(
            page = query.pagination.page_index,
            filter = %query.global_filter,
            rows = page.rows.len(),
            total = page.total,
            "Payments page served"
        );
        page
    }

    /// Answer a query immediately
    pub fn query(&self, query: &PaymentsQuery) -> PaymentsPageData {
        let mut matching: Vec<&Payment> = self
            .payments
            .iter()
            .filter(|p| p.status.as_str().contains(query.global_filter.as_str()))
            .collect();

        if let Some(sort) = query.sorting.primary() {
            matching.sort_by(|a, b| compare(a, b, sort));
        }

        let total = matching.len();
        let rows = matching
            .into_iter()
            .skip(query.pagination.offset())
            .take(query.pagination.page_size)
            .cloned()
            .collect();

        PaymentsPageData { rows, total }
    }
}

/// Order two payments by a sort column; unknown columns compare equal
fn compare(a: &Payment, b: &Payment, sort: &ColumnSort) -> Ordering {
    let ordering = match sort.id.as_str() {
        "status" => a.status.as_str().cmp(b.status.as_str()),
        "email" => a.email.cmp(&b.email),
        "amount" => a.amount.cmp(&b.amount),
        _ => Ordering::Equal,
    };
    if sort.desc { ordering.reverse() } else { ordering }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_PAGE_SIZE, SIMULATED_LATENCY_MS};

    fn service() -> PaymentsService {
        PaymentsService::with_sample_data(Duration::from_millis(SIMULATED_LATENCY_MS))
    }

    fn query(page_index: usize, filter: &str) -> PaymentsQuery {
        PaymentsQuery {
            pagination: PaginationState::new(page_index, DEFAULT_PAGE_SIZE),
            sorting: SortingState::default(),
            global_filter: filter.to_string(),
        }
    }

    fn emails(page: &PaymentsPageData) -> Vec<&str> {
        page.rows.iter().map(|p| p.email.as_str()).collect()
    }

    #[test]
    fn test_pages_are_sliced_by_pagination() {
        let first = service().query(&query(0, ""));
        assert_eq!(first.total, 7);
        assert_eq!(emails(&first), ["1", "2", "3", "4", "5"]);

        let second = service().query(&query(1, ""));
        assert_eq!(second.total, 7);
        assert_eq!(emails(&second), ["6", "7"]);

        assert!(service().query(&query(2, "")).rows.is_empty());
    }

    #[test]
    fn test_global_filter_matches_status_substring() {
        let page = service().query(&query(0, "pend"));
        assert_eq!(page.total, 5);
        assert!(page.rows.iter().all(|p| p.status.as_str() == "pending"));

        let zebra = service().query(&query(0, "ebr"));
        assert_eq!(emails(&zebra), ["4"]);

        assert_eq!(service().query(&query(0, "missing")).total, 0);
    }

    #[test]
    fn test_sorting_applies_before_slicing() {
        let mut q = query(0, "");
        q.sorting = SortingState(vec![ColumnSort {
            id: "email".to_string(),
            desc: true,
        }]);
        assert_eq!(emails(&service().query(&q)), ["7", "6", "5", "4", "3"]);

        q.sorting = SortingState(vec![ColumnSort {
            id: "status".to_string(),
            desc: false,
        }]);
        let page = service().query(&q);
        assert_eq!(page.rows[0].status.as_str(), "alex");
    }

    #[test]
    fn test_unknown_sort_column_keeps_order() {
        let mut q = query(0, "");
        q.sorting = SortingState(vec![ColumnSort {
            id: "custom".to_string(),
            desc: true,
        }]);
        assert_eq!(emails(&service().query(&q)), ["1", "2", "3", "4", "5"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_latency() {
        let service = service();
        let started = tokio::time::Instant::now();
        let page = service.fetch_page(query(0, "alex")).await;
        assert!(started.elapsed() >= Duration::from_millis(SIMULATED_LATENCY_MS));
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].id, "728edk2f");
    }
}
