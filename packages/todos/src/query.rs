// ABOUTME: Paginated list query over the todo store
// ABOUTME: Builds filter predicates, validates page bounds, and shapes the response envelope

use serde::Serialize;
use thiserror::Error;

use crate::filter::TodoFilter;
use crate::pagination::{PaginationMeta, PaginationParams};
use crate::storage::{StorageError, TodoStorage};
use crate::types::Todo;

/// Errors from the list query flow
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Page {page} is not available. Total pages: {total_pages}")]
    PageOutOfRange { page: i64, total_pages: i64 },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Inbound list request: optional filters plus pagination
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    /// Raw query-string value; the literal "true" filters for completed
    /// todos, any other present value filters for incomplete ones
    pub completed: Option<String>,
    pub pagination: PaginationParams,
}

/// Filter values actually applied, echoed back to the caller
#[derive(Debug, Clone, Serialize)]
pub struct AppliedFilters {
    pub search: Option<String>,
    pub completed: Option<String>,
}

/// Response envelope for the list endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TodoPage {
    pub success: bool,
    pub data: Vec<Todo>,
    pub pagination: PaginationMeta,
    pub filters: AppliedFilters,
}

impl ListQuery {
    /// Build the conjunction of predicates for this request.
    ///
    /// An empty `search` behaves as absent.
    pub fn filter(&self) -> TodoFilter {
        let mut filter = TodoFilter::new();

        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() {
                filter = filter.task_contains(search);
            }
        }

        if let Some(completed) = self.completed.as_deref() {
            filter = filter.completed(completed == "true");
        }

        filter
    }

    fn applied_filters(&self) -> AppliedFilters {
        AppliedFilters {
            search: self.search.clone().filter(|s| !s.is_empty()),
            completed: self.completed.clone().filter(|s| !s.is_empty()),
        }
    }

    /// Run the count query, validate page bounds, and fetch the requested
    /// window ordered newest first.
    ///
    /// A page past the end is an error while data exists; an empty result
    /// set succeeds for any page with zero total pages.
    pub async fn run(&self, storage: &TodoStorage) -> Result<TodoPage, QueryError> {
        let filter = self.filter();

        let total = storage.count(&filter).await?;
        let pagination = PaginationMeta::new(&self.pagination, total);

        let page = self.pagination.page();
        if total > 0 && page > pagination.total_pages {
            return Err(QueryError::PageOutOfRange {
                page,
                total_pages: pagination.total_pages,
            });
        }

        let (limit, offset) = self.pagination.validate();
        let data = storage.scan(&filter, limit, offset).await?;

        Ok(TodoPage {
            success: true,
            data,
            pagination,
            filters: self.applied_filters(),
        })
    }
}
