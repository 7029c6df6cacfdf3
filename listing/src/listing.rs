//! A filterable, paginated collection owned by one view.

use std::fmt;

use common::error::AppError;
use tracing::debug;

use crate::page_window::{visible_pages, PageLink};
use crate::pagination::{Pagination, Paginator};
use crate::search::{search_indices, FieldSelector};

/// Collection + query + page position for one list on screen.
///
/// The matching subset is recomputed whenever the items or the query change,
/// and the page position restarts at 1 before the next page is read, so a
/// narrower result set never renders a stale out-of-range page.
#[derive(Clone)]
pub struct Listing<T> {
    items: Vec<T>,
    selectors: Vec<FieldSelector<T>>,
    query: String,
    matches: Vec<usize>,
    paginator: Paginator,
}

impl<T> fmt::Debug for Listing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listing")
            .field("items", &self.items.len())
            .field("selectors", &self.selectors.len())
            .field("query", &self.query)
            .field("matches", &self.matches.len())
            .field("paginator", &self.paginator)
            .finish()
    }
}

impl<T> Listing<T> {
    pub fn new(
        items: Vec<T>,
        selectors: Vec<FieldSelector<T>>,
        page_size: usize,
    ) -> Result<Self, AppError> {
        let paginator = Paginator::new(page_size)?;
        let matches = (0..items.len()).collect();
        Ok(Self {
            items,
            selectors,
            query: String::new(),
            matches,
            paginator,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a query string is set, even one that filters nothing out.
    pub fn has_active_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Replace the whole collection; the query is cleared and paging restarts.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.query.clear();
        self.matches = (0..self.items.len()).collect();
        self.paginator.reset();
    }

    /// Prepend a new item.
    ///
    /// Without a query the item is visible right away. With one, including a
    /// whitespace-only query, the current results are kept untouched until
    /// the next search.
    pub fn add_item(&mut self, item: T) {
        self.items.insert(0, item);
        if self.has_active_query() {
            for idx in &mut self.matches {
                *idx = idx.saturating_add(1);
            }
        } else {
            self.matches = (0..self.items.len()).collect();
        }
    }

    /// Apply a new query and restart at page 1.
    pub fn search(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.matches = search_indices(&self.items, &self.query, &self.selectors);
        self.paginator.reset();
        debug!(
            query = %self.query,
            matched = self.matches.len(),
            total = self.items.len(),
            "Listing filter applied"
        );
    }

    pub fn clear_search(&mut self) {
        self.search("");
    }

    /// Items matching the current query, in collection order.
    pub fn filtered(&self) -> Vec<&T> {
        self.matches
            .iter()
            .filter_map(|idx| self.items.get(*idx))
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.matches.len()
    }

    pub fn pagination(&self) -> Pagination {
        self.paginator.pagination(self.filtered_len())
    }

    /// The visible page of the filtered collection.
    pub fn page(&self) -> (Vec<&T>, Pagination) {
        let (indices, pagination) = self.paginator.page(&self.matches);
        let items = indices
            .iter()
            .filter_map(|idx| self.items.get(*idx))
            .collect();
        (items, pagination)
    }

    pub fn page_links(&self, max_visible: usize) -> Vec<PageLink> {
        let pagination = self.pagination();
        visible_pages(pagination.current_page, pagination.total_pages, max_visible)
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.filtered_len();
        self.paginator.go_to_page(page, total)
    }

    pub fn go_to_next(&mut self) -> bool {
        let total = self.filtered_len();
        self.paginator.go_to_next(total)
    }

    pub fn go_to_previous(&mut self) -> bool {
        let total = self.filtered_len();
        self.paginator.go_to_previous(total)
    }

    pub fn go_to_first(&mut self) -> bool {
        let total = self.filtered_len();
        self.paginator.go_to_first(total)
    }

    pub fn go_to_last(&mut self) -> bool {
        let total = self.filtered_len();
        self.paginator.go_to_last(total)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), AppError> {
        self.paginator.set_page_size(page_size)
    }
}
