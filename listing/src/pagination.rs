//! Page math over in-memory collections and the navigation state driving it.

use std::fmt;
use std::num::NonZeroUsize;

use common::error::AppError;
use serde::Serialize;

/// Compute the number of pages for `total_items`; zero when there is nothing
/// to show. A zero page size is rejected.
pub fn total_pages(total_items: usize, page_size: usize) -> Result<usize, AppError> {
    Ok(page_count(total_items, ensure_page_size(page_size)?))
}

fn page_count(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// Clamp a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

fn ensure_page_size(page_size: usize) -> Result<NonZeroUsize, AppError> {
    NonZeroUsize::new(page_size)
        .ok_or_else(|| AppError::InvalidArgument("page size must be at least 1".to_string()))
}

/// Metadata describing one page of a collection.
///
/// `start_item`/`end_item` are 1-based and inclusive, both `0` for an empty
/// collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page: Option<usize>,
    pub next_page: Option<usize>,
    pub start_item: usize,
    pub end_item: usize,
    pub is_empty: bool,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

impl Pagination {
    /// Derive page metadata; `requested_page` is clamped into range first.
    /// A zero page size is rejected.
    pub fn new(
        requested_page: usize,
        page_size: usize,
        total_items: usize,
    ) -> Result<Self, AppError> {
        let page_size = ensure_page_size(page_size)?;
        Ok(Self::compute(requested_page, page_size, total_items))
    }

    fn compute(requested_page: usize, page_size: NonZeroUsize, total_items: usize) -> Self {
        let total_pages = page_count(total_items, page_size);
        let page_size = page_size.get();
        let current_page = clamp_page(requested_page, total_pages);

        let has_previous = current_page > 1;
        let has_next = current_page < total_pages;
        let start_index = current_page
            .saturating_sub(1)
            .saturating_mul(page_size)
            .min(total_items);
        let end_index = start_index.saturating_add(page_size).min(total_items);

        Self {
            current_page,
            page_size,
            total_items,
            total_pages,
            has_previous,
            has_next,
            previous_page: has_previous.then(|| current_page.saturating_sub(1)),
            next_page: has_next.then(|| current_page.saturating_add(1)),
            start_item: if total_items == 0 {
                0
            } else {
                start_index.saturating_add(1)
            },
            end_item: end_index,
            is_empty: total_items == 0,
            is_first_page: current_page == 1,
            is_last_page: total_pages == 0 || current_page == total_pages,
        }
    }

    /// Zero-based, inclusive start of the page inside the collection.
    pub fn start_index(&self) -> usize {
        self.start_item.saturating_sub(1)
    }

    /// Zero-based, exclusive end of the page inside the collection.
    pub fn end_index(&self) -> usize {
        self.end_item
    }

    /// Whether a page-number bar is worth rendering.
    pub fn needs_navigation(&self) -> bool {
        self.total_pages > 1
    }
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} results",
            self.start_item, self.end_item, self.total_items
        )?;
        if self.needs_navigation() {
            write!(f, " (Page {} of {})", self.current_page, self.total_pages)?;
        }
        Ok(())
    }
}

/// Returns the items for the requested page along with pagination metadata.
///
/// Out-of-range pages resolve to the nearest valid page. A zero page size is
/// rejected.
pub fn paginate<T>(
    items: &[T],
    page_size: usize,
    requested_page: usize,
) -> Result<(&[T], Pagination), AppError> {
    let page_size = ensure_page_size(page_size)?;
    Ok(slice_page(items, page_size, requested_page))
}

fn slice_page<T>(
    items: &[T],
    page_size: NonZeroUsize,
    requested_page: usize,
) -> (&[T], Pagination) {
    let pagination = Pagination::compute(requested_page, page_size, items.len());
    let page_items = items
        .get(pagination.start_index()..pagination.end_index())
        .unwrap_or_default();
    (page_items, pagination)
}

/// Navigation state for one paginated view.
///
/// Holds only the current page and page size; the collection stays with the
/// caller and is passed in (or counted) on each call. Every navigation
/// clamps against the current total and reports whether the visible page
/// changed, even when the stored page had gone stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    page_size: NonZeroUsize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self, AppError> {
        Self::with_initial_page(page_size, 1)
    }

    pub fn with_initial_page(page_size: usize, initial_page: usize) -> Result<Self, AppError> {
        Ok(Self {
            current_page: initial_page.max(1),
            page_size: ensure_page_size(page_size)?,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn pagination(&self, total_items: usize) -> Pagination {
        Pagination::compute(self.current_page, self.page_size, total_items)
    }

    /// Slice the current page out of `items`.
    pub fn page<'a, T>(&self, items: &'a [T]) -> (&'a [T], Pagination) {
        slice_page(items, self.page_size, self.current_page)
    }

    /// Jump to `page`, clamped into range. Returns `false` when already there.
    pub fn go_to_page(&mut self, page: usize, total_items: usize) -> bool {
        let target = clamp_page(page, page_count(total_items, self.page_size));
        self.move_to(target, total_items)
    }

    pub fn go_to_next(&mut self, total_items: usize) -> bool {
        let state = self.pagination(total_items);
        let target = state.next_page.unwrap_or(state.current_page);
        self.move_to(target, total_items)
    }

    pub fn go_to_previous(&mut self, total_items: usize) -> bool {
        let state = self.pagination(total_items);
        let target = state.previous_page.unwrap_or(state.current_page);
        self.move_to(target, total_items)
    }

    pub fn go_to_first(&mut self, total_items: usize) -> bool {
        self.move_to(1, total_items)
    }

    pub fn go_to_last(&mut self, total_items: usize) -> bool {
        let target = page_count(total_items, self.page_size).max(1);
        self.move_to(target, total_items)
    }

    /// Change the page size; the position always restarts at page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), AppError> {
        self.page_size = ensure_page_size(page_size)?;
        self.current_page = 1;
        Ok(())
    }

    /// Return to page 1, e.g. after the underlying collection was re-filtered.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull a stale page back into range after the collection shrank.
    ///
    /// Returns whether the stored page was rewritten; the visible page is
    /// the same before and after.
    pub fn settle(&mut self, total_items: usize) -> bool {
        let settled = self.pagination(total_items).current_page;
        let changed = settled != self.current_page;
        self.current_page = settled;
        changed
    }

    /// Store `target` and report whether it differs from the page that was
    /// visible for `total_items`.
    fn move_to(&mut self, target: usize, total_items: usize) -> bool {
        let visible = self.pagination(total_items).current_page;
        self.current_page = target;
        target != visible
    }
}
