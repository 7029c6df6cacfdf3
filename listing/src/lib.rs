//! Client-side listing core: paging, text filtering and the store that
//! sequences the two, plus the streamed reply transcript used by chat views.

pub mod listing;
pub mod page_window;
pub mod pagination;
pub mod post;
pub mod search;
pub mod transcript;

pub use listing::Listing;
pub use page_window::{visible_pages, PageLink};
pub use pagination::{paginate, Pagination, Paginator};
pub use search::{normalize_text, search, FieldSelector, TextQuery};
