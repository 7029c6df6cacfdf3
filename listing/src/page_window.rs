//! Compact page-number bar shaping.

use serde::Serialize;

/// One entry of a page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Build the page-number entries to render around `current_page`.
///
/// The window holds `max_visible` pages centred on the current one and
/// slides fully against either edge instead of shrinking. Page 1 and the last
/// page stay reachable outside the window, with an ellipsis marking any gap.
pub fn visible_pages(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }

    let max_visible = max_visible.max(1);
    let current_page = current_page.clamp(1, total_pages);
    let half_visible = max_visible / 2;

    let mut start_page = current_page.saturating_sub(half_visible).max(1);
    let mut end_page = current_page.saturating_add(half_visible).min(total_pages);

    if current_page <= half_visible {
        end_page = total_pages.min(max_visible);
    }
    if current_page > total_pages.saturating_sub(half_visible) {
        start_page = total_pages
            .saturating_sub(max_visible)
            .saturating_add(1)
            .max(1);
    }

    let mut links = Vec::with_capacity(max_visible.saturating_add(4));

    if start_page > 1 {
        links.push(PageLink::Page(1));
        if start_page > 2 {
            links.push(PageLink::Ellipsis);
        }
    }

    links.extend((start_page..=end_page).map(PageLink::Page));

    if end_page < total_pages {
        if end_page < total_pages.saturating_sub(1) {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(total_pages));
    }

    links
}
