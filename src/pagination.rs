//! This module defines the common functionality for paging data.
//!
//! Filtering always happens before pagination; callers filter a snapshot
//! (for example with
//! [filter_by_kind](crate::transaction::query::filter_by_kind)) and hand the
//! result to [paginate].

use serde::Deserialize;

/// The config for pagination.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of items to display per page when not specified in a
    /// request.
    pub default_page_size: u64,
    /// The maximum number of pages to show in the pagination indicator.
    pub max_pages: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 13,
            max_pages: 5,
        }
    }
}

/// Paging parameters supplied by a presentation surface.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    /// The 1-based page number to display.
    pub page: Option<u64>,
    /// The number of items per page.
    pub page_size: Option<u64>,
}

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The items on this page, at most `page_size` of them.
    pub items: Vec<T>,
    /// The number of pages the collection splits into; zero when the
    /// collection is empty.
    pub total_pages: u64,
    /// The page `items` came from, after clamping.
    pub current_page: u64,
}

/// Slices one page out of `items`.
///
/// Missing query parameters fall back to `config`. The requested page is
/// clamped to the last valid page, so an out-of-range request returns the
/// final page rather than failing; an empty collection returns page 1 with
/// no items and `total_pages` of zero.
pub fn paginate<T: Clone>(items: &[T], query: PageQuery, config: &PaginationConfig) -> Page<T> {
    let page_size = query.page_size.unwrap_or(config.default_page_size).max(1);
    let requested_page = query.page.unwrap_or(config.default_page).max(1);

    let total_pages = (items.len() as u64).div_ceil(page_size);
    let current_page = requested_page.min(total_pages.max(1));

    let start = ((current_page - 1) * page_size) as usize;
    let page_items = items
        .iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();

    Page {
        items: page_items,
        total_pages,
        current_page,
    }
}

/// An element of the pagination control under a paged table.
#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    /// A link to another page.
    Page(u64),
    /// The page currently being displayed.
    CurrPage(u64),
    /// A gap between page links.
    Ellipsis,
    /// A link to the next page.
    NextButton(u64),
    /// A link to the previous page.
    BackButton(u64),
}

/// Creates the sequence of indicators for a pagination control, windowed to
/// at most `max_pages` numbered links around the current page.
pub fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
    max_pages: u64,
) -> Vec<PaginationIndicator> {
    let map_page = |page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    };

    let mut indicators: Vec<PaginationIndicator> = if page_count <= max_pages {
        (1..=page_count).map(map_page).collect()
    } else if curr_page <= (max_pages / 2) {
        (1..=max_pages).map(map_page).collect()
    } else if curr_page > (page_count - max_pages / 2) {
        ((page_count - max_pages + 1)..=page_count)
            .map(map_page)
            .collect()
    } else {
        ((curr_page - max_pages / 2)..=(curr_page + max_pages / 2))
            .map(map_page)
            .collect()
    };

    if page_count > max_pages {
        if curr_page > (max_pages / 2) + 1 {
            indicators.insert(0, PaginationIndicator::Page(1));
            indicators.insert(1, PaginationIndicator::Ellipsis);
        }

        if curr_page < (page_count - max_pages / 2) {
            indicators.push(PaginationIndicator::Ellipsis);
            indicators.push(PaginationIndicator::Page(page_count));
        }
    }

    if curr_page > 1 {
        indicators.insert(0, PaginationIndicator::BackButton(curr_page - 1));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}
