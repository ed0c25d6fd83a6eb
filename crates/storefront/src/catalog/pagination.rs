//! Page-window computation for the compact pagination strip.
//!
//! The strip shows the current page plus two neighbors on each side, always
//! keeps page 1 and the last page reachable, and marks skipped runs with an
//! ellipsis. With zero or one pages there is nothing to navigate and the
//! strip is empty.

/// One entry of the rendered page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStripEntry {
    /// A directly clickable page number.
    Page(u32),
    /// A run of skipped pages.
    Ellipsis,
}

/// Pagination metadata for one evaluated query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// The requested 1-based page. Not clamped: a page past the end simply
    /// has an empty visible slice, and the renderer can recover from
    /// `total_pages`.
    pub current: u32,
    /// `ceil(total_items / page_size)`; zero when nothing matched.
    pub total_pages: u32,
    /// Number of items that survived filtering, across all pages.
    pub total_items: usize,
    /// Whether a "previous" control should be enabled.
    pub has_prev: bool,
    /// Whether a "next" control should be enabled.
    pub has_next: bool,
    /// The page numbers worth rendering directly, with ellipsis markers.
    pub strip: Vec<PageStripEntry>,
}

impl PageInfo {
    /// Compute the page window for `total_items` filtered items.
    #[must_use]
    pub fn compute(total_items: usize, current: u32, page_size: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            u32::try_from(total_items.div_ceil(page_size)).unwrap_or(u32::MAX)
        };

        Self {
            current,
            total_pages,
            total_items,
            has_prev: total_pages > 0 && current > 1,
            has_next: current < total_pages,
            strip: strip(current, total_pages),
        }
    }
}

/// Build the strip entries: current page ± 2, first/last always present,
/// ellipsis where pages are skipped.
fn strip(current: u32, total_pages: u32) -> Vec<PageStripEntry> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let start = current.saturating_sub(2).max(1);
    let end = current.saturating_add(2).min(total_pages);

    let mut entries = Vec::new();
    if start > 1 {
        entries.push(PageStripEntry::Page(1));
        if start > 2 {
            entries.push(PageStripEntry::Ellipsis);
        }
    }
    for page in start..=end {
        entries.push(PageStripEntry::Page(page));
    }
    if end < total_pages {
        if end < total_pages - 1 {
            entries.push(PageStripEntry::Ellipsis);
        }
        entries.push(PageStripEntry::Page(total_pages));
    }

    entries
}
