/// One slot in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

const ALWAYS_LISTED: u32 = 5;
const EDGE_WINDOW: u32 = 4;

/// Page buttons for `current` out of `total`.
///
/// Up to five pages are listed outright. Beyond that the first and last
/// page are always present, the window around `current` stays inside
/// `[2, total - 1]`, and an ellipsis marks each gap to a boundary.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    if total <= ALWAYS_LISTED {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let (start, end) = if current <= 3 {
        (2, 1 + EDGE_WINDOW)
    } else if current >= total - 2 {
        (total - EDGE_WINDOW, total - 1)
    } else {
        (current - 1, current + 1)
    };
    let start = start.max(2);
    let end = end.min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// 1-based index range of the rows on `page`, `(0, 0)` when there are none.
pub fn visible_range(page: u32, page_size: u32, total_items: u64) -> (u64, u64) {
    if total_items == 0 {
        return (0, 0);
    }
    let page = u64::from(page.max(1));
    let page_size = u64::from(page_size.max(1));
    let start = (page - 1) * page_size + 1;
    let end = (page * page_size).min(total_items);
    (start.min(total_items), end)
}

pub fn range_summary(page: u32, page_size: u32, total_items: u64) -> String {
    let (start, end) = visible_range(page, page_size, total_items);
    format!("Showing {start} to {end} of {total_items} results")
}

pub fn can_go_previous(current: u32, loading: bool) -> bool {
    current > 1 && !loading
}

pub fn can_go_next(current: u32, total: u32, loading: bool) -> bool {
    total > 0 && current < total && !loading
}
