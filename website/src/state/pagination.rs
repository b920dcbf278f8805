/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use std::ops::Range;

/// Portfolio items shown per grid page.
pub const PAGE_SIZE: usize = 6;

/// Width of the page-number window, first page included.
const MAX_VISIBLE: i64 = 5;

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// 1-based page cursor over a list of `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    len: usize,
}

impl Pagination {
    pub fn new(len: usize) -> Self {
        Self { current: 1, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(PAGE_SIZE)
    }

    /// Whether the pager should be shown at all.
    pub fn is_paged(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    pub fn prev(self) -> Self {
        self.go_to(self.current.saturating_sub(1))
    }

    pub fn next(self) -> Self {
        self.go_to(self.current + 1)
    }

    /// Move to `page`, clamped to the valid range.
    pub fn go_to(self, page: usize) -> Self {
        let last = self.total_pages().max(1);
        Self {
            current: page.clamp(1, last),
            ..self
        }
    }

    /// Start over on page 1 with a new item count.
    pub fn reset(self, len: usize) -> Self {
        Self::new(len)
    }

    /// Index range of the items on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current - 1) * PAGE_SIZE).min(self.len);
        let end = (start + PAGE_SIZE).min(self.len);
        start..end
    }

    pub fn page_numbers(&self) -> Vec<PageMarker> {
        page_numbers(self.current, self.total_pages())
    }
}

/// First page, a window of pages around `current`, ellipses for the skipped
/// runs, and the last page when there is more than one.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageMarker> {
    let (current, total) = (current as i64, total as i64);
    let half = MAX_VISIBLE / 2;
    let mut markers = vec![PageMarker::Page(1)];

    let mut start = (current - half).max(2);
    let end = (total - 1).min(start + MAX_VISIBLE - 2);
    if end - start < MAX_VISIBLE - 2 {
        start = (end - (MAX_VISIBLE - 2)).max(2);
    }

    if start > 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.extend((start..=end).map(|page| PageMarker::Page(page as usize)));
    if end < total - 1 {
        markers.push(PageMarker::Ellipsis);
    }
    if total > 1 {
        markers.push(PageMarker::Page(total as usize));
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Pagination::new(0).total_pages(), 0);
        assert_eq!(Pagination::new(6).total_pages(), 1);
        assert_eq!(Pagination::new(7).total_pages(), 2);
        assert!(!Pagination::new(6).is_paged());
        assert!(Pagination::new(7).is_paged());
    }

    #[test]
    fn short_lists_show_every_page() {
        assert_eq!(page_numbers(1, 1), vec![Page(1)]);
        assert_eq!(page_numbers(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(page_numbers(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_numbers(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn long_lists_elide_around_the_window() {
        assert_eq!(
            page_numbers(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_numbers(5, 10),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_numbers(10, 10),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn navigation_is_clamped_at_both_ends() {
        let pager = Pagination::new(13);
        assert!(!pager.has_prev());
        assert_eq!(pager.prev().current(), 1);

        let last = pager.next().next().next();
        assert_eq!(last.current(), 3);
        assert!(!last.has_next());
        assert_eq!(last.go_to(99).current(), 3);
        assert_eq!(last.go_to(0).current(), 1);
    }

    #[test]
    fn range_covers_the_current_page_only() {
        let pager = Pagination::new(13);
        assert_eq!(pager.range(), 0..6);
        assert_eq!(pager.go_to(3).range(), 12..13);
        assert_eq!(Pagination::new(0).range(), 0..0);
    }

    #[test]
    fn reset_returns_to_the_first_page() {
        let pager = Pagination::new(30).go_to(4).reset(8);
        assert_eq!(pager.current(), 1);
        assert_eq!(pager.total_pages(), 2);
    }
}
