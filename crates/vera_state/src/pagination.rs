//! Page-window computation and pagination bookkeeping for the `Pagination` primitive.
//!
//! [`compute_window`] is a pure function of `(current_page, total_pages, siblings_count)`
//! and is recomputed on every render. [`PaginationState`] tracks the caller-owned page,
//! page size and item count, and never lets the current page leave `1..=total_pages`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::StateError;

/// Page sizes offered by the page-size selector unless configured otherwise.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which gap an ellipsis fills. Lets views key the two placeholders apart.
pub enum EllipsisSlot {
    /// Between page 1 and the sibling window.
    Start,
    /// Between the sibling window and the last page.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// One rendered marker in a page selector.
pub enum PageToken {
    /// A clickable 1-based page index.
    Page(usize),
    /// A non-interactive placeholder hiding one or more pages.
    Ellipsis(EllipsisSlot),
}

impl PageToken {
    /// Returns the page index for [`PageToken::Page`].
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis(_) => None,
        }
    }

    /// Returns `true` for ellipsis placeholders.
    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis(_))
    }

    /// Stable render key for keyed list rendering.
    pub fn key(self) -> String {
        match self {
            Self::Page(page) => format!("page-{page}"),
            Self::Ellipsis(EllipsisSlot::Start) => "ellipsis-start".to_string(),
            Self::Ellipsis(EllipsisSlot::End) => "ellipsis-end".to_string(),
        }
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis(_) => f.write_str("…"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
/// Ordered page-selector sequence produced by [`compute_window`].
pub struct PageWindow(Vec<PageToken>);

impl PageWindow {
    fn full(total_pages: usize) -> Self {
        Self((1..=total_pages).map(PageToken::Page).collect())
    }

    /// Tokens in display order.
    pub fn tokens(&self) -> &[PageToken] {
        &self.0
    }

    /// Iterates tokens in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PageToken> + '_ {
        self.0.iter()
    }

    /// Iterates the concrete page indices, skipping ellipses.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().filter_map(|token| token.page())
    }

    /// Number of tokens, ellipses included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when `page` is rendered as a concrete button.
    pub fn contains_page(&self, page: usize) -> bool {
        self.pages().any(|candidate| candidate == page)
    }

    /// Consumes the window into its tokens.
    pub fn into_vec(self) -> Vec<PageToken> {
        self.0
    }
}

impl IntoIterator for PageWindow {
    type Item = PageToken;
    type IntoIter = std::vec::IntoIter<PageToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Computes the page-selector sequence for the current page.
///
/// Windows of up to `siblings_count * 2 + 5` pages are shown in full. Larger windows
/// always start at page 1, end at `total_pages`, and show every page within
/// `siblings_count` of `current_page`, with an ellipsis standing in for each run of
/// hidden pages. A block anchored to either end always holds at least two pages so an
/// ellipsis never hides a single page that could have been shown in its place.
///
/// `current_page` is expected in `1..=total_pages`; out-of-range values produce a
/// well-formed but meaningless window rather than a panic.
pub fn compute_window(current_page: usize, total_pages: usize, siblings_count: usize) -> PageWindow {
    // Current page, its siblings, both anchors, and both ellipsis slots.
    let total_numbers = siblings_count.saturating_mul(2).saturating_add(3);
    let total_blocks = total_numbers.saturating_add(2);

    if total_pages <= total_blocks {
        return PageWindow::full(total_pages);
    }

    let left_sibling = current_page.saturating_sub(siblings_count).max(1);
    let right_sibling = current_page
        .saturating_add(siblings_count)
        .min(total_pages);

    let show_left_ellipsis = left_sibling > 2;
    let show_right_ellipsis = right_sibling < total_pages - 1;

    let mut tokens = Vec::with_capacity(total_blocks);
    match (show_left_ellipsis, show_right_ellipsis) {
        (false, true) => {
            tokens.extend((1..=right_sibling.max(2)).map(PageToken::Page));
            tokens.push(PageToken::Ellipsis(EllipsisSlot::End));
            tokens.push(PageToken::Page(total_pages));
        }
        (true, false) => {
            tokens.push(PageToken::Page(1));
            tokens.push(PageToken::Ellipsis(EllipsisSlot::Start));
            tokens.extend((left_sibling.min(total_pages - 1)..=total_pages).map(PageToken::Page));
        }
        (true, true) => {
            tokens.push(PageToken::Page(1));
            tokens.push(PageToken::Ellipsis(EllipsisSlot::Start));
            tokens.extend((left_sibling..=right_sibling).map(PageToken::Page));
            tokens.push(PageToken::Ellipsis(EllipsisSlot::End));
            tokens.push(PageToken::Page(total_pages));
        }
        (false, false) => return PageWindow::full(total_pages),
    }

    PageWindow(tokens)
}

/// Returns `ceil(total_items / page_size)`, never less than one page.
///
/// # Errors
///
/// Returns [`StateError::ZeroPageSize`] when `page_size` is zero.
pub fn total_pages(total_items: usize, page_size: usize) -> Result<usize, StateError> {
    if page_size == 0 {
        return Err(StateError::ZeroPageSize);
    }
    Ok(total_items.div_ceil(page_size).max(1))
}

/// Clamps `page` into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Presentation settings for a paginated view.
pub struct PaginationConfig {
    /// Pages shown on each side of the current page.
    pub siblings_count: usize,
    /// Page sizes offered by the page-size selector.
    pub page_size_options: Vec<usize>,
    /// Page size used before the user picks one.
    pub default_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            siblings_count: 1,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPaginationState")]
/// Caller-owned pagination position.
///
/// Deserialization goes through the same checks as [`PaginationState::new`]: a zero page
/// size is rejected and the page is clamped into range.
pub struct PaginationState {
    page: usize,
    page_size: usize,
    total_items: usize,
}

#[derive(Deserialize)]
struct RawPaginationState {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl TryFrom<RawPaginationState> for PaginationState {
    type Error = StateError;

    fn try_from(raw: RawPaginationState) -> Result<Self, Self::Error> {
        let mut state = Self::new(raw.total_items, raw.page_size)?;
        state.go_to(raw.page);
        Ok(state)
    }
}

impl PaginationState {
    /// Starts on page 1.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::ZeroPageSize`] when `page_size` is zero.
    pub fn new(total_items: usize, page_size: usize) -> Result<Self, StateError> {
        if page_size == 0 {
            return Err(StateError::ZeroPageSize);
        }
        Ok(Self {
            page: 1,
            page_size,
            total_items,
        })
    }

    /// Starts on page 1 with the configured default page size.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::ZeroPageSize`] when the configured default is zero.
    pub fn with_config(total_items: usize, config: &PaginationConfig) -> Result<Self, StateError> {
        Self::new(total_items, config.default_page_size)
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of items across all pages.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Moves to `page`, clamped into range. Returns the page actually selected.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.page = clamp_page(page, self.total_pages());
        self.page
    }

    /// Moves one page forward, stopping at the last page.
    pub fn next(&mut self) -> usize {
        self.go_to(self.page.saturating_add(1))
    }

    /// Moves one page back, stopping at page 1.
    pub fn previous(&mut self) -> usize {
        self.go_to(self.page.saturating_sub(1))
    }

    /// Jumps to page 1.
    pub fn first(&mut self) -> usize {
        self.go_to(1)
    }

    /// Jumps to the last page.
    pub fn last(&mut self) -> usize {
        self.go_to(self.total_pages())
    }

    /// Returns `true` when a previous page exists.
    pub fn can_previous(&self) -> bool {
        self.page > 1
    }

    /// Returns `true` when a next page exists.
    pub fn can_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Changes the page size and returns to page 1.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::ZeroPageSize`] for zero and
    /// [`StateError::UnsupportedPageSize`] for sizes missing from `config`.
    pub fn set_page_size(
        &mut self,
        page_size: usize,
        config: &PaginationConfig,
    ) -> Result<(), StateError> {
        if page_size == 0 {
            return Err(StateError::ZeroPageSize);
        }
        if !config.page_size_options.contains(&page_size) {
            return Err(StateError::UnsupportedPageSize(page_size));
        }
        self.page_size = page_size;
        self.page = 1;
        Ok(())
    }

    /// Replaces the item count, pulling the current page back into range.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = clamp_page(self.page, self.total_pages());
    }

    /// 1-based inclusive item range on the current page, `None` when there are no items.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.total_items == 0 {
            return None;
        }
        let start = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .saturating_add(1);
        let end = self.page.saturating_mul(self.page_size).min(self.total_items);
        Some((start, end))
    }

    /// Zero-based slice bounds of the current page within the full item list.
    pub fn slice_bounds(&self) -> std::ops::Range<usize> {
        match self.item_range() {
            Some((start, end)) => (start - 1)..end,
            None => 0..0,
        }
    }

    /// Page-selector window around the current page.
    pub fn window(&self, siblings_count: usize) -> PageWindow {
        compute_window(self.page, self.total_pages(), siblings_count)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    const S: PageToken = PageToken::Ellipsis(EllipsisSlot::Start);
    const E: PageToken = PageToken::Ellipsis(EllipsisSlot::End);

    fn p(page: usize) -> PageToken {
        PageToken::Page(page)
    }

    #[test]
    fn centered_window_has_both_ellipses() {
        assert_eq!(
            compute_window(5, 10, 1).into_vec(),
            vec![p(1), S, p(4), p(5), p(6), E, p(10)]
        );
    }

    #[test]
    fn small_page_count_renders_every_page() {
        assert_eq!(
            compute_window(3, 5, 1).into_vec(),
            vec![p(1), p(2), p(3), p(4), p(5)]
        );
    }

    #[test]
    fn first_page_only_has_trailing_ellipsis() {
        assert_eq!(compute_window(1, 10, 1).into_vec(), vec![p(1), p(2), E, p(10)]);
    }

    #[test]
    fn last_page_with_no_siblings_keeps_two_trailing_pages() {
        assert_eq!(compute_window(10, 10, 0).into_vec(), vec![p(1), S, p(9), p(10)]);
    }

    #[test]
    fn leading_block_keeps_right_sibling_when_left_sibling_is_two() {
        assert_eq!(
            compute_window(3, 10, 1).into_vec(),
            vec![p(1), p(2), p(3), p(4), E, p(10)]
        );
    }

    #[test]
    fn trailing_block_scales_with_siblings() {
        assert_eq!(
            compute_window(9, 12, 2).into_vec(),
            vec![p(1), S, p(7), p(8), p(9), p(10), p(11), p(12)]
        );
        assert_eq!(
            compute_window(12, 12, 2).into_vec(),
            vec![p(1), S, p(10), p(11), p(12)]
        );
    }

    #[test]
    fn threshold_boundary_switches_to_ellipsis() {
        assert_eq!(compute_window(1, 7, 1).len(), 7);
        assert!(compute_window(1, 8, 1).iter().any(|token| token.is_ellipsis()));
    }

    #[test]
    fn out_of_range_current_page_does_not_panic() {
        assert_eq!(compute_window(0, 10, 1).into_vec(), vec![p(1), p(2), E, p(10)]);
        assert_eq!(compute_window(99, 10, 1).into_vec(), vec![p(1), S, p(9), p(10)]);
        assert_eq!(
            compute_window(usize::MAX, 1_000, 1).into_vec(),
            vec![p(1), S, p(999), p(1_000)]
        );
    }

    #[test]
    fn zero_total_pages_renders_nothing() {
        assert!(compute_window(1, 0, 1).is_empty());
    }

    #[test]
    fn window_display_matches_rendered_labels() {
        assert_eq!(compute_window(5, 10, 1).to_string(), "1 … 4 5 6 … 10");
    }

    #[test]
    fn token_keys_are_unique_within_a_window() {
        let window = compute_window(50, 100, 2);
        let mut keys = window.iter().map(|token| token.key()).collect::<Vec<_>>();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }

    #[test]
    fn window_serializes_as_tagged_tokens() {
        let json = serde_json::to_string(&compute_window(1, 10, 1)).expect("serialize");
        assert_eq!(json, r#"[{"page":1},{"page":2},{"ellipsis":"end"},{"page":10}]"#);
    }

    #[test]
    fn total_pages_rounds_up_and_rejects_zero_size() {
        assert_eq!(total_pages(0, 10), Ok(1));
        assert_eq!(total_pages(10, 10), Ok(1));
        assert_eq!(total_pages(11, 10), Ok(2));
        assert_eq!(total_pages(5, 0), Err(StateError::ZeroPageSize));
    }

    #[test]
    fn navigation_is_clamped_to_available_pages() {
        let mut state = PaginationState::new(95, 10).expect("state");
        assert_eq!(state.total_pages(), 10);
        assert!(!state.can_previous());
        assert_eq!(state.previous(), 1);
        assert_eq!(state.last(), 10);
        assert!(!state.can_next());
        assert_eq!(state.next(), 10);
        assert_eq!(state.go_to(42), 10);
        assert_eq!(state.go_to(0), 1);
        assert_eq!(state.next(), 2);
    }

    #[test]
    fn item_range_reports_partial_last_page() {
        let mut state = PaginationState::new(95, 10).expect("state");
        assert_eq!(state.item_range(), Some((1, 10)));
        state.last();
        assert_eq!(state.item_range(), Some((91, 95)));
        assert_eq!(state.slice_bounds(), 90..95);

        state.set_total_items(0);
        assert_eq!(state.page(), 1);
        assert_eq!(state.item_range(), None);
        assert_eq!(state.slice_bounds(), 0..0);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let config = PaginationConfig::default();
        let mut state = PaginationState::with_config(120, &config).expect("state");
        state.go_to(4);

        state.set_page_size(30, &config).expect("supported size");
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 4);

        assert_eq!(
            state.set_page_size(7, &config),
            Err(StateError::UnsupportedPageSize(7))
        );
        assert_eq!(state.set_page_size(0, &config), Err(StateError::ZeroPageSize));
        assert_eq!(state.page_size(), 30);
    }

    #[test]
    fn deserialization_rejects_zero_page_size_and_clamps_page() {
        let err = serde_json::from_str::<PaginationState>(
            r#"{"page":1,"page_size":0,"total_items":40}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("page size must be greater than zero"));

        let low: PaginationState =
            serde_json::from_str(r#"{"page":0,"page_size":10,"total_items":40}"#)
                .expect("valid size");
        assert_eq!(low.page(), 1);
        assert_eq!(low.item_range(), Some((1, 10)));

        let high: PaginationState =
            serde_json::from_str(r#"{"page":99,"page_size":10,"total_items":40}"#)
                .expect("valid size");
        assert_eq!(high.page(), 4);
        assert_eq!(high.total_pages(), 4);
        assert_eq!(high.item_range(), Some((31, 40)));
    }

    #[test]
    fn serialized_state_reads_back_unchanged() {
        let mut state = PaginationState::new(95, 20).expect("state");
        state.go_to(3);
        let json = serde_json::to_string(&state).expect("serialize");
        let restored: PaginationState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, state);
    }

    #[test]
    fn shrinking_item_count_pulls_page_back() {
        let mut state = PaginationState::new(100, 10).expect("state");
        state.go_to(10);
        state.set_total_items(35);
        assert_eq!(state.page(), 4);
        assert_eq!(state.window(1).into_vec(), vec![p(1), p(2), p(3), p(4)]);
    }

    proptest! {
        #[test]
        fn below_threshold_is_full_range(siblings in 0usize..5, extra in 0usize..12) {
            let total = (siblings * 2 + 5).saturating_sub(extra).max(1);
            for current in 1..=total {
                let window = compute_window(current, total, siblings);
                prop_assert_eq!(window.into_vec(), (1..=total).map(PageToken::Page).collect::<Vec<_>>());
            }
        }

        #[test]
        fn above_threshold_is_anchored_and_well_formed(
            siblings in 0usize..5,
            extra in 1usize..200,
            current_seed in 0usize..10_000,
        ) {
            let total = siblings * 2 + 5 + extra;
            let current = current_seed % total + 1;
            let window = compute_window(current, total, siblings);
            let tokens = window.tokens();

            prop_assert_eq!(tokens.first().copied(), Some(PageToken::Page(1)));
            prop_assert_eq!(tokens.last().copied(), Some(PageToken::Page(total)));

            for pair in tokens.windows(2) {
                prop_assert!(!(pair[0].is_ellipsis() && pair[1].is_ellipsis()));
            }

            let pages = window.pages().collect::<Vec<_>>();
            for pair in pages.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }

            // Every ellipsis hides at least one page.
            for (index, token) in tokens.iter().enumerate() {
                if token.is_ellipsis() {
                    let before = tokens[index - 1].page().unwrap_or(0);
                    let after = tokens[index + 1].page().unwrap_or(0);
                    prop_assert!(after > before + 1);
                }
            }

            let left = current.saturating_sub(siblings).max(1);
            let right = (current + siblings).min(total);
            for page in left..=right {
                prop_assert!(window.contains_page(page));
            }
        }
    }
}
