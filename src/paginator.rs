//! Page arithmetic and the pagination bar.
//!
//! This component tracks a 1-based current page over a known item count and
//! renders the pagination control. It does not hold the items themselves; use
//! [`Model::get_slice_bounds`] to cut the page out of your own data. The
//! [`listing`](crate::listing) controller embeds one.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use lipgloss_extras::prelude::*;
use tracing::trace;

/// How the paginator renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Page numbers with ellipses, e.g. `"‹ 1 … 4 5 [6] 7 8 … 20 ›"`.
    #[default]
    Numbers,
    /// Current and total, e.g. `"3/10"`.
    Arabic,
    /// One dot per page, e.g. `"○ ● ○"`.
    Dots,
}

/// One entry of the page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A clickable page number (1-based).
    Page(usize),
    /// A gap between the first/last page and the window.
    Ellipsis,
}

/// Computes the page-number bar for `current` of `total` pages.
///
/// At most `max_buttons` consecutive pages are shown, centred on `current`
/// and clamped to `[1, total]`. When the window does not start at page 1, page
/// 1 is shown in front of it, followed by an ellipsis unless the window starts
/// at page 2. The end of the bar follows the same rule with the last page.
///
/// ```rust
/// use storefront_widgets::paginator::{page_numbers, PageMarker::*};
///
/// assert_eq!(page_numbers(1, 3, 7), vec![Page(1), Page(2), Page(3)]);
/// assert_eq!(
///     page_numbers(10, 20, 7),
///     vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10), Page(11), Page(12), Page(13), Ellipsis, Page(20)]
/// );
/// ```
pub fn page_numbers(current: usize, total: usize, max_buttons: usize) -> Vec<PageMarker> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let span = max_buttons.max(1) - 1;

    let mut start = current.saturating_sub(span / 2).max(1);
    let end = (start + span).min(total);
    if end - start < span {
        start = end.saturating_sub(span).max(1);
    }

    let mut markers = Vec::with_capacity(span + 5);
    if start > 1 {
        markers.push(PageMarker::Page(1));
        if start > 2 {
            markers.push(PageMarker::Ellipsis);
        }
    }
    markers.extend((start..=end).map(PageMarker::Page));
    if end < total {
        if end < total - 1 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(total));
    }
    markers
}

/// Key bindings for paging.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'.
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'.
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }
}

/// Styles for the numbered bar.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The current page's button.
    pub active_page: Style,
    /// Other page buttons.
    pub page: Style,
    /// Ellipsis markers.
    pub ellipsis: Style,
    /// Enabled prev/next arrows.
    pub arrow: Style,
    /// Prev/next arrows at the first/last page.
    pub disabled_arrow: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            active_page: Style::new()
                .foreground(Color::from("#FFFFFF"))
                .background(Color::from("#2E7D32"))
                .bold(true),
            page: Style::new().foreground(Color::from("#2E7D32")),
            ellipsis: Style::new().foreground(Color::from("#9E9E9E")),
            arrow: Style::new().foreground(Color::from("#2E7D32")),
            disabled_arrow: Style::new().faint(true),
        }
    }
}

/// Pagination state.
///
/// ```rust
/// use storefront_widgets::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(6).with_total_items(20);
/// assert_eq!(paginator.total_pages, 4);
///
/// paginator.go_to(4);
/// assert_eq!(paginator.get_slice_bounds(20), (18, 20));
///
/// paginator.next_page();
/// assert_eq!(paginator.page, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// How the bar renders.
    pub paginator_type: Type,
    /// Current page, 1-based.
    pub page: usize,
    /// Items per page, at least 1.
    pub per_page: usize,
    /// Total pages, at least 1.
    pub total_pages: usize,
    /// Window size for [`Type::Numbers`].
    pub max_buttons: usize,

    /// Dot for the current page in [`Type::Dots`].
    pub active_dot: String,
    /// Dot for other pages in [`Type::Dots`].
    pub inactive_dot: String,
    /// Format for [`Type::Arabic`]; the two `%d` are page and total.
    pub arabic_format: String,

    /// Key bindings.
    pub keymap: PaginatorKeyMap,
    /// Styles for [`Type::Numbers`].
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 1,
            per_page: 1,
            total_pages: 1,
            max_buttons: 7,
            active_dot: "●".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            keymap: PaginatorKeyMap::default(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a paginator on page 1 of 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total item count (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets items per page (builder pattern). Values below 1 become 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Sets the page-number window size (builder pattern).
    pub fn with_max_buttons(mut self, max_buttons: usize) -> Self {
        self.max_buttons = max_buttons.max(1);
        self
    }

    /// Sets items per page. Values below 1 become 1.
    ///
    /// The total page count is not recomputed; call
    /// [`set_total_items`](Self::set_total_items) afterwards.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recomputes the page count from an item count and clamps the current
    /// page into range. Zero items still make one (empty) page.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = items.div_ceil(self.per_page).max(1);
        if self.page > self.total_pages {
            self.page = self.total_pages;
        }
    }

    /// Jumps to page `p`, clamped to `[1, total_pages]`. Returns the page
    /// actually selected.
    pub fn go_to(&mut self, p: i64) -> usize {
        let last = i64::try_from(self.total_pages).unwrap_or(i64::MAX);
        let clamped = p.clamp(1, last);
        // clamped lies in [1, total_pages], so it fits in usize
        self.page = usize::try_from(clamped).unwrap_or(1);
        trace!(requested = p, page = self.page, "paginator go_to");
        self.page
    }

    /// Returns the number of items on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Returns 0-based half-open bounds of the current page within `length`
    /// items.
    ///
    /// ```rust
    /// use storefront_widgets::paginator::Model;
    ///
    /// let items: Vec<u32> = (1..=13).collect();
    /// let mut paginator = Model::new().with_per_page(6).with_total_items(items.len());
    /// paginator.go_to(3);
    /// let (start, end) = paginator.get_slice_bounds(items.len());
    /// assert_eq!(&items[start..end], &[13]);
    /// ```
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = ((self.page - 1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Moves back one page; stays put on page 1.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Moves forward one page; stays put on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// True on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// True on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// The page-number bar for the current state.
    pub fn page_numbers(&self) -> Vec<PageMarker> {
        page_numbers(self.page, self.total_pages, self.max_buttons)
    }

    /// Handles the prev/next key bindings.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            }
        }
    }

    /// Renders the bar according to [`Model::paginator_type`].
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Numbers => self.numbers_view(),
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn numbers_view(&self) -> String {
        let arrow = |enabled: bool, glyph: &str| {
            let style = if enabled {
                &self.styles.arrow
            } else {
                &self.styles.disabled_arrow
            };
            style.clone().inline(true).render(glyph)
        };

        let mut parts = vec![arrow(!self.on_first_page(), "‹")];
        for marker in self.page_numbers() {
            parts.push(match marker {
                PageMarker::Page(n) if n == self.page => self
                    .styles
                    .active_page
                    .clone()
                    .inline(true)
                    .render(&format!("[{}]", n)),
                PageMarker::Page(n) => self.styles.page.clone().inline(true).render(&n.to_string()),
                PageMarker::Ellipsis => self.styles.ellipsis.clone().inline(true).render("…"),
            });
        }
        parts.push(arrow(!self.on_last_page(), "›"));
        parts.join(" ")
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        (1..=self.total_pages)
            .map(|i| {
                if i == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
