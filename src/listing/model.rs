//! The listing controller: state, construction and the filter/search/page
//! operations.

use super::defaultitem::DefaultDelegate;
use super::filtering::{fold, visible_indices, SearchKey};
use super::keys::ListingKeyMap;
use super::style::ListingStyles;
use super::types::{Category, Item, ItemDelegate, PageDescriptor, PageSize, PageSlice};
use crate::config::Config;
use crate::{help, paginator};
use tracing::debug;

/// Extracts the `category` parameter from a URL query string.
///
/// Empty values count as absent. The leading `?` is optional.
///
/// ```
/// use storefront_widgets::listing::category_from_query;
///
/// assert_eq!(category_from_query("?category=tools&ref=nav").as_deref(), Some("tools"));
/// assert_eq!(category_from_query("category=home%20decor").as_deref(), Some("home decor"));
/// assert_eq!(category_from_query("?category="), None);
/// assert_eq!(category_from_query(""), None);
/// ```
pub fn category_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "category")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Filterable, searchable, paginated listing of items.
///
/// The listing owns the full item sequence and four pieces of state: the
/// category filter, the search term, the page size and the current page.
/// Everything it shows is derived from those.
///
/// - An item is visible when its category passes the filter **and** the
///   search term occurs (case-insensitively) in its title, description or
///   category. Visible items keep their original order.
/// - Changing the filter, the search term or the page size goes back to
///   page 1.
/// - The current page always lies in `[1, total_pages]`, with at least one
///   (possibly empty) page.
///
/// # Examples
///
/// ```
/// use storefront_widgets::listing::{CatalogItem, Model, PageSize};
///
/// let items: Vec<CatalogItem> = (1..=20)
///     .map(|i| CatalogItem::new(&format!("Post {i}"), "", if i % 4 == 0 { "tools" } else { "garden" }))
///     .collect();
/// let mut listing = Model::new(items);
///
/// let page = listing.go_to_page(4);
/// assert_eq!(page.descriptor.total_pages, 4);
/// assert_eq!(page.descriptor.bounds, Some((19, 20)));
///
/// let tools = listing.set_category("tools");
/// assert_eq!(tools.len(), 5);
/// assert_eq!(listing.current_page_descriptor().page, 1);
///
/// let page = listing.set_page_size(PageSize::All);
/// assert_eq!(page.len(), 5);
/// ```
pub struct Model<I: Item> {
    pub(super) title: String,
    pub(super) items: Vec<I>,
    pub(super) search_keys: Vec<SearchKey>,
    pub(super) delegate: Box<dyn ItemDelegate<I> + Send + Sync>,

    // Filter state
    pub(super) category: Category,
    pub(super) search_term: String,
    pub(super) visible: Vec<usize>,

    // Pagination
    pub(super) page_size: PageSize,
    pub(super) paginator: paginator::Model,

    // Presentation
    pub(super) noun_singular: String,
    pub(super) noun_plural: String,
    pub(super) styles: ListingStyles,
    pub(super) show_help: bool,
    pub(super) help: help::Model,
    pub(super) keymap: ListingKeyMap,
}

impl<I: Item> Model<I> {
    /// Creates a listing over `items` with the default configuration: all
    /// categories, empty search, 6 per page, page 1.
    pub fn new(items: Vec<I>) -> Self {
        Self::from_config(items, &Config::default())
    }

    /// Creates a listing using page size, page-button count and nouns from
    /// `config`.
    pub fn from_config(items: Vec<I>, config: &Config) -> Self {
        let search_keys = items.iter().map(SearchKey::new).collect();
        let visible = (0..items.len()).collect();

        let mut listing = Self {
            title: "Articles".to_string(),
            items,
            search_keys,
            delegate: Box::new(DefaultDelegate::new()),
            category: Category::All,
            search_term: String::new(),
            visible,
            page_size: config.default_page_size,
            paginator: paginator::Model::new().with_max_buttons(config.max_page_buttons),
            noun_singular: config.noun_singular.clone(),
            noun_plural: config.noun_plural.clone(),
            styles: ListingStyles::default(),
            show_help: true,
            help: help::Model::new(),
            keymap: ListingKeyMap::default(),
        };
        listing.reset_pagination();
        listing
    }

    /// Applies a bootstrap category (typically from the page's query string)
    /// exactly as [`set_category`](Self::set_category) would. `None` and the
    /// empty string leave the listing unfiltered.
    pub fn with_initial_category(mut self, category: Option<&str>) -> Self {
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            debug!(category, "applying initial category");
            self.set_category(category);
        }
        self
    }

    /// Sets the page size (builder pattern).
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.set_page_size(size);
        self
    }

    /// Sets the title line (builder pattern).
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the nouns used in the status line (builder pattern).
    pub fn with_noun(mut self, singular: &str, plural: &str) -> Self {
        self.noun_singular = singular.to_string();
        self.noun_plural = plural.to_string();
        self
    }

    /// Replaces the card renderer (builder pattern).
    pub fn with_delegate<D>(mut self, delegate: D) -> Self
    where
        D: ItemDelegate<I> + Send + Sync + 'static,
    {
        self.delegate = Box::new(delegate);
        self
    }

    /// Sets how many consecutive page buttons the bar shows (builder pattern).
    pub fn with_max_page_buttons(mut self, max_buttons: usize) -> Self {
        self.paginator.max_buttons = max_buttons.max(1);
        self
    }

    /// Shows or hides the key help footer.
    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
    }

    /// Replaces every item. Keeps the filter and search term and goes back to
    /// page 1.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.search_keys = items.iter().map(SearchKey::new).collect();
        self.items = items;
        self.refilter();
    }

    /// Selects a category (`"all"` clears the filter) and returns the visible
    /// items. Unknown categories simply match nothing. Always goes back to
    /// page 1.
    pub fn set_category(&mut self, category: impl Into<Category>) -> Vec<&I> {
        self.category = category.into();
        debug!(category = %self.category, "category selected");
        self.refilter();
        self.visible_items()
    }

    /// Sets the search term and returns the visible items. Matching is
    /// case-insensitive; the empty term matches everything. Always goes back
    /// to page 1.
    pub fn set_search_term(&mut self, term: &str) -> Vec<&I> {
        self.search_term = fold(term);
        debug!(term = %self.search_term, "search term changed");
        self.refilter();
        self.visible_items()
    }

    /// Changes the page size and returns page 1.
    pub fn set_page_size(&mut self, size: PageSize) -> PageSlice<'_, I> {
        self.page_size = size;
        debug!(%size, "page size changed");
        self.reset_pagination();
        self.page_slice()
    }

    /// Jumps to page `p`, clamped to `[1, total_pages]`, and returns it.
    pub fn go_to_page(&mut self, p: i64) -> PageSlice<'_, I> {
        let page = self.paginator.go_to(p);
        debug!(requested = p, page, "page requested");
        self.sync_keybindings();
        self.page_slice()
    }

    /// Moves to the next page; stays on the last page.
    pub fn next_page(&mut self) -> PageSlice<'_, I> {
        self.paginator.next_page();
        debug!(page = self.paginator.page, "next page");
        self.sync_keybindings();
        self.page_slice()
    }

    /// Moves to the previous page; stays on the first page.
    pub fn previous_page(&mut self) -> PageSlice<'_, I> {
        self.paginator.prev_page();
        debug!(page = self.paginator.page, "previous page");
        self.sync_keybindings();
        self.page_slice()
    }

    /// Page number, page count, item count and the range shown.
    pub fn current_page_descriptor(&self) -> PageDescriptor {
        let total_count = self.visible.len();
        let (start, end) = self.paginator.get_slice_bounds(total_count);
        PageDescriptor {
            page: self.paginator.page,
            total_pages: self.paginator.total_pages,
            total_count,
            bounds: (start < end).then_some((start + 1, end)),
        }
    }

    /// The current page and its items.
    pub fn page_slice(&self) -> PageSlice<'_, I> {
        PageSlice {
            descriptor: self.current_page_descriptor(),
            items: self.page_items(),
        }
    }

    /// Items on the current page, in order.
    pub fn page_items(&self) -> Vec<&I> {
        let (start, end) = self.paginator.get_slice_bounds(self.visible.len());
        self.visible[start..end]
            .iter()
            .map(|&i| &self.items[i])
            .collect()
    }

    /// Page-number bar entries for the current page.
    pub fn page_numbers(&self) -> Vec<paginator::PageMarker> {
        self.paginator.page_numbers()
    }

    /// All visible items across pages, in original order.
    pub fn visible_items(&self) -> Vec<&I> {
        self.visible.iter().map(|&i| &self.items[i]).collect()
    }

    /// Original positions of the visible items.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Every item, visible or not.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// True when no item is visible.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// The active category filter.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The active (case-folded) search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The active page size.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// The listing's key bindings.
    pub fn keymap(&self) -> &ListingKeyMap {
        &self.keymap
    }

    fn refilter(&mut self) {
        self.visible = visible_indices(
            &self.items,
            &self.search_keys,
            &self.category,
            &self.search_term,
        );
        debug!(
            visible = self.visible.len(),
            total = self.items.len(),
            "listing refiltered"
        );
        self.reset_pagination();
    }

    /// Recomputes page count for the visible items and returns to page 1.
    fn reset_pagination(&mut self) {
        let total = self.visible.len();
        self.paginator.set_per_page(self.page_size.per_page(total));
        self.paginator.set_total_items(total);
        self.paginator.page = 1;
        self.sync_keybindings();
    }

    fn sync_keybindings(&mut self) {
        let more_than_one = self.paginator.total_pages > 1;
        self.keymap
            .prev_page
            .set_enabled(!self.paginator.on_first_page());
        self.keymap.next_page.set_enabled(!self.paginator.on_last_page());
        self.keymap.first_page.set_enabled(more_than_one);
        self.keymap.last_page.set_enabled(more_than_one);
    }
}
