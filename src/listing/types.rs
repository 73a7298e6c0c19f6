//! Core types of the listing: the `Item` trait, the category filter, page
//! sizes and the derived page views.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// A record the listing can filter, search and page through.
///
/// The listing only reads items. Their identity is their position in the
/// sequence handed to [`Model::new`](super::Model::new).
///
/// ```
/// use storefront_widgets::listing::Item;
///
/// struct Post {
///     title: String,
///     summary: String,
///     tag: String,
/// }
///
/// impl Item for Post {
///     fn title(&self) -> &str { &self.title }
///     fn description(&self) -> &str { &self.summary }
///     fn category(&self) -> &str { &self.tag }
/// }
/// ```
pub trait Item {
    /// Card heading. Searched.
    fn title(&self) -> &str;
    /// Card body text. Searched.
    fn description(&self) -> &str;
    /// Category slug. Compared exactly by the category filter and searched
    /// case-insensitively by the text search.
    fn category(&self) -> &str;
}

/// Renders items of the current page. This is the listing's renderer: it only
/// ever sees items the listing decided to show.
///
/// ```
/// use storefront_widgets::listing::{Item, ItemDelegate};
///
/// struct TitleOnly;
///
/// impl<I: Item> ItemDelegate<I> for TitleOnly {
///     fn render(&self, item: &I, position: usize) -> String {
///         format!("{}. {}", position, item.title())
///     }
/// }
/// ```
pub trait ItemDelegate<I: Item> {
    /// Renders one card. `position` is the item's 1-based place within the
    /// visible items (the "X" of "Showing X-Y").
    fn render(&self, item: &I, position: usize) -> String;

    /// Blank lines between cards.
    fn spacing(&self) -> usize {
        1
    }
}

/// The category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    /// No filtering.
    #[default]
    All,
    /// Only items whose category equals this string.
    Named(String),
}

impl Category {
    /// Whether an item with category `item_category` passes the filter.
    pub fn matches(&self, item_category: &str) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => name == item_category,
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        if s == "all" {
            Category::All
        } else {
            Category::Named(s.to_string())
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        if s == "all" {
            Category::All
        } else {
            Category::Named(s)
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => f.write_str("all"),
            Category::Named(name) => f.write_str(name),
        }
    }
}

const SIX: NonZeroUsize = NonZeroUsize::MIN.saturating_add(5);
const NINE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(8);
const TWELVE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(11);

/// Items per page.
///
/// Any positive size is accepted by the listing. Parsing from text (a select
/// box value, a config file) only accepts the offered options.
///
/// ```
/// use storefront_widgets::listing::PageSize;
///
/// assert_eq!("9".parse::<PageSize>().unwrap(), PageSize::fixed(9).unwrap());
/// assert_eq!("all".parse::<PageSize>().unwrap(), PageSize::All);
/// assert!("7".parse::<PageSize>().is_err());
/// assert!(PageSize::fixed(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// A fixed number of items per page.
    Fixed(NonZeroUsize),
    /// Everything on one page.
    All,
}

impl PageSize {
    /// The options offered to users, in display order.
    pub const OPTIONS: [PageSize; 4] = [
        PageSize::Fixed(SIX),
        PageSize::Fixed(NINE),
        PageSize::Fixed(TWELVE),
        PageSize::All,
    ];

    /// A fixed page size; zero is rejected.
    pub fn fixed(n: usize) -> Result<Self> {
        NonZeroUsize::new(n)
            .map(PageSize::Fixed)
            .ok_or_else(|| Error::InvalidPageSize(n.to_string()))
    }

    /// Effective items per page for `visible` visible items; always at least 1.
    pub fn per_page(self, visible: usize) -> usize {
        match self {
            PageSize::Fixed(n) => n.get(),
            PageSize::All => visible.max(1),
        }
    }

    /// The option after this one in [`PageSize::OPTIONS`], wrapping around.
    /// Sizes that are not an option continue from the first option.
    pub fn next_option(self) -> PageSize {
        let idx = Self::OPTIONS.iter().position(|o| *o == self);
        match idx {
            Some(i) => Self::OPTIONS[(i + 1) % Self::OPTIONS.len()],
            None => Self::OPTIONS[0],
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Fixed(SIX)
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        Self::OPTIONS
            .iter()
            .copied()
            .find(|o| matches!(o, PageSize::Fixed(n) if n.to_string() == s))
            .ok_or_else(|| Error::InvalidPageSize(s.to_string()))
    }
}

impl TryFrom<String> for PageSize {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Str(String),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Int(n) => n.to_string(),
            Raw::Str(s) => s,
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Fixed(n) => write!(f, "{}", n),
            PageSize::All => f.write_str("all"),
        }
    }
}

/// Where the listing is: page, totals and the range shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    /// Current page, 1-based.
    pub page: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
    /// Number of visible items across all pages.
    pub total_count: usize,
    /// 1-based inclusive positions within the visible items shown on this
    /// page; `None` when nothing is visible.
    pub bounds: Option<(usize, usize)>,
}

impl PageDescriptor {
    /// First shown position, 1-based.
    pub fn start_index(&self) -> Option<usize> {
        self.bounds.map(|(start, _)| start)
    }

    /// Last shown position, 1-based inclusive.
    pub fn end_index(&self) -> Option<usize> {
        self.bounds.map(|(_, end)| end)
    }

    /// False for the "no items" state.
    pub fn has_items(&self) -> bool {
        self.bounds.is_some()
    }

    /// Whether the pagination bar should be shown at all.
    pub fn shows_navigation(&self) -> bool {
        self.total_pages > 1
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// The "Showing X-Y of N" line.
    ///
    /// ```
    /// use storefront_widgets::listing::PageDescriptor;
    ///
    /// let d = PageDescriptor { page: 2, total_pages: 4, total_count: 20, bounds: Some((7, 12)) };
    /// assert_eq!(d.summary("article", "articles"), "Showing 7-12 of 20 articles");
    /// ```
    pub fn summary(&self, singular: &str, plural: &str) -> String {
        match self.bounds {
            None => format!("No {} found", plural),
            Some(_) if self.total_count == 1 => format!("Showing 1 {}", singular),
            Some((start, end)) => {
                format!("Showing {}-{} of {} {}", start, end, self.total_count, plural)
            }
        }
    }
}

/// The current page: its descriptor and its items, in order.
#[derive(Debug, Clone)]
pub struct PageSlice<'a, I> {
    /// Position information.
    pub descriptor: PageDescriptor,
    /// Items shown on the page.
    pub items: Vec<&'a I>,
}

impl<I> PageSlice<'_, I> {
    /// Current page number.
    pub fn page(&self) -> usize {
        self.descriptor.page
    }

    /// Number of items on the page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page shows nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from("all"), Category::All);
        assert_eq!(Category::from("tools"), Category::Named("tools".to_string()));
        // only the exact literal means "all"
        assert_eq!(Category::from("All"), Category::Named("All".to_string()));
        assert_eq!(Category::from(String::from("all")), Category::All);
    }

    #[test]
    fn test_category_matches() {
        assert!(Category::All.matches("anything"));
        assert!(Category::from("tools").matches("tools"));
        assert!(!Category::from("tools").matches("Tools"));
    }

    #[test]
    fn test_page_size_parsing() {
        assert_eq!("6".parse::<PageSize>().unwrap(), PageSize::fixed(6).unwrap());
        assert_eq!(" 12 ".parse::<PageSize>().unwrap(), PageSize::fixed(12).unwrap());
        assert_eq!("ALL".parse::<PageSize>().unwrap(), PageSize::All);
        for bad in ["0", "7", "-6", "six", ""] {
            assert!(
                matches!(bad.parse::<PageSize>(), Err(Error::InvalidPageSize(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_page_size_per_page() {
        assert_eq!(PageSize::default().per_page(100), 6);
        assert_eq!(PageSize::All.per_page(13), 13);
        assert_eq!(PageSize::All.per_page(0), 1);
    }

    #[test]
    fn test_next_option_cycles() {
        let mut size = PageSize::default();
        let mut seen = vec![size];
        for _ in 0..4 {
            size = size.next_option();
            seen.push(size);
        }
        assert_eq!(seen[1], PageSize::fixed(9).unwrap());
        assert_eq!(seen[3], PageSize::All);
        assert_eq!(seen[4], PageSize::default());
        assert_eq!(PageSize::fixed(5).unwrap().next_option(), PageSize::OPTIONS[0]);
    }

    #[test]
    fn test_page_size_display() {
        assert_eq!(PageSize::fixed(9).unwrap().to_string(), "9");
        assert_eq!(PageSize::All.to_string(), "all");
    }

    #[test]
    fn test_summary_variants() {
        let empty = PageDescriptor {
            page: 1,
            total_pages: 1,
            total_count: 0,
            bounds: None,
        };
        assert_eq!(empty.summary("article", "articles"), "No articles found");
        assert!(!empty.has_items());
        assert!(!empty.shows_navigation());

        let one = PageDescriptor {
            page: 1,
            total_pages: 1,
            total_count: 1,
            bounds: Some((1, 1)),
        };
        assert_eq!(one.summary("article", "articles"), "Showing 1 article");
    }
}
