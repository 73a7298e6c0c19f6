//! Filterable, searchable, paginated catalog listing.
//!
//! This module exposes a generic `Model<I: Item>` plus supporting traits and submodules:
//! - `Item`: Implement for your record type; exposes `title`, `description` and `category`
//! - `ItemDelegate`: Renders the cards of the current page
//! - Submodules: `defaultitem`, `keys`, and `style`
//!
//! ## State
//!
//! The listing keeps four pieces of state over an immutable item sequence:
//!
//! - **Category**: `All` or one exact category name
//! - **Search term**: case-folded; matched as a substring of title, description or category
//! - **Page size**: 6, 9, 12 or all
//! - **Current page**: 1-based, always within `[1, total_pages]`
//!
//! Changing the category, the search term or the page size returns to page 1.
//! Everything else (visible items, page count, the "Showing X-Y of N" line, the
//! page-number bar) is derived on demand.
//!
//! ## Input
//!
//! Hosts drive the listing either by calling the operations directly or by
//! forwarding messages (`CategorySelectedMsg`, `SearchTextChangedMsg`,
//! `PageRequestedMsg`, `NextPageMsg`, `PrevPageMsg`, `PageSizeChangedMsg` and
//! `KeyMsg`) to [`Model::update`]. A page-size change answers with a toast
//! command.
//!
//! ## Bootstrapping from a URL
//!
//! ```
//! use storefront_widgets::listing::{category_from_query, CatalogItem, Model};
//!
//! let items = vec![
//!     CatalogItem::new("Compost Guide", "Start a pile", "garden"),
//!     CatalogItem::new("Pruning Shears", "Sharp and light", "tools"),
//! ];
//! let listing = Model::new(items)
//!     .with_initial_category(category_from_query("?category=tools").as_deref());
//! assert_eq!(listing.len(), 1);
//! ```

pub mod defaultitem;
mod filtering;
pub mod keys;
mod model;
mod rendering;
pub mod style;
pub mod types;
mod update;

pub use defaultitem::{load_items_json, CatalogItem, DefaultDelegate, DefaultItemStyles, PricedDelegate};
pub use keys::ListingKeyMap;
pub use model::{category_from_query, Model};
pub use style::ListingStyles;
pub use types::{Category, Item, ItemDelegate, PageDescriptor, PageSize, PageSlice};
pub use update::{
    CategorySelectedMsg, NextPageMsg, PageRequestedMsg, PageSizeChangedMsg, PrevPageMsg,
    SearchTextChangedMsg,
};
