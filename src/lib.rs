#![warn(missing_docs)]

//! # storefront-widgets
//!
//! Storefront components for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: a filterable, searchable, paginated catalog listing and the
//! small pieces around it (toasts, a newsletter field, a hiding navbar and a
//! first-visit welcome).
//!
//! Every component follows the Elm Architecture: state lives in a `Model`,
//! `update(&Msg)` applies a message and may return a command, and `view()`
//! renders a string. Components talk to each other only through messages. For
//! instance the listing and the newsletter field never own a toast; they return
//! [`toast::notify`] commands whose [`toast::ShowMsg`] the host forwards to its
//! [`toast::Model`].
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`listing::Model`] | Category filter, text search and pagination over a fixed item list |
//! | [`paginator::Model`] | Page arithmetic and the `‹ 1 … 4 [5] 6 … 9 ›` bar |
//! | [`toast::Model`] | One transient notification with enter/visible/leave phases |
//! | [`newsletter::Model`] | Email field with validation |
//! | [`navbar::Model`] | Scroll-direction hide/show and the menu toggle |
//! | [`visit`] | "Has visited" flag and the delayed welcome toast |
//! | [`help::Model`] | Key binding help line |
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use storefront_widgets::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     listing: Listing<CatalogItem>,
//!     toast: Toast,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let items = vec![
//!             CatalogItem::new("Compost Guide", "Start a pile", "garden"),
//!             CatalogItem::new("Pruning Shears", "Sharp and light", "tools"),
//!         ];
//!         let app = Self {
//!             listing: Listing::new(items),
//!             toast: Toast::new(),
//!         };
//!         (app, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(cmd) = self.toast.update(&msg) {
//!             return Some(cmd);
//!         }
//!         self.listing.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{}\n{}", self.listing.view(), self.toast.view())
//!     }
//! }
//! ```
//!
//! ## Configuration
//!
//! [`Config`] holds every tunable and can be loaded from TOML. All fields have
//! defaults, so a file only lists what it changes.
//!
//! ## Logging
//!
//! State transitions are reported through [`tracing`] at `debug` and `trace`
//! level. The crate never installs a subscriber.

pub mod config;
pub mod error;
pub mod help;
pub mod key;
pub mod listing;
pub mod navbar;
pub mod newsletter;
pub mod paginator;
pub mod toast;
pub mod visit;

use bubbletea_rs::Cmd;

/// Components that take keyboard focus.
///
/// Only a focused component reacts to typed keys, so a host with several
/// inputs can route keys by moving focus.
///
/// ```rust
/// use storefront_widgets::prelude::*;
///
/// let mut field = Newsletter::new();
/// assert!(!field.focused());
///
/// field.focus();
/// assert!(field.focused());
///
/// field.blur();
/// assert!(!field.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to start with.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use config::Config;
pub use error::{Error, Result};
pub use help::Model as HelpModel;
pub use key::{
    matches, new_binding, with_disabled, with_help, with_keys_str, Binding, Help as KeyHelp,
    KeyMap, KeyPress,
};
pub use listing::Model as Listing;
pub use listing::{
    category_from_query, load_items_json, CatalogItem, Category, CategorySelectedMsg, Item,
    ItemDelegate, NextPageMsg, PageDescriptor, PageRequestedMsg, PageSize, PageSizeChangedMsg,
    PageSlice, PrevPageMsg, SearchTextChangedMsg,
};
pub use navbar::Model as Navbar;
pub use newsletter::{validate_email, Model as Newsletter, SubscriptionError};
pub use paginator::Model as Paginator;
pub use toast::Model as Toast;
pub use visit::{welcome, FileStore, MemoryStore, VisitStore};

/// Commonly used types in one import.
///
/// ```rust
/// use storefront_widgets::prelude::*;
///
/// let mut listing = Listing::new(vec![CatalogItem::new("Trowel", "Hand tool", "tools")]);
/// assert_eq!(listing.set_search_term("TROWEL").len(), 1);
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::listing::Model as Listing;
    pub use crate::listing::{
        category_from_query, CatalogItem, Category, CategorySelectedMsg, Item, ItemDelegate,
        NextPageMsg, PageDescriptor, PageRequestedMsg, PageSize, PageSizeChangedMsg, PrevPageMsg,
        SearchTextChangedMsg,
    };
    pub use crate::navbar::{Model as Navbar, ScrollMsg, ToggleMenuMsg};
    pub use crate::newsletter::Model as Newsletter;
    pub use crate::paginator::Model as Paginator;
    pub use crate::toast::{notify, DismissMsg, Kind as ToastKind, Model as Toast, ShowMsg};
    pub use crate::Component;
}
