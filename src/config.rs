//! Tunables for the storefront components, loadable from TOML.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```rust
//! use storefront_widgets::config::Config;
//! use storefront_widgets::listing::PageSize;
//!
//! let config = Config::from_toml_str("default_page_size = \"9\"\nsite_name = \"Leafline\"").unwrap();
//! assert_eq!(config.default_page_size, PageSize::fixed(9).unwrap());
//! assert_eq!(config.toast_lifetime_ms, 4000);
//! ```

use crate::error::{Error, Result};
use crate::listing::PageSize;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Component configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page size the listing starts with.
    pub default_page_size: PageSize,
    /// Maximum number of consecutive page buttons in the pagination bar.
    pub max_page_buttons: usize,
    /// Noun for one listed item ("Showing 1 article").
    pub noun_singular: String,
    /// Noun for several listed items ("Showing 1-6 of 20 articles").
    pub noun_plural: String,
    /// Site name used in the newsletter thank-you message.
    pub site_name: String,
    /// Notice shown to first-time visitors.
    pub welcome_message: String,
    /// Delay before a new toast slides in.
    pub toast_enter_delay_ms: u64,
    /// Time from showing a toast to it starting to leave.
    pub toast_lifetime_ms: u64,
    /// Duration of the toast exit transition.
    pub toast_exit_ms: u64,
    /// Column width toast messages are wrapped to.
    pub toast_max_width: usize,
    /// Scroll offset below which the navbar never hides.
    pub navbar_hide_threshold: u32,
    /// Delay before the first-visit welcome toast.
    pub welcome_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::default(),
            max_page_buttons: 7,
            noun_singular: "article".to_string(),
            noun_plural: "articles".to_string(),
            site_name: "GreenHub".to_string(),
            welcome_message: "Welcome to GreenHub! Explore our products and articles.".to_string(),
            toast_enter_delay_ms: 100,
            toast_lifetime_ms: 4000,
            toast_exit_ms: 300,
            toast_max_width: 40,
            navbar_hide_threshold: 100,
            welcome_delay_ms: 2000,
        }
    }
}

impl Config {
    /// Parses a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        tracing::debug!(?config, "parsed config");
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    pub(crate) fn toast_enter_delay(&self) -> Duration {
        Duration::from_millis(self.toast_enter_delay_ms)
    }

    pub(crate) fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_lifetime_ms)
    }

    pub(crate) fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }

    pub(crate) fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_delay_ms)
    }
}
