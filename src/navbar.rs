//! Site header that hides while scrolling down and reappears when scrolling
//! up, plus the collapsible mobile menu.
//!
//! The host reports scroll positions with [`ScrollMsg`]. The bar hides only
//! when the offset grows **and** is past the hide threshold (100 by default),
//! so it never disappears near the top of the page.

use crate::config::Config;
use crate::key::{self, KeyMap};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;
use tracing::trace;

/// The page was scrolled to `offset` rows/pixels from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMsg {
    /// New scroll offset.
    pub offset: u32,
}

/// The hamburger button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleMenuMsg;

/// Navbar key bindings.
#[derive(Debug, Clone)]
pub struct NavbarKeyMap {
    /// Open or close the menu.
    pub toggle_menu: key::Binding,
}

impl Default for NavbarKeyMap {
    fn default() -> Self {
        Self {
            toggle_menu: key::new_binding(vec![
                key::with_keys_str(&["m"]),
                key::with_help("m", "menu"),
            ]),
        }
    }
}

impl KeyMap for NavbarKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.toggle_menu]
    }
}

/// Navbar styles.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Site name.
    pub brand: Style,
    /// Menu entries.
    pub link: Style,
    /// Menu glyph.
    pub toggle: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            brand: Style::new().foreground(Color::from("#2E7D32")).bold(true),
            link: Style::new().foreground(AdaptiveColor {
                Light: "#424242",
                Dark: "#DDDDDD",
            }),
            toggle: Style::new().foreground(AdaptiveColor {
                Light: "#6D6D6D",
                Dark: "#9E9E9E",
            }),
        }
    }
}

/// Navbar model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Site name shown on the left.
    pub brand: String,
    /// Menu entries.
    pub links: Vec<String>,
    /// Offsets at or below this never hide the bar.
    pub hide_threshold: u32,
    /// Key bindings.
    pub keymap: NavbarKeyMap,
    /// Styles.
    pub styles: Styles,
    last_offset: u32,
    hidden: bool,
    menu_open: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Model {
    /// Creates a visible navbar with a closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a navbar using `site_name` and `navbar_hide_threshold`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            brand: config.site_name.clone(),
            links: ["Home", "Products", "Blog", "About", "Contact"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            hide_threshold: config.navbar_hide_threshold,
            keymap: NavbarKeyMap::default(),
            styles: Styles::default(),
            last_offset: 0,
            hidden: false,
            menu_open: false,
        }
    }

    /// Sets the menu entries (builder pattern).
    pub fn with_links(mut self, links: &[&str]) -> Self {
        self.links = links.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Records a new scroll offset and returns whether the bar is hidden.
    pub fn scroll_to(&mut self, offset: u32) -> bool {
        self.hidden = offset > self.last_offset && offset > self.hide_threshold;
        trace!(offset, last = self.last_offset, hidden = self.hidden, "navbar scroll");
        self.last_offset = offset;
        self.hidden
    }

    /// Opens or closes the menu; returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// True while scrolled away.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// True while the menu is open.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Handles [`ScrollMsg`], [`ToggleMenuMsg`] and the menu key.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(scroll) = msg.downcast_ref::<ScrollMsg>() {
            self.scroll_to(scroll.offset);
        } else if msg.downcast_ref::<ToggleMenuMsg>().is_some() {
            self.toggle_menu();
        } else if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.toggle_menu.matches(key_msg) {
                self.toggle_menu();
            }
        }
        None
    }

    /// Renders the bar, or nothing while hidden.
    pub fn view(&self) -> String {
        if self.hidden {
            return String::new();
        }

        let glyph = if self.menu_open { "✕" } else { "☰" };
        let bar = format!(
            "{}  {}",
            self.styles.brand.clone().inline(true).render(&self.brand),
            self.styles.toggle.clone().inline(true).render(glyph)
        );
        if !self.menu_open {
            return bar;
        }

        let mut lines = vec![bar];
        lines.extend(
            self.links
                .iter()
                .map(|link| self.styles.link.clone().inline(true).render(link)),
        );
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_hide_show_sequence() {
        let mut navbar = Model::new();
        // down, but not past the threshold
        assert!(!navbar.scroll_to(80));
        // down, past the threshold
        assert!(navbar.scroll_to(150));
        assert!(navbar.scroll_to(300));
        // up
        assert!(!navbar.scroll_to(250));
        // same position counts as not scrolling down
        assert!(!navbar.scroll_to(250));
        assert!(navbar.scroll_to(251));
    }

    #[test]
    fn test_threshold_boundary() {
        let mut navbar = Model::new();
        assert!(!navbar.scroll_to(100));
        assert!(navbar.scroll_to(101));
    }

    #[test]
    fn test_custom_threshold() {
        let config = Config {
            navbar_hide_threshold: 0,
            ..Config::default()
        };
        let mut navbar = Model::from_config(&config);
        assert!(navbar.scroll_to(1));
    }

    #[test]
    fn test_update_messages() {
        let mut navbar = Model::new();
        navbar.update(&(Box::new(ScrollMsg { offset: 500 }) as Msg));
        assert!(navbar.is_hidden());
        assert_eq!(navbar.view(), "");

        navbar.update(&(Box::new(ScrollMsg { offset: 10 }) as Msg));
        assert!(!navbar.is_hidden());

        navbar.update(&(Box::new(ToggleMenuMsg) as Msg));
        assert!(navbar.menu_open());

        let key = Box::new(KeyMsg {
            key: KeyCode::Char('m'),
            modifiers: KeyModifiers::NONE,
        }) as Msg;
        navbar.update(&key);
        assert!(!navbar.menu_open());
    }

    #[test]
    fn test_view_menu() {
        let mut navbar = Model::new().with_links(&["Shop", "Journal"]);
        assert_eq!(plain(&navbar.view()), "GreenHub  ☰");

        navbar.toggle_menu();
        assert_eq!(plain(&navbar.view()), "GreenHub  ✕\nShop\nJournal");
    }
}
