//! Key bindings for the listing.
//!
//! - **Paging**: `←/h/pgup` previous, `→/l/pgdown` next
//! - **Jumps**: `home/g` first page, `end/G` last page
//! - **Page size**: `s` cycles 6 → 9 → 12 → all

use crate::key::{self, KeyMap};

/// Listing key bindings.
#[derive(Debug, Clone)]
pub struct ListingKeyMap {
    /// Previous page.
    pub prev_page: key::Binding,
    /// Next page.
    pub next_page: key::Binding,
    /// First page.
    pub first_page: key::Binding,
    /// Last page.
    pub last_page: key::Binding,
    /// Switch to the next page-size option.
    pub cycle_page_size: key::Binding,
}

impl Default for ListingKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["left", "h", "pgup"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["right", "l", "pgdown"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
            cycle_page_size: key::new_binding(vec![
                key::with_keys_str(&["s"]),
                key::with_help("s", "page size"),
            ]),
        }
    }
}

impl KeyMap for ListingKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page, &self.cycle_page_size]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.first_page, &self.last_page],
            vec![&self.cycle_page_size],
        ]
    }
}
