//! Messages the listing reacts to and its `update` function.
//!
//! Input sources (category tabs, a search box, page buttons, a page-size
//! select) do not call into the listing directly. They emit one of the
//! messages below, and the host forwards every message to
//! [`Model::update`](super::Model::update). Keyboard paging works the same
//! way through `KeyMsg`.

use super::model::Model;
use super::types::{Item, PageSize};
use crate::toast::{self, Kind};
use bubbletea_rs::{Cmd, KeyMsg, Msg};

/// A category tab was chosen. `"all"` clears the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelectedMsg(pub String);

/// The search box text changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTextChangedMsg(pub String);

/// A page button was pressed. Out-of-range pages are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequestedMsg(pub i64);

/// The "next" control was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPageMsg;

/// The "previous" control was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrevPageMsg;

/// A page size was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeChangedMsg(pub PageSize);

impl<I: Item> Model<I> {
    /// Routes a message to the matching operation.
    ///
    /// Returns a toast command when the page size changed, so the host can
    /// confirm the new size to the user. Every other message yields `None`.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(CategorySelectedMsg(category)) = msg.downcast_ref::<CategorySelectedMsg>() {
            self.set_category(category.as_str());
            return None;
        }
        if let Some(SearchTextChangedMsg(text)) = msg.downcast_ref::<SearchTextChangedMsg>() {
            self.set_search_term(text);
            return None;
        }
        if let Some(PageRequestedMsg(page)) = msg.downcast_ref::<PageRequestedMsg>() {
            self.go_to_page(*page);
            return None;
        }
        if msg.downcast_ref::<NextPageMsg>().is_some() {
            self.next_page();
            return None;
        }
        if msg.downcast_ref::<PrevPageMsg>().is_some() {
            self.previous_page();
            return None;
        }
        if let Some(PageSizeChangedMsg(size)) = msg.downcast_ref::<PageSizeChangedMsg>() {
            return Some(self.change_page_size(*size));
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.next_page.matches(key_msg) {
            self.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.previous_page();
        } else if self.keymap.first_page.matches(key_msg) {
            self.go_to_page(1);
        } else if self.keymap.last_page.matches(key_msg) {
            let last = self.paginator.total_pages;
            self.go_to_page(i64::try_from(last).unwrap_or(i64::MAX));
        } else if self.keymap.cycle_page_size.matches(key_msg) {
            let next = self.page_size.next_option();
            return Some(self.change_page_size(next));
        }
        None
    }

    fn change_page_size(&mut self, size: PageSize) -> Cmd {
        self.set_page_size(size);
        toast::notify(self.page_size_notice(), Kind::Info)
    }

    /// Confirmation text for a page-size change.
    pub(super) fn page_size_notice(&self) -> String {
        match self.page_size {
            PageSize::Fixed(n) => format!("Showing {} {} per page", n, self.noun_plural),
            PageSize::All => format!("Showing all {}", self.noun_plural),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{CatalogItem, Category};
    use crate::toast::ShowMsg;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn catalog(n: usize) -> Vec<CatalogItem> {
        (1..=n)
            .map(|i| {
                let category = if i % 3 == 0 { "tools" } else { "garden" };
                CatalogItem::new(&format!("Item {i}"), "", category)
            })
            .collect()
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    #[test]
    fn test_category_message() {
        let mut listing = Model::new(catalog(12));
        let cmd = listing.update(&(Box::new(CategorySelectedMsg("tools".into())) as Msg));
        assert!(cmd.is_none());
        assert_eq!(listing.category(), &Category::from("tools"));
        assert_eq!(listing.len(), 4);
    }

    #[test]
    fn test_search_message() {
        let mut listing = Model::new(catalog(12));
        listing.update(&(Box::new(SearchTextChangedMsg("Item 1".into())) as Msg));
        assert_eq!(listing.len(), 4);
    }

    #[test]
    fn test_page_messages() {
        let mut listing = Model::new(catalog(20));
        listing.update(&(Box::new(PageRequestedMsg(9)) as Msg));
        assert_eq!(listing.current_page_descriptor().page, 4);

        listing.update(&(Box::new(PrevPageMsg) as Msg));
        assert_eq!(listing.current_page_descriptor().page, 3);

        listing.update(&(Box::new(NextPageMsg) as Msg));
        listing.update(&(Box::new(NextPageMsg) as Msg));
        assert_eq!(listing.current_page_descriptor().page, 4);
    }

    #[test]
    fn test_paging_keys() {
        let mut listing = Model::new(catalog(20));
        listing.update(&key(KeyCode::Right));
        listing.update(&key(KeyCode::Char('l')));
        assert_eq!(listing.current_page_descriptor().page, 3);

        listing.update(&key(KeyCode::Home));
        assert_eq!(listing.current_page_descriptor().page, 1);

        listing.update(&key(KeyCode::End));
        assert_eq!(listing.current_page_descriptor().page, 4);

        listing.update(&key(KeyCode::Left));
        assert_eq!(listing.current_page_descriptor().page, 3);
    }

    #[test]
    fn test_unrelated_message_is_ignored() {
        let mut listing = Model::new(catalog(20));
        listing.go_to_page(2);
        assert!(listing.update(&(Box::new(42u32) as Msg)).is_none());
        assert!(listing.update(&key(KeyCode::Char('x'))).is_none());
        assert_eq!(listing.current_page_descriptor().page, 2);
    }

    #[test]
    fn test_page_size_notice() {
        let mut listing = Model::new(catalog(20));
        listing.set_page_size(PageSize::fixed(9).unwrap());
        assert_eq!(listing.page_size_notice(), "Showing 9 articles per page");
        listing.set_page_size(PageSize::All);
        assert_eq!(listing.page_size_notice(), "Showing all articles");
    }

    #[tokio::test]
    async fn test_page_size_message_notifies() {
        let mut listing = Model::new(catalog(20));
        listing.go_to_page(3);
        let size = PageSize::fixed(12).unwrap();
        let cmd = listing
            .update(&(Box::new(PageSizeChangedMsg(size)) as Msg))
            .expect("page size change should notify");

        assert_eq!(listing.page_size(), size);
        assert_eq!(listing.current_page_descriptor().page, 1);

        let msg = cmd.await.expect("notify yields a message");
        let show = msg.downcast_ref::<ShowMsg>().expect("ShowMsg");
        assert_eq!(show.message, "Showing 12 articles per page");
        assert_eq!(show.kind, Kind::Info);
    }

    #[tokio::test]
    async fn test_cycle_key_advances_size() {
        let mut listing = Model::new(catalog(20));
        let cmd = listing.update(&key(KeyCode::Char('s'))).expect("toast");
        assert_eq!(listing.page_size(), PageSize::fixed(9).unwrap());
        let msg = cmd.await.expect("message");
        assert!(msg.downcast_ref::<ShowMsg>().is_some());
    }
}
