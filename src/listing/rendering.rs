use super::model::Model;
use super::types::Item;
use crate::listing::Category;

impl<I: Item> Model<I> {
    /// Renders the title line and, when a filter or search is active, a note
    /// describing it.
    pub(super) fn view_header(&self) -> String {
        let title = self
            .styles
            .title
            .clone()
            .padding(0, 1, 0, 1)
            .render(&self.title);

        let mut notes = Vec::new();
        if let Category::Named(name) = &self.category {
            notes.push(format!("category: {}", name));
        }
        if !self.search_term.is_empty() {
            notes.push(format!("search: \"{}\"", self.search_term));
        }
        if notes.is_empty() {
            return title;
        }

        let note = self
            .styles
            .filter_note
            .clone()
            .inline(true)
            .render(&notes.join(", "));
        format!("{}  {}", title, note)
    }

    /// Renders the "Showing X-Y of N" line.
    pub(super) fn view_status(&self) -> String {
        let descriptor = self.current_page_descriptor();
        let summary = descriptor.summary(&self.noun_singular, &self.noun_plural);
        let style = if descriptor.has_items() {
            &self.styles.status
        } else {
            &self.styles.no_items
        };
        style.clone().inline(true).render(&summary)
    }

    /// Renders the cards of the current page through the delegate.
    pub(super) fn view_items(&self) -> String {
        let Some(first) = self.current_page_descriptor().start_index() else {
            return String::new();
        };

        let separator = "\n".repeat(self.delegate.spacing() + 1);
        self.page_items()
            .into_iter()
            .enumerate()
            .map(|(offset, item)| self.delegate.render(item, first + offset))
            .filter(|card| !card.is_empty())
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Renders the listing: header, status line, cards, page bar and help.
    ///
    /// The page bar only appears when there is more than one page.
    pub fn view(&self) -> String {
        let mut sections = vec![self.view_header(), self.view_status()];

        let items = self.view_items();
        if !items.is_empty() {
            sections.push(items);
        }

        if self.current_page_descriptor().shows_navigation() {
            sections.push(self.paginator.view());
        }

        if self.show_help {
            let help = self.help.view(&self.keymap);
            if !help.is_empty() {
                sections.push(help);
            }
        }

        sections.join("\n\n")
    }
}
