//! Ready-made item and card renderer.
//!
//! `CatalogItem` covers the common product/blog card shape (title,
//! description, category and an optional price label) and can be loaded from
//! JSON. `DefaultDelegate` renders it, or any other [`Item`], as a small card:
//!
//! ```text
//! Organic Compost  [garden]  $12.99
//! Rich soil for raised beds
//! ```

use super::types::{Item, ItemDelegate};
use crate::error::Result;
use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A product or article card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Heading.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Category slug.
    pub category: String,
    /// Display price, e.g. `"$12.99"`. Products have one, articles don't.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl CatalogItem {
    /// Creates an item without a price.
    pub fn new(title: &str, description: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price: None,
        }
    }

    /// Sets the price label (builder pattern).
    pub fn with_price(mut self, price: &str) -> Self {
        self.price = Some(price.to_string());
        self
    }
}

impl Display for CatalogItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl Item for CatalogItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// Parses a JSON array of [`CatalogItem`]s.
///
/// ```
/// use storefront_widgets::listing::load_items_json;
///
/// let items = load_items_json(r#"[
///     {"title": "Trowel", "description": "Hand tool", "category": "tools", "price": "$9"}
/// ]"#).unwrap();
/// assert_eq!(items[0].price.as_deref(), Some("$9"));
/// ```
pub fn load_items_json(json: &str) -> Result<Vec<CatalogItem>> {
    let items: Vec<CatalogItem> = serde_json::from_str(json)?;
    tracing::debug!(count = items.len(), "loaded catalog items");
    Ok(items)
}

/// Styles for [`DefaultDelegate`] cards.
#[derive(Debug, Clone)]
pub struct DefaultItemStyles {
    /// Card heading.
    pub title: Style,
    /// Category tag.
    pub category: Style,
    /// Price label.
    pub price: Style,
    /// Body text.
    pub description: Style,
}

impl Default for DefaultItemStyles {
    fn default() -> Self {
        Self {
            title: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1B5E20",
                    Dark: "#A5D6A7",
                })
                .bold(true),
            category: Style::new().foreground(AdaptiveColor {
                Light: "#6D6D6D",
                Dark: "#9E9E9E",
            }),
            price: Style::new().foreground(Color::from("#2E7D32")).bold(true),
            description: Style::new().foreground(AdaptiveColor {
                Light: "#424242",
                Dark: "#DDDDDD",
            }),
        }
    }
}

/// Card renderer for any [`Item`].
#[derive(Debug, Clone, Default)]
pub struct DefaultDelegate {
    /// Card styles.
    pub styles: DefaultItemStyles,
    /// Whether to print the description line.
    pub show_description: bool,
}

impl DefaultDelegate {
    /// Creates a delegate that shows descriptions.
    pub fn new() -> Self {
        Self {
            styles: DefaultItemStyles::default(),
            show_description: true,
        }
    }
}

impl<I: Item> ItemDelegate<I> for DefaultDelegate {
    fn render(&self, item: &I, _position: usize) -> String {
        let heading = format!(
            "{}  {}",
            self.styles.title.clone().inline(true).render(item.title()),
            self.styles
                .category
                .clone()
                .inline(true)
                .render(&format!("[{}]", item.category()))
        );
        if !self.show_description || item.description().is_empty() {
            return heading;
        }
        format!(
            "{}\n{}",
            heading,
            self.styles
                .description
                .clone()
                .inline(true)
                .render(item.description())
        )
    }
}

/// Renders [`CatalogItem`]s with their price after the category tag.
#[derive(Debug, Clone, Default)]
pub struct PricedDelegate {
    inner: DefaultDelegate,
}

impl PricedDelegate {
    /// Creates a priced card renderer.
    pub fn new() -> Self {
        Self {
            inner: DefaultDelegate::new(),
        }
    }
}

impl ItemDelegate<CatalogItem> for PricedDelegate {
    fn render(&self, item: &CatalogItem, position: usize) -> String {
        let card = self.inner.render(item, position);
        let Some(price) = &item.price else {
            return card;
        };
        let price = self.inner.styles.price.clone().inline(true).render(price);
        match card.split_once('\n') {
            Some((heading, rest)) => format!("{}  {}\n{}", heading, price, rest),
            None => format!("{}  {}", card, price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_default_card() {
        let item = CatalogItem::new("Seed Kit", "Heirloom seeds", "garden");
        let card = plain(&DefaultDelegate::new().render(&item, 1));
        assert_eq!(card, "Seed Kit  [garden]\nHeirloom seeds");
    }

    #[test]
    fn test_card_without_description() {
        let item = CatalogItem::new("Seed Kit", "Heirloom seeds", "garden");
        let delegate = DefaultDelegate {
            show_description: false,
            ..DefaultDelegate::new()
        };
        assert_eq!(plain(&delegate.render(&item, 1)), "Seed Kit  [garden]");
    }

    #[test]
    fn test_priced_card() {
        let item = CatalogItem::new("Trowel", "Hand tool", "tools").with_price("$9.50");
        let card = plain(&PricedDelegate::new().render(&item, 1));
        assert_eq!(card, "Trowel  [tools]  $9.50\nHand tool");
    }

    #[test]
    fn test_load_items_json_rejects_garbage() {
        assert!(load_items_json("{not json").is_err());
        assert!(load_items_json("[]").unwrap().is_empty());
    }
}
