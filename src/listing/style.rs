//! Styles for the listing's header and status line.

use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;

/// Styles for the parts of the listing view that are not cards.
#[derive(Debug, Clone)]
pub struct ListingStyles {
    /// Title line.
    pub title: Style,
    /// Active filter/search note next to the title.
    pub filter_note: Style,
    /// "Showing X-Y of N" line.
    pub status: Style,
    /// "No articles found" line.
    pub no_items: Style,
}

impl Default for ListingStyles {
    fn default() -> Self {
        Self {
            title: Style::new()
                .foreground(Color::from("#FFFDF5"))
                .background(Color::from("#2E7D32"))
                .bold(true),
            filter_note: Style::new().foreground(AdaptiveColor {
                Light: "#6D6D6D",
                Dark: "#9E9E9E",
            }),
            status: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}
