//! Key binding help line for component footers.
//!
//! The listing, newsletter and navbar components each expose a keymap that
//! implements [`KeyMap`]. [`Model::view`] turns it into a compact
//! `"←/h prev page • →/l next page"` line, truncated with an ellipsis when a
//! width is set. With `show_all` the bindings are laid out in columns instead.

use crate::key::{self, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help line.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the ellipsis shown when the line is truncated.
    pub ellipsis: Style,
    /// Style of key labels.
    pub key: Style,
    /// Style of binding descriptions.
    pub desc: Style,
    /// Style of the separator between bindings.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            key: key_style,
            desc: desc_style,
            separator: sep_style,
        }
    }
}

/// Help view state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Show every binding in columns instead of the one-line summary.
    pub show_all: bool,
    /// Maximum width in columns; `0` means unlimited.
    pub width: usize,
    /// Separator between bindings in the short view.
    pub short_separator: String,
    /// Separator between columns in the full view.
    pub full_separator: String,
    /// Marker appended when the short view is truncated.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders help for the given keymap.
    pub fn view<K: KeyMap + ?Sized>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line, skipping disabled ones.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = self
            .styles
            .separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut out = String::new();
        let mut total_width = 0;
        for binding in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = binding.help();
            let entry = format!(
                "{}{} {}",
                sep,
                self.styles.key.clone().inline(true).render(&help.key),
                self.styles.desc.clone().inline(true).render(&help.desc)
            );
            let entry_width = lipgloss::width_visible(&entry);

            if let Some(tail) = self.truncation_tail(total_width, entry_width) {
                out.push_str(&tail);
                break;
            }
            total_width += entry_width;
            out.push_str(&entry);
        }
        out
    }

    /// Renders groups of bindings as columns.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let columns: Vec<Vec<String>> = groups
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .filter(|b| b.enabled())
                    .map(|b| {
                        let help = b.help();
                        format!(
                            "{} {}",
                            self.styles.key.clone().inline(true).render(&help.key),
                            self.styles.desc.clone().inline(true).render(&help.desc)
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|col| !col.is_empty())
            .collect();

        let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = columns
            .iter()
            .map(|col| col.iter().map(|s| lipgloss::width_visible(s)).max().unwrap_or(0))
            .collect();

        let mut lines = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut line = String::new();
            for (i, col) in columns.iter().enumerate() {
                if i > 0 {
                    line.push_str(&self.full_separator);
                }
                let cell = col.get(row).map(String::as_str).unwrap_or("");
                line.push_str(cell);
                let pad = widths[i].saturating_sub(lipgloss::width_visible(cell));
                line.push_str(&" ".repeat(pad));
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn truncation_tail(&self, total_width: usize, entry_width: usize) -> Option<String> {
        if self.width == 0 || total_width + entry_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles.ellipsis.clone().inline(true).render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) < self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Binding;
    use crossterm::event::KeyCode;

    struct Keys {
        prev: Binding,
        next: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.prev, &self.next]
        }
    }

    fn keys() -> Keys {
        Keys {
            prev: Binding::new(vec![KeyCode::Left]).with_help("←", "prev page"),
            next: Binding::new(vec![KeyCode::Right]).with_help("→", "next page"),
        }
    }

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_short_help_lists_bindings() {
        let view = plain(&Model::new().view(&keys()));
        assert_eq!(view, "← prev page • → next page");
    }

    #[test]
    fn test_disabled_bindings_are_skipped() {
        let mut k = keys();
        k.prev.set_enabled(false);
        let view = plain(&Model::new().view(&k));
        assert_eq!(view, "→ next page");
    }

    #[test]
    fn test_width_truncates_with_ellipsis() {
        let view = plain(&Model::new().with_width(14).view(&keys()));
        assert!(view.starts_with("← prev page"));
        assert!(view.ends_with('…'));
        assert!(!view.contains("next"));
    }

    #[test]
    fn test_full_help_is_multiline() {
        let mut help = Model::new();
        help.show_all = true;
        let k = keys();
        let view = plain(&help.full_help_view(vec![vec![&k.prev, &k.next]]));
        assert_eq!(view.lines().count(), 2);
    }
}
