//! Type-safe key bindings shared by every component in the crate.
//!
//! A [`Binding`] groups one or more key presses under a help entry. Components
//! keep their bindings in a keymap struct and implement [`KeyMap`] so the
//! [`help`](crate::help) module can render a footer from them.
//!
//! Bindings can be built directly from crossterm key codes:
//!
//! ```rust
//! use storefront_widgets::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')]).with_help("→/l", "next page");
//! assert_eq!(next.help().desc, "next page");
//! ```
//!
//! or with the option-list style, which accepts key names:
//!
//! ```rust
//! use storefront_widgets::key;
//!
//! let submit = key::new_binding(vec![
//!     key::with_keys_str(&["enter", "ctrl+s"]),
//!     key::with_help("enter", "subscribe"),
//! ]);
//! assert_eq!(submit.keys().len(), 2);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held. Shift is ignored when matching.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Parses a key name such as `"pgup"`, `"enter"`, `"ctrl+c"` or `"h"`.
    ///
    /// Returns `None` for names that do not map to a key.
    pub fn parse(name: &str) -> Option<Self> {
        if let Some(rest) = name.strip_prefix("ctrl+") {
            return Self::parse(rest).map(|k| Self {
                code: k.code,
                modifiers: k.modifiers | KeyModifiers::CONTROL,
            });
        }
        if let Some(rest) = name.strip_prefix("alt+") {
            return Self::parse(rest).map(|k| Self {
                code: k.code,
                modifiers: k.modifiers | KeyModifiers::ALT,
            });
        }

        let code = match name {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "space" => KeyCode::Char(' '),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(code.into())
    }

    fn matches(&self, msg: &KeyMsg) -> bool {
        self.code == msg.key
            && (self.modifiers & !KeyModifiers::SHIFT) == (msg.modifiers & !KeyModifiers::SHIFT)
    }
}

/// Help text attached to a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label shown in help, e.g. `"←/h"`.
    pub key: String,
    /// Short description, e.g. `"prev page"`.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given keys with empty help.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the keys of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help entry.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    ///
    /// Disabled bindings never match and are skipped by the help view. The
    /// listing disables its page keys when there is only one page.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// An option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option: sets the keys from key names (see [`KeyPress::parse`]).
///
/// Unknown names are dropped.
pub fn with_keys_str(names: &[&str]) -> BindingOpt {
    let keys: Vec<KeyPress> = names.iter().filter_map(|n| KeyPress::parse(n)).collect();
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Option: sets the help entry.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Option: starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Returns true if the message matches any of the bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Implemented by component keymaps so help views can list their bindings.
pub trait KeyMap {
    /// Bindings shown in the one-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![self.short_help()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(KeyPress::parse("pgup").map(|k| k.code), Some(KeyCode::PageUp));
        assert_eq!(KeyPress::parse("h").map(|k| k.code), Some(KeyCode::Char('h')));
        assert_eq!(KeyPress::parse("space").map(|k| k.code), Some(KeyCode::Char(' ')));
        assert!(KeyPress::parse("nonsense").is_none());

        let ctrl_c = KeyPress::parse("ctrl+c").unwrap();
        assert_eq!(ctrl_c.code, KeyCode::Char('c'));
        assert_eq!(ctrl_c.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_binding_matches() {
        let binding = new_binding(vec![
            with_keys_str(&["right", "l"]),
            with_help("→/l", "next page"),
        ]);

        assert!(binding.matches(&press(KeyCode::Right, KeyModifiers::NONE)));
        assert!(binding.matches(&press(KeyCode::Char('l'), KeyModifiers::NONE)));
        assert!(!binding.matches(&press(KeyCode::Char('l'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&press(KeyCode::Left, KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_is_ignored() {
        let binding = Binding::new(vec![KeyCode::Char('G')]);
        assert!(binding.matches(&press(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding() {
        let mut binding = new_binding(vec![with_keys_str(&["enter"]), with_disabled()]);
        assert!(!binding.enabled());
        assert!(!binding.matches(&press(KeyCode::Enter, KeyModifiers::NONE)));

        binding.set_enabled(true);
        assert!(binding.matches(&press(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_matches_any() {
        let a = Binding::new(vec![KeyCode::Char('a')]);
        let b = Binding::new(vec![KeyCode::Char('b')]);
        assert!(matches(&press(KeyCode::Char('b'), KeyModifiers::NONE), &[&a, &b]));
        assert!(!matches(&press(KeyCode::Char('c'), KeyModifiers::NONE), &[&a, &b]));
    }
}
