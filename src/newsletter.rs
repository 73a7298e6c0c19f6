//! Newsletter sign-up field.
//!
//! A single-line email input. Submitting validates the address and answers
//! with a toast command: a thank-you on success (the field is cleared), an
//! error message otherwise (the field is kept so the user can fix it).
//!
//! ```rust
//! use storefront_widgets::newsletter::{validate_email, SubscriptionError};
//!
//! assert_eq!(validate_email("  ada@example.org ").unwrap(), "ada@example.org");
//! assert_eq!(validate_email(""), Err(SubscriptionError::Empty));
//! assert_eq!(validate_email("ada@example"), Err(SubscriptionError::Invalid));
//! ```

use crate::config::Config;
use crate::key::{self, KeyMap};
use crate::toast::{self, Kind};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

// Same shape check a browser form would do: something@something.something
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Why an address was refused. The `Display` text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    /// Nothing (or only whitespace) was entered.
    #[error("Please enter your email address")]
    Empty,
    /// The text does not look like `name@domain.tld`.
    #[error("Please enter a valid email address")]
    Invalid,
}

/// Trims `input` and checks it looks like an email address.
pub fn validate_email(input: &str) -> Result<String, SubscriptionError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(SubscriptionError::Empty);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(SubscriptionError::Invalid);
    }
    Ok(email.to_string())
}

/// Newsletter key bindings.
#[derive(Debug, Clone)]
pub struct NewsletterKeyMap {
    /// Submit the address.
    pub submit: key::Binding,
}

impl Default for NewsletterKeyMap {
    fn default() -> Self {
        Self {
            submit: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "subscribe"),
            ]),
        }
    }
}

impl KeyMap for NewsletterKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.submit]
    }
}

/// Styles for the field.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Label before the field.
    pub prompt: Style,
    /// Typed text.
    pub text: Style,
    /// Placeholder shown while empty.
    pub placeholder: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            prompt: Style::new().foreground(Color::from("#2E7D32")).bold(true),
            text: Style::new(),
            placeholder: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
        }
    }
}

/// Newsletter sign-up model.
#[derive(Debug, Clone)]
pub struct Model {
    value: String,
    focused: bool,
    site_name: String,
    /// Label shown before the field.
    pub prompt: String,
    /// Shown while the field is empty.
    pub placeholder: String,
    /// Key bindings.
    pub keymap: NewsletterKeyMap,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Model {
    /// Creates an empty, unfocused field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field whose thank-you message names `config.site_name`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            value: String::new(),
            focused: false,
            site_name: config.site_name.clone(),
            prompt: "Newsletter: ".to_string(),
            placeholder: "you@example.com".to_string(),
            keymap: NewsletterKeyMap::default(),
            styles: Styles::default(),
        }
    }

    /// Current field text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the field text.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Validates the field and returns the toast to show.
    ///
    /// On success the field is cleared. On failure it keeps its text.
    pub fn subscribe(&mut self) -> Cmd {
        match validate_email(&self.value) {
            Ok(email) => {
                debug!(%email, "newsletter subscription accepted");
                self.value.clear();
                toast::notify(
                    format!("Thank you for subscribing! Welcome to {}.", self.site_name),
                    Kind::Success,
                )
            }
            Err(err) => {
                debug!(%err, "newsletter subscription rejected");
                toast::notify(err.to_string(), Kind::Error)
            }
        }
    }

    /// Handles typing, backspace and submit while focused.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focused {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.submit.matches(key_msg) {
            return Some(self.subscribe());
        }
        match key_msg.key {
            KeyCode::Char(c)
                if !key_msg
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.value.push(c);
            }
            KeyCode::Backspace => {
                self.value.pop();
            }
            _ => {}
        }
        None
    }

    /// Renders the prompt and the field (or its placeholder).
    pub fn view(&self) -> String {
        let prompt = self.styles.prompt.clone().inline(true).render(&self.prompt);
        let field = if self.value.is_empty() {
            self.styles
                .placeholder
                .clone()
                .inline(true)
                .render(&self.placeholder)
        } else {
            self.styles.text.clone().inline(true).render(&self.value)
        };
        let cursor = if self.focused { "▏" } else { "" };
        format!("{}{}{}", prompt, field, cursor)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        None
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn focused(&self) -> bool {
        self.focused
    }
}
