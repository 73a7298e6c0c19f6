//! Transient toast notifications.
//!
//! A toast shows one short message with a success, error or info colour. It
//! lives through three phases driven by timer messages:
//!
//! 1. **Entering**: created but not yet shown (`enter_delay`, 100 ms)
//! 2. **Visible**: shown until `lifetime` (4 s) has passed since creation
//! 3. **Leaving**: exit transition (`exit_duration`, 300 ms), then removed
//!
//! Only one toast exists at a time; showing another replaces it. Each toast
//! has a unique id, so timer messages still in flight for a replaced toast are
//! ignored. Dismissing (the click in a pointer UI) skips straight to
//! **Leaving**.
//!
//! Other components never own a toast. They return [`notify`] commands, and
//! the host forwards the resulting [`ShowMsg`] to its toast model:
//!
//! ```rust
//! use storefront_widgets::toast::{self, Kind};
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct App {
//!     toast: toast::Model,
//! }
//!
//! impl App {
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // ShowMsg, DismissMsg and the toast's own timer messages
//!         self.toast.update(&msg)
//!     }
//! }
//!
//! let _cmd = toast::notify("Saved", Kind::Success);
//! ```

use crate::config::Config;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

static LAST_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Toast flavour; decides the background colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Green.
    Success,
    /// Red.
    Error,
    /// Blue.
    #[default]
    Info,
}

impl Kind {
    /// Background colour as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            Kind::Success => "#4CAF50",
            Kind::Error => "#f44336",
            Kind::Info => "#2196F3",
        }
    }
}

/// Asks the toast model to show a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMsg {
    /// Text to show.
    pub message: String,
    /// Flavour.
    pub kind: Kind,
}

/// Dismisses the current toast early.
#[derive(Debug, Clone, Copy)]
pub struct DismissMsg;

/// Where a toast is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, not shown yet.
    Entering,
    /// On screen.
    Visible,
    /// Exit transition running.
    Leaving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Reveal,
    Expire,
    Remove,
}

/// Timer message advancing a toast's phase. Produced by the toast's own
/// commands; forward it to [`Model::update`].
#[derive(Debug, Clone, Copy)]
pub struct PhaseMsg {
    id: u64,
    step: Step,
}

/// Returns a command that emits a [`ShowMsg`].
pub fn notify(message: impl Into<String>, kind: Kind) -> Cmd {
    let msg = ShowMsg {
        message: message.into(),
        kind,
    };
    bubbletea_tick(Duration::from_nanos(1), move |_| Box::new(msg.clone()) as Msg)
}

/// The toast currently on screen (or about to be, or leaving).
#[derive(Debug, Clone)]
pub struct Toast {
    id: u64,
    /// Text.
    pub message: String,
    /// Flavour.
    pub kind: Kind,
    phase: Phase,
}

impl Toast {
    /// Unique id of this toast.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Toast widget state.
#[derive(Debug, Clone)]
pub struct Model {
    current: Option<Toast>,
    /// Delay before a new toast is revealed.
    pub enter_delay: Duration,
    /// Time from creation until the toast starts leaving.
    pub lifetime: Duration,
    /// Length of the exit transition.
    pub exit_duration: Duration,
    /// Wrap width in columns.
    pub max_width: usize,
    /// Text style; the background is set per kind.
    pub style: Style,
}

impl Default for Model {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Model {
    /// Creates a toast model with the default timings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a toast model using the timings from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            current: None,
            enter_delay: config.toast_enter_delay(),
            lifetime: config.toast_lifetime(),
            exit_duration: config.toast_exit(),
            max_width: config.toast_max_width.max(1),
            style: Style::new().foreground(Color::from("#FFFFFF")).bold(true),
        }
    }

    /// The current toast, if any.
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// True while a toast is on screen.
    pub fn is_visible(&self) -> bool {
        matches!(self.current.as_ref().map(|t| t.phase), Some(Phase::Visible))
    }

    /// Replaces any current toast with a new one and starts its timers.
    pub fn show(&mut self, message: impl Into<String>, kind: Kind) -> Cmd {
        let toast = Toast {
            id: next_id(),
            message: message.into(),
            kind,
            phase: Phase::Entering,
        };
        debug!(id = toast.id, ?kind, message = %toast.message, "toast shown");
        let id = toast.id;
        self.current = Some(toast);
        Self::schedule(id, Step::Reveal, self.enter_delay)
    }

    /// Starts the exit transition of the current toast.
    ///
    /// Returns `None` when there is no toast or it is already leaving.
    pub fn dismiss(&mut self) -> Option<Cmd> {
        let toast = self.current.as_mut()?;
        if toast.phase == Phase::Leaving {
            return None;
        }
        debug!(id = toast.id, "toast dismissed");
        toast.phase = Phase::Leaving;
        Some(Self::schedule(toast.id, Step::Remove, self.exit_duration))
    }

    /// Handles [`ShowMsg`], [`DismissMsg`] and [`PhaseMsg`].
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(show) = msg.downcast_ref::<ShowMsg>() {
            return Some(self.show(show.message.clone(), show.kind));
        }

        if msg.downcast_ref::<DismissMsg>().is_some() {
            return self.dismiss();
        }

        if let Some(phase_msg) = msg.downcast_ref::<PhaseMsg>() {
            return self.advance(*phase_msg);
        }

        None
    }

    fn advance(&mut self, msg: PhaseMsg) -> Option<Cmd> {
        let toast = match self.current.as_mut() {
            Some(t) if t.id == msg.id => t,
            _ => {
                trace!(id = msg.id, "stale toast timer ignored");
                return None;
            }
        };

        match (msg.step, toast.phase) {
            (Step::Reveal, Phase::Entering) => {
                toast.phase = Phase::Visible;
                let remaining = self.lifetime.saturating_sub(self.enter_delay);
                Some(Self::schedule(toast.id, Step::Expire, remaining))
            }
            (Step::Expire, Phase::Visible) => {
                toast.phase = Phase::Leaving;
                Some(Self::schedule(toast.id, Step::Remove, self.exit_duration))
            }
            (Step::Remove, Phase::Leaving) => {
                debug!(id = toast.id, "toast removed");
                self.current = None;
                None
            }
            _ => None,
        }
    }

    fn schedule(id: u64, step: Step, after: Duration) -> Cmd {
        bubbletea_tick(after, move |_| Box::new(PhaseMsg { id, step }) as Msg)
    }

    /// Renders the toast box, or an empty string when nothing is shown.
    pub fn view(&self) -> String {
        let toast = match &self.current {
            Some(t) if t.phase != Phase::Entering => t,
            _ => return String::new(),
        };

        let lines = wrap(&toast.message, self.max_width);
        let width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        let mut style = self
            .style
            .clone()
            .background(Color::from(toast.kind.color()))
            .inline(true);
        if toast.phase == Phase::Leaving {
            style = style.faint(true);
        }

        lines
            .iter()
            .map(|line| {
                let pad = width - line.width();
                style.render(&format!("  {}{}  ", line, " ".repeat(pad)))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Greedy word wrap by display width. Words wider than `width` get a line
/// of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
