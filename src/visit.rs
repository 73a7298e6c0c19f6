//! First-visit detection and the delayed welcome notice.
//!
//! A [`VisitStore`] remembers whether the user has been here before. On the
//! first visit [`welcome`] marks the flag and returns a command that, after
//! `welcome_delay`, asks the toast model to greet the user.
//!
//! ```rust
//! use storefront_widgets::config::Config;
//! use storefront_widgets::visit::{welcome, MemoryStore};
//!
//! let config = Config::default();
//! let mut store = MemoryStore::default();
//! assert!(welcome(&mut store, &config).unwrap().is_some());
//! assert!(welcome(&mut store, &config).unwrap().is_none());
//! ```

use crate::config::Config;
use crate::error::{Error, Result};
use crate::toast::{Kind, ShowMsg};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persistent "has visited" flag.
pub trait VisitStore {
    /// Whether the flag is set.
    fn has_visited(&self) -> Result<bool>;
    /// Sets the flag.
    fn mark_visited(&mut self) -> Result<()>;
}

/// Flag kept in memory; forgotten when dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    visited: bool,
}

impl VisitStore for MemoryStore {
    fn has_visited(&self) -> Result<bool> {
        Ok(self.visited)
    }

    fn mark_visited(&mut self) -> Result<()> {
        self.visited = true;
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct VisitFile {
    #[serde(default)]
    has_visited: bool,
}

/// Flag kept in a small JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store backed by `path`. The file is created on the first
    /// [`mark_visited`](VisitStore::mark_visited).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store in the platform data directory, e.g.
    /// `~/.local/share/storefront-widgets/visit.json` on Linux.
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "storefront-widgets").ok_or(Error::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().join("visit.json")))
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VisitStore for FileStore {
    fn has_visited(&self) -> Result<bool> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(Error::io(&self.path, e)),
        };
        let file: VisitFile = serde_json::from_str(&text)?;
        Ok(file.has_visited)
    }

    fn mark_visited(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let json = serde_json::to_string(&VisitFile { has_visited: true })?;
        std::fs::write(&self.path, json).map_err(|e| Error::io(&self.path, e))?;
        debug!(path = ?self.path, "visit flag written");
        Ok(())
    }
}

/// Greets first-time visitors.
///
/// Returns `None` for returning visitors. Otherwise sets the flag right away
/// and returns a command that emits a success [`ShowMsg`] with
/// `config.welcome_message` after `config.welcome_delay_ms`.
pub fn welcome<S: VisitStore + ?Sized>(store: &mut S, config: &Config) -> Result<Option<Cmd>> {
    if store.has_visited()? {
        debug!("returning visitor");
        return Ok(None);
    }
    store.mark_visited()?;
    debug!("first visit, scheduling welcome");

    let msg = ShowMsg {
        message: config.welcome_message.clone(),
        kind: Kind::Success,
    };
    Ok(Some(bubbletea_tick(config.welcome_delay(), move |_| {
        Box::new(msg.clone()) as Msg
    })))
}
