// SPDX-License-Identifier: MPL-2.0
//! Durable storage for the user's locale choice.

use crate::config;
use crate::error::Result;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// A single persisted locale identifier.
///
/// Values are opaque strings here; the store decides whether they name a
/// supported locale.
pub trait LocaleStorage {
    /// Reads the stored identifier. Unreadable storage reads as `None`.
    fn read(&self) -> Option<String>;

    /// Replaces the stored identifier.
    fn write(&mut self, id: &str) -> Result<()>;
}

/// Persists the locale as `general.language` in `settings.toml`.
#[derive(Debug, Clone, Default)]
pub struct SettingsStorage {
    base_dir: Option<PathBuf>,
}

impl SettingsStorage {
    /// Uses the standard config directory resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `base_dir` as the config directory.
    #[must_use]
    pub fn with_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }
}

impl LocaleStorage for SettingsStorage {
    fn read(&self) -> Option<String> {
        let (cfg, _warning) = config::load_with_override(self.base_dir.clone());
        cfg.general.language
    }

    fn write(&mut self, id: &str) -> Result<()> {
        let (mut cfg, _warning) = config::load_with_override(self.base_dir.clone());
        cfg.general.language = Some(id.to_string());
        config::save_with_override(&cfg, self.base_dir.clone())
    }
}

/// In-process storage. Clones share the same slot, so a clone handed to a
/// second store sees what the first one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `id`.
    #[must_use]
    pub fn with_value(id: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(id.into()))),
        }
    }
}

impl LocaleStorage for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&mut self, id: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(id.to_string());
        Ok(())
    }
}
