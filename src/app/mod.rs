// SPDX-License-Identifier: MPL-2.0
//! Application root state: the locale store plus the current route.
//!
//! The `App` struct wires the locale store into the view tree and translates
//! messages into state changes. Language switches are persisted by the store
//! itself; routing is in-memory only.

mod message;
pub mod paths;
mod screen;
mod view;

pub use message::{Flags, Message};
pub use screen::{Screen, NAV_ITEMS};

use crate::error::Result;
use crate::i18n::{Catalog, LocaleStorage, LocaleStore, MemoryStorage, SettingsStorage, ViewContext};
use std::fmt;

/// Root application state bridging localization and navigation.
pub struct App {
    store: LocaleStore,
    screen: Screen,
    path: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.store.active())
            .field("screen", &self.screen)
            .field("path", &self.path)
            .finish()
    }
}

impl App {
    /// Builds the application with storage chosen from `flags`.
    ///
    /// The config directory override must already be registered with
    /// [`paths::init_cli_override`].
    pub fn new(flags: &Flags) -> Result<Self> {
        if flags.ephemeral {
            Self::with_storage(flags, MemoryStorage::new())
        } else {
            Self::with_storage(flags, SettingsStorage::new())
        }
    }

    /// Builds the application on top of an explicit storage backend.
    pub fn with_storage(flags: &Flags, storage: impl LocaleStorage + 'static) -> Result<Self> {
        let catalog = Catalog::embedded()?;
        report_drift(&catalog);

        let mut store = LocaleStore::new(catalog, storage);
        store.initialize_with_override(flags.lang.as_deref());

        let mut app = Self {
            store,
            screen: Screen::Dashboard,
            path: "/".to_string(),
        };
        if let Some(route) = &flags.route {
            app.navigate(route.clone());
        }
        Ok(app)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ToggleLanguage => self.store.toggle_locale(),
            Message::Navigate(path) => self.navigate(path),
        }
    }

    fn navigate(&mut self, path: String) {
        self.screen = Screen::from_path(&path);
        if self.screen == Screen::NotFound {
            tracing::warn!(path = %path, "user attempted to access non-existent route");
        }
        self.path = path;
    }

    #[must_use]
    pub fn view(&self) -> Vec<String> {
        view::view(ViewContext::new(&self.store), self.screen)
    }

    #[must_use]
    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Logs every key one locale has and another lacks.
fn report_drift(catalog: &Catalog) {
    let report = catalog.parity_report();
    for (locale, keys) in &report.missing {
        for key in keys {
            tracing::error!(%locale, key = %key, "translation missing");
        }
    }
}
