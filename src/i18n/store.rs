// SPDX-License-Identifier: MPL-2.0
//! The locale store: single source of truth for the active display language.
//!
//! The store owns the translation [`Catalog`] and a [`LocaleStorage`] backend.
//! It never returns errors to its callers: unknown keys resolve to the key
//! text, unrecognized persisted values are ignored, and persistence failures
//! are logged and dropped.
//!
//! Views that need to re-render on a language change hold a
//! [`watch::Receiver`] obtained from [`LocaleStore::subscribe`].

use super::fluent::{Catalog, Lookup};
use super::locale::Locale;
use super::storage::LocaleStorage;
use crate::error::Result;
use fluent_bundle::FluentArgs;
use tokio::sync::watch;

pub struct LocaleStore {
    catalog: Catalog,
    storage: Box<dyn LocaleStorage>,
    active: watch::Sender<Locale>,
}

impl LocaleStore {
    /// Creates a store at the default locale. Storage is not read until
    /// [`initialize`](Self::initialize).
    pub fn new(catalog: Catalog, storage: impl LocaleStorage + 'static) -> Self {
        Self {
            catalog,
            storage: Box::new(storage),
            active: watch::Sender::new(Locale::default()),
        }
    }

    /// Builds the embedded catalog and restores the persisted locale.
    pub fn open(storage: impl LocaleStorage + 'static) -> Result<Self> {
        let mut store = Self::new(Catalog::embedded()?, storage);
        store.initialize();
        Ok(store)
    }

    #[must_use]
    pub fn active(&self) -> Locale {
        *self.active.borrow()
    }

    /// Restores the persisted locale.
    ///
    /// A stored identifier that does not name a supported locale is ignored
    /// and the current locale is kept.
    pub fn initialize(&mut self) {
        self.initialize_with_override(None);
    }

    /// Like [`initialize`](Self::initialize), but a valid `session` identifier
    /// wins over the persisted one. The override is not written back.
    pub fn initialize_with_override(&mut self, session: Option<&str>) {
        let session = session.and_then(|id| recognize(id, "session override"));
        let restored = session.or_else(|| {
            self.storage
                .read()
                .and_then(|id| recognize(&id, "persisted value"))
        });

        if let Some(locale) = restored {
            self.replace(locale);
        }
    }

    /// Advances to the next locale in [`Locale::ALL`] order and persists it.
    pub fn toggle_locale(&mut self) {
        self.set_locale(self.active().next());
    }

    /// Makes `next` active, notifies subscribers if it changed, and persists it.
    ///
    /// A failed write is logged and otherwise ignored.
    pub fn set_locale(&mut self, next: Locale) {
        if self.replace(next) {
            tracing::info!(locale = %next, "display language changed");
        }
        if let Err(error) = self.storage.write(next.id()) {
            tracing::warn!(locale = %next, %error, "failed to persist display language");
        }
    }

    /// Returns `true` when the active locale changed.
    fn replace(&mut self, next: Locale) -> bool {
        self.active.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }

    /// Resolves `key` under the active locale without applying the fallback.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Lookup {
        self.catalog.lookup(self.active(), key)
    }

    /// Translates `key`, or returns `key` unchanged when no translation exists.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.resolve(key).or_key(key)
    }

    /// Translates `key` with Fluent variables, falling back to `key`.
    #[must_use]
    pub fn translate_with_args(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.catalog
            .lookup_with_args(self.active(), key, args)
            .or_key(key)
    }

    /// A receiver that observes every locale change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.active.subscribe()
    }
}

fn recognize(id: &str, source: &'static str) -> Option<Locale> {
    let locale = Locale::from_id(id);
    if locale.is_none() {
        tracing::debug!(value = id, source, "ignoring unrecognized locale");
    }
    locale
}
