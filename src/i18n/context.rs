// SPDX-License-Identifier: MPL-2.0
//! Explicit locale context handed down the view tree.

use super::store::LocaleStore;
use crate::error::{Error, Result};

/// Per-render context giving views access to the locale store.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    locale: Option<&'a LocaleStore>,
}

impl<'a> ViewContext<'a> {
    #[must_use]
    pub fn new(store: &'a LocaleStore) -> Self {
        Self {
            locale: Some(store),
        }
    }

    /// A context with no store wired in.
    #[must_use]
    pub fn detached() -> Self {
        Self { locale: None }
    }

    pub fn try_locale(&self) -> Result<&'a LocaleStore> {
        self.locale.ok_or(Error::MissingLocaleContext)
    }

    /// # Panics
    ///
    /// Panics if the context was built without a store. That is a wiring
    /// mistake in the view tree, not a data problem.
    #[must_use]
    pub fn locale(&self) -> &'a LocaleStore {
        match self.try_locale() {
            Ok(store) => store,
            Err(error) => panic!("{}", error),
        }
    }

    /// Shorthand for `self.locale().translate(key)`.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.locale().translate(key)
    }
}
