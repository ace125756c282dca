// SPDX-License-Identifier: MPL-2.0
//! The closed set of supported display languages.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use unic_langid::{langid, LanguageIdentifier};

/// A supported display language.
///
/// Exactly one locale is active at a time; see [`LocaleStore`](super::store::LocaleStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Malayalam,
    English,
}

impl Locale {
    /// Every supported locale, in toggle order.
    pub const ALL: [Locale; 2] = [Locale::Malayalam, Locale::English];

    /// Identifier written to persisted storage.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Locale::Malayalam => "ml",
            Locale::English => "en",
        }
    }

    /// Parses a persisted identifier. Exact match only.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.id() == id)
    }

    /// The locale after this one in [`Locale::ALL`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|locale| *locale == self)
            .unwrap_or_default();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn language_identifier(self) -> LanguageIdentifier {
        match self {
            Locale::Malayalam => langid!("ml"),
            Locale::English => langid!("en"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| Error::UnknownLocale(s.to_string()))
    }
}
