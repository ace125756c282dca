// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A translation source failed to parse or register.
    Catalog(String),
    /// Key sets differ between locale tables.
    CatalogDrift(String),
    UnknownLocale(String),
    /// A view asked for locale state without a store wired into its context.
    MissingLocaleContext,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::CatalogDrift(e) => write!(f, "Catalog Drift: {}", e),
            Error::UnknownLocale(id) => write!(f, "Unknown locale: {:?}", id),
            Error::MissingLocaleContext => {
                write!(f, "locale lookup outside of a LocaleStore context")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
