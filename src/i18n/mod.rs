// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Malayalam and English tables embedded from `.ftl` files
//! - Persisted language choice, restored at startup
//! - Runtime language switching with change notification
//! - Missing keys render as the key text itself

pub mod context;
pub mod fluent;
pub mod locale;
pub mod storage;
pub mod store;

pub use context::ViewContext;
pub use fluent::{Catalog, Lookup, ParityReport};
pub use fluent_bundle::FluentArgs;
pub use locale::Locale;
pub use storage::{LocaleStorage, MemoryStorage, SettingsStorage};
pub use store::LocaleStore;
