// SPDX-License-Identifier: MPL-2.0
//! `krishi_officer` is the locale core of the Digital Krishi Officer
//! farmer-support client.
//!
//! It holds the active display language (Malayalam or English), persists it
//! across sessions, resolves translation keys against Fluent tables, and
//! renders the navigation shell that consumes those translations.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
