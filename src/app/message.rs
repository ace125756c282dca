// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleLanguage,
    Navigate(String),
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Session language override (`--lang`), not persisted.
    pub lang: Option<String>,
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Initial route (`--route`).
    pub route: Option<String>,
    /// Keep the language choice in memory only (`--ephemeral`).
    pub ephemeral: bool,
}
