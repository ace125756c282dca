// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and route table for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Query,
    Knowledge,
    Escalation,
    Analytics,
    Profile,
    NotFound,
}

/// Navigation entries in display order, each with its label key.
pub const NAV_ITEMS: [(Screen, &str); 6] = [
    (Screen::Dashboard, "dashboard"),
    (Screen::Query, "query"),
    (Screen::Knowledge, "knowledge"),
    (Screen::Escalation, "escalation"),
    (Screen::Analytics, "analytics"),
    (Screen::Profile, "profile"),
];

impl Screen {
    /// Maps a path to its screen. Unknown paths map to [`Screen::NotFound`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        NAV_ITEMS
            .iter()
            .map(|(screen, _)| *screen)
            .find(|screen| screen.path() == Some(path))
            .unwrap_or(Screen::NotFound)
    }

    /// The route path, or `None` for [`Screen::NotFound`].
    #[must_use]
    pub fn path(self) -> Option<&'static str> {
        match self {
            Screen::Dashboard => Some("/"),
            Screen::Query => Some("/query"),
            Screen::Knowledge => Some("/knowledge"),
            Screen::Escalation => Some("/escalation"),
            Screen::Analytics => Some("/analytics"),
            Screen::Profile => Some("/profile"),
            Screen::NotFound => None,
        }
    }
}
