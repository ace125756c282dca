// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The shell is rendered as plain text lines: header with the language
//! switch label, navigation with the active entry marked, and footer.

use super::screen::{Screen, NAV_ITEMS};
use crate::i18n::ViewContext;

/// Renders the shell around `screen`.
#[must_use]
pub fn view(ctx: ViewContext<'_>, screen: Screen) -> Vec<String> {
    let mut lines = vec![
        format!("{}  [{}]", ctx.t("appTitle"), ctx.t("languageToggle")),
        ctx.t("appTitle.tagline"),
        String::new(),
    ];

    lines.extend(NAV_ITEMS.iter().map(|(item, label_key)| {
        let marker = if *item == screen { '>' } else { ' ' };
        format!("{} {}", marker, ctx.t(label_key))
    }));

    if screen == Screen::NotFound {
        lines.push(String::new());
        lines.extend(view_not_found(ctx));
    }

    lines.push(String::new());
    lines.push(ctx.t("appTitle.footer"));
    lines
}

fn view_not_found(ctx: ViewContext<'_>) -> [String; 3] {
    [
        ctx.t("notFound"),
        ctx.t("notFound.message"),
        ctx.t("notFound.returnHome"),
    ]
}
