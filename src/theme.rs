use budgetbook_core::config::Theme;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

/// Apply the theme by setting the `data-theme` attribute on `<body>`;
/// the stylesheet keys its palette off it.
pub fn apply_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(body) = doc.body() {
                let _ = body.set_attribute("data-theme", theme.as_str());
            }
        }
    }
}

/// Glyph for the toggle button: the theme you would switch to.
pub fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "\u{2600}",
        Theme::Light => "\u{263E}",
    }
}
