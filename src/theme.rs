use leptos::prelude::*;

use crate::storage::{KeyValueStore, LocalStorage};

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<String>,
    pub set_theme: WriteSignal<String>,
}

/// Apply the theme by setting the `data-theme` attribute on `<html>`.
/// - "light" → forces light
/// - anything else ("dark", the default) → forces dark
pub fn apply_theme(theme: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                let value = if theme == "light" { "light" } else { "dark" };
                let _ = html.set_attribute("data-theme", value);
            }
        }
    }
}

/// Stored theme preference, defaulting to dark.
pub fn load_theme() -> String {
    LocalStorage
        .get(THEME_KEY)
        .unwrap_or_else(|| "dark".to_string())
}

pub fn save_theme(theme: &str) {
    if let Err(e) = LocalStorage.set(THEME_KEY, theme) {
        web_sys::console::error_1(&format!("Failed to save theme: {}", e).into());
    }
}
