use leptos::prelude::*;

use crate::app::SessionContext;
use crate::session::SessionStore;
use crate::storage::LocalStorage;
use crate::theme::{save_theme, ThemeContext};

/// App chrome: title, logged-in user, theme toggle, logout.
#[component]
pub fn Header() -> impl IntoView {
    let session_ctx = expect_context::<SessionContext>();
    let theme_ctx = expect_context::<ThemeContext>();

    let toggle_theme = move |_| {
        let next = if theme_ctx.theme.get() == "light" {
            "dark"
        } else {
            "light"
        };
        theme_ctx.set_theme.set(next.to_string());
        save_theme(next);
    };

    let logout = move |_| {
        SessionStore::new(LocalStorage).clear_current_user();
        session_ctx.set_user.set(None);
    };

    let username = move || {
        session_ctx
            .user
            .get()
            .map(|u| u.username)
            .unwrap_or_default()
    };
    let photo = move || session_ctx.user.get().and_then(|u| u.photo);

    view! {
        <header class="app-header">
            <div class="header-brand">
                <h1 class="app-title">"SoilPro Analytics"</h1>
                <p class="app-subtitle">"Soil Health Dashboard"</p>
            </div>
            <div class="header-user">
                <Show when=move || photo().is_some()>
                    <img
                        class="profile-photo"
                        src=move || photo().unwrap_or_default()
                        alt="Profile photo"
                    />
                </Show>
                <span class="username-display">{username}</span>
                <button class="btn btn-ghost" on:click=toggle_theme>
                    {move || {
                        if theme_ctx.theme.get() == "light" { "Dark Mode" } else { "Light Mode" }
                    }}
                </button>
                <button class="btn btn-ghost" on:click=logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
