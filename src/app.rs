use leptos::prelude::*;

use crate::components::auth_modal::AuthModal;
use crate::components::header::Header;
use crate::pages::dashboard::DashboardPage;
use crate::session::{SessionStore, UserAccount};
use crate::storage::LocalStorage;
use crate::theme::{apply_theme, load_theme, ThemeContext};

/// The logged-in user, or `None` while the auth modal is showing.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: ReadSignal<Option<UserAccount>>,
    pub set_user: WriteSignal<Option<UserAccount>>,
}

#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(load_theme());
    provide_context(ThemeContext { theme, set_theme });

    // Restore the session from the current-user marker, if present.
    let session = SessionStore::new(LocalStorage);
    let initial_user = session.current_user().map(|u| session.profile(&u));
    let (user, set_user) = signal(initial_user);
    provide_context(SessionContext { user, set_user });

    // Apply theme to the DOM whenever the signal changes
    Effect::new(move |_| {
        apply_theme(&theme.get());
    });

    view! {
        <style>{include_str!("styles.css")}</style>
        <div class="app-layout">
            <Show when=move || user.get().is_some() fallback=|| view! { <AuthModal /> }>
                <Header />
                <main class="content">
                    <DashboardPage />
                </main>
            </Show>
        </div>
    }
}
