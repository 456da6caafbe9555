use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::SessionContext;
use crate::session::SessionStore;
use crate::storage::LocalStorage;

/// Login/signup modal shown while no user is logged in.
///
/// Both modes share the username and password inputs; signup mode
/// additionally shows confirm-password, name, email, and an optional
/// profile photo. All validation failures surface as an inline error
/// and leave the form idle.
#[component]
pub fn AuthModal() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();

    let (is_login_mode, set_is_login_mode) = signal(true);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (photo_data, set_photo_data) = signal::<Option<String>>(None);
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    let toggle_mode = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        set_is_login_mode.update(|m| *m = !*m);
        set_error_message.set(None);
    };

    // Read a selected photo into a data URI as soon as it is picked,
    // so submit stays synchronous.
    let on_photo_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => {
                spawn_local(async move {
                    match read_file_as_data_uri(file).await {
                        Ok(uri) => set_photo_data.set(Some(uri)),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to read photo: {}", e).into(),
                            );
                        }
                    }
                });
            }
            None => set_photo_data.set(None),
        }
    };

    let submit = move |_| {
        let session = SessionStore::new(LocalStorage);
        let username_val = username.get().trim().to_string();
        let password_val = password.get().trim().to_string();

        if username_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Please fill in all required fields!".to_string()));
            return;
        }

        let outcome = if is_login_mode.get() {
            session.authenticate(&username_val, &password_val)
        } else {
            let confirm = confirm_password.get().trim().to_string();
            let email_val = email.get().trim().to_string();
            let name_val = full_name.get().trim().to_string();

            if confirm.is_empty() || email_val.is_empty() || name_val.is_empty() {
                set_error_message.set(Some("Please complete all signup fields!".to_string()));
                return;
            }
            if password_val != confirm {
                set_error_message.set(Some("Passwords don't match.".to_string()));
                return;
            }
            session
                .create_account(
                    &username_val,
                    &password_val,
                    &email_val,
                    &name_val,
                    photo_data.get().as_deref(),
                )
                .map(|()| session.profile(&username_val))
        };

        match outcome {
            Ok(account) => {
                if let Err(e) = session.set_current_user(&username_val) {
                    web_sys::console::error_1(&format!("Failed to persist session: {}", e).into());
                }
                set_error_message.set(None);
                ctx.set_user.set(Some(account));
            }
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="auth-overlay">
            <div class="auth-modal">
                <h2 class="auth-title">
                    {move || if is_login_mode.get() { "Welcome Back!" } else { "Create Account" }}
                </h2>
                <p class="auth-subtitle">
                    {move || {
                        if is_login_mode.get() {
                            "Please login to access your soil analysis dashboard"
                        } else {
                            "Join our soil monitoring community"
                        }
                    }}
                </p>

                <div class="form-group">
                    <label for="auth-username">"Username"</label>
                    <input
                        id="auth-username"
                        type="text"
                        class="input"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="auth-password">"Password"</label>
                    <input
                        id="auth-password"
                        type="password"
                        class="input"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <Show when=move || !is_login_mode.get()>
                    <div class="form-group">
                        <label for="auth-confirm">"Confirm Password"</label>
                        <input
                            id="auth-confirm"
                            type="password"
                            class="input"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="auth-name">"Full Name"</label>
                        <input
                            id="auth-name"
                            type="text"
                            class="input"
                            prop:value=move || full_name.get()
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="auth-email">"Email"</label>
                        <input
                            id="auth-email"
                            type="email"
                            class="input"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="auth-photo">"Profile Photo (optional)"</label>
                        <input
                            id="auth-photo"
                            type="file"
                            accept="image/*"
                            class="input input-file"
                            on:change=on_photo_change
                        />
                    </div>
                </Show>

                <Show when=move || error_message.get().is_some()>
                    <span class="status-text status-error">
                        {move || error_message.get().unwrap_or_default()}
                    </span>
                </Show>

                <button class="btn btn-primary auth-action" on:click=submit>
                    {move || if is_login_mode.get() { "Login" } else { "Sign Up" }}
                </button>

                <p class="auth-toggle">
                    {move || {
                        if is_login_mode.get() {
                            "Don't have an account? "
                        } else {
                            "Already have an account? "
                        }
                    }}
                    <a href="#" on:click=toggle_mode>
                        {move || if is_login_mode.get() { "Sign up" } else { "Login" }}
                    </a>
                </p>
            </div>
        </div>
    }
}

/// Read a file into a `data:<mime>;base64,...` URI.
async fn read_file_as_data_uri(file: web_sys::File) -> Result<String, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Failed to convert to ArrayBuffer")?;

    let bytes = Uint8Array::new(&array_buffer).to_vec();
    let mime = file.type_();
    let mime = if mime.is_empty() {
        "application/octet-stream".to_string()
    } else {
        mime
    };

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes)))
}
