//! Login page with a demo-credential sign-in and a mock sign-up flow.

use leptos::prelude::*;

/// Validate sign-up form input.
///
/// The sign-up flow never creates an account; validation exists so the form
/// behaves like one.
///
/// # Errors
///
/// Returns the message to show the user.
pub fn validate_signup(username: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters long");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let signup_mode = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let reset_form = move || {
        username.set(String::new());
        password.set(String::new());
        confirm.set(String::new());
        error.set(String::new());
        success.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        success.set(String::new());

        if signup_mode.get() {
            match validate_signup(&username.get(), &password.get(), &confirm.get()) {
                Ok(()) => {
                    success.set("Account created successfully! You can now sign in.".to_owned());
                    signup_mode.set(false);
                    username.set(String::new());
                    password.set(String::new());
                    confirm.set(String::new());
                }
                Err(message) => error.set(message.to_owned()),
            }
            return;
        }

        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let username_value = username.get();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&username_value, &password_value).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/chat");
                        }
                    }
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        busy.set(false);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>{move || if signup_mode.get() { "Create your account" } else { "Sign in to your account" }}</h2>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Username"
                        <input
                            class="login-form__input"
                            type="text"
                            placeholder="Enter username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-form__input"
                            type="password"
                            placeholder="Enter password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || signup_mode.get()>
                        <label class="login-form__label">
                            "Confirm Password"
                            <input
                                class="login-form__input"
                                type="password"
                                placeholder="Confirm password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-form__error">{move || error.get()}</p>
                    </Show>
                    <Show when=move || !success.get().is_empty()>
                        <p class="login-form__success">{move || success.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if signup_mode.get() { "Sign up" } else { "Sign in" }}
                    </button>
                    <Show when=move || !signup_mode.get()>
                        <p class="login-form__hint">"Demo credentials: admin / abc123"</p>
                    </Show>
                    <button
                        class="login-form__toggle"
                        type="button"
                        on:click=move |_| {
                            signup_mode.set(!signup_mode.get());
                            reset_form();
                        }
                    >
                        {move || {
                            if signup_mode.get() {
                                "Already have an account? Sign in"
                            } else {
                                "Don't have an account? Sign up"
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
