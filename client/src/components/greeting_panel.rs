//! Location-aware welcome panel.

use leptos::prelude::*;

/// Fetches a fresh greeting whenever `location` changes; `fallback` is shown
/// when the relay cannot produce one.
#[component]
pub fn GreetingPanel(location: RwSignal<String>, fallback: &'static str) -> impl IntoView {
    let greeting = RwSignal::new(String::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let current_location = location.get();
        loading.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let text = crate::net::api::fetch_greeting(&current_location)
                .await
                .unwrap_or_else(|| fallback.to_owned());
            greeting.set(text);
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = current_location;
            greeting.set(fallback.to_owned());
            loading.set(false);
        }
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <p class="greeting-panel__loading">"TouristBuddy is getting ready..."</p> }
        >
            <div class="greeting-panel">
                <span class="greeting-panel__icon">"\u{1f916}"</span>
                <p class="greeting-panel__text">{move || greeting.get()}</p>
            </div>
        </Show>
    }
}
