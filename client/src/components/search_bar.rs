//! Free-text place search input.

use leptos::prelude::*;

use crate::net::types::Place;

/// Search input that runs the parse-then-search pipeline and reports
/// results and loading state to the parent.
#[component]
pub fn SearchBar(
    location: RwSignal<String>,
    on_results: Callback<Vec<Place>>,
    on_loading: Callback<bool>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = query.get().trim().to_owned();
        if value.is_empty() || busy.get() {
            return;
        }
        busy.set(true);
        on_loading.run(true);

        #[cfg(feature = "csr")]
        {
            let current_location = location.get_untracked();
            leptos::task::spawn_local(async move {
                let results = crate::net::api::run_search(&value, &current_location)
                    .await
                    .unwrap_or_default();
                on_results.run(results);
                on_loading.run(false);
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = location;
            on_results.run(Vec::new());
            on_loading.run(false);
            busy.set(false);
        }
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                class="search-bar__input"
                type="text"
                placeholder="Ask TouristBuddy anything, e.g., 'Find famous Italian restaurants' or 'Show me hidden local cafes'..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                disabled=move || busy.get()
            />
            <button class="btn btn--primary search-bar__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Searching..." } else { "Search" }}
            </button>
            <Show when=move || busy.get()>
                <p class="search-bar__status">"TouristBuddy is finding the perfect spots for you..."</p>
            </Show>
        </form>
    }
}
