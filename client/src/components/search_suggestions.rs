//! Canned search prompts.

use leptos::prelude::*;

pub const SUGGESTIONS: &[&str] = &[
    "Find famous Italian restaurants",
    "Show me hidden local cafes",
    "Popular tourist attractions",
    "Best rooftop bars with views",
    "Authentic street food spots",
    "Art galleries and museums",
    "Shopping malls and markets",
    "Family-friendly activities",
];

/// Clickable example queries that feed straight into the search pipeline.
#[component]
pub fn SearchSuggestions(on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="search-suggestions">
            <h4 class="search-suggestions__heading">"Try asking TouristBuddy:"</h4>
            <div class="search-suggestions__grid">
                {SUGGESTIONS
                    .iter()
                    .map(|suggestion| {
                        view! {
                            <button
                                class="search-suggestions__item"
                                on:click=move |_| on_pick.run((*suggestion).to_owned())
                            >
                                {format!("\u{201c}{suggestion}\u{201d}")}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
