//! Search result card grid.

use leptos::prelude::*;

use crate::net::types::Place;
use crate::util::location::truncate_description;

const DESCRIPTION_LIMIT: usize = 150;
const CATEGORY_LIMIT: usize = 3;

/// Result grid shown above the chat transcript. Hidden while empty.
#[component]
pub fn SearchResults(results: RwSignal<Vec<Place>>, searching: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || searching.get() || !results.get().is_empty()>
            <div class="search-results">
                <Show
                    when=move || !searching.get()
                    fallback=|| view! { <p class="search-results__status">"Discovering amazing places for you..."</p> }
                >
                    <h3 class="search-results__heading">
                        {move || {
                            let count = results.get().len();
                            let noun = if count == 1 { "place" } else { "places" };
                            format!("Found {count} amazing {noun} for you")
                        }}
                    </h3>
                    <div class="search-results__grid">
                        {move || {
                            results
                                .get()
                                .into_iter()
                                .map(|place| view! { <PlaceCard place=place /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn PlaceCard(place: Place) -> impl IntoView {
    let name = place.name.clone().unwrap_or_else(|| "Unknown Place".to_owned());
    let description = place
        .description
        .as_deref()
        .map(|d| truncate_description(d, DESCRIPTION_LIMIT));
    let categories: Vec<String> = place.categories.iter().take(CATEGORY_LIMIT).cloned().collect();
    let popularity = place.popularity;
    let place_line = place.location.as_ref().map(|loc| {
        loc.address
            .clone()
            .or_else(|| loc.city.clone())
            .unwrap_or_else(|| "Location not specified".to_owned())
    });

    view! {
        <div class="place-card">
            {place.image_url.map(|url| {
                view! { <img class="place-card__image" src=url alt=name.clone() /> }
            })}
            <h4 class="place-card__name">{name}</h4>
            {description.map(|text| view! { <p class="place-card__description">{text}</p> })}
            <Show when={
                let has_categories = !categories.is_empty();
                move || has_categories
            }>
                <div class="place-card__categories">
                    {categories
                        .clone()
                        .into_iter()
                        .map(|category| view! { <span class="place-card__category">{category}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
            {popularity.map(|score| {
                view! {
                    <div class="place-card__popularity">
                        <span>"Popularity:"</span>
                        <div class="place-card__popularity-track">
                            <div
                                class="place-card__popularity-fill"
                                style=format!("width: {score}%")
                            ></div>
                        </div>
                        <span>{format!("{score}%")}</span>
                    </div>
                }
            })}
            {place_line.map(|line| view! { <p class="place-card__location">"\u{1f4cd} " {line}</p> })}
            <div class="place-card__actions">
                {match place.url {
                    Some(url) => view! {
                        <a class="btn btn--primary" href=url target="_blank" rel="noopener noreferrer">
                            "Learn More"
                        </a>
                    }
                    .into_any(),
                    None => view! {
                        <button class="btn" disabled>
                            "More info coming soon"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
