//! Location detection banner.

use leptos::prelude::*;

use crate::util::location::DEFAULT_LOCATION;

/// Detects the device location on mount and writes the resolved label into
/// `location`. Shows detection progress and a retry affordance; on failure
/// the label stays at the default city.
#[component]
pub fn LocationStatus(location: RwSignal<String>) -> impl IntoView {
    let detecting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let detect = Callback::new(move |()| {
        if detecting.get_untracked() {
            return;
        }
        detecting.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::util::geolocation::current_position().await {
                Ok(position) => {
                    let label = resolve_label(position.latitude, position.longitude).await;
                    location.set(label);
                }
                Err(message) => error.set(Some(message)),
            }
            detecting.set(false);
        });
        #[cfg(not(feature = "csr"))]
        detecting.set(false);
    });

    let detect_on_mount = detect;
    Effect::new(move || {
        detect_on_mount.run(());
    });

    view! {
        <div class="location-status">
            <Show
                when=move || !detecting.get()
                fallback=|| view! { <span class="location-status__detecting">"Detecting your location..."</span> }
            >
                <Show
                    when=move || error.get().is_none()
                    fallback=move || {
                        view! {
                            <span class="location-status__fallback">
                                {move || format!("\u{1f4cd} Using default location: {}", location.get())}
                            </span>
                            <button class="location-status__retry" on:click=move |_| detect.run(())>
                                "Try Again"
                            </button>
                        }
                    }
                >
                    <span class="location-status__current">
                        {move || format!("\u{1f4cd} Your location: {}", location.get())}
                    </span>
                    <button class="location-status__retry" on:click=move |_| detect.run(())>
                        "Update Location"
                    </button>
                </Show>
            </Show>
        </div>
    }
}

/// Default signal value for pages that embed the banner.
#[must_use]
pub fn default_location() -> RwSignal<String> {
    RwSignal::new(DEFAULT_LOCATION.to_owned())
}

#[cfg(feature = "csr")]
async fn resolve_label(latitude: f64, longitude: f64) -> String {
    use crate::util::location::format_coordinates;

    match crate::net::api::reverse_geocode(latitude, longitude).await {
        Some(geocoded) => geocoded
            .full_location
            .or(geocoded.city)
            .unwrap_or_else(|| format_coordinates(latitude, longitude)),
        None => format_coordinates(latitude, longitude),
    }
}
