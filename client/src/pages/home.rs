//! Landing page with the location-aware greeting and a login prompt.

use leptos::prelude::*;

use crate::components::greeting_panel::GreetingPanel;
use crate::components::location_status::{LocationStatus, default_location};

const HOME_GREETING_FALLBACK: &str = "Welcome to TouristBuddy! I'm here to help you discover amazing \
places that match your taste. Please login to start exploring!";

#[component]
pub fn HomePage() -> impl IntoView {
    let location = default_location();

    view! {
        <div class="home-page">
            <LocationStatus location=location />
            <GreetingPanel location=location fallback=HOME_GREETING_FALLBACK />

            <section class="home-page__cta">
                <span class="home-page__cta-icon">"\u{1f680}"</span>
                <h3>"Ready to Explore?"</h3>
                <p>
                    "Login to start chatting with TouristBuddy and discover personalized \
                     recommendations based on your taste preferences."
                </p>
                <a class="btn btn--primary" href="/login">
                    "Login to Start Exploring"
                </a>
            </section>

            <section class="home-page__hero">
                <h2>"Beyond Generic Guides"</h2>
                <p>
                    "Powered by Qloo's Taste AI and natural language processing, TouristBuddy \
                     creates truly personalized travel experiences."
                </p>
            </section>

            <section class="home-page__features">
                <FeatureCard
                    icon="\u{2b50}"
                    title="AI-Powered Recommendations"
                    body="Our advanced AI analyzes your preferences to suggest places you'll actually love, not just popular tourist spots."
                />
                <FeatureCard
                    icon="\u{1f30d}"
                    title="Tailored to Your Taste"
                    body="From foodie adventures to cultural experiences, get recommendations that match your unique travel style."
                />
                <FeatureCard
                    icon="\u{1f4cd}"
                    title="Local Insights"
                    body="Discover hidden gems and local favorites that guidebooks miss, curated by our intelligent recommendation engine."
                />
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <span class="feature-card__icon">{icon}</span>
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__body">{body}</p>
        </div>
    }
}
