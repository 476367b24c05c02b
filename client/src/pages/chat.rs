//! Chat page — the authenticated conversation and search surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the transcript, the resolved location, and the search results.
//! Messages naming a place category run the search pipeline; everything else
//! goes to the conversational relay. Every failure path appends a canned
//! assistant reply so the transcript never dead-ends.

use leptos::prelude::*;

use crate::components::greeting_panel::GreetingPanel;
use crate::components::location_status::{LocationStatus, default_location};
use crate::components::search_bar::SearchBar;
use crate::components::search_results::SearchResults;
use crate::components::search_suggestions::SearchSuggestions;
use crate::net::types::{ChatMessage, Place};
use crate::util::location::{is_search_query, window_history};

const CHAT_GREETING_FALLBACK: &str = "Welcome to TouristBuddy! I'm here to help you discover amazing \
places that match your taste. What are you interested in exploring today?";

// =============================================================================
// CANNED REPLIES
// =============================================================================

/// Assistant notice appended after a chat message triggered a place search.
#[must_use]
pub fn search_notice(query: &str, location: &str) -> String {
    format!(
        "\u{1f50d} I'm searching for \"{query}\" in {location}. Check the results above! \
You can also ask me for more specific recommendations or details about any of these places."
    )
}

/// Assistant reply when the search pipeline itself failed.
#[must_use]
pub fn search_error_reply(message: &str) -> String {
    format!(
        "I apologize, but I encountered an error while searching. The error was: {message}. \
Please try again with a different search term."
    )
}

/// Offline reply when the conversational relay is unreachable, themed by
/// what the user asked about.
#[must_use]
pub fn fallback_reply(input: &str, location: &str) -> String {
    let lower = input.to_lowercase();

    if ["restaurant", "food", "eat"].iter().any(|k| lower.contains(k)) {
        return format!(
            "\u{1f37d}\u{fe0f} Here are some popular restaurant areas in {location}:\n\n\
\u{2022} **Sarafa Bazaar** - Famous night food market with street food and local delicacies\n\
\u{2022} **M.G. Road** - Fine dining restaurants and cafes\n\
\u{2022} **Palasia** - Mix of restaurants, from casual to upscale dining\n\
\u{2022} **Vijay Nagar** - Student-friendly eateries and food courts\n\n\
Would you like me to search for a specific type of cuisine or restaurant? \
Try using the search bar above for more detailed results!"
        );
    }

    if ["attraction", "visit", "see"].iter().any(|k| lower.contains(k)) {
        return format!(
            "\u{1f3db}\u{fe0f} Popular attractions in {location}:\n\n\
\u{2022} **Rajwada Palace** - Historic palace in the heart of the city\n\
\u{2022} **Lal Bagh Palace** - Beautiful palace with European architecture\n\
\u{2022} **Kanch Mandir** - Stunning glass temple\n\
\u{2022} **Central Museum** - Rich collection of artifacts\n\n\
Use the search above for more specific recommendations and details!"
        );
    }

    if ["bar", "drink", "nightlife"].iter().any(|k| lower.contains(k)) {
        return format!(
            "\u{1f37b} Nightlife spots in {location}:\n\n\
\u{2022} **10 Downing Street** - Popular pub and restaurant\n\
\u{2022} **The Creative Kitchen** - Rooftop bar with great ambiance\n\
\u{2022} **Chappan Dukan** - Food street with cafes and light drinks\n\
\u{2022} **Hotel Crown Palace** - Upscale bar and lounge\n\n\
Try searching above for more specific recommendations!"
        );
    }

    format!(
        "I apologize, but I'm having trouble connecting right now. However, \
I'd still love to help you explore {location}!"
    )
}

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn ChatPage() -> impl IntoView {
    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let input = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let location = default_location();
    let results = RwSignal::new(Vec::<Place>::new());
    let searching = RwSignal::new(false);
    let transcript_end = NodeRef::<leptos::html::Div>::new();

    // Redirect to login when there is no session.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            if crate::net::api::fetch_current_user().await.is_none() {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
        });
    });

    #[cfg(feature = "csr")]
    Effect::new(move || {
        messages.track();
        if let Some(end) = transcript_end.get() {
            end.scroll_into_view();
        }
    });

    let run_search = Callback::new(move |query: String| {
        searching.set(true);

        #[cfg(feature = "csr")]
        {
            let current_location = location.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::run_search(&query, &current_location).await {
                    Ok(found) => {
                        results.set(found);
                        messages.update(|m| {
                            m.push(ChatMessage::assistant(search_notice(&query, &current_location)));
                        });
                    }
                    Err(message) => {
                        results.set(Vec::new());
                        messages.update(|m| m.push(ChatMessage::assistant(search_error_reply(&message))));
                    }
                }
                searching.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = query;
            searching.set(false);
        }
    });

    let on_suggestion = Callback::new(move |suggestion: String| {
        run_search.run(suggestion);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let message = input.get().trim().to_owned();
        if message.is_empty() || sending.get() {
            return;
        }
        input.set(String::new());

        let history = window_history(&messages.get_untracked()).to_vec();
        messages.update(|m| m.push(ChatMessage::user(message.clone())));

        if is_search_query(&message) {
            run_search.run(message);
            return;
        }

        sending.set(true);
        #[cfg(feature = "csr")]
        {
            let current_location = location.get_untracked();
            leptos::task::spawn_local(async move {
                let reply = match crate::net::api::send_chat(&message, &current_location, &history).await {
                    Ok(reply) => reply,
                    Err(_) => fallback_reply(&message, &current_location),
                };
                messages.update(|m| m.push(ChatMessage::assistant(reply)));
                sending.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = history;
            sending.set(false);
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    };

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <LocationStatus location=location />
                <button class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <GreetingPanel location=location fallback=CHAT_GREETING_FALLBACK />

            <SearchBar
                location=location
                on_results=Callback::new(move |found| results.set(found))
                on_loading=Callback::new(move |loading| searching.set(loading))
            />
            <SearchSuggestions on_pick=on_suggestion />
            <SearchResults results=results searching=searching />

            <div class="chat-transcript">
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|message| {
                            let from_user = message.role == "user";
                            view! {
                                <div class="chat-message" class:chat-message--user=from_user>
                                    <span class="chat-message__badge">
                                        {if from_user { "You" } else { "AI" }}
                                    </span>
                                    <div class="chat-message__content">{message.content}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || sending.get()>
                    <div class="chat-message">
                        <span class="chat-message__badge">"AI"</span>
                        <div class="chat-message__typing">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </div>
                </Show>
                <div node_ref=transcript_end></div>
            </div>

            <form class="chat-input" on:submit=on_submit>
                <input
                    class="chat-input__field"
                    type="text"
                    placeholder="Ask me about restaurants, attractions, activities, or anything travel-related..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    disabled=move || sending.get()
                />
                <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                    "Send"
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
