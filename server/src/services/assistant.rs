//! Conversational relay — prompt construction, timeout race, canned fallbacks.
//!
//! DESIGN
//! ======
//! The chat and greeting endpoints share one relay: they differ only in
//! prompt, timeout, and fallback text, so both are thin wrappers over
//! [`run_relay`] instead of two copied handlers. Fallback selection is an
//! ordered rule table scanned top to bottom — the first rule whose keyword
//! set matches the lowercased message wins, so a message containing both
//! "movie" and "restaurant" resolves to the movie template.
//!
//! The timeout race only bounds user-visible latency: the losing provider
//! call is discarded, not cancelled at the transport level.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm::GenerateText;

pub const CHAT_TIMEOUT: Duration = Duration::from_secs(8);
pub const GREETING_TIMEOUT: Duration = Duration::from_secs(5);

/// Number of most-recent conversation turns embedded in the chat prompt.
pub const HISTORY_WINDOW: usize = 5;

/// A single turn of the client-visible conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

// =============================================================================
// FALLBACK RULES
// =============================================================================

struct FallbackRule {
    keywords: &'static [&'static str],
    template: &'static str,
}

const MOVIE_FALLBACK: &str = "\u{1f3ac} **Top Movie Theaters in Indore:**\n\n\
1. **INOX Treasure Island Mall** - C21 Mall, A.B. Road\n\
   \u{2022} Latest movies, premium screens\n\
   \u{2022} Timing: 10:00 AM - 11:00 PM\n\n\
2. **PVR Cinemas** - Malhar Mega Mall, Vijay Nagar\n\
   \u{2022} 4DX experience, IMAX screens\n\
   \u{2022} Timing: 9:00 AM - 12:00 AM\n\n\
3. **Big Cinemas** - Orbit Mall, A.B. Road\n\
   \u{2022} Budget-friendly, family theater\n\
   \u{2022} Timing: 10:00 AM - 10:30 PM\n\n\
\u{1f37f} Popular recent releases and show timings available at these locations!";

const RESTAURANT_FALLBACK: &str = "\u{1f37d}\u{fe0f} **Best Restaurants in Indore:**\n\n\
1. **Olive Garden** - M.G. Road, Indore\n\
   \u{2022} Italian cuisine, \u{20b9}800-1200 per person\n\
   \u{2022} Famous for: Wood-fired pizza, pasta\n\n\
2. **Guru Kripa** - Old Palasia\n\
   \u{2022} North Indian, \u{20b9}300-500 per person\n\
   \u{2022} Famous for: Dal bafla, traditional thali\n\n\
3. **Chappan Dukan** - New Palasia\n\
   \u{2022} Street food paradise, \u{20b9}100-300\n\
   \u{2022} Famous for: Pani puri, dahi vada, jalebi\n\n\
4. **The Yellow Chilli** - Vijay Nagar\n\
   \u{2022} Celebrity chef restaurant, \u{20b9}600-900\n\
   \u{2022} Famous for: Modern Indian cuisine";

const ATTRACTION_FALLBACK: &str = "\u{1f3db}\u{fe0f} **Must-Visit Places in Indore:**\n\n\
1. **Rajwada Palace** - Old City Center\n\
   \u{2022} Historic 7-story palace\n\
   \u{2022} Entry: \u{20b9}20, Timing: 9:00 AM - 6:00 PM\n\n\
2. **Lal Bagh Palace** - A.B. Road\n\
   \u{2022} Royal architecture, museum\n\
   \u{2022} Entry: \u{20b9}15, Timing: 10:00 AM - 5:00 PM\n\n\
3. **Sarafa Bazaar** - Old City\n\
   \u{2022} Famous night food market\n\
   \u{2022} Best time: 7:00 PM - 1:00 AM\n\n\
4. **Patalpani Waterfall** - 35km from city\n\
   \u{2022} Beautiful monsoon destination\n\
   \u{2022} Best visit: July - September";

const GENERIC_FALLBACK: &str = "\u{1f31f} **Welcome to Indore, Madhya Pradesh!**\n\n\
I'm here to help you discover the best of this amazing city! You can ask me about:\n\n\
\u{1f37d}\u{fe0f} **Restaurants & Food** - Best local eateries and street food\n\
\u{1f3ac} **Movies & Entertainment** - Cinemas and theaters\n\
\u{1f3db}\u{fe0f} **Tourist Attractions** - Historical places and sightseeing\n\
\u{1f6cd}\u{fe0f} **Shopping** - Markets and malls\n\
\u{1f3af} **Activities** - Things to do and places to visit\n\n\
What would you like to explore today?";

/// Ordered (keywords, template) pairs; evaluated top to bottom, first match
/// wins.
const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule { keywords: &["movie", "film", "cinema"], template: MOVIE_FALLBACK },
    FallbackRule { keywords: &["restaurant", "food", "eat"], template: RESTAURANT_FALLBACK },
    FallbackRule { keywords: &["attraction", "visit", "place"], template: ATTRACTION_FALLBACK },
];

/// Pick the canned chat reply for a message the provider could not answer.
#[must_use]
pub fn select_fallback(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    for rule in FALLBACK_RULES {
        if rule.keywords.iter().any(|k| lower.contains(k)) {
            return rule.template;
        }
    }
    GENERIC_FALLBACK
}

/// Canned greeting used when the provider cannot produce one.
#[must_use]
pub fn greeting_fallback(location: &str) -> String {
    format!(
        "\u{1f31f} Welcome to TouristBuddy!\n\n\
Hello from {location}! I'm your personal travel companion, ready to help you discover the best this amazing city has to offer.\n\n\
I can guide you to:\n\
\u{1f37d}\u{fe0f} Amazing restaurants and local food spots\n\
\u{1f3db}\u{fe0f} Must-visit attractions and hidden gems\n\
\u{1f3af} Fun activities and experiences\n\
\u{1f6cd}\u{fe0f} Great shopping areas\n\n\
What would you like to explore first? Just ask me anything about {location}!"
    )
}

// =============================================================================
// PROMPTS
// =============================================================================

pub(crate) fn build_chat_prompt(message: &str, location: Option<&str>, history: &[ChatMessage]) -> String {
    let location = location.filter(|l| !l.is_empty()).unwrap_or("Unknown location");

    let mut context = String::new();
    if !history.is_empty() {
        context.push_str("\n\nRecent conversation:\n");
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        let lines: Vec<String> = history[start..]
            .iter()
            .map(|msg| {
                let speaker = if msg.role == "user" { "User" } else { "Assistant" };
                format!("{speaker}: {}", msg.content)
            })
            .collect();
        context.push_str(&lines.join("\n"));
    }

    format!(
        "You are TouristBuddy, an expert AI travel companion. You MUST provide specific, actionable travel recommendations with real place names, addresses, and practical details.\n\n\
STRICT REQUIREMENTS:\n\
1. Always provide 3-5 specific restaurant/place names with actual addresses when possible\n\
2. Include practical details like operating hours, price ranges, or contact info\n\
3. Be specific and factual, not generic or templated\n\
4. Use a friendly but informative tone\n\
5. Include emojis for visual appeal\n\
6. Focus on real, existing places in the specified location\n\n\
Current user location: {location}\n\
User query: \"{message}\"\n\
{context}\n\n\
EXAMPLES OF GOOD RESPONSES:\n\
- For restaurants: \"Here are 3 excellent Italian restaurants in Indore: 1) Olive Garden (M.G. Road, \u{20b9}800-1200, open 11am-11pm), 2) Italiano (Sarafa Bazaar, \u{20b9}600-900, famous for wood-fired pizza), 3) La Bella Vista (Palasia, \u{20b9}1000-1500, rooftop dining)\"\n\
- For attractions: \"Top 3 must-visit places in Indore: 1) Rajwada Palace (old city center, 9am-6pm, \u{20b9}20 entry), 2) Lal Bagh Palace (A.B. Road, 10am-5pm, \u{20b9}15 entry), 3) Sarafa Bazaar (evening food street, 7pm-1am)\"\n\n\
Now provide a specific, helpful response with real place names and details for the user's query."
    )
}

pub(crate) fn build_greeting_prompt(location: &str) -> String {
    format!(
        "You are TouristBuddy, a friendly and knowledgeable travel companion AI.\n\
A user has just opened the app and their current location is: {location}\n\n\
Please write a warm, personal greeting message that:\n\
1. Welcomes them to TouristBuddy\n\
2. Acknowledges their location in a friendly way\n\
3. Briefly mentions what you can help them discover (restaurants, attractions, experiences)\n\
4. Encourages them to start exploring by asking what they're interested in\n\n\
Keep it conversational, enthusiastic, and under 100 words. Make it feel like talking to a knowledgeable local friend."
    )
}

// =============================================================================
// RELAY
// =============================================================================

/// Race the provider call against `timeout`; any loss yields `fallback()`.
pub(crate) async fn run_relay(
    llm: &Arc<dyn GenerateText>,
    prompt: &str,
    timeout: Duration,
    fallback: impl FnOnce() -> String,
) -> String {
    match tokio::time::timeout(timeout, llm.generate(prompt)).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!(error = %e, "assistant: provider error, using fallback response");
            fallback()
        }
        Err(_) => {
            warn!(timeout_secs = timeout.as_secs(), "assistant: provider timed out, using fallback response");
            fallback()
        }
    }
}

/// Answer a chat message; always returns a response string.
pub async fn chat(llm: &Arc<dyn GenerateText>, message: &str, location: Option<&str>, history: &[ChatMessage]) -> String {
    let prompt = build_chat_prompt(message, location, history);
    run_relay(llm, &prompt, CHAT_TIMEOUT, || select_fallback(message).to_string()).await
}

/// Produce the session-opening greeting; always returns a response string.
pub async fn greeting(llm: &Arc<dyn GenerateText>, location: &str) -> String {
    let prompt = build_greeting_prompt(location);
    run_relay(llm, &prompt, GREETING_TIMEOUT, || greeting_fallback(location)).await
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
