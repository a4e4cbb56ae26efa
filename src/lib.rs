//! Chat replies for a diet and recipe recommendation page.
//!
//! Quick responses are picked by keyword rules over the user's message and
//! the recipes currently on screen. Generated responses go through an LLM
//! provider and fall back to the quick response when anything goes wrong.

pub mod assistant;
pub mod builder;
pub mod config;
pub mod error;
pub mod extractor;
pub mod model;
pub mod providers;
pub mod rules;
pub mod templates;

pub use assistant::ChatAssistant;
pub use builder::{ChatAssistantBuilder, ProviderKind};
pub use config::{ChatConfig, FallbackConfig, ProviderConfig};
pub use error::ChatError;
pub use extractor::extract_records;
pub use model::{Profile, RecipeRecord, Topic};
pub use rules::{Reply, RuleSet};

use log::warn;

/// Rule-based reply using the standard rule set
///
/// # Example
/// ```
/// let context = "Name: Lentil Soup\nCalories: 410";
/// let reply = recipe_assistant::quick_response("Which recipes do I have?", context);
/// assert!(reply.contains("**Lentil Soup** (410 cal)"));
/// ```
pub fn quick_response(user_message: &str, context_text: &str) -> String {
    RuleSet::standard().respond(user_message, context_text).text
}

/// Reply to a chat message about the recommended recipes
///
/// With `ai_fallback_enabled` the configured provider answers first (see
/// [`ChatConfig::load`]); if it is missing or fails, the standard rule-based
/// reply is returned behind an `AI chat error: ...` line. This never fails.
pub async fn select_response(
    user_message: &str,
    context_text: &str,
    conversation_history: &str,
    ai_fallback_enabled: bool,
) -> String {
    if !ai_fallback_enabled {
        return quick_response(user_message, context_text);
    }

    let assistant = match ChatConfig::load() {
        Ok(config) => ChatAssistant::from_config(&config).with_profile(Profile::Standard),
        Err(e) => {
            let e = ChatError::from(e);
            warn!("Could not load chat configuration: {}", e);
            ChatAssistant::default().without_provider(e.to_string())
        }
    };

    assistant
        .answer(user_message, context_text, conversation_history, true)
        .await
}
