mod anthropic;
mod factory;
mod fallback;
mod ollama;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use fallback::FallbackProvider;
pub use ollama::OllamaProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_user_turn, CHAT_SYSTEM_PROMPT};

use async_trait::async_trait;
use std::error::Error;

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Write a chat reply from the recipe context, the conversation so far
    /// and the user's latest message
    async fn generate(
        &self,
        context_text: &str,
        history_text: &str,
        user_message: &str,
    ) -> Result<String, Box<dyn Error + Send + Sync>>;
}
