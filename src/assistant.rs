use std::time::Duration;

use log::{debug, warn};

use crate::builder::ChatAssistantBuilder;
use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::model::Profile;
use crate::providers::{FallbackProvider, LlmProvider};
use crate::rules::{Reply, RuleSet};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

enum Generator {
    Ready(Box<dyn LlmProvider>),
    Unavailable(String),
}

/// Answers chat messages about the currently recommended recipes.
///
/// Quick responses come from the keyword rule set. When generation is
/// requested the configured LLM provider answers instead, and any failure
/// there falls back to the quick response with a short diagnostic line.
pub struct ChatAssistant {
    rules: RuleSet,
    generator: Generator,
    timeout: Duration,
}

impl ChatAssistant {
    /// An assistant with no generation provider
    pub fn new(profile: Profile) -> Self {
        ChatAssistant {
            rules: RuleSet::for_profile(profile),
            generator: Generator::Unavailable("No AI provider is configured".to_string()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn builder() -> ChatAssistantBuilder {
        ChatAssistantBuilder::default()
    }

    /// Build from configuration. A provider that cannot be created does not
    /// fail construction; the reason is reported when generation is asked for.
    pub fn from_config(config: &ChatConfig) -> Self {
        let assistant = ChatAssistant::new(config.profile)
            .with_timeout(Duration::from_secs(config.timeout));

        match FallbackProvider::new(config) {
            Ok(provider) => assistant.with_provider(Box::new(provider)),
            Err(e) => {
                warn!("AI provider unavailable: {}", e);
                assistant.without_provider(e.to_string())
            }
        }
    }

    pub fn with_provider(mut self, provider: Box<dyn LlmProvider>) -> Self {
        self.generator = Generator::Ready(provider);
        self
    }

    /// Drop any provider, reporting `reason` whenever generation is requested
    pub(crate) fn without_provider(mut self, reason: impl Into<String>) -> Self {
        self.generator = Generator::Unavailable(reason.into());
        self
    }

    /// Swap the rule set, keeping the provider and timeout
    pub fn with_profile(mut self, profile: Profile) -> Self {
        if self.rules.profile() != profile {
            self.rules = RuleSet::for_profile(profile);
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn has_provider(&self) -> bool {
        matches!(self.generator, Generator::Ready(_))
    }

    /// The rule-based reply along with the topic that produced it
    pub fn reply(&self, user_message: &str, context_text: &str) -> Reply {
        self.rules.respond(user_message, context_text)
    }

    pub fn quick_response(&self, user_message: &str, context_text: &str) -> String {
        self.reply(user_message, context_text).text
    }

    /// Ask the generation provider for a reply, bounded by the timeout
    pub async fn generate(
        &self,
        context_text: &str,
        history_text: &str,
        user_message: &str,
    ) -> Result<String, ChatError> {
        let provider = match &self.generator {
            Generator::Ready(provider) => provider,
            Generator::Unavailable(reason) => {
                return Err(ChatError::GenerationUnavailable(reason.clone()))
            }
        };

        debug!("Generating reply with {}", provider.provider_name());
        match tokio::time::timeout(
            self.timeout,
            provider.generate(context_text, history_text, user_message),
        )
        .await
        {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(e)) => Err(ChatError::GenerationError(e.to_string())),
            Err(_) => Err(ChatError::GenerationError(format!(
                "{} timed out after {:?}",
                provider.provider_name(),
                self.timeout
            ))),
        }
    }

    /// Reply to a chat message. Never fails: generation errors degrade to
    /// the quick response prefixed with the reason.
    pub async fn answer(
        &self,
        user_message: &str,
        context_text: &str,
        history_text: &str,
        use_ai: bool,
    ) -> String {
        if !use_ai {
            return self.quick_response(user_message, context_text);
        }

        match self.generate(context_text, history_text, user_message).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("AI chat failed, using quick response: {}", e);
                format!(
                    "AI chat error: {}. Using Quick Response mode instead.\n\n{}",
                    e,
                    self.quick_response(user_message, context_text)
                )
            }
        }
    }
}

impl Default for ChatAssistant {
    fn default() -> Self {
        ChatAssistant::new(Profile::Standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::error::Error;

    const CONTEXT: &str = "Name: Chickpea Curry\nCalories: 520\nProtein: 21";

    struct EchoProvider;

    #[async_trait]
    impl LlmProvider for EchoProvider {
        fn provider_name(&self) -> &str {
            "echo"
        }

        async fn generate(
            &self,
            context_text: &str,
            history_text: &str,
            user_message: &str,
        ) -> Result<String, Box<dyn Error + Send + Sync>> {
            Ok(format!(
                "{} | {} | {}",
                context_text.lines().count(),
                history_text,
                user_message
            ))
        }
    }

    struct BrokenProvider;

    #[async_trait]
    impl LlmProvider for BrokenProvider {
        fn provider_name(&self) -> &str {
            "broken"
        }

        async fn generate(
            &self,
            _context_text: &str,
            _history_text: &str,
            _user_message: &str,
        ) -> Result<String, Box<dyn Error + Send + Sync>> {
            Err("model is loading".into())
        }
    }

    struct SlowProvider;

    #[async_trait]
    impl LlmProvider for SlowProvider {
        fn provider_name(&self) -> &str {
            "slow"
        }

        async fn generate(
            &self,
            _context_text: &str,
            _history_text: &str,
            _user_message: &str,
        ) -> Result<String, Box<dyn Error + Send + Sync>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }
    }

    #[tokio::test]
    async fn test_quick_path_ignores_provider() {
        let assistant = ChatAssistant::default().with_provider(Box::new(BrokenProvider));
        let reply = assistant.answer("help", CONTEXT, "", false).await;
        assert!(reply.starts_with("I'm here to help with 1 recipes!"));
    }

    #[tokio::test]
    async fn test_generation_receives_history() {
        let assistant = ChatAssistant::default().with_provider(Box::new(EchoProvider));
        let reply = assistant
            .answer("and dessert?", CONTEXT, "User: hi", true)
            .await;
        assert_eq!(reply, "3 | User: hi | and dessert?");
    }

    #[tokio::test]
    async fn test_generation_failure_falls_back() {
        let assistant = ChatAssistant::default().with_provider(Box::new(BrokenProvider));
        let quick = assistant.quick_response("how do I substitute eggs?", CONTEXT);
        let reply = assistant
            .answer("how do I substitute eggs?", CONTEXT, "", true)
            .await;

        assert!(reply.starts_with("AI chat error: model is loading. Using Quick Response mode instead.\n\n"));
        assert!(reply.ends_with(&quick));
    }

    #[tokio::test]
    async fn test_missing_provider_falls_back() {
        let assistant = ChatAssistant::new(Profile::Lite);
        assert!(!assistant.has_provider());

        let reply = assistant.answer("", "", "", true).await;
        assert!(reply.starts_with("AI chat error: No AI provider is configured."));
        assert!(reply.contains("I'm your diet assistant!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generation_timeout() {
        let assistant = ChatAssistant::default()
            .with_provider(Box::new(SlowProvider))
            .with_timeout(Duration::from_secs(5));

        let err = assistant.generate("", "", "hi").await.unwrap_err();
        assert!(matches!(err, ChatError::GenerationError(_)));
        assert!(err.to_string().contains("slow timed out after 5s"));
    }

    #[test]
    fn test_from_config_without_providers() {
        let assistant = ChatAssistant::from_config(&ChatConfig::default());
        assert!(!assistant.has_provider());
        assert_eq!(assistant.rules().profile(), Profile::Standard);
    }
}
