use std::time::Duration;

use crate::assistant::ChatAssistant;
use crate::config::{ChatConfig, ProviderConfig};
use crate::error::ChatError;
use crate::model::Profile;
use crate::providers::ProviderFactory;

/// LLM backend selectable from the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAI,
    Anthropic,
    Ollama,
}

impl ProviderKind {
    /// Convert to provider name string used by the factory
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Ollama => "ollama",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "gpt-4o-mini",
            ProviderKind::Anthropic => "claude-3-5-haiku-latest",
            ProviderKind::Ollama => "llama3",
        }
    }
}

/// Builder for configuring a [`ChatAssistant`]
#[derive(Debug, Default)]
pub struct ChatAssistantBuilder {
    config: Option<ChatConfig>,
    profile: Option<Profile>,
    provider: Option<ProviderKind>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ChatAssistantBuilder {
    /// Start from a loaded configuration
    ///
    /// Explicit builder settings override the matching configuration values.
    pub fn config(mut self, config: ChatConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Choose the rule set used for quick responses
    ///
    /// # Example
    /// ```
    /// use recipe_assistant::{ChatAssistant, Profile};
    ///
    /// let assistant = ChatAssistant::builder()
    ///     .profile(Profile::Lite)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(assistant.rules().profile(), Profile::Lite);
    /// ```
    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Set the LLM provider used for generated replies
    ///
    /// # Example
    /// ```
    /// use recipe_assistant::{ChatAssistant, ProviderKind};
    ///
    /// let assistant = ChatAssistant::builder()
    ///     .provider(ProviderKind::Ollama)
    ///     .model("mistral")
    ///     .build()
    ///     .unwrap();
    /// assert!(assistant.has_provider());
    /// ```
    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the LLM provider
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the LLM provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the provider at a custom or proxy endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set how long a generated reply may take before falling back
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the assistant
    ///
    /// # Errors
    /// Returns `ChatError::BuilderError` if:
    /// - `api_key`, `model` or `base_url` is set without a provider
    /// - the explicitly chosen provider cannot be created (e.g. missing API key)
    pub fn build(self) -> Result<ChatAssistant, ChatError> {
        if self.provider.is_none()
            && (self.api_key.is_some() || self.model.is_some() || self.base_url.is_some())
        {
            return Err(ChatError::BuilderError(
                "api_key, model and base_url require a provider. Use .provider()".to_string(),
            ));
        }

        let mut assistant = match &self.config {
            Some(config) => ChatAssistant::from_config(config),
            None => ChatAssistant::default(),
        };

        let profile = self
            .profile
            .or(self.config.as_ref().map(|config| config.profile))
            .unwrap_or_default();
        assistant = assistant.with_profile(profile);

        if let Some(kind) = self.provider {
            let provider_config = ProviderConfig {
                enabled: true,
                model: self
                    .model
                    .unwrap_or_else(|| kind.default_model().to_string()),
                temperature: 0.7,
                max_tokens: 800,
                api_key: self.api_key,
                base_url: self.base_url,
            };
            let provider = ProviderFactory::create(kind.as_str(), &provider_config)
                .map_err(|e| ChatError::BuilderError(e.to_string()))?;
            assistant = assistant.with_provider(provider);
        }

        if let Some(timeout) = self.timeout {
            assistant = assistant.with_timeout(timeout);
        }

        Ok(assistant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build() {
        let assistant = ChatAssistantBuilder::default().build().unwrap();
        assert_eq!(assistant.rules().profile(), Profile::Standard);
        assert!(!assistant.has_provider());
    }

    #[test]
    fn test_model_without_provider_is_rejected() {
        let result = ChatAssistantBuilder::default().model("gpt-4o").build();
        match result {
            Err(ChatError::BuilderError(message)) => assert!(message.contains(".provider()")),
            _ => panic!("expected a builder error"),
        }
    }

    #[test]
    fn test_explicit_provider_with_key() {
        let assistant = ChatAssistantBuilder::default()
            .provider(ProviderKind::Anthropic)
            .api_key("test-key")
            .build()
            .unwrap();
        assert!(assistant.has_provider());
    }

    #[test]
    fn test_profile_overrides_config() {
        let config = ChatConfig {
            profile: Profile::Standard,
            ..ChatConfig::default()
        };
        let assistant = ChatAssistantBuilder::default()
            .config(config)
            .profile(Profile::Lite)
            .build()
            .unwrap();
        assert_eq!(assistant.rules().profile(), Profile::Lite);
    }

    #[test]
    fn test_provider_kind_names() {
        assert_eq!(ProviderKind::OpenAI.as_str(), "openai");
        assert_eq!(ProviderKind::Anthropic.as_str(), "anthropic");
        assert_eq!(ProviderKind::Ollama.as_str(), "ollama");
        assert_eq!(ProviderKind::Ollama.default_model(), "llama3");
    }
}
