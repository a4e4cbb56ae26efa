use crate::config::ProviderConfig;
use crate::providers::{build_user_turn, LlmProvider, CHAT_SYSTEM_PROMPT};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;

pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OllamaProvider {
    /// Create a new Ollama provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "http://localhost:11434".to_string());

        Ok(OllamaProvider {
            client: Client::new(),
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String, model: String) -> Self {
        OllamaProvider {
            client: Client::new(),
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 800,
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    async fn generate(
        &self,
        context_text: &str,
        history_text: &str,
        user_message: &str,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        // Ollama uses OpenAI-compatible API
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": CHAT_SYSTEM_PROMPT},
                    {"role": "user", "content": build_user_turn(context_text, history_text, user_message)}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?
            .error_for_status()?;

        let response_body: Value = response.json().await?;
        debug!("Ollama response: {:?}", response_body);

        // Check for API error response
        if let Some(error) = response_body.get("error") {
            let error_message = error
                .as_str()
                .unwrap_or_else(|| error["message"].as_str().unwrap_or("Unknown error"));
            return Err(format!("Ollama API error: {}", error_message).into());
        }

        let reply = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or("Failed to extract content from Ollama response")?
            .trim()
            .to_string();

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_ollama_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "choices": [{
                        "message": {
                            "content": "Batch cook the quinoa on Sunday."
                        }
                    }]
                }"#,
            )
            .create();

        let provider = OllamaProvider::with_base_url(server.url(), "llama3".to_string());

        let result = provider
            .generate("Name: Quinoa Salad", "", "meal prep tips?")
            .await
            .unwrap();
        assert_eq!(result, "Batch cook the quinoa on Sunday.");
        mock.assert();
    }

    #[tokio::test]
    async fn test_ollama_error_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"message": "model \"llama3\" not found"}}"#)
            .create();

        let provider = OllamaProvider::with_base_url(server.url(), "llama3".to_string());

        let err = provider.generate("", "", "hi").await.unwrap_err();
        assert!(err.to_string().contains("Ollama API error"));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_ollama_error_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(503)
            .with_body("loading model")
            .create();

        let provider = OllamaProvider::with_base_url(server.url(), "llama3".to_string());

        let err = provider.generate("", "", "hi").await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_default_base_url() {
        let config = ProviderConfig {
            enabled: true,
            model: "llama3".to_string(),
            temperature: 0.7,
            max_tokens: 800,
            api_key: None,
            base_url: None,
        };

        let provider = OllamaProvider::new(&config).unwrap();
        assert_eq!(provider.base_url, "http://localhost:11434");
        assert_eq!(provider.provider_name(), "ollama");
    }
}
