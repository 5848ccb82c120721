use crate::config::toml_config::AdviceConfig;
use crate::core::{GenerationError, TextGenerator};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Client for a `generateContent` style endpoint.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    temperature: f64,
    max_output_tokens: u32,
}

impl GeminiClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        let defaults = AdviceConfig::default();
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            temperature: defaults.temperature,
            max_output_tokens: defaults.max_output_tokens,
        }
    }

    pub fn from_config(config: &AdviceConfig, api_key: String) -> Result<Self> {
        let mut builder = Client::builder();
        // 預設不設超時，只有設定檔指定時才加上
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
            api_key,
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generation_config": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_output_tokens
            }
        })
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of a response payload.
pub fn extract_text(payload: &Value) -> std::result::Result<String, GenerationError> {
    payload
        .pointer(TEXT_POINTER)
        .and_then(Value::as_str)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| {
            GenerationError::ResponseShape(
                "missing candidates[0].content.parts[0].text".to_string(),
            )
        })
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        tracing::debug!("Making generation request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        tracing::debug!("Generation response status: {}", response.status());

        let response = response
            .error_for_status()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        // 無法解碼的回應視為傳輸失敗，缺欄位才是 ResponseShape
        let payload: Value = response
            .json()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        extract_text(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn candidate(text: &str) -> Value {
        json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        })
    }

    #[test]
    fn test_extract_text() {
        assert_eq!(extract_text(&candidate("  Drink water.\n")).unwrap(), "Drink water.");
        assert!(matches!(
            extract_text(&json!({"candidates": []})),
            Err(GenerationError::ResponseShape(_))
        ));
        assert!(matches!(
            extract_text(&json!({"candidates": [{"content": {"parts": [{"text": 42}]}}]})),
            Err(GenerationError::ResponseShape(_))
        ));
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_key() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/generate")
                .header("x-goog-api-key", "test-key")
                .json_body(json!({
                    "contents": [{"parts": [{"text": "hello"}]}],
                    "generation_config": {"temperature": 0.7, "maxOutputTokens": 2048}
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(candidate("Stay hydrated."));
        });

        let client = GeminiClient::new(server.url("/generate"), "test-key".to_string());
        let text = client.generate("hello").await.unwrap();

        api_mock.assert();
        assert_eq!(text, "Stay hydrated.");
    }

    #[tokio::test]
    async fn test_generate_uses_configured_generation_settings() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/generate").json_body(json!({
                "contents": [{"parts": [{"text": "hi"}]}],
                "generation_config": {"temperature": 0.2, "maxOutputTokens": 64}
            }));
            then.status(200).json_body(candidate("ok"));
        });

        let config = AdviceConfig {
            endpoint: server.url("/generate"),
            api_key: None,
            temperature: 0.2,
            max_output_tokens: 64,
            timeout_seconds: Some(5),
        };
        let client = GeminiClient::from_config(&config, "k".to_string()).unwrap();

        assert_eq!(client.generate("hi").await.unwrap(), "ok");
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_server_error_is_transport_failure() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/generate");
            then.status(500);
        });

        let client = GeminiClient::new(server.url("/generate"), "k".to_string());
        let err = client.generate("hello").await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, GenerationError::Transport(_)));
        assert!(err.to_string().starts_with("API Error:"));
    }

    #[tokio::test]
    async fn test_missing_fields_is_shape_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/generate");
            then.status(200).json_body(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        });

        let client = GeminiClient::new(server.url("/generate"), "k".to_string());
        let err = client.generate("hello").await.unwrap_err();

        assert!(matches!(err, GenerationError::ResponseShape(_)));
        assert!(err.to_string().starts_with("Error parsing API response:"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_transport_failure() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/generate");
            then.status(200)
                .header("Content-Type", "text/html")
                .body("<html>gateway page</html>");
        });

        let client = GeminiClient::new(server.url("/generate"), "k".to_string());
        let err = client.generate("hello").await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, GenerationError::Transport(_)));
        assert!(err.to_string().starts_with("API Error:"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_failure() {
        // 埠 9 (discard) 通常沒有服務
        let client = GeminiClient::new("http://127.0.0.1:9/generate".to_string(), "k".to_string());
        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, GenerationError::Transport(_)));
    }
}
