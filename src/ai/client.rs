use crate::ai::prompt;
use crate::domain::ports::{ConfigProvider, ModelClient};
use crate::utils::error::{ChartError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Client for the Gemini `generateContent` endpoint. One request per
/// document, no retries; timeout policy belongs to the transport.
pub struct GeminiClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_base(), config.api_key(), config.model())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn extract_chart_data(&self, document_text: &str) -> Result<String> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt::build_prompt(document_text) }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        tracing::debug!("Sending {} chars of document text to {}", document_text.len(), self.model);

        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let json: Value = response.json().await?;
        let text = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or("");

        if text.trim().is_empty() {
            return Err(ChartError::ModelError {
                reason: "no text in response; content may be blocked or no data found"
                    .to_string(),
            });
        }

        tracing::debug!("Model returned {} chars", text.len());
        Ok(text.to_string())
    }
}
