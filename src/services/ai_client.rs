//! HTTP client for the CreateAI gateway, the upstream LLM service.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Seam for the upstream query call, so services can be tested against a
/// mock instead of the live gateway.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiQueryClient: Send + Sync {
    async fn query(&self, prompt: &str) -> AppResult<Value>;
}

pub struct CreateAiClient {
    http: Client,
    config: Arc<Config>,
}

impl CreateAiClient {
    pub fn new(config: Arc<Config>) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.createai_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    fn build_payload(&self, prompt: &str) -> Value {
        let mut model_params = json!({
            "system_prompt": self.config.createai_system_prompt,
        });
        if let Some(project_id) = &self.config.createai_project_id {
            model_params["search_params"] = json!({ "collection": project_id });
        }

        json!({
            "action": "query",
            "request_source": "override_params",
            "query": prompt,
            "model_provider": self.config.createai_model_provider,
            "model_name": self.config.createai_model_name,
            "session_id": Uuid::new_v4().to_string(),
            "model_params": model_params,
        })
    }
}

#[async_trait]
impl AiQueryClient for CreateAiClient {
    async fn query(&self, prompt: &str) -> AppResult<Value> {
        let token = self.config.createai_api_token.expose_secret();
        if token.is_empty() {
            return Err(AppError::InternalError(
                "CREATEAI_API_TOKEN environment variable is not set".to_string(),
            ));
        }

        let response = self
            .http
            .post(&self.config.createai_api_url)
            .bearer_auth(token)
            .json(&self.build_payload(prompt))
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("CreateAI request failed: {}", e)))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamError(format!(
                "CreateAI returned error {}: {}",
                status.as_u16(),
                detail
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::UpstreamError(format!("CreateAI response was not valid JSON: {}", e)))
    }
}

/// Unwraps the gateway's response envelope. The answer text may live in a
/// top-level `response` field, in `result.response`, or the envelope may be
/// a bare string. Non-string payloads are re-serialized so the extraction
/// chain can still take a pass at them.
pub fn resolve_response_text(envelope: &Value) -> Option<String> {
    envelope
        .get("response")
        .or_else(|| envelope.get("result").and_then(|r| r.get("response")))
        .map(value_as_text)
        .or_else(|| envelope.as_str().map(str::to_owned))
}

fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
