use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use wa_core::config::GenerationConfig;
use wa_core::{Error, GenerationError, GenerationResult, InferenceModel, Result};

const PAYLOAD_TOO_LARGE_CODES: &[&str] = &["context_length_exceeded", "request_too_large"];
const MAX_ERROR_BODY_CHARS: usize = 300;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
}

/// Client for Groq's OpenAI-compatible chat completions endpoint.
pub struct GroqModel {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl GroqModel {
    /// Fails when no API key is configured, before any request is made.
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::Configuration("GROQ_API_KEY is required".to_string()))?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

impl fmt::Debug for GroqModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

fn classify_failure(status: StatusCode, body: &str) -> GenerationError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        return GenerationError::PayloadTooLarge;
    }
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if let Some(code) = envelope.error.code.as_deref() {
            if PAYLOAD_TOO_LARGE_CODES.contains(&code) {
                return GenerationError::PayloadTooLarge;
            }
        }
    }
    GenerationError::Status {
        status: status.as_u16(),
        body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}

#[async_trait]
impl InferenceModel for GroqModel {
    fn name(&self) -> &str {
        "Groq"
    }

    async fn complete(&self, prompt: &str) -> GenerationResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let body = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::EmptyContent)?;

        tracing::debug!(model = %self.model, words = content.split_whitespace().count(), "completion received");
        Ok(content)
    }
}
