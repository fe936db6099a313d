use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{trace, warn};

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Sampling settings sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

pub const GENERATION_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.7,
    max_tokens: 500,
    top_p: 1.0,
    frequency_penalty: 1.0,
    presence_penalty: 0.0,
};

/// Anything that went wrong talking to the completion service.
///
/// Callers only log this; the user sees a fixed message.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request to completion service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed completion response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("completion response had no content")]
    Empty,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

pub fn build_chat_body(
    model: &str,
    system_prompt: &str,
    user_prompt: &str,
    params: &GenerationParams,
) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "messages": [
            { "role": "system", "content": system_prompt },
            { "role": "user", "content": user_prompt },
        ],
        "temperature": params.temperature,
        "max_tokens": params.max_tokens,
        "top_p": params.top_p,
        "frequency_penalty": params.frequency_penalty,
        "presence_penalty": params.presence_penalty,
    })
}

/// Send a prepared request and fail on any non-success status.
pub async fn send_openai_request(
    api_key: &str,
    builder: reqwest::RequestBuilder,
) -> Result<reqwest::Response, CompletionError> {
    let resp = builder.bearer_auth(api_key).send().await?;
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        warn!(%status, "OpenAI API error");
        return Err(CompletionError::Status { status, body });
    }
    Ok(resp)
}

/// Extract the first choice's message text from a raw chat response.
///
/// The text is returned untouched; the formatter relies on its line breaks.
pub fn parse_chat_content(raw: &str) -> Result<String, CompletionError> {
    trace!(raw = %raw, "chat response");
    let chat: ChatResponse = serde_json::from_str(raw)?;
    chat.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(CompletionError::Empty)
}
