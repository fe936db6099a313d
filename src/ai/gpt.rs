use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::ai::common::{
    build_chat_body, parse_chat_content, send_openai_request, CompletionError, GenerationParams,
    GENERATION_PARAMS, OPENAI_CHAT_URL,
};
use crate::ai::config::AiConfig;

/// Text generation backend used by the advisor.
///
/// A single call either yields the generated text or fails; nothing is
/// retried behind the caller's back.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, CompletionError>;
}

/// Chat completions over the OpenAI HTTP API.
pub struct OpenAiCompleter {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
    params: GenerationParams,
}

impl OpenAiCompleter {
    pub fn new(config: &AiConfig) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.gpt_model.clone(),
            url: config
                .openai_chat_url
                .clone()
                .unwrap_or_else(|| OPENAI_CHAT_URL.to_string()),
            params: GENERATION_PARAMS,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Completer for OpenAiCompleter {
    #[instrument(level = "trace", skip(self, system_prompt, prompt), fields(model = %self.model))]
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, CompletionError> {
        let body = build_chat_body(&self.model, system_prompt, prompt, &self.params);

        debug!(url = %self.url, prompt_len = prompt.len(), "sending chat completion request");

        let builder = self.client.post(&self.url).json(&body);
        let resp = send_openai_request(&self.api_key, builder).await?;

        let raw = resp.text().await?;
        let snippet: String = raw.chars().take(200).collect();
        debug!(snippet = %snippet, "chat response body");
        parse_chat_content(&raw)
    }
}
