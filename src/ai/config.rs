use std::env;
use std::time::Duration;

pub const DEFAULT_GPT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub gpt_model: String,
    pub openai_chat_url: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &"<redacted>")
            .field("gpt_model", &self.gpt_model)
            .field("openai_chat_url", &self.openai_chat_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AiConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = match env::var("OPENAI_API_KEY") {
            Ok(k) if !k.trim().is_empty() => k,
            _ => return None,
        };
        let timeout_secs = env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Some(Self {
            api_key,
            gpt_model: env::var("OPENAI_GPT_MODEL")
                .unwrap_or_else(|_| DEFAULT_GPT_MODEL.to_string()),
            openai_chat_url: env::var("OPENAI_CHAT_URL").ok(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
