use std::sync::Arc;

use crate::ai::prompts::SYSTEM_PROMPT;
use crate::ai::Completer;
use crate::clock::Clock;
use crate::db::Database;
use crate::error::AdvisorError;
use crate::formatting::format_message;
use crate::prompt::{build_prompt, PromptOutcome};

use super::parse::parse_input;

/// Result of one query, ready to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Success(String),
    UserError(String),
    SystemError(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::UserError(text) | Self::SystemError(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Success(text) | Self::UserError(text) | Self::SystemError(text) => text,
        }
    }
}

/// Answers `"<customer_code> <function_number>"` queries.
///
/// Holds no per-request state; one instance is shared by all requests.
#[derive(Clone)]
pub struct Advisor {
    db: Database,
    completer: Arc<dyn Completer>,
    clock: Arc<dyn Clock>,
}

impl Advisor {
    pub fn new(db: Database, completer: Arc<dyn Completer>, clock: Arc<dyn Clock>) -> Self {
        Self {
            db,
            completer,
            clock,
        }
    }

    pub async fn answer(&self, input: &str) -> Reply {
        match self.try_answer(input).await {
            Ok(text) => Reply::Success(text),
            Err(err) if err.is_user_error() => {
                tracing::debug!(input, error = %err, "Rejected query");
                Reply::UserError(err.user_message())
            }
            Err(err) => {
                tracing::error!(input, error = %err, "Failed to answer query");
                Reply::SystemError(err.user_message())
            }
        }
    }

    async fn try_answer(&self, input: &str) -> Result<String, AdvisorError> {
        let (code, selector) = parse_input(input)?;

        if self.db.find_customer(code).await?.is_none() {
            return Err(AdvisorError::UnknownCustomer(code));
        }

        let prompt = match build_prompt(&self.db, self.clock.as_ref(), code, selector).await? {
            PromptOutcome::Prompt(prompt) => prompt,
            PromptOutcome::NoPreferences(text) => return Ok(text),
        };

        let raw = self.completer.complete(SYSTEM_PROMPT, &prompt).await?;
        tracing::debug!(
            customer_code = code.0,
            selector,
            reply_len = raw.len(),
            "Completion received"
        );
        Ok(format_message(&raw))
    }
}
