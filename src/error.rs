use thiserror::Error;

use crate::ai::CompletionError;
use crate::db::CustomerCode;
use crate::messages;

/// Failures on the request path.
///
/// Every variant maps to a fixed message that is safe to show the user;
/// internal detail stays in the logs.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("could not parse input {0:?}")]
    InvalidInput(String),
    #[error("unknown customer {0}")]
    UnknownCustomer(CustomerCode),
    #[error("invalid function number {0}")]
    InvalidSelector(i64),
    /// Data the selected function depends on is missing.
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Completion(#[from] CompletionError),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl AdvisorError {
    /// Whether the user can fix this by changing the input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::UnknownCustomer(_)
                | Self::InvalidSelector(_)
                | Self::NotFound(_)
        )
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(_) => messages::INVALID_INPUT.to_string(),
            Self::UnknownCustomer(_) => messages::INVALID_CUSTOMER.to_string(),
            Self::InvalidSelector(_) => messages::INVALID_FUNCTION.to_string(),
            Self::NotFound(message) => message.clone(),
            Self::Completion(_) => messages::GENERATION_FAILED.to_string(),
            Self::Store(_) => messages::DATA_FETCH_FAILED.to_string(),
        }
    }
}
