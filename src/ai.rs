pub mod common;
pub mod config;
pub mod gpt;
pub mod prompts;

pub use common::CompletionError;
pub use gpt::{Completer, OpenAiCompleter};
