use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::ai::config::AiConfig;

pub const DEFAULT_DB_URL: &str = "sqlite:customer_data.db";
pub const DEFAULT_DATA_DIR: &str = "files";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Clone, Debug)]
pub struct Config {
    pub db_url: String,
    pub data_dir: PathBuf,
    pub bind_addr: String,
    pub ai: AiConfig,
}

impl Config {
    /// Read settings from the environment, loading `.env` and `key.env` first.
    ///
    /// Fails when `OPENAI_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        dotenvy::from_filename("key.env").ok();
        let ai = AiConfig::from_env().ok_or_else(|| anyhow!("OPENAI_API_KEY is not set"))?;
        let db_url = env::var("DB_URL").unwrap_or_else(|_| DEFAULT_DB_URL.to_string());
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Ok(Self {
            db_url,
            data_dir: PathBuf::from(data_dir),
            bind_addr,
            ai,
        })
    }
}
