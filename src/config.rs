use anyhow::{bail, Result};

pub const API_KEY_VAR: &str = "AIRTABLE_API_KEY";
pub const BASE_ID_VAR: &str = "AIRTABLE_BASE_ID";

/// Credentials for the hosted table API, read once at startup and passed
/// explicitly to the fetch layer.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_id: String,
}

impl Config {
    /// Read credentials from the process environment. Called before any
    /// network or filesystem work so a misconfigured run fails immediately.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match (get(API_KEY_VAR), get(BASE_ID_VAR)) {
            (Some(api_key), Some(base_id)) => Ok(Config { api_key, base_id }),
            (api_key, base_id) => {
                let mut missing = Vec::new();
                if api_key.is_none() {
                    missing.push(API_KEY_VAR);
                }
                if base_id.is_none() {
                    missing.push(BASE_ID_VAR);
                }
                bail!(
                    "Missing required environment variables: {}",
                    missing.join(", ")
                );
            }
        }
    }
}

// ── Tests ──
