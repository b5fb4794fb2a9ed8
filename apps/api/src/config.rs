use anyhow::{Context, Result};

use crate::matching::scorer::MatchWeights;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Weights of the overall match score; validated to sum to 1.
    pub match_weights: MatchWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = MatchWeights::default();
        let match_weights = MatchWeights {
            required: optional_env_f64("MATCH_WEIGHT_REQUIRED", defaults.required)?,
            optional: optional_env_f64("MATCH_WEIGHT_OPTIONAL", defaults.optional)?,
            proficiency: optional_env_f64("MATCH_WEIGHT_PROFICIENCY", defaults.proficiency)?,
        };
        match_weights
            .validate()
            .context("MATCH_WEIGHT_* variables do not form a valid weighting")?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_weights,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env_f64(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("{key} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
